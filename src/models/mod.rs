pub mod listingmodel;
