//! Property-listing validation and persistence for a sale-listings
//! marketplace.
//!
//! A raw submission (parsed JSON) goes through [`validation::validate`],
//! which checks every field, applies defaults and reports all violations at
//! once. Valid records are persisted through [`ListingStoreExt`], backed by
//! Postgres ([`DBClient`]) or memory ([`MemoryClient`]). [`ListingService`]
//! ties the two together and owns partial-update merging.

pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod models;
pub mod service;
pub mod validation;

pub use config::Config;
pub use db::listingdb::{ListingSearchFilters, ListingStoreExt};
pub use db::memorydb::MemoryClient;
pub use db::DBClient;
pub use dtos::listingdtos::{ListingQueryDto, ListingSummaryDto};
pub use error::{ListingError, StoreError};
pub use models::listingmodel::{Listing, NormalizedListing};
pub use service::listing_service::ListingService;
pub use validation::{FieldError, RuleKind};
