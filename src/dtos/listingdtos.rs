use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::listingmodel::Listing;

/// Pagination parameters for listing queries. Absent values fall back to
/// page 1 with 10 results.
#[derive(Serialize, Deserialize, Validate, Debug, Default, Clone)]
pub struct ListingQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,

    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
}

/// Compact projection of a listing for search results and index pages.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub property_type: String,
    pub property_status: String,
    pub sale_price: f64,
    pub city: String,
    pub country: String,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ListingSummaryDto {
    pub fn from_listing(listing: &Listing) -> Self {
        ListingSummaryDto {
            id: listing.id,
            title: listing.title.clone(),
            property_type: listing.property_type.as_str().to_string(),
            property_status: listing.property_status.as_str().to_string(),
            sale_price: listing.sale_price,
            city: listing.city.clone(),
            country: listing.country.clone(),
            cover_image: listing.images.first().cloned(),
            created_at: listing.created_at,
        }
    }

    pub fn from_listings(listings: &[Listing]) -> Vec<ListingSummaryDto> {
        listings.iter().map(ListingSummaryDto::from_listing).collect()
    }
}
