use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::listingdb::{storage_guard, ListingSearchFilters, ListingStoreExt};
use crate::error::StoreError;
use crate::models::listingmodel::{Listing, NormalizedListing};

/// In-memory listing store. Behaves like the Postgres store, including the
/// structural guard, ordering and pagination, so it can stand in for it in
/// tests and embedded setups.
#[derive(Debug, Default, Clone)]
pub struct MemoryClient {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        MemoryClient::default()
    }
}

#[async_trait]
impl ListingStoreExt for MemoryClient {
    async fn create_listing(&self, record: &NormalizedListing) -> Result<Listing, StoreError> {
        storage_guard(record)?;

        let listing = Listing::from_normalized(record, Uuid::new_v4(), Utc::now());
        self.listings
            .write()
            .await
            .insert(listing.id, listing.clone());

        Ok(listing)
    }

    async fn update_listing(
        &self,
        listing_id: Uuid,
        record: &NormalizedListing,
    ) -> Result<Option<Listing>, StoreError> {
        storage_guard(record)?;

        let mut listings = self.listings.write().await;
        let Some(existing) = listings.get(&listing_id) else {
            return Ok(None);
        };

        let mut updated = Listing::from_normalized(record, listing_id, Utc::now());
        updated.created_at = existing.created_at;
        listings.insert(listing_id, updated.clone());

        Ok(Some(updated))
    }

    async fn get_listing(&self, listing_id: Uuid) -> Result<Option<Listing>, StoreError> {
        Ok(self.listings.read().await.get(&listing_id).cloned())
    }

    async fn list_listings(
        &self,
        filters: &ListingSearchFilters,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Listing>, StoreError> {
        let listings = self.listings.read().await;
        let mut matched: Vec<Listing> = listings
            .values()
            .filter(|listing| filters.matches(listing))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let offset = (page.saturating_sub(1) as usize) * limit;
        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }

    async fn count_listings(&self, filters: &ListingSearchFilters) -> Result<i64, StoreError> {
        let listings = self.listings.read().await;
        Ok(listings
            .values()
            .filter(|listing| filters.matches(listing))
            .count() as i64)
    }
}
