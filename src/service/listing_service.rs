use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

use crate::db::listingdb::{ListingSearchFilters, ListingStoreExt};
use crate::dtos::listingdtos::ListingQueryDto;
use crate::error::ListingError;
use crate::models::listingmodel::Listing;
use crate::validation::{self, FieldError, RuleKind};

/// The validate-then-persist pipeline. Raw submissions only reach the store
/// after full validation; partial updates are merged over the stored record
/// and re-validated as a whole, so a stored listing always satisfies the
/// rules of its current property type.
#[derive(Debug, Clone)]
pub struct ListingService<S: ListingStoreExt> {
    store: Arc<S>,
}

impl<S: ListingStoreExt> ListingService<S> {
    pub fn new(store: Arc<S>) -> Self {
        ListingService { store }
    }

    pub async fn create(&self, raw: &Map<String, Value>) -> Result<Listing, ListingError> {
        let record = validation::validate(raw).map_err(|errors| {
            tracing::debug!(
                "Listing submission rejected with {} field error(s)",
                errors.len()
            );
            ListingError::Validation(errors)
        })?;

        let listing = self.store.create_listing(&record).await?;
        tracing::info!(
            "New listing {}: {} in {}",
            listing.id,
            listing.title,
            listing.city
        );
        Ok(listing)
    }

    /// Apply a partial update. Fields absent from `partial` keep their stored
    /// values; an explicit JSON null clears a field, letting its default
    /// re-apply during re-validation. Changing `propertyType` re-evaluates
    /// the conditional requirements of the new type.
    pub async fn update(
        &self,
        listing_id: Uuid,
        partial: &Map<String, Value>,
    ) -> Result<Listing, ListingError> {
        let current = self
            .store
            .get_listing(listing_id)
            .await?
            .ok_or(ListingError::NotFound(listing_id))?;

        let mut merged = current.to_raw();
        for (field, value) in partial {
            if value.is_null() {
                merged.remove(field);
            } else {
                merged.insert(field.clone(), value.clone());
            }
        }

        let record = validation::validate(&merged).map_err(|errors| {
            tracing::debug!(
                "Update of listing {} rejected with {} field error(s)",
                listing_id,
                errors.len()
            );
            ListingError::Validation(errors)
        })?;

        let listing = self
            .store
            .update_listing(listing_id, &record)
            .await?
            .ok_or(ListingError::NotFound(listing_id))?;

        tracing::info!("Listing {} updated", listing.id);
        Ok(listing)
    }

    pub async fn get(&self, listing_id: Uuid) -> Result<Listing, ListingError> {
        self.store
            .get_listing(listing_id)
            .await?
            .ok_or(ListingError::NotFound(listing_id))
    }

    pub async fn list(
        &self,
        filters: &ListingSearchFilters,
        query: &ListingQueryDto,
    ) -> Result<Vec<Listing>, ListingError> {
        query
            .validate()
            .map_err(|errors| ListingError::Validation(query_field_errors(&errors)))?;

        // Saturate instead of wrapping; a page past u32::MAX only addresses
        // empty space.
        let page = u32::try_from(query.page.unwrap_or(1)).unwrap_or(u32::MAX);
        let limit = query.limit.unwrap_or(10);
        Ok(self.store.list_listings(filters, page, limit).await?)
    }

    pub async fn count(&self, filters: &ListingSearchFilters) -> Result<i64, ListingError> {
        Ok(self.store.count_listings(filters).await?)
    }
}

/// Flatten pagination-bound violations into the same field-error shape the
/// listing validator produces.
fn query_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| {
                let message = violation
                    .message
                    .clone()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is out of range"));
                FieldError::new(field, RuleKind::Range, message)
            })
        })
        .collect();
    out.sort_by_key(|error| error.field);
    out
}
