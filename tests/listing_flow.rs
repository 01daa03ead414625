use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Map, Value};
use tracing::level_filters::LevelFilter;
use uuid::Uuid;

use jaidad::{
    ListingError, ListingQueryDto, ListingSearchFilters, ListingService, ListingSummaryDto,
    MemoryClient, RuleKind,
};

fn service() -> ListingService<MemoryClient> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .try_init();
    ListingService::new(Arc::new(MemoryClient::new()))
}

fn raw(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn sea_view_villa() -> Map<String, Value> {
    raw(json!({
        "propertyType": "building",
        "title": "Sea View Villa",
        "salePrice": 250000,
        "city": "Karachi",
        "bedrooms": 3,
        "bathrooms": 2,
    }))
}

#[tokio::test]
async fn building_submission_is_persisted_with_defaults() {
    let service = service();

    let listing = service.create(&sea_view_villa()).await.unwrap();

    assert_eq!(listing.title, "Sea View Villa");
    assert_eq!(listing.sale_price, 250000.0);
    assert_eq!(listing.city, "Karachi");
    assert_eq!(listing.bedrooms, Some(3));
    assert_eq!(listing.bathrooms, Some(2));
    assert_eq!(listing.created_at, listing.updated_at);

    // Defaults the submission never mentioned.
    assert_eq!(listing.property_status.as_str(), "available");
    assert_eq!(listing.size_unit.as_str(), "sqft");
    assert_eq!(listing.furnishing_status.as_str(), "unfurnished");
    assert_eq!(listing.land_unit.as_str(), "sqft");
    assert_eq!(listing.country, "Pakistan");
    assert_eq!(listing.description, None);
    assert!(listing.features.is_empty());
    assert!(listing.images.is_empty());
    assert!(!listing.negotiable);
    assert!(!listing.ready_to_move);
    assert!(!listing.loan_available);

    let fetched = service.get(listing.id).await.unwrap();
    assert_eq!(fetched.id, listing.id);
    assert_eq!(fetched.title, listing.title);
}

#[tokio::test]
async fn land_submission_without_land_area_is_rejected_whole() {
    let service = service();

    let submission = raw(json!({
        "propertyType": "land",
        "title": "Corner Plot, Phase 8",
        "salePrice": 90000,
        "city": "Lahore",
    }));

    let error = service.create(&submission).await.unwrap_err();
    let ListingError::Validation(field_errors) = error else {
        panic!("expected a validation error");
    };
    assert_eq!(field_errors.len(), 1);
    assert_eq!(field_errors[0].field, "landArea");
    assert_eq!(field_errors[0].rule, RuleKind::Required);

    assert_eq!(
        service.count(&ListingSearchFilters::default()).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn unknown_ids_return_not_found() {
    let service = service();
    let unknown = Uuid::new_v4();

    match service.get(unknown).await.unwrap_err() {
        ListingError::NotFound(id) => assert_eq!(id, unknown),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[tokio::test]
async fn price_update_advances_updated_at_only() {
    let service = service();
    let created = service.create(&sea_view_villa()).await.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = service
        .update(created.id, &raw(json!({ "salePrice": 240000, "negotiable": true })))
        .await
        .unwrap();

    assert_eq!(updated.sale_price, 240000.0);
    assert!(updated.negotiable);
    assert_eq!(updated.title, "Sea View Villa");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn optional_details_survive_the_round_trip() {
    let service = service();

    let mut submission = sea_view_villa();
    submission.insert("description".into(), json!(""));
    submission.insert("features".into(), json!(["garden", "rooftop"]));
    submission.insert(
        "images".into(),
        json!(["https://cdn.jaidad.pk/villa-front.jpg"]),
    );
    submission.insert("postalCode".into(), json!("75500"));
    submission.insert("furnishingStatus".into(), json!("semi-furnished"));
    // Stray keys a client might send along.
    submission.insert("agentName".into(), json!("Bilal"));

    let listing = service.create(&submission).await.unwrap();
    let fetched = service.get(listing.id).await.unwrap();

    assert_eq!(fetched.description.as_deref(), Some(""));
    assert_eq!(fetched.features, vec!["garden", "rooftop"]);
    assert_eq!(fetched.postal_code.as_deref(), Some("75500"));
    assert_eq!(fetched.furnishing_status.as_str(), "semi-furnished");

    let wire = serde_json::to_value(&fetched).unwrap();
    assert!(wire.get("agentName").is_none());
    assert_eq!(wire["furnishingStatus"], "semi-furnished");
}

#[tokio::test]
async fn listing_pages_are_newest_first_and_filterable() {
    let service = service();

    let mut created_ids = Vec::new();
    for (title, price, city) in [
        ("Gulberg House", 150000.0, "Lahore"),
        ("Clifton Flat", 320000.0, "Karachi"),
        ("DHA Villa", 510000.0, "Karachi"),
    ] {
        let submission = raw(json!({
            "propertyType": "building",
            "title": title,
            "salePrice": price,
            "city": city,
            "bedrooms": 3,
            "bathrooms": 2,
        }));
        created_ids.push(service.create(&submission).await.unwrap().id);
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    let plot = raw(json!({
        "propertyType": "land",
        "title": "Canal Road Plot",
        "salePrice": 80000,
        "city": "Faisalabad",
        "landArea": 4500,
    }));
    created_ids.push(service.create(&plot).await.unwrap().id);

    let all = service
        .list(&ListingSearchFilters::default(), &ListingQueryDto::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].id, created_ids[3]);
    assert_eq!(all[3].id, created_ids[0]);

    let karachi = ListingSearchFilters {
        city: Some("Karachi".to_string()),
        ..Default::default()
    };
    let karachi_page = service
        .list(&karachi, &ListingQueryDto { page: Some(1), limit: Some(1) })
        .await
        .unwrap();
    assert_eq!(karachi_page.len(), 1);
    assert_eq!(karachi_page[0].title, "DHA Villa");
    assert_eq!(service.count(&karachi).await.unwrap(), 2);

    let summaries = ListingSummaryDto::from_listings(&karachi_page);
    assert_eq!(summaries[0].city, "Karachi");
    assert_eq!(summaries[0].property_type, "building");
}

#[tokio::test]
async fn commercial_flow_accepts_signed_floor_numbers() {
    let service = service();

    let submission = raw(json!({
        "propertyType": "commercial",
        "title": "Basement Retail Unit",
        "salePrice": 175000,
        "city": "Rawalpindi",
        "builtUpArea": 900,
        "carpetArea": 0,
        "floorNumber": -1,
        "washrooms": 2,
        "cafeteria": true,
    }));

    let listing = service.create(&submission).await.unwrap();
    assert_eq!(listing.floor_number, Some(-1));
    assert_eq!(listing.carpet_area, Some(0.0));
    assert!(listing.cafeteria);
    assert!(!listing.conference_room);
}

#[tokio::test]
async fn rejected_submission_reports_every_violation_in_field_order() {
    let service = service();

    let submission = raw(json!({
        "propertyType": "building",
        "title": "ab",
        "salePrice": 0,
        "bathrooms": 2,
        "city": "Karachi",
        "parkingSpaces": -1,
    }));

    let error = service.create(&submission).await.unwrap_err();
    let ListingError::Validation(field_errors) = error else {
        panic!("expected a validation error");
    };
    let fields: Vec<_> = field_errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["title", "salePrice", "bedrooms", "parkingSpaces"]);

    let payload = serde_json::to_value(&field_errors).unwrap();
    assert_eq!(payload[0]["field"], "title");
    assert_eq!(payload[0]["rule"], "length");
    assert_eq!(payload[2]["rule"], "required");
}
