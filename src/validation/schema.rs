//! Canonical field bounds for property listings.
//!
//! Every length, range and pattern constraint lives here so the validator and
//! the storage-side checks cannot drift apart. Enumerated fields keep their
//! label sets next to the enum types in the models module.

/// Listing titles must be reasonably descriptive but bounded.
pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 200;

pub const DESCRIPTION_MAX: usize = 2000;

/// Short free-text attributes: city, stateRegion, buildingAge, facing,
/// landType, soilType, waterAvailability, electricityAvailability,
/// ownershipType.
pub const SHORT_TEXT_MAX: usize = 100;

/// Address lines and roadAccess.
pub const ADDRESS_MAX: usize = 200;

/// Entries of features, approvals and nearbyFacilities.
pub const SEQUENCE_ITEM_MAX: usize = 100;

/// Letters, digits, hyphens and spaces; 3 to 10 characters.
pub const POSTAL_CODE_PATTERN: &str = r"^[A-Za-z0-9\- ]{3,10}$";

pub const DEFAULT_COUNTRY: &str = "Pakistan";

/// Wire-format field names in declaration order. Field errors are sorted by
/// this order so the same invalid submission always yields the same list.
pub const FIELD_ORDER: &[&str] = &[
    "propertyType",
    "title",
    "salePrice",
    "propertyStatus",
    "description",
    "features",
    "images",
    "bedrooms",
    "bathrooms",
    "floors",
    "totalFloors",
    "propertySize",
    "sizeUnit",
    "buildingAge",
    "furnishingStatus",
    "facing",
    "landArea",
    "landUnit",
    "landType",
    "soilType",
    "waterAvailability",
    "electricityAvailability",
    "roadAccess",
    "builtUpArea",
    "carpetArea",
    "floorNumber",
    "washrooms",
    "cafeteria",
    "conferenceRoom",
    "reception",
    "addressLine1",
    "addressLine2",
    "city",
    "stateRegion",
    "postalCode",
    "country",
    "mapLink",
    "ownershipType",
    "approvals",
    "nearbyFacilities",
    "parkingSpaces",
    "negotiable",
    "readyToMove",
    "loanAvailable",
];

/// Position of a field in the declaration order; unknown names sort last.
pub fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|name| *name == field)
        .unwrap_or(FIELD_ORDER.len())
}
