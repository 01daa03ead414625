use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Selects which optional attribute group becomes mandatory for a listing.
/// Fixed at creation; an update that changes it is re-validated against the
/// new type before anything is persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "property_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Building,
    Land,
    Commercial,
}

impl PropertyType {
    pub const LABELS: &'static [&'static str] = &["building", "land", "commercial"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "building" => Some(PropertyType::Building),
            "land" => Some(PropertyType::Land),
            "commercial" => Some(PropertyType::Commercial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Building => "building",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "property_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Sold,
    Pending,
}

impl PropertyStatus {
    pub const LABELS: &'static [&'static str] = &["available", "sold", "pending"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "available" => Some(PropertyStatus::Available),
            "sold" => Some(PropertyStatus::Sold),
            "pending" => Some(PropertyStatus::Pending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Pending => "pending",
        }
    }
}

/// Unit for built-up / covered property sizes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "size_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Sqft,
    Sqyd,
    Sqm,
}

impl SizeUnit {
    pub const LABELS: &'static [&'static str] = &["sqft", "sqyd", "sqm"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "sqft" => Some(SizeUnit::Sqft),
            "sqyd" => Some(SizeUnit::Sqyd),
            "sqm" => Some(SizeUnit::Sqm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Sqft => "sqft",
            SizeUnit::Sqyd => "sqyd",
            SizeUnit::Sqm => "sqm",
        }
    }
}

/// Unit for open plot areas.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "land_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LandUnit {
    Sqft,
    Sqyd,
    Acre,
    Hectare,
}

impl LandUnit {
    pub const LABELS: &'static [&'static str] = &["sqft", "sqyd", "acre", "hectare"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "sqft" => Some(LandUnit::Sqft),
            "sqyd" => Some(LandUnit::Sqyd),
            "acre" => Some(LandUnit::Acre),
            "hectare" => Some(LandUnit::Hectare),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LandUnit::Sqft => "sqft",
            LandUnit::Sqyd => "sqyd",
            LandUnit::Acre => "acre",
            LandUnit::Hectare => "hectare",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "furnishing_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FurnishingStatus {
    Unfurnished,
    SemiFurnished,
    Furnished,
}

impl FurnishingStatus {
    pub const LABELS: &'static [&'static str] = &["unfurnished", "semi-furnished", "furnished"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "unfurnished" => Some(FurnishingStatus::Unfurnished),
            "semi-furnished" => Some(FurnishingStatus::SemiFurnished),
            "furnished" => Some(FurnishingStatus::Furnished),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FurnishingStatus::Unfurnished => "unfurnished",
            FurnishingStatus::SemiFurnished => "semi-furnished",
            FurnishingStatus::Furnished => "furnished",
        }
    }
}

/// A listing that has passed the validator: defaults applied, every
/// constraint checked, ready for the store. The `Validate` derive carries the
/// structural storage schema (required base fields, numeric lower bounds)
/// that the store re-enforces before persisting; the per-type conditional
/// requirements are deliberately not repeated here.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedListing {
    pub property_type: PropertyType,

    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: String,

    #[validate(custom = "strictly_positive")]
    pub sale_price: f64,

    pub property_status: PropertyStatus,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub images: Vec<String>,

    // Building group
    #[validate(range(min = 0, message = "Bedrooms cannot be negative"))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0, message = "Bathrooms cannot be negative"))]
    pub bathrooms: Option<i32>,
    #[validate(range(min = 0, message = "Floors cannot be negative"))]
    pub floors: Option<i32>,
    #[validate(range(min = 0, message = "Total floors cannot be negative"))]
    pub total_floors: Option<i32>,
    #[validate(custom = "non_negative")]
    pub property_size: Option<f64>,
    pub size_unit: SizeUnit,
    pub building_age: Option<String>,
    pub furnishing_status: FurnishingStatus,
    pub facing: Option<String>,

    // Land group
    #[validate(custom = "strictly_positive")]
    pub land_area: Option<f64>,
    pub land_unit: LandUnit,
    pub land_type: Option<String>,
    pub soil_type: Option<String>,
    pub water_availability: Option<String>,
    pub electricity_availability: Option<String>,
    pub road_access: Option<String>,

    // Commercial group
    #[validate(custom = "strictly_positive")]
    pub built_up_area: Option<f64>,
    #[validate(custom = "non_negative")]
    pub carpet_area: Option<f64>,
    pub floor_number: Option<i32>,
    #[validate(range(min = 0, message = "Washrooms cannot be negative"))]
    pub washrooms: Option<i32>,
    pub cafeteria: bool,
    pub conference_room: bool,
    pub reception: bool,

    // Location
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub map_link: Option<String>,

    // Legal / misc
    pub ownership_type: Option<String>,
    pub approvals: Vec<String>,
    pub nearby_facilities: Vec<String>,
    #[validate(range(min = 0, message = "Parking spaces cannot be negative"))]
    pub parking_spaces: Option<i32>,

    // Flags
    pub negotiable: bool,
    pub ready_to_move: bool,
    pub loan_available: bool,
}

// The derive passes numeric fields (and the contents of numeric Options) to
// custom validators by value.
fn strictly_positive(value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("strictly_positive"))
    }
}

fn non_negative(value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("non_negative"))
    }
}

/// A persisted listing: the normalized attribute set plus store-assigned
/// identity and timestamps.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,

    pub property_type: PropertyType,
    pub title: String,
    pub sale_price: f64,
    pub property_status: PropertyStatus,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub images: Vec<String>,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floors: Option<i32>,
    pub total_floors: Option<i32>,
    pub property_size: Option<f64>,
    pub size_unit: SizeUnit,
    pub building_age: Option<String>,
    pub furnishing_status: FurnishingStatus,
    pub facing: Option<String>,

    pub land_area: Option<f64>,
    pub land_unit: LandUnit,
    pub land_type: Option<String>,
    pub soil_type: Option<String>,
    pub water_availability: Option<String>,
    pub electricity_availability: Option<String>,
    pub road_access: Option<String>,

    pub built_up_area: Option<f64>,
    pub carpet_area: Option<f64>,
    pub floor_number: Option<i32>,
    pub washrooms: Option<i32>,
    pub cafeteria: bool,
    pub conference_room: bool,
    pub reception: bool,

    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: String,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub map_link: Option<String>,

    pub ownership_type: Option<String>,
    pub approvals: Vec<String>,
    pub nearby_facilities: Vec<String>,
    pub parking_spaces: Option<i32>,

    pub negotiable: bool,
    pub ready_to_move: bool,
    pub loan_available: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Assemble a stored listing from a normalized record. Used by stores
    /// that build rows themselves rather than reading them back from SQL.
    pub fn from_normalized(record: &NormalizedListing, id: Uuid, at: DateTime<Utc>) -> Self {
        Listing {
            id,
            property_type: record.property_type,
            title: record.title.clone(),
            sale_price: record.sale_price,
            property_status: record.property_status,
            description: record.description.clone(),
            features: record.features.clone(),
            images: record.images.clone(),
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            floors: record.floors,
            total_floors: record.total_floors,
            property_size: record.property_size,
            size_unit: record.size_unit,
            building_age: record.building_age.clone(),
            furnishing_status: record.furnishing_status,
            facing: record.facing.clone(),
            land_area: record.land_area,
            land_unit: record.land_unit,
            land_type: record.land_type.clone(),
            soil_type: record.soil_type.clone(),
            water_availability: record.water_availability.clone(),
            electricity_availability: record.electricity_availability.clone(),
            road_access: record.road_access.clone(),
            built_up_area: record.built_up_area,
            carpet_area: record.carpet_area,
            floor_number: record.floor_number,
            washrooms: record.washrooms,
            cafeteria: record.cafeteria,
            conference_room: record.conference_room,
            reception: record.reception,
            address_line1: record.address_line1.clone(),
            address_line2: record.address_line2.clone(),
            city: record.city.clone(),
            state_region: record.state_region.clone(),
            postal_code: record.postal_code.clone(),
            country: record.country.clone(),
            map_link: record.map_link.clone(),
            ownership_type: record.ownership_type.clone(),
            approvals: record.approvals.clone(),
            nearby_facilities: record.nearby_facilities.clone(),
            parking_spaces: record.parking_spaces,
            negotiable: record.negotiable,
            ready_to_move: record.ready_to_move,
            loan_available: record.loan_available,
            created_at: at,
            updated_at: at,
        }
    }

    /// Project the stored listing back into a raw submission record, with the
    /// store-assigned fields stripped. This is what partial updates are merged
    /// over before re-validation.
    pub fn to_raw(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        map.remove("id");
        map.remove("createdAt");
        map.remove("updatedAt");
        map
    }
}
