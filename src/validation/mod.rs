//! Listing validation.
//!
//! [`validate`] takes a raw submission as parsed JSON and either produces a
//! [`NormalizedListing`] with defaults applied or the full list of field
//! errors. It never stops at the first violation; a submitter sees everything
//! wrong with the record at once.

pub mod rules;
pub mod schema;

pub use rules::{FieldError, RuleKind};

use regex::Regex;
use serde_json::{Map, Value};
use validator::validate_url;

use crate::models::listingmodel::{
    FurnishingStatus, LandUnit, NormalizedListing, PropertyStatus, PropertyType, SizeUnit,
};

/// Validate a raw listing submission and normalize it.
///
/// The discriminant `propertyType` decides which conditional requirements
/// apply; when it is missing or unknown, every field-level check still runs
/// but the conditional block is skipped. Unknown keys are ignored and JSON
/// `null` is treated exactly like an absent key. Errors come back sorted in
/// field declaration order, so the same submission always produces the same
/// list.
pub fn validate(raw: &Map<String, Value>) -> Result<NormalizedListing, Vec<FieldError>> {
    let mut errors = Vec::new();

    let property_type = match present(raw, "propertyType") {
        None => {
            errors.push(FieldError::new(
                "propertyType",
                RuleKind::Required,
                "propertyType is required",
            ));
            None
        }
        Some(_) => enum_field(
            raw,
            "propertyType",
            PropertyType::LABELS,
            PropertyType::from_label,
            &mut errors,
        ),
    };

    // Common attributes.
    let title = required_text(raw, "title", schema::TITLE_MIN, schema::TITLE_MAX, &mut errors);
    let sale_price = match present(raw, "salePrice") {
        None => {
            errors.push(FieldError::new(
                "salePrice",
                RuleKind::Required,
                "salePrice is required",
            ));
            None
        }
        Some(_) => positive_number(raw, "salePrice", &mut errors),
    };
    let property_status = enum_field(
        raw,
        "propertyStatus",
        PropertyStatus::LABELS,
        PropertyStatus::from_label,
        &mut errors,
    )
    .unwrap_or(PropertyStatus::Available);
    let description = text_field(raw, "description", 0, schema::DESCRIPTION_MAX, &mut errors);
    let features = text_sequence(raw, "features", &mut errors);
    let images = url_sequence(raw, "images", &mut errors);

    // Building attributes.
    let bedrooms = count_field(raw, "bedrooms", &mut errors);
    let bathrooms = count_field(raw, "bathrooms", &mut errors);
    let floors = count_field(raw, "floors", &mut errors);
    let total_floors = count_field(raw, "totalFloors", &mut errors);
    let property_size = non_negative_number(raw, "propertySize", &mut errors);
    let size_unit = enum_field(
        raw,
        "sizeUnit",
        SizeUnit::LABELS,
        SizeUnit::from_label,
        &mut errors,
    )
    .unwrap_or(SizeUnit::Sqft);
    let building_age = text_field(raw, "buildingAge", 0, schema::SHORT_TEXT_MAX, &mut errors);
    let furnishing_status = enum_field(
        raw,
        "furnishingStatus",
        FurnishingStatus::LABELS,
        FurnishingStatus::from_label,
        &mut errors,
    )
    .unwrap_or(FurnishingStatus::Unfurnished);
    let facing = text_field(raw, "facing", 0, schema::SHORT_TEXT_MAX, &mut errors);

    // Land attributes.
    let land_area = positive_number(raw, "landArea", &mut errors);
    let land_unit = enum_field(
        raw,
        "landUnit",
        LandUnit::LABELS,
        LandUnit::from_label,
        &mut errors,
    )
    .unwrap_or(LandUnit::Sqft);
    let land_type = text_field(raw, "landType", 0, schema::SHORT_TEXT_MAX, &mut errors);
    let soil_type = text_field(raw, "soilType", 0, schema::SHORT_TEXT_MAX, &mut errors);
    let water_availability =
        text_field(raw, "waterAvailability", 0, schema::SHORT_TEXT_MAX, &mut errors);
    let electricity_availability = text_field(
        raw,
        "electricityAvailability",
        0,
        schema::SHORT_TEXT_MAX,
        &mut errors,
    );
    let road_access = text_field(raw, "roadAccess", 0, schema::ADDRESS_MAX, &mut errors);

    // Commercial attributes.
    let built_up_area = positive_number(raw, "builtUpArea", &mut errors);
    let carpet_area = non_negative_number(raw, "carpetArea", &mut errors);
    let floor_number = integer_field(raw, "floorNumber", &mut errors);
    let washrooms = count_field(raw, "washrooms", &mut errors);
    let cafeteria = flag_field(raw, "cafeteria", &mut errors);
    let conference_room = flag_field(raw, "conferenceRoom", &mut errors);
    let reception = flag_field(raw, "reception", &mut errors);

    // Location.
    let address_line1 = text_field(raw, "addressLine1", 0, schema::ADDRESS_MAX, &mut errors);
    let address_line2 = text_field(raw, "addressLine2", 0, schema::ADDRESS_MAX, &mut errors);
    let city = required_text(raw, "city", 1, schema::SHORT_TEXT_MAX, &mut errors);
    let state_region = text_field(raw, "stateRegion", 0, schema::SHORT_TEXT_MAX, &mut errors);
    let postal_code = postal_code_field(raw, &mut errors);
    let country = plain_text(raw, "country", &mut errors);
    let map_link = url_field(raw, "mapLink", &mut errors);

    // Legal and miscellaneous.
    let ownership_type = text_field(raw, "ownershipType", 0, schema::SHORT_TEXT_MAX, &mut errors);
    let approvals = text_sequence(raw, "approvals", &mut errors);
    let nearby_facilities = text_sequence(raw, "nearbyFacilities", &mut errors);
    let parking_spaces = count_field(raw, "parkingSpaces", &mut errors);

    // Flags.
    let negotiable = flag_field(raw, "negotiable", &mut errors);
    let ready_to_move = flag_field(raw, "readyToMove", &mut errors);
    let loan_available = flag_field(raw, "loanAvailable", &mut errors);

    // Conditional requirements keyed on the discriminant. Presence is what is
    // checked here; a present-but-invalid value was already reported above.
    if let Some(property_type) = property_type {
        match property_type {
            PropertyType::Building => {
                if present(raw, "bedrooms").is_none() {
                    errors.push(FieldError::new(
                        "bedrooms",
                        RuleKind::Required,
                        "bedrooms is required for building listings",
                    ));
                }
                if present(raw, "bathrooms").is_none() {
                    errors.push(FieldError::new(
                        "bathrooms",
                        RuleKind::Required,
                        "bathrooms is required for building listings",
                    ));
                }
            }
            PropertyType::Land => {
                if present(raw, "landArea").is_none() {
                    errors.push(FieldError::new(
                        "landArea",
                        RuleKind::Required,
                        "landArea is required for land listings",
                    ));
                }
            }
            PropertyType::Commercial => {
                if present(raw, "builtUpArea").is_none() {
                    errors.push(FieldError::new(
                        "builtUpArea",
                        RuleKind::Required,
                        "builtUpArea is required for commercial listings",
                    ));
                }
            }
        }
    }

    match property_type {
        Some(property_type) if errors.is_empty() => Ok(NormalizedListing {
            property_type,
            title: title.unwrap_or_default(),
            sale_price: sale_price.unwrap_or_default(),
            property_status,
            description,
            features,
            images,
            bedrooms,
            bathrooms,
            floors,
            total_floors,
            property_size,
            size_unit,
            building_age,
            furnishing_status,
            facing,
            land_area,
            land_unit,
            land_type,
            soil_type,
            water_availability,
            electricity_availability,
            road_access,
            built_up_area,
            carpet_area,
            floor_number,
            washrooms,
            cafeteria,
            conference_room,
            reception,
            address_line1,
            address_line2,
            city: city.unwrap_or_default(),
            state_region,
            postal_code,
            country: country.unwrap_or_else(|| schema::DEFAULT_COUNTRY.to_string()),
            map_link,
            ownership_type,
            approvals,
            nearby_facilities,
            parking_spaces,
            negotiable,
            ready_to_move,
            loan_available,
        }),
        _ => {
            errors.sort_by_key(|error| schema::field_rank(error.field));
            Err(errors)
        }
    }
}

/// JSON `null` is treated the same as an absent key throughout the validator.
fn present<'a>(raw: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|value| !value.is_null())
}

fn length_message(field: &str, min: usize, max: usize) -> String {
    if min > 0 {
        format!("{field} must be between {min} and {max} characters")
    } else {
        format!("{field} must be at most {max} characters")
    }
}

fn text_field(
    raw: &Map<String, Value>,
    field: &'static str,
    min: usize,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = present(raw, field)?;
    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(
            field,
            RuleKind::Type,
            format!("{field} must be a string"),
        ));
        return None;
    };
    let length = text.chars().count();
    if length < min || length > max {
        errors.push(FieldError::new(
            field,
            RuleKind::Length,
            length_message(field, min, max),
        ));
        return None;
    }
    Some(text.to_string())
}

fn required_text(
    raw: &Map<String, Value>,
    field: &'static str,
    min: usize,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if present(raw, field).is_none() {
        errors.push(FieldError::new(
            field,
            RuleKind::Required,
            format!("{field} is required"),
        ));
        return None;
    }
    text_field(raw, field, min, max, errors)
}

/// Type-checked string with no declared length bound (only `country`).
fn plain_text(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = present(raw, field)?;
    match value.as_str() {
        Some(text) => Some(text.to_string()),
        None => {
            errors.push(FieldError::new(
                field,
                RuleKind::Type,
                format!("{field} must be a string"),
            ));
            None
        }
    }
}

fn number_field(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = present(raw, field)?;
    match value.as_f64() {
        Some(number) => Some(number),
        None => {
            errors.push(FieldError::new(
                field,
                RuleKind::Type,
                format!("{field} must be a number"),
            ));
            None
        }
    }
}

fn positive_number(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let number = number_field(raw, field, errors)?;
    if number > 0.0 {
        Some(number)
    } else {
        errors.push(FieldError::new(
            field,
            RuleKind::Range,
            format!("{field} must be greater than 0"),
        ));
        None
    }
}

fn non_negative_number(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let number = number_field(raw, field, errors)?;
    if number >= 0.0 {
        Some(number)
    } else {
        errors.push(FieldError::new(
            field,
            RuleKind::Range,
            format!("{field} cannot be negative"),
        ));
        None
    }
}

/// Integral number of either sign (only `floorNumber`; basements exist).
fn integer_field(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<i32> {
    let number = number_field(raw, field, errors)?;
    if number.fract() != 0.0 {
        errors.push(FieldError::new(
            field,
            RuleKind::Integer,
            format!("{field} must be an integer"),
        ));
        return None;
    }
    if number < i32::MIN as f64 || number > i32::MAX as f64 {
        errors.push(FieldError::new(
            field,
            RuleKind::Range,
            format!("{field} is out of range"),
        ));
        return None;
    }
    Some(number as i32)
}

fn count_field(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<i32> {
    let number = integer_field(raw, field, errors)?;
    if number < 0 {
        errors.push(FieldError::new(
            field,
            RuleKind::Range,
            format!("{field} cannot be negative"),
        ));
        return None;
    }
    Some(number)
}

fn flag_field(raw: &Map<String, Value>, field: &'static str, errors: &mut Vec<FieldError>) -> bool {
    match present(raw, field) {
        None => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            errors.push(FieldError::new(
                field,
                RuleKind::Type,
                format!("{field} must be a boolean"),
            ));
            false
        }
    }
}

fn text_sequence(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Vec<String> {
    let Some(value) = present(raw, field) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        errors.push(FieldError::new(
            field,
            RuleKind::Type,
            format!("{field} must be an array of strings"),
        ));
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(text) = item.as_str() else {
            errors.push(FieldError::new(
                field,
                RuleKind::Type,
                format!("{field} entry {index} must be a string"),
            ));
            continue;
        };
        if text.chars().count() > schema::SEQUENCE_ITEM_MAX {
            errors.push(FieldError::new(
                field,
                RuleKind::Length,
                format!(
                    "{field} entry {index} must be at most {} characters",
                    schema::SEQUENCE_ITEM_MAX
                ),
            ));
            continue;
        }
        out.push(text.to_string());
    }
    out
}

fn url_sequence(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Vec<String> {
    let Some(value) = present(raw, field) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        errors.push(FieldError::new(
            field,
            RuleKind::Type,
            format!("{field} must be an array of URLs"),
        ));
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(text) = item.as_str() else {
            errors.push(FieldError::new(
                field,
                RuleKind::Type,
                format!("{field} entry {index} must be a string"),
            ));
            continue;
        };
        if !validate_url(text) {
            errors.push(FieldError::new(
                field,
                RuleKind::Url,
                format!("{field} entry {index} must be a valid URL"),
            ));
            continue;
        }
        out.push(text.to_string());
    }
    out
}

fn enum_field<T>(
    raw: &Map<String, Value>,
    field: &'static str,
    labels: &'static [&'static str],
    parse: fn(&str) -> Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let value = present(raw, field)?;
    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(
            field,
            RuleKind::Type,
            format!("{field} must be a string"),
        ));
        return None;
    };
    match parse(text) {
        Some(parsed) => Some(parsed),
        None => {
            errors.push(FieldError::new(
                field,
                RuleKind::Enumeration,
                format!("{field} must be one of: {}", labels.join(", ")),
            ));
            None
        }
    }
}

fn postal_code_field(raw: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = present(raw, "postalCode")?;
    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(
            "postalCode",
            RuleKind::Type,
            "postalCode must be a string",
        ));
        return None;
    };
    let matched = Regex::new(schema::POSTAL_CODE_PATTERN)
        .map(|pattern| pattern.is_match(text))
        .unwrap_or(true);
    if !matched {
        errors.push(FieldError::new(
            "postalCode",
            RuleKind::Pattern,
            "postalCode must be 3 to 10 letters, digits, hyphens or spaces",
        ));
        return None;
    }
    Some(text.to_string())
}

fn url_field(
    raw: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = present(raw, field)?;
    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(
            field,
            RuleKind::Type,
            format!("{field} must be a string"),
        ));
        return None;
    };
    if !validate_url(text) {
        errors.push(FieldError::new(
            field,
            RuleKind::Url,
            format!("{field} must be a valid URL"),
        ));
        return None;
    }
    Some(text.to_string())
}
