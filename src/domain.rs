use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// A price as delivered by a source platform: already numeric, or free text
/// in whatever locale convention the platform uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

/// A floor indicator: an integer level, a fractional level, or a label such
/// as "EG" or "3rd floor".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FloorValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// A numeric quantity (rooms, living space, additional costs) that may also
/// arrive as free text like "3.5 rooms" or "120 m²".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityValue {
    Number(f64),
    Text(String),
}

/// A build year, numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// A timestamp that is either already typed or a string in one of the
/// source platforms' date formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampValue {
    DateTime(DateTime<Utc>),
    Text(String),
}

/// Latitude and longitude as reported by a source platform. Non-numeric
/// input degrades to `None` instead of failing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: Option<f64>,
}

/// Address and geographical metadata of the property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyLocation {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub canton: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// A raw real-estate listing as scraped from a source platform.
///
/// Many fields are loosely typed to accommodate free text, numbers and
/// inconsistent locale formats. The engine only ever reads this shape; it is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub id: String,
    pub platform: String,
    pub price: PriceValue,
    #[serde(default)]
    pub floor: Option<FloorValue>,
    #[serde(default)]
    pub rooms: Option<QuantityValue>,
    #[serde(default)]
    pub living_space: Option<QuantityValue>,
    #[serde(default)]
    pub plot_area: Option<String>,
    #[serde(default)]
    pub property_category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub sale_type: String,
    pub crawl_datetime: TimestampValue,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub published_datetime: Option<TimestampValue>,
    pub seller_type: String,
    #[serde(default)]
    pub build_year: Option<YearValue>,
    #[serde(default)]
    pub payment_interval: Option<String>,
    #[serde(default)]
    pub additional_costs: Option<QuantityValue>,
    #[serde(default)]
    pub parking: Option<bool>,
    pub property_location: PropertyLocation,
}

impl RawListing {
    /// Deserialize a single raw listing from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Canonical property categories emitted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Apartment,
    House,
    Ground,
    Commercial,
    Other,
}

/// A normalized, strictly typed listing ready for downstream analytics.
///
/// Every field is always populated with a type-correct value: numeric fields
/// fall back to 0/0.0 and text fields to the empty string, while the
/// semantic optionals (build_year, age, days_since_published) stay `None` so
/// "unknown" remains distinguishable from a real zero. Freshly constructed
/// per input record, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedListing {
    pub price: i64,
    pub floor: i32,
    pub living_space: f64,
    pub rooms: f64,
    #[serde(rename = "propertyCategory")]
    pub property_category: PropertyCategory,
    pub title: String,
    pub street: String,
    pub price_per_sqm: f64,
    pub title_length: usize,
    pub title_word_count: usize,
    pub description_length: usize,
    pub description_word_count: usize,
    pub additional_costs: f64,
    pub build_year: Option<i32>,
    pub age: Option<i32>,
    pub days_since_published: Option<i64>,
}

impl NormalizedListing {
    /// Serialize to a JSON value. Nullable fields stay explicit nulls.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Accept a float, an integer, or a numeric string; anything else is `None`.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Source platforms emit empty strings for unpublished listings; fold those
/// into `None` before the engine sees them.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<TimestampValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TimestampValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(TimestampValue::Text(s)) if s.trim().is_empty() => None,
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_listing(overrides: serde_json::Value) -> serde_json::Value {
        let mut value = json!({
            "id": "test-1",
            "platform": "test_platform",
            "price": 100000,
            "sale_type": "buy",
            "seller_type": "private",
            "crawl_datetime": "2023-02-01T00:00:00Z",
            "property_location": {}
        });
        if let (Some(base), Some(extra)) = (value.as_object_mut(), overrides.as_object()) {
            for (key, val) in extra {
                base.insert(key.clone(), val.clone());
            }
        }
        value
    }

    #[test]
    fn test_price_value_accepts_number_and_text() {
        let numeric = RawListing::from_value(minimal_listing(json!({"price": 250000}))).unwrap();
        assert_eq!(numeric.price, PriceValue::Number(250000.0));

        let textual =
            RawListing::from_value(minimal_listing(json!({"price": "CHF 250'000"}))).unwrap();
        assert_eq!(textual.price, PriceValue::Text("CHF 250'000".to_string()));
    }

    #[test]
    fn test_floor_value_distinguishes_integer_float_text() {
        let listing = RawListing::from_value(minimal_listing(json!({"floor": 2}))).unwrap();
        assert_eq!(listing.floor, Some(FloorValue::Integer(2)));

        let listing = RawListing::from_value(minimal_listing(json!({"floor": 2.5}))).unwrap();
        assert_eq!(listing.floor, Some(FloorValue::Float(2.5)));

        let listing = RawListing::from_value(minimal_listing(json!({"floor": "EG"}))).unwrap();
        assert_eq!(listing.floor, Some(FloorValue::Text("EG".to_string())));
    }

    #[test]
    fn test_coordinates_tolerate_non_numeric_input() {
        let listing = RawListing::from_value(minimal_listing(json!({
            "property_location": {
                "street": "Bahnhofstrasse 7",
                "coordinates": {"lat": "47.3769", "lng": "not a number"}
            }
        })))
        .unwrap();

        let coordinates = listing.property_location.coordinates.unwrap();
        assert_eq!(coordinates.lat, Some(47.3769));
        assert_eq!(coordinates.lng, None);
    }

    #[test]
    fn test_blank_published_datetime_becomes_none() {
        let listing =
            RawListing::from_value(minimal_listing(json!({"published_datetime": "  "}))).unwrap();
        assert_eq!(listing.published_datetime, None);

        let listing = RawListing::from_value(minimal_listing(
            json!({"published_datetime": "2023-01-01T00:00:00Z"}),
        ))
        .unwrap();
        assert!(listing.published_datetime.is_some());
    }

    #[test]
    fn test_typed_crawl_datetime_round_trips() {
        let listing = RawListing::from_value(minimal_listing(json!({}))).unwrap();
        match listing.crawl_datetime {
            TimestampValue::DateTime(dt) => {
                assert_eq!(dt.to_rfc3339(), "2023-02-01T00:00:00+00:00")
            }
            TimestampValue::Text(text) => panic!("expected typed datetime, got text '{}'", text),
        }
    }

    #[test]
    fn test_normalized_listing_serializes_camel_case_category_key() {
        let normalized = NormalizedListing {
            price: 1_200_000,
            floor: 0,
            living_space: 120.0,
            rooms: 4.5,
            property_category: PropertyCategory::Apartment,
            title: "schones haus".to_string(),
            street: String::new(),
            price_per_sqm: 10_000.0,
            title_length: 12,
            title_word_count: 2,
            description_length: 0,
            description_word_count: 0,
            additional_costs: 250.5,
            build_year: None,
            age: None,
            days_since_published: None,
        };

        let value = normalized.to_value().unwrap();
        assert_eq!(value["propertyCategory"], json!("apartment"));
        // Semantic optionals are explicit nulls, never omitted.
        assert!(value.as_object().unwrap().contains_key("build_year"));
        assert_eq!(value["build_year"], serde_json::Value::Null);
        assert_eq!(value["age"], serde_json::Value::Null);
        assert_eq!(value["days_since_published"], serde_json::Value::Null);
    }
}
