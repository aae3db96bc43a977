use crate::domain::PropertyCategory;

/// Classifier tokens in priority order; the first containment match wins
/// when several tokens co-occur in one label.
const CATEGORY_TOKENS: [(&str, PropertyCategory); 4] = [
    ("apartment", PropertyCategory::Apartment),
    ("house", PropertyCategory::House),
    ("ground", PropertyCategory::Ground),
    ("commercial", PropertyCategory::Commercial),
];

/// Map a free-text category label onto the canonical enumeration.
/// Case-insensitive substring matching; unknown or missing labels map to
/// `Other`.
pub fn map_category(raw: Option<&str>) -> PropertyCategory {
    let label = raw.unwrap_or_default().trim().to_lowercase();
    for (token, category) in CATEGORY_TOKENS {
        if label.contains(token) {
            return category;
        }
    }
    PropertyCategory::Other
}
