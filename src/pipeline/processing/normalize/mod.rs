pub mod category;
pub mod datetime;
pub mod numeric;
pub mod text;

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use crate::domain::{NormalizedListing, RawListing};
use crate::pipeline::processing::enrich::{round2, FeatureEngineer, PaymentInterval};

/// Trait for normalizing raw listings into canonical records.
///
/// Implementations must produce exactly one output record per input record.
/// Malformed field content degrades to the documented fallback values; it is
/// never a reason to error.
pub trait Normalizer {
    fn normalize(&self, raw: &RawListing) -> anyhow::Result<NormalizedListing>;
}

/// Configuration for the default listing normalizer.
#[derive(Debug, Clone, Default)]
pub struct NormalizeConfig {
    /// Fixed reference year for the age feature. `None` derives the
    /// reference from each record's own crawl timestamp, which keeps the
    /// transform a pure function of its input.
    pub reference_year: Option<i32>,
}

/// Default normalizer implementing the full field-parser rule set.
pub struct ListingNormalizer {
    /// Configuration for reference-time handling.
    pub config: NormalizeConfig,
}

impl ListingNormalizer {
    /// Create a normalizer with default configuration.
    pub fn new() -> Self {
        Self {
            config: NormalizeConfig::default(),
        }
    }

    /// Create a normalizer with custom configuration.
    pub fn with_config(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Reference year for the age feature: configured override first, then
    /// the record's crawl timestamp.
    fn reference_year(&self, crawl: Option<NaiveDateTime>) -> Option<i32> {
        self.config.reference_year.or_else(|| crawl.map(|dt| dt.year()))
    }
}

impl Normalizer for ListingNormalizer {
    fn normalize(&self, raw: &RawListing) -> anyhow::Result<NormalizedListing> {
        let price = numeric::parse_price(&raw.price);
        let floor = numeric::parse_floor(raw.floor.as_ref());
        let rooms = numeric::parse_rooms(raw.rooms.as_ref());
        let living_space = numeric::parse_living_space(raw.living_space.as_ref());
        // Money amounts are emitted at two decimals.
        let additional_costs = round2(numeric::parse_additional_costs(raw.additional_costs.as_ref()));
        let build_year = numeric::parse_build_year(raw.build_year.as_ref());

        let property_category = category::map_category(raw.property_category.as_deref());
        let title = text::clean_text(raw.title.as_deref());
        let description = text::clean_text(raw.description.as_deref());
        let street = text::clean_text(raw.property_location.street.as_deref());

        let crawl = datetime::parse_timestamp(&raw.crawl_datetime);
        let published = raw
            .published_datetime
            .as_ref()
            .and_then(datetime::parse_timestamp);

        let interval = PaymentInterval::parse(raw.payment_interval.as_deref());
        let price_per_sqm = FeatureEngineer::price_per_sqm(price, living_space, interval);
        let age = FeatureEngineer::age(build_year, self.reference_year(crawl));
        let days_since_published = FeatureEngineer::days_since_published(published, crawl);
        let title_stats = FeatureEngineer::text_stats(&title);
        let description_stats = FeatureEngineer::text_stats(&description);

        debug!(
            "normalize: id={} platform={} price={} category={:?}",
            raw.id, raw.platform, price, property_category
        );

        Ok(NormalizedListing {
            price,
            floor,
            living_space,
            rooms,
            property_category,
            title,
            street,
            price_per_sqm,
            title_length: title_stats.length,
            title_word_count: title_stats.word_count,
            description_length: description_stats.length,
            description_word_count: description_stats.word_count,
            additional_costs,
            build_year,
            age,
            days_since_published,
        })
    }
}

impl Default for ListingNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
