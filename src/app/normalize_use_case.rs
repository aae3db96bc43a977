use anyhow::Result;
use tracing::debug;

use crate::domain::{NormalizedListing, RawListing};
use crate::pipeline::processing::normalize::{ListingNormalizer, Normalizer};

/// Use case for normalizing batches of raw listings into canonical records.
pub struct NormalizeUseCase {
    normalizer: Box<dyn Normalizer + Send + Sync>,
}

impl NormalizeUseCase {
    pub fn new(normalizer: Box<dyn Normalizer + Send + Sync>) -> Self {
        Self { normalizer }
    }

    /// Create a use case with the default listing normalizer.
    pub fn with_default_normalizer() -> Self {
        Self {
            normalizer: Box::new(ListingNormalizer::new()),
        }
    }

    /// Normalize a single raw listing.
    pub fn normalize_record(&self, raw: &RawListing) -> Result<NormalizedListing> {
        self.normalizer.normalize(raw)
    }

    /// Normalize a batch of raw listings.
    ///
    /// Strict one-to-one mapping: the result holds exactly one record per
    /// input record, in input order. No record is dropped, merged or
    /// reordered; a record full of malformed fields still yields a
    /// fully-typed output built from the fallback values.
    pub fn normalize_batch(&self, records: &[RawListing]) -> Result<Vec<NormalizedListing>> {
        let mut normalized = Vec::with_capacity(records.len());
        for record in records {
            normalized.push(self.normalizer.normalize(record)?);
        }
        debug!("normalize_batch: processed {} records", normalized.len());
        Ok(normalized)
    }
}
