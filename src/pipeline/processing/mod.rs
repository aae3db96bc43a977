// Pipeline processing: field parsing, normalization, and feature enrichment

pub mod enrich;
pub mod normalize;
