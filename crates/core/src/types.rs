/// Upstream catalog identifiers are plain integers.
pub type CatalogId = i64;

/// Total result counts as reported by the upstream catalog.
pub type ResultCount = i64;
