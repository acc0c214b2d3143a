// Public modules
pub mod codec;
pub mod error;
pub mod io;
pub mod models;
pub mod schema;
pub mod schema_validation;
pub mod selection;
pub mod sorting;
pub mod text;
pub mod validation;

// Re-export commonly used types for convenience
pub use codec::{
    decode, encode, extract_raw_filters, filter_param_key, group_from_param_key, split_encoded,
    DecodedFilters, SkipReason, SkippedFilter, DELIMITER, FILTER_SUFFIX,
};
pub use error::CatalogError;
pub use io::{load_catalog, parse_catalog, save_catalog};
pub use models::{FilterCatalog, FilterGroup, FilterItem, FilterKeys, FilterState, RawFilters};
pub use schema::catalog_schema;
pub use schema_validation::{validate_against_schema, validate_catalog_json};
pub use selection::{parse_selections, resolve_selections, Selection};
pub use sorting::{compare_items, normalize_for_sorting, sort_items, strip_leading_articles};
pub use text::strip_html;
pub use validation::{validate_catalog, validate_state};
