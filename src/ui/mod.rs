pub mod dialogs;
pub mod formatting;

pub use dialogs::{set_status, show_error, StatusLevel};
pub use formatting::{format_catalog, format_raw_filters, format_skipped, format_state};
