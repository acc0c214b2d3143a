pub mod catalog_handlers;
pub mod codec_handlers;

pub use catalog_handlers::handle_catalog;
pub use codec_handlers::{handle_decode, handle_encode, handle_extract, handle_strip_html};
