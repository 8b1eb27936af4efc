//! Utility modules for the catalog proxy

pub mod dates;
pub mod url;

pub use dates::{date_only, format_duration};
pub use url::build_url;
