// URL handling utilities
pub mod query_string;
pub mod url_builder;
pub mod url_parser;

// Rendering utilities
pub mod json_render;
pub mod time_format;

// Re-export all utilities for convenient access
pub use json_render::{pretty_json, yes_no};
pub use query_string::build_query_string;
pub use time_format::to_local_time;
pub use url_builder::absolute_url;
pub use url_parser::hostname_from_url;
