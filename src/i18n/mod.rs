pub mod resolve;
pub mod types;

pub use resolve::{create_i18n_string, extract_language_codes, resolve, try_resolve};

/// Base language used when a survey declares no languages at all.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";
