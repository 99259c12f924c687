use crate::error::{SurveyError, SurveyResult};

use super::types::{Language, LocalizedString};

/// Seeds `initial` under every code, so each language can be edited on its own later.
pub fn create_i18n_string<S: AsRef<str>>(initial: &str, codes: &[S]) -> LocalizedString {
    codes
        .iter()
        .map(|code| (code.as_ref().to_string(), initial.to_string()))
        .collect()
}

pub fn extract_language_codes(languages: &[Language]) -> Vec<String> {
    languages.iter().map(|l| l.code.clone()).collect()
}

/// Looks up `language_code`, falling back to `base_language`.
///
/// Fails only when neither code is present.
pub fn try_resolve<'a>(
    field: &'a LocalizedString,
    language_code: &str,
    base_language: &str,
) -> SurveyResult<&'a str> {
    field
        .get(language_code)
        .or_else(|| field.get(base_language))
        .ok_or_else(|| SurveyError::MissingFallbackLanguage {
            requested: language_code.to_string(),
            base: base_language.to_string(),
        })
}

/// Lookup that never fails: a gap in both languages yields an empty string.
pub fn resolve(field: &LocalizedString, language_code: &str, base_language: &str) -> String {
    match try_resolve(field, language_code, base_language) {
        Ok(text) => text.to_string(),
        Err(err) => {
            if !field.is_empty() {
                tracing::warn!("{err}");
            }
            String::new()
        }
    }
}
