use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub default: bool,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            alias: None,
            default: false,
            enabled: true,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// Text keyed by language code. Serialized as a plain JSON object.
///
/// An empty string is a stored value and is distinct from a missing code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-language value, mostly useful for fixtures and defaults.
    pub fn single(code: impl Into<String>, text: impl Into<String>) -> Self {
        let mut out = Self::new();
        out.set(code, text);
        out
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn set(&mut self, code: impl Into<String>, text: impl Into<String>) {
        self.0.insert(code.into(), text.into());
    }

    pub fn with(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
        self.set(code, text);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Codes present here but missing from `declared`.
    pub fn unknown_codes(&self, declared: &[String]) -> Vec<String> {
        self.0
            .keys()
            .filter(|code| !declared.iter().any(|d| d == *code))
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, String)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
