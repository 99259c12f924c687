use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SurveyError, SurveyResult};
use crate::styling::types::StylingDefaults;
use crate::util::files::{read_string, write_string};

pub const DEFAULT_SAMPLE_LIMIT: usize = 50;

fn default_sample_limit() -> usize {
    DEFAULT_SAMPLE_LIMIT
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurveySettings {
    #[serde(default)]
    pub styling: StylingDefaults,
    #[serde(default = "default_sample_limit")]
    pub summary_sample_limit: usize,
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            styling: StylingDefaults::default(),
            summary_sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

/// Reads settings, writing the defaults first when the file is missing or blank.
pub fn load_settings(path: &Path) -> SurveyResult<SurveySettings> {
    if !path.exists() {
        let defaults = SurveySettings::default();
        save_settings(path, &defaults)?;
        return Ok(defaults);
    }
    let raw = read_string(path)?;
    if raw.trim().is_empty() {
        let defaults = SurveySettings::default();
        save_settings(path, &defaults)?;
        return Ok(defaults);
    }
    serde_json::from_str(&raw).map_err(|source| SurveyError::Json {
        what: "settings",
        source,
    })
}

pub fn save_settings(path: &Path, settings: &SurveySettings) -> SurveyResult<()> {
    let payload = serde_json::to_string_pretty(settings).map_err(|source| SurveyError::Json {
        what: "settings",
        source,
    })?;
    write_string(path, &payload)
}
