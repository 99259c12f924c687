use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_BRAND_COLOR: &str = "#64748b";

/// Colour per appearance mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeColor {
    pub light: String,
}

impl ModeColor {
    pub fn light(value: impl Into<String>) -> Self {
        Self {
            light: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Color,
    Image,
    Animation,
    Upload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyBackground {
    pub bg_type: BackgroundType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingConfig {
    pub unified_styling: bool,
    pub allow_style_overwrite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<ModeColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_border_color: Option<ModeColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<SurveyBackground>,
    /// Keys this model does not know about, kept so they count in the
    /// default-shape comparison and survive a write-back.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Product record as stored before per-mode styling existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProduct {
    pub id: String,
    #[serde(default)]
    pub brand_color: Option<String>,
    #[serde(default)]
    pub highlight_border_color: Option<String>,
    #[serde(default)]
    pub styling: Option<StylingConfig>,
    /// Remaining product columns, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Factory styling values, overridable through settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StylingDefaults {
    pub brand_color: String,
    pub unified_styling: bool,
    pub allow_style_overwrite: bool,
}

impl Default for StylingDefaults {
    fn default() -> Self {
        Self {
            brand_color: DEFAULT_BRAND_COLOR.to_string(),
            unified_styling: true,
            allow_style_overwrite: false,
        }
    }
}

impl StylingDefaults {
    pub fn default_styling(&self) -> StylingConfig {
        StylingConfig {
            unified_styling: self.unified_styling,
            allow_style_overwrite: self.allow_style_overwrite,
            brand_color: None,
            highlight_border_color: None,
            background: None,
            extra: Map::new(),
        }
    }
}
