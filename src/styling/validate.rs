use regex::Regex;
use std::sync::OnceLock;

use crate::survey::validate::ValidationIssue;

use super::types::StylingConfig;

fn hex_regex() -> &'static Regex {
    static HEX_RE: OnceLock<Regex> = OnceLock::new();
    HEX_RE.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("regex")
    })
}

pub fn is_hex_color(value: &str) -> bool {
    hex_regex().is_match(value)
}

pub fn validate_styling(styling: &StylingConfig) -> Vec<ValidationIssue> {
    let colors = [
        ("brandColor", &styling.brand_color),
        ("highlightBorderColor", &styling.highlight_border_color),
    ];
    colors
        .into_iter()
        .filter_map(|(name, color)| {
            let color = color.as_ref()?;
            if is_hex_color(&color.light) {
                return None;
            }
            Some(ValidationIssue {
                code: "INVALID_COLOR".to_string(),
                message: format!("{name}.light '{}' is not a hex colour", color.light),
                question_id: None,
            })
        })
        .collect()
}
