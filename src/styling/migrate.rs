use serde::{Deserialize, Serialize};
use serde_json::Map;

use super::types::{LegacyProduct, ModeColor, StylingConfig, StylingDefaults};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MigrationDecision {
    /// Brand colour, styling and highlight colour are all at factory values.
    AlreadyDefault,
    /// Nothing to carry over without a legacy brand colour.
    NoLegacyBrandColor,
    Migrated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingMigration {
    pub changed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_styling: Option<StylingConfig>,
    pub clear_legacy_brand_color: bool,
    pub decision: MigrationDecision,
}

impl StylingMigration {
    fn unchanged(decision: MigrationDecision) -> Self {
        Self {
            changed: false,
            new_styling: None,
            clear_legacy_brand_color: false,
            decision,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn normalize_styling(product: &LegacyProduct) -> StylingMigration {
    normalize_styling_with(product, &StylingDefaults::default())
}

/// Decides how one legacy product record maps onto per-mode styling.
///
/// Pure: the caller persists `new_styling` and clears the legacy brand colour
/// in the same write.
pub fn normalize_styling_with(
    product: &LegacyProduct,
    defaults: &StylingDefaults,
) -> StylingMigration {
    let brand_color = present(&product.brand_color);
    let highlight = present(&product.highlight_border_color);

    // A missing styling object is not the default shape, and unknown styling
    // keys count in the comparison.
    let at_defaults = brand_color == Some(defaults.brand_color.as_str())
        && product.styling.as_ref() == Some(&defaults.default_styling())
        && highlight.is_none();
    if at_defaults {
        tracing::debug!(product_id = %product.id, "styling already at defaults");
        return StylingMigration::unchanged(MigrationDecision::AlreadyDefault);
    }

    let Some(brand_color) = brand_color else {
        tracing::debug!(product_id = %product.id, "no legacy brand colour to migrate");
        return StylingMigration::unchanged(MigrationDecision::NoLegacyBrandColor);
    };

    let new_styling = StylingConfig {
        unified_styling: false,
        allow_style_overwrite: true,
        brand_color: Some(ModeColor::light(brand_color)),
        highlight_border_color: highlight.map(ModeColor::light),
        background: None,
        // Replaces the previous styling object wholesale.
        extra: Map::new(),
    };
    tracing::debug!(product_id = %product.id, brand_color, "styling migrated");
    StylingMigration {
        changed: true,
        new_styling: Some(new_styling),
        clear_legacy_brand_color: true,
        decision: MigrationDecision::Migrated,
    }
}

/// The record as it must be written back: both changes or neither.
pub fn apply_styling_migration(
    product: &LegacyProduct,
    migration: &StylingMigration,
) -> LegacyProduct {
    let mut next = product.clone();
    if let Some(styling) = &migration.new_styling {
        next.styling = Some(styling.clone());
        if migration.clear_legacy_brand_color {
            next.brand_color = None;
        }
    }
    next
}
