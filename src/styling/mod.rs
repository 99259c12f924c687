pub mod migrate;
pub mod types;
pub mod validate;

pub use migrate::{
    apply_styling_migration, normalize_styling, normalize_styling_with, MigrationDecision,
    StylingMigration,
};
pub use validate::{is_hex_color, validate_styling};
