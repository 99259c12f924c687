//! Localized survey model.
//!
//! Survey questions carry per-language text, responses are mapped back onto
//! the questions they answer, and legacy flat product styling is resolved into
//! the per-appearance-mode shape. Everything here is pure: callers own
//! persistence, rendering and transactions.

pub mod error;
pub mod i18n;
pub mod responses;
pub mod settings;
pub mod styling;
pub mod survey;
pub mod util;

pub use error::{SurveyError, SurveyResult};
pub use i18n::types::{Language, LocalizedString};
pub use responses::types::{PersonRef, QuestionAnswer, Response};
pub use styling::types::{LegacyProduct, ModeColor, StylingConfig};
pub use survey::types::{
    ConsentQuestion, Question, QuestionKind, QuestionType, RatingQuestion, RatingScale, Survey,
};
