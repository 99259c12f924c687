pub mod parse;
pub mod types;
pub mod update;
pub mod validate;

pub use parse::{parse_responses_json, parse_survey_json};
pub use update::{update_question, ConsentPatch, DetailsPatch, QuestionPatch, RatingPatch};
pub use validate::{is_valid, validate_question, validate_survey, ValidationIssue};
