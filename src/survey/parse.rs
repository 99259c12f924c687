use serde_json::Value;

use crate::error::{SurveyError, SurveyResult};
use crate::responses::types::Response;

use super::types::Survey;

pub fn parse_survey_json(raw: &str) -> SurveyResult<Survey> {
    serde_json::from_str(raw).map_err(|source| SurveyError::Json {
        what: "survey",
        source,
    })
}

/// Accepts either a bare array of responses or an object with a `responses` array.
pub fn parse_responses_json(raw: &str) -> SurveyResult<Vec<Response>> {
    let json_error = |source| SurveyError::Json {
        what: "responses",
        source,
    };
    let root: Value = serde_json::from_str(raw).map_err(json_error)?;
    let list = match root {
        Value::Object(mut obj) => obj.remove("responses").unwrap_or(Value::Array(Vec::new())),
        other => other,
    };
    serde_json::from_value(list).map_err(json_error)
}
