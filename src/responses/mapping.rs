use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::i18n::resolve;
use crate::survey::types::Survey;
use crate::util::text::clean_label;

use super::types::{QuestionAnswer, Response};

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Canonical text for a raw answer. Missing and `null` answers both read as "".
pub fn stringify_answer(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // Whole floats print without a fraction, so `4.0` reads as `4`.
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(stringify_answer)
            .collect::<Vec<String>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Pairs every survey question, in survey order, with this response's answer.
///
/// Headlines are always rendered in the survey base language so rows from
/// different responders line up. Answers keyed by ids the survey no longer
/// has are dropped; unanswered questions get an empty answer.
pub fn map_response(survey: &Survey, response: &Response) -> Vec<QuestionAnswer> {
    let base = survey.base_language();
    survey
        .questions
        .iter()
        .map(|question| QuestionAnswer {
            question: resolve(&question.headline, base, base),
            answer: response
                .data
                .get(&question.id)
                .map(stringify_answer)
                .unwrap_or_default(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One row per response, one column per question, led by the response id and timestamp.
pub fn response_table(survey: &Survey, responses: &[Response]) -> ResponseTable {
    let mut header = vec!["Response ID".to_string(), "Updated At".to_string()];
    let base = survey.base_language();
    header.extend(
        survey
            .questions
            .iter()
            .map(|q| clean_label(&resolve(&q.headline, base, base))),
    );

    let rows = responses
        .iter()
        .map(|response| {
            let mut row = vec![response.id.clone(), response.updated_at.to_rfc3339()];
            row.extend(map_response(survey, response).into_iter().map(|qa| qa.answer));
            row
        })
        .collect();

    ResponseTable { header, rows }
}
