use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::types::LocalizedString;
use crate::survey::types::{QuestionType, Survey};

use super::mapping::stringify_answer;
use super::types::{PersonRef, Response};

pub const ANONYMOUS_LABEL: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTextSample {
    pub response_id: String,
    pub person: Option<PersonRef>,
    pub person_identifier: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTextSummary {
    pub question_id: String,
    pub headline: LocalizedString,
    pub question_type: QuestionType,
    pub question_type_label: String,
    pub required: bool,
    pub response_count: usize,
    pub samples: Vec<OpenTextSample>,
}

/// Display name for a responder: user id, then email attribute, then the raw id.
pub fn person_identifier(person: Option<&PersonRef>) -> String {
    let Some(person) = person else {
        return ANONYMOUS_LABEL.to_string();
    };
    person
        .user_id
        .as_deref()
        .filter(|v| !v.is_empty())
        .or_else(|| {
            person
                .attributes
                .get("email")
                .map(String::as_str)
                .filter(|v| !v.is_empty())
        })
        .unwrap_or(person.id.as_str())
        .to_string()
}

/// Collects the non-empty answers to one question, newest first, keeping at most `limit` samples.
///
/// Returns `None` when the survey has no question with `question_id`.
pub fn summarize_open_text(
    survey: &Survey,
    question_id: &str,
    responses: &[Response],
    limit: usize,
) -> Option<OpenTextSummary> {
    let question = survey.question(question_id)?;

    let mut samples = responses
        .iter()
        .filter_map(|response| {
            let value = stringify_answer(response.data.get(question_id)?);
            if value.trim().is_empty() {
                return None;
            }
            Some(OpenTextSample {
                response_id: response.id.clone(),
                person: response.person.clone(),
                person_identifier: person_identifier(response.person.as_ref()),
                value,
                updated_at: response.updated_at,
            })
        })
        .collect::<Vec<OpenTextSample>>();
    samples.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    let response_count = samples.len();
    samples.truncate(limit);

    let question_type = question.question_type();
    Some(OpenTextSummary {
        question_id: question.id.clone(),
        headline: question.headline.clone(),
        question_type,
        question_type_label: question_type.label().to_string(),
        required: question.required,
        response_count,
        samples,
    })
}
