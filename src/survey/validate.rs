use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::i18n::types::LocalizedString;
use crate::styling::validate_styling;
use crate::util::text::is_blank;

use super::types::{Question, QuestionKind, Survey, ALLOWED_RATING_RANGES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
}

impl ValidationIssue {
    fn new(code: &str, message: String, question_id: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            message,
            question_id: question_id.map(str::to_string),
        }
    }
}

fn missing_languages(field: &LocalizedString, language_codes: &[String]) -> Vec<String> {
    language_codes
        .iter()
        .filter(|code| field.get(code).map_or(true, is_blank))
        .cloned()
        .collect()
}

/// Read-only checks callers run before persisting an edited question.
pub fn validate_question(question: &Question, language_codes: &[String]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let id = Some(question.id.as_str());

    let missing = missing_languages(&question.headline, language_codes);
    if !missing.is_empty() {
        issues.push(ValidationIssue::new(
            "EMPTY_HEADLINE",
            format!("Headline is empty for: {}", missing.join(", ")),
            id,
        ));
    }

    match &question.kind {
        QuestionKind::OpenText => {}
        QuestionKind::Rating(rating) => {
            // Scale is closed by its type; only the range can arrive out of bounds.
            if !ALLOWED_RATING_RANGES.contains(&rating.range) {
                issues.push(ValidationIssue::new(
                    "INVALID_RATING_RANGE",
                    format!(
                        "Rating range {} is not one of {:?}",
                        rating.range, ALLOWED_RATING_RANGES
                    ),
                    id,
                ));
            }
        }
        QuestionKind::Consent(consent) => {
            let missing = missing_languages(&consent.label, language_codes);
            if !missing.is_empty() {
                issues.push(ValidationIssue::new(
                    "EMPTY_CONSENT_LABEL",
                    format!("Checkbox label is empty for: {}", missing.join(", ")),
                    id,
                ));
            }
        }
    }
    issues
}

pub fn is_valid(question: &Question, language_codes: &[String]) -> bool {
    validate_question(question, language_codes).is_empty()
}

/// Whole-document checks: id uniqueness, language consistency and per-question validity.
pub fn validate_survey(survey: &Survey) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let declared = survey.language_codes();
    let required = survey.required_language_codes();

    let mut seen: HashSet<&str> = HashSet::new();
    for question in &survey.questions {
        if !seen.insert(question.id.as_str()) {
            issues.push(ValidationIssue::new(
                "DUPLICATE_QUESTION_ID",
                format!("Question id '{}' is used more than once", question.id),
                Some(question.id.as_str()),
            ));
        }

        if !declared.is_empty() {
            for (name, field) in question.localized_fields() {
                let unknown = field.unknown_codes(&declared);
                if !unknown.is_empty() {
                    issues.push(ValidationIssue::new(
                        "UNDECLARED_LANGUAGE",
                        format!("Field '{name}' has undeclared languages: {}", unknown.join(", ")),
                        Some(question.id.as_str()),
                    ));
                }
            }
        }

        issues.extend(validate_question(question, &required));
    }

    if let Some(styling) = &survey.styling {
        issues.extend(validate_styling(styling));
    }
    issues
}
