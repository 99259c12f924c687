use crate::error::{SurveyError, SurveyResult};
use crate::i18n::types::LocalizedString;

use super::types::{ConsentQuestion, Question, QuestionKind, RatingQuestion, RatingScale, Survey};

/// Replacement values for a rating question. `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingPatch {
    pub subheader: Option<Option<LocalizedString>>,
    pub scale: Option<RatingScale>,
    pub range: Option<u8>,
    pub lower_label: Option<Option<LocalizedString>>,
    pub upper_label: Option<Option<LocalizedString>>,
    pub button_label: Option<Option<LocalizedString>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsentPatch {
    pub html: Option<LocalizedString>,
    pub label: Option<LocalizedString>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailsPatch {
    /// Only shared attributes change.
    #[default]
    Common,
    Rating(RatingPatch),
    Consent(ConsentPatch),
}

impl DetailsPatch {
    fn name(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rating(_) => "rating",
            Self::Consent(_) => "consent",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionPatch {
    pub headline: Option<LocalizedString>,
    pub required: Option<bool>,
    pub details: DetailsPatch,
}

impl QuestionPatch {
    pub fn headline(headline: LocalizedString) -> Self {
        Self {
            headline: Some(headline),
            ..Self::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    pub fn rating(patch: RatingPatch) -> Self {
        Self {
            details: DetailsPatch::Rating(patch),
            ..Self::default()
        }
    }

    pub fn consent(patch: ConsentPatch) -> Self {
        Self {
            details: DetailsPatch::Consent(patch),
            ..Self::default()
        }
    }
}

fn set_if_some<T>(slot: &mut T, value: &Option<T>)
where
    T: Clone,
{
    if let Some(value) = value {
        *slot = value.clone();
    }
}

fn merge_rating(rating: &mut RatingQuestion, patch: &RatingPatch) {
    set_if_some(&mut rating.subheader, &patch.subheader);
    set_if_some(&mut rating.scale, &patch.scale);
    set_if_some(&mut rating.range, &patch.range);
    set_if_some(&mut rating.lower_label, &patch.lower_label);
    set_if_some(&mut rating.upper_label, &patch.upper_label);
    set_if_some(&mut rating.button_label, &patch.button_label);
}

fn merge_consent(consent: &mut ConsentQuestion, patch: &ConsentPatch) {
    set_if_some(&mut consent.html, &patch.html);
    set_if_some(&mut consent.label, &patch.label);
}

fn merge_question(
    question: &mut Question,
    index: usize,
    patch: &QuestionPatch,
) -> SurveyResult<()> {
    match (&mut question.kind, &patch.details) {
        (_, DetailsPatch::Common) => {}
        (QuestionKind::Rating(rating), DetailsPatch::Rating(p)) => merge_rating(rating, p),
        (QuestionKind::Consent(consent), DetailsPatch::Consent(p)) => merge_consent(consent, p),
        (kind, details) => {
            return Err(SurveyError::VariantMismatch {
                index,
                question: kind.question_type().as_str(),
                patch: details.name(),
            })
        }
    }
    set_if_some(&mut question.headline, &patch.headline);
    set_if_some(&mut question.required, &patch.required);
    Ok(())
}

/// Returns a copy of `survey` with the question at `question_idx` merged with
/// `patch`. The input survey is never modified, and a failed merge yields no
/// partially updated value.
pub fn update_question(
    survey: &Survey,
    question_idx: usize,
    patch: &QuestionPatch,
) -> SurveyResult<Survey> {
    let len = survey.questions.len();
    let current = survey
        .questions
        .get(question_idx)
        .ok_or(SurveyError::IndexOutOfRange {
            index: question_idx,
            len,
        })?;

    let mut merged = current.clone();
    merge_question(&mut merged, question_idx, patch)?;
    tracing::debug!(
        survey_id = %survey.id,
        question_id = %merged.id,
        question_idx,
        "question updated"
    );

    let mut next = survey.clone();
    next.questions[question_idx] = merged;
    Ok(next)
}
