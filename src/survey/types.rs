use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::types::{Language, LocalizedString};
use crate::i18n::{create_i18n_string, extract_language_codes, DEFAULT_LANGUAGE_CODE};
use crate::styling::types::StylingConfig;

pub const ALLOWED_RATING_RANGES: [u8; 5] = [3, 4, 5, 7, 10];
pub const DEFAULT_RATING_RANGE: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingScale {
    #[default]
    Number,
    Star,
    Smiley,
}

impl RatingScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Star => "star",
            Self::Smiley => "smiley",
        }
    }
}

fn default_rating_range() -> u8 {
    DEFAULT_RATING_RANGE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheader: Option<LocalizedString>,
    #[serde(default)]
    pub scale: RatingScale,
    #[serde(default = "default_rating_range")]
    pub range: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_label: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_label: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_label: Option<LocalizedString>,
}

impl Default for RatingQuestion {
    fn default() -> Self {
        Self {
            subheader: None,
            scale: RatingScale::default(),
            range: DEFAULT_RATING_RANGE,
            lower_label: None,
            upper_label: None,
            button_label: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentQuestion {
    #[serde(default)]
    pub html: LocalizedString,
    pub label: LocalizedString,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionKind {
    OpenText,
    Rating(RatingQuestion),
    Consent(ConsentQuestion),
}

/// Catalog entry for a question variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    OpenText,
    Rating,
    Consent,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenText => "openText",
            Self::Rating => "rating",
            Self::Consent => "consent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenText => "Free text",
            Self::Rating => "Rating",
            Self::Consent => "Consent",
        }
    }
}

impl QuestionKind {
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::OpenText => QuestionType::OpenText,
            Self::Rating(_) => QuestionType::Rating,
            Self::Consent(_) => QuestionType::Consent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub headline: LocalizedString,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

fn new_question_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl Question {
    pub fn new(headline: LocalizedString, kind: QuestionKind) -> Self {
        Self {
            id: new_question_id(),
            headline,
            required: true,
            kind,
        }
    }

    pub fn open_text<S: AsRef<str>>(headline: &str, codes: &[S]) -> Self {
        Self::new(create_i18n_string(headline, codes), QuestionKind::OpenText)
    }

    pub fn rating<S: AsRef<str>>(headline: &str, codes: &[S]) -> Self {
        Self::new(
            create_i18n_string(headline, codes),
            QuestionKind::Rating(RatingQuestion::default()),
        )
    }

    pub fn consent<S: AsRef<str>>(headline: &str, label: &str, codes: &[S]) -> Self {
        Self::new(
            create_i18n_string(headline, codes),
            QuestionKind::Consent(ConsentQuestion {
                html: create_i18n_string("", codes),
                label: create_i18n_string(label, codes),
            }),
        )
    }

    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// Every localized field carried by this question, headline first.
    pub fn localized_fields(&self) -> Vec<(&'static str, &LocalizedString)> {
        let mut out = vec![("headline", &self.headline)];
        match &self.kind {
            QuestionKind::OpenText => {}
            QuestionKind::Rating(rating) => {
                let optional = [
                    ("subheader", &rating.subheader),
                    ("lowerLabel", &rating.lower_label),
                    ("upperLabel", &rating.upper_label),
                    ("buttonLabel", &rating.button_label),
                ];
                for (name, field) in optional {
                    if let Some(field) = field {
                        out.push((name, field));
                    }
                }
            }
            QuestionKind::Consent(consent) => {
                out.push(("html", &consent.html));
                out.push(("label", &consent.label));
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling: Option<StylingConfig>,
}

impl Survey {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            questions: Vec::new(),
            languages: Vec::new(),
            styling: None,
        }
    }

    /// The language flagged `default`, else the first declared one, else
    /// [`DEFAULT_LANGUAGE_CODE`].
    pub fn base_language(&self) -> &str {
        self.languages
            .iter()
            .find(|l| l.default)
            .or_else(|| self.languages.first())
            .map(|l| l.code.as_str())
            .unwrap_or(DEFAULT_LANGUAGE_CODE)
    }

    pub fn language_codes(&self) -> Vec<String> {
        extract_language_codes(&self.languages)
    }

    /// Languages every localized field must be filled in for.
    pub fn required_language_codes(&self) -> Vec<String> {
        let enabled = self
            .languages
            .iter()
            .filter(|l| l.enabled || l.default)
            .map(|l| l.code.clone())
            .collect::<Vec<String>>();
        if enabled.is_empty() {
            vec![self.base_language().to_string()]
        } else {
            enabled
        }
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
