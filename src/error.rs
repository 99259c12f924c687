use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("question index {index} is out of range (survey has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot apply a {patch} patch to {question} question at index {index}")]
    VariantMismatch {
        index: usize,
        question: &'static str,
        patch: &'static str,
    },
    #[error("no text for language '{requested}' and no fallback in base language '{base}'")]
    MissingFallbackLanguage { requested: String, base: String },
    #[error("invalid {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to access {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SurveyResult<T> = std::result::Result<T, SurveyError>;
