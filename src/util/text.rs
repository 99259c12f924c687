const LABEL_MAX_CHARS: usize = 200;

/// Collapses all whitespace runs (newlines included) into single spaces.
pub fn compact_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Single-line column label, truncated to a readable length.
pub fn clean_label(text: &str) -> String {
    let compact = compact_whitespace(text);
    if compact.chars().count() > LABEL_MAX_CHARS {
        let head = compact.chars().take(LABEL_MAX_CHARS - 3).collect::<String>();
        format!("{head}...")
    } else {
        compact
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{clean_label, compact_whitespace, is_blank};

    #[test]
    fn collapses_newlines_and_runs_of_spaces() {
        assert_eq!(
            compact_whitespace("  I agree to the\n  terms\r\n"),
            "I agree to the terms"
        );
    }

    #[test]
    fn clean_label_truncates_on_char_boundaries() {
        let long = "ü".repeat(250);
        let label = clean_label(&long);
        assert_eq!(label.chars().count(), 200);
        assert!(label.ends_with("..."));
        assert_eq!(clean_label("Name\r\n  ?"), "Name ?");
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(is_blank("  \n"));
        assert!(!is_blank(" a "));
    }
}
