use std::fs;
use std::path::Path;

use crate::error::{SurveyError, SurveyResult};

fn io_error(path: &Path, source: std::io::Error) -> SurveyError {
    SurveyError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn ensure_dir(path: &Path) -> SurveyResult<()> {
    fs::create_dir_all(path).map_err(|e| io_error(path, e))
}

pub fn read_string(path: &Path) -> SurveyResult<String> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

pub fn write_string(path: &Path, content: &str) -> SurveyResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    fs::write(path, content).map_err(|e| io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::{read_string, write_string};

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("table.json");
        write_string(&path, "[]").expect("write");
        assert_eq!(read_string(&path).expect("read"), "[]");
    }

    #[test]
    fn read_reports_the_missing_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_string(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
