// ABOUTME: Template file location and opening
// ABOUTME: Derives the companion .safekeeper path for an input file

use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::error::{EngineError, Result};

/// Suffix appended to the input path to locate its template.
pub const TEMPLATE_SUFFIX: &str = ".safekeeper";

/// Template path for an input file: the full input path plus the suffix,
/// so `src/config.rs` reads from `src/config.rs.safekeeper`.
pub fn template_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(TEMPLATE_SUFFIX);
    PathBuf::from(path)
}

/// Open the template for reading. The reader is dropped (and the file
/// closed) on every exit path of the caller.
pub fn open(input: &Path) -> Result<BufReader<File>> {
    let path = template_path(input);
    let file = File::open(&path).map_err(|source| EngineError::TemplateNotFound { path, source })?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_path_appends_suffix() {
        let input = Path::new("src/config.rs");
        assert_eq!(
            template_path(input),
            PathBuf::from("src/config.rs.safekeeper")
        );
    }

    #[test]
    fn test_template_path_keeps_existing_extension() {
        // The suffix is appended, not swapped in for the extension.
        let input = Path::new("dir/file.txt");
        assert_eq!(template_path(input), PathBuf::from("dir/file.txt.safekeeper"));
    }

    #[test]
    fn test_open_missing_template() {
        let input = Path::new("/nonexistent/never/here.rs");
        match open(input) {
            Err(EngineError::TemplateNotFound { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/never/here.rs.safekeeper"));
            }
            other => panic!("expected TemplateNotFound, got {:?}", other.map(|_| ())),
        }
    }
}
