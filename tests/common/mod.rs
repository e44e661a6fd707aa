// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for setting up template fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create an input file plus its `.safekeeper` template companion.
    /// Returns the input path the tool is invoked with.
    pub fn create_template(&self, name: &str, template_contents: &str) -> PathBuf {
        let input = self.temp_dir.path().join(name);
        fs::write(&input, "stale generated contents\n").expect("Failed to write input file");

        let template = self.template_path(&input);
        fs::write(&template, template_contents).expect("Failed to write template file");

        input
    }

    /// Create an input file with no template companion.
    pub fn create_input_without_template(&self, name: &str) -> PathBuf {
        let input = self.temp_dir.path().join(name);
        fs::write(&input, "no companion\n").expect("Failed to write input file");
        input
    }

    pub fn template_path(&self, input: &Path) -> PathBuf {
        let mut os = input.as_os_str().to_os_string();
        os.push(".safekeeper");
        PathBuf::from(os)
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read file")
    }
}
