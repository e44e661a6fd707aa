// ABOUTME: Substitution engine for generating source files from templates
// ABOUTME: Resolves keys, rewrites template lines, and emits the output file

pub mod error;
pub mod header;
pub mod keys;
pub mod replacer;
pub mod template;

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use self::header::Header;

pub use self::error::{EngineError, Result};
pub use self::keys::KeyValues;
pub use self::replacer::{Replacer, TOKEN_PREFIX};
pub use self::template::TEMPLATE_SUFFIX;

/// Configuration for one generation run, built by the caller and handed to
/// the engine at construction. The engine reads no flags or globals.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Environment variable names to substitute, in supply order.
    pub keys: Vec<String>,
    /// Output destination; defaults to the input path when absent.
    pub output: Option<PathBuf>,
}

pub struct SubstitutionEngine {
    config: EngineConfig,
}

impl SubstitutionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline: resolve keys, validate the input, transform
    /// the template, write the output. Returns the path written.
    ///
    /// Nothing is written on key, input, template, or read failures. A
    /// failed write may leave a partial destination behind.
    pub fn generate(&self, inputs: &[PathBuf]) -> Result<PathBuf> {
        let key_values = KeyValues::from_env(&self.config.keys)?;
        debug!("Resolved {} substitution keys", key_values.len());

        let input = self.single_file_input(inputs)?;

        let mut buffer = String::new();
        let header = Header::new(&self.config.keys, self.config.output.as_deref(), input);
        header.write_to(&mut buffer);

        self.transform_body(input, &key_values, &mut buffer)?;

        let output = self
            .config
            .output
            .clone()
            .unwrap_or_else(|| input.to_path_buf());

        fs::write(&output, &buffer).map_err(|source| EngineError::WriteFailure {
            path: output.clone(),
            source,
        })?;

        info!(
            "Generated {} ({} bytes) from {}",
            output.display(),
            buffer.len(),
            template::template_path(input).display()
        );
        Ok(output)
    }

    /// Exactly one path naming a file is accepted. Directories, multiple
    /// paths, no paths, or a path that cannot be inspected are rejected.
    fn single_file_input<'a>(&self, inputs: &'a [PathBuf]) -> Result<&'a PathBuf> {
        let input = match inputs {
            [single] => single,
            [] => {
                return Err(EngineError::UnsupportedInput {
                    message: "no input path given".to_string(),
                });
            }
            _ => {
                return Err(EngineError::UnsupportedInput {
                    message: "only single file inputs are supported".to_string(),
                });
            }
        };

        let metadata = fs::metadata(input).map_err(|e| EngineError::UnsupportedInput {
            message: format!("cannot inspect '{}': {}", input.display(), e),
        })?;
        if metadata.is_dir() {
            return Err(EngineError::UnsupportedInput {
                message: format!("'{}' is a directory", input.display()),
            });
        }

        Ok(input)
    }

    /// Read the template line by line, dropping directive echoes and
    /// applying every replacer to every surviving line. Line boundaries
    /// are preserved; no substitution crosses a line.
    fn transform_body(
        &self,
        input: &Path,
        key_values: &KeyValues,
        buffer: &mut String,
    ) -> Result<()> {
        let reader = template::open(input)?;
        let replacers = key_values.replacers();

        for line in reader.lines() {
            let mut line = line?;

            // The template's own directive came from a prior run; the
            // header already emitted the canonical copy.
            if header::is_directive_echo(&line) {
                debug!("Dropping directive echo: {}", line.trim());
                continue;
            }

            for replacer in &replacers {
                line = replacer.apply(&line);
            }
            buffer.push_str(&line);
            buffer.push('\n');
        }

        Ok(())
    }
}
