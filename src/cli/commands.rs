// ABOUTME: Command implementations for the safekeeper CLI
// ABOUTME: Wires parsed arguments into a substitution engine run

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use super::config::Config;
use crate::engine::{EngineConfig, SubstitutionEngine};

/// Generate an output file from its template.
///
/// The engine receives its configuration as an explicit value; argument
/// parsing stays out of the substitution logic entirely.
pub fn generate(
    keys: Vec<String>,
    output: Option<PathBuf>,
    paths: Vec<PathBuf>,
    _config: &Config,
) -> Result<()> {
    debug!("Generating with {} keys", keys.len());

    let engine = SubstitutionEngine::new(EngineConfig { keys, output });
    let written = engine.generate(&paths)?;

    debug!("Wrote {}", written.display());
    Ok(())
}
