// ABOUTME: Main library module for the safekeeper source templating tool
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod engine;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use engine::{EngineConfig, SubstitutionEngine};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
