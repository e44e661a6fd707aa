// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the flat CLI surface for the safekeeper generator

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "safekeeper")]
#[command(about = "Generates source files from templates by substituting ENV_ placeholder tokens")]
#[command(version)]
pub struct Args {
    #[arg(
        long,
        required = true,
        value_delimiter = ',',
        help = "Comma-delimited list of keys to be replaced by their respective environment variable value"
    )]
    pub keys: Vec<String>,

    #[arg(short, long, help = "Output file name; defaults to the input path")]
    pub output: Option<PathBuf>,

    #[arg(help = "Template source path (exactly one file)")]
    pub paths: Vec<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
