use crate::generator::{
    generate, load_strategy, GenerationReport, GeneratorOptions, DEFAULT_FILE_PREFIX,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Generate column metadata for Go models declaring `TableName() string`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "modelgen", version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for models; generated files are written here
    #[arg(long, default_value = "./")]
    pub path: PathBuf,

    /// Prefix of generated file names; existing matching .go files are deleted
    #[arg(long, alias = "filePrefix", default_value = DEFAULT_FILE_PREFIX)]
    pub file_prefix: String,
}

impl Cli {
    /// Pipeline options for these arguments
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            dir: self.path.clone(),
            file_prefix: self.file_prefix.clone(),
        }
    }
}

/// Run one generation for already parsed arguments
///
/// # Errors
///
/// Configuration and generation failures, with the scanned directory as
/// context.
pub fn run(cli: &Cli) -> Result<GenerationReport> {
    let options = cli.options();
    let strategy = load_strategy(&options.dir)
        .with_context(|| format!("loading configuration from {}", options.dir.display()))?;
    let report = generate(&options, &strategy)
        .with_context(|| format!("generating models in {}", options.dir.display()))?;

    for path in &report.removed {
        println!("🧹 Removed {}", path.display());
    }
    for path in &report.files {
        println!("✅ Wrote {}", path.display());
    }
    if report.files.is_empty() {
        println!("ℹ️  No models found in {}", options.dir.display());
    }
    Ok(report)
}

/// Parse process arguments and run
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run(&cli).map(|_| ())
}
