use super::context::GenerationContext;
use super::emit::{Emitter, OutputLayout};
use super::strategy::GenerationStrategy;
use super::templates::TemplateSet;
use crate::error::Result;
use crate::model::{build_model, collect_model_decls, ModelDescriptor};
use crate::source::discover_sources;
use std::path::PathBuf;
use tracing::info;

/// Prefix of generated file names unless configured otherwise
pub const DEFAULT_FILE_PREFIX: &str = "auto_generate_";

/// Where to scan and how to name generated files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Directory scanned for models; generated files are written here too
    pub dir: PathBuf,
    /// Generated file name prefix; matching `.go` files are deleted first
    pub file_prefix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./"),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

/// What a run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of source units parsed
    pub units: usize,
    /// Emitted model names, in emission order
    pub models: Vec<String>,
    /// Files written, in index order
    pub files: Vec<PathBuf>,
    /// Stale generated files deleted before generation
    pub removed: Vec<PathBuf>,
}

/// Run the whole pipeline
///
/// 1. compile the strategy's templates
/// 2. discover units, deleting stale generated files
/// 3. classify units, seeding the generation context
/// 4. build every model
/// 5. emit size-bounded files
///
/// A template error aborts before anything on disk changes.
///
/// # Errors
///
/// Any [`crate::GenError`]; nothing is retried.
pub fn generate<S: GenerationStrategy + ?Sized>(
    options: &GeneratorOptions,
    strategy: &S,
) -> Result<GenerationReport> {
    let templates = TemplateSet::compile(strategy)?;
    let discovery = discover_sources(&options.dir, &options.file_prefix)?;

    let ctx = GenerationContext::new(strategy.package_key());
    let decls = collect_model_decls(&discovery.units, &ctx);
    let models: Vec<ModelDescriptor> = decls.iter().map(build_model).collect();

    let layout = OutputLayout::new(&options.dir, &options.file_prefix);
    let mut emitter = Emitter::new(strategy, templates, &ctx, layout);
    for model in &models {
        emitter.push(model)?;
    }
    let files = emitter.finish()?;

    info!(
        dir = %options.dir.display(),
        units = discovery.units.len(),
        models = models.len(),
        files = files.len(),
        removed = discovery.removed.len(),
        "generation finished"
    );
    Ok(GenerationReport {
        units: discovery.units.len(),
        models: models.into_iter().map(|m| m.name).collect(),
        files,
        removed: discovery.removed,
    })
}
