//! # Generator Module
//!
//! Renders model metadata into Go files through a pluggable
//! [`GenerationStrategy`].
//!
//! ## Architecture
//!
//! ```text
//! Templates → Discovery → Classifier → Model Builder → Emitter → auto_generate_N.go
//!  (compile)  (cleanup)   (ctx seed)
//! ```
//!
//! 1. **Templates** - both strategy templates are compiled first, so a broken
//!    template leaves the directory untouched
//! 2. **Discovery** - `.go` files are walked; files carrying the generated
//!    prefix are deleted, the rest parsed
//! 3. **Classifier** - qualifying types are collected; the first unit's
//!    package seeds the [`GenerationContext`]
//! 4. **Model Builder** - one [`crate::model::ModelDescriptor`] per type
//! 5. **Emitter** - header + model blocks are buffered and flushed to a new
//!    file whenever the buffer reaches `max_file_size`
//!
//! ## Strategies
//!
//! - [`DefaultStrategy`] - built-in templates from `templates/`
//! - [`TemplateStrategy`] - owned templates, usually from `modelgen.toml`
//!   via [`load_strategy`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modelgen::generator::{generate, load_strategy, GeneratorOptions};
//!
//! # fn main() -> Result<(), modelgen::GenError> {
//! let options = GeneratorOptions::default();
//! let strategy = load_strategy(&options.dir)?;
//! let report = generate(&options, &strategy)?;
//! println!("{} files", report.files.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod emit;
mod generate;
mod strategy;
mod templates;
#[cfg(test)]
mod tests;

pub use config::{load_strategy, load_strategy_config, StrategyConfig, CONFIG_FILE_NAME};
pub use context::GenerationContext;
pub use emit::{Emitter, OutputLayout};
pub use generate::{generate, GenerationReport, GeneratorOptions, DEFAULT_FILE_PREFIX};
pub use strategy::{
    DefaultStrategy, GenerationStrategy, TemplateStrategy, DEFAULT_CONTENT_TEMPLATE,
    DEFAULT_HEADER_TEMPLATE, DEFAULT_MAX_FILE_SIZE, DEFAULT_PACKAGE_KEY,
};
pub use templates::TemplateSet;
