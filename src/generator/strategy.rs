use crate::model::ModelDescriptor;
use serde_json::{json, Value};

/// Built-in header template (`templates/header.go.j2`)
pub const DEFAULT_HEADER_TEMPLATE: &str = include_str!("../../templates/header.go.j2");
/// Built-in per-model template (`templates/content.go.j2`)
pub const DEFAULT_CONTENT_TEMPLATE: &str = include_str!("../../templates/content.go.j2");
/// Context key the built-in header reads the package name from
pub const DEFAULT_PACKAGE_KEY: &str = "package";
/// Flush threshold of the built-in strategy
pub const DEFAULT_MAX_FILE_SIZE: usize = 32 * 1024;

/// Templates, size bound and template contexts for one kind of generated code
///
/// The pipeline is generic over this trait; [`DefaultStrategy`] and
/// [`TemplateStrategy`] are the shipped implementations.
pub trait GenerationStrategy {
    /// Key under which the package name is exposed to the header template
    fn package_key(&self) -> &str;

    /// Header template source, rendered once at the top of every file
    fn header_template(&self) -> &str;

    /// Content template source, rendered once per model
    fn content_template(&self) -> &str;

    /// Byte threshold at which a file is flushed
    fn max_file_size(&self) -> usize;

    /// Content template context for one model
    ///
    /// Exposes `name`, `comments`, `fields` (each with `name`, `type`,
    /// `column`, `primary_key`, `comments`), `primary_key` (the flagged field
    /// or none) and `columns`.
    fn template_context(&self, model: &ModelDescriptor) -> Value {
        json!({
            "name": model.name,
            "comments": model.comments,
            "fields": model.fields,
            "primary_key": model.primary_key(),
            "columns": model.columns(),
        })
    }
}

/// Built-in strategy: column tables plus `Columns()` / `PrimaryKey()` methods
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl GenerationStrategy for DefaultStrategy {
    fn package_key(&self) -> &str {
        DEFAULT_PACKAGE_KEY
    }

    fn header_template(&self) -> &str {
        DEFAULT_HEADER_TEMPLATE
    }

    fn content_template(&self) -> &str {
        DEFAULT_CONTENT_TEMPLATE
    }

    fn max_file_size(&self) -> usize {
        DEFAULT_MAX_FILE_SIZE
    }
}

/// Strategy with owned template text, typically loaded from `modelgen.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStrategy {
    /// Header context key
    pub package_key: String,
    /// Header template source
    pub header_template: String,
    /// Content template source
    pub content_template: String,
    /// Flush threshold in bytes
    pub max_file_size: usize,
}

impl Default for TemplateStrategy {
    fn default() -> Self {
        Self {
            package_key: DEFAULT_PACKAGE_KEY.to_string(),
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
            content_template: DEFAULT_CONTENT_TEMPLATE.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl GenerationStrategy for TemplateStrategy {
    fn package_key(&self) -> &str {
        &self.package_key
    }

    fn header_template(&self) -> &str {
        &self.header_template
    }

    fn content_template(&self) -> &str {
        &self.content_template
    }

    fn max_file_size(&self) -> usize {
        self.max_file_size
    }
}
