//! # modelgen
//!
//! **modelgen** scans a directory of Go sources for model structs and generates
//! storage metadata for them: the column name of every field and the model's
//! primary key, rendered through templates into size-bounded Go files.
//!
//! ## Overview
//!
//! A struct type is a *model* when the same file declares
//!
//! ```go
//! func (T) TableName() string   // or func (*T) TableName() string
//! ```
//!
//! For every model, each field's column is resolved from its struct tag
//! (`gorm:"column:...;primaryKey"`, then `json:"..."`) or, failing that, from
//! the snake-cased field name. One field becomes the primary key: the first
//! one flagged in its `gorm` tag, otherwise the first whose column is `id`.
//!
//! ## Architecture
//!
//! - **[`source`]** - directory discovery, stale output cleanup, Go parsing
//!   (tree-sitter) and struct tag lookup
//! - **[`model`]** - model classification, field resolution and
//!   primary-key selection
//! - **[`generator`]** - generation strategies, templates (minijinja) and
//!   the size-bounded file emitter
//! - **[`cli`]** - the `modelgen` command line
//! - **[`logging`]** - tracing subscriber setup for the binary
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(modelgen)
//!     participant Gen as generator::generate
//!     participant Src as source::discover_sources
//!     participant Model as model
//!     participant FS as File System
//!
//!     CLI->>Gen: generate(options, strategy)
//!     Gen->>Gen: compile header/content templates
//!     Gen->>Src: discover_sources(dir, prefix)
//!     Src->>FS: delete <prefix>*.go
//!     Src-->>Gen: Vec<SourceUnit>
//!     Gen->>Model: collect_model_decls (seeds package)
//!     Gen->>Model: build_model per declaration
//!     Gen->>FS: write <prefix>0.go, <prefix>1.go, ...
//!     Gen-->>CLI: GenerationReport
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! modelgen --path ./internal/models
//! ```
//!
//! Given
//!
//! ```go
//! type User struct {
//!     UID  int64  `gorm:"column:uid;primaryKey"`
//!     Name string `json:"display_name"`
//! }
//!
//! func (*User) TableName() string { return "users" }
//! ```
//!
//! the default strategy writes `auto_generate_0.go` containing
//! `UserColumns = []string{"uid", "display_name"}` plus `Columns()` and
//! `PrimaryKey()` methods on `*User`.
//!
//! ## Customising Output
//!
//! A `modelgen.toml` next to the sources replaces templates, the header
//! context key or the file size bound; see [`generator`].

pub mod cli;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;
pub mod source;

pub use error::{GenError, Result};
pub use generator::{
    generate, DefaultStrategy, GenerationReport, GenerationStrategy, GeneratorOptions,
    TemplateStrategy,
};
pub use model::{FieldDescriptor, ModelDescriptor};
