//! # Model Module
//!
//! Turns parsed Go units into normalized table metadata.
//!
//! ```text
//! SourceUnit → classifier → ModelDecl → builder → ModelDescriptor
//!                                         └─ resolver (per field)
//! ```
//!
//! - **classifier** finds struct types declaring `func (T|*T) TableName() string`
//! - **builder** walks the struct's fields, renders their types and picks one
//!   primary key
//! - **resolver** maps a field name and its struct tag to a column name and a
//!   primary-key flag (`gorm` tag first, then `json`, then snake case)

mod builder;
mod classifier;
mod descriptor;
mod resolver;

pub use builder::{build_model, select_primary_key, INFERRED_PRIMARY_KEY_COLUMN};
pub use classifier::{classify_unit, collect_model_decls, ModelDecl, MARKER_METHOD};
pub use descriptor::{FieldDescriptor, ModelDescriptor};
pub use resolver::{resolve_column, snake_case, ColumnSpec, ORM_TAG_KEY, SERIALIZATION_TAG_KEY};
