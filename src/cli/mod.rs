//! # CLI Module
//!
//! Command-line interface of the `modelgen` binary.
//!
//! ```bash
//! modelgen --path ./models --file-prefix auto_generate_
//! ```
//!
//! Options:
//! - `--path <DIR>` - directory scanned for models and receiving output (default: `./`)
//! - `--file-prefix <PREFIX>` - generated file name prefix (default: `auto_generate_`,
//!   also accepted as `--filePrefix`)
//!
//! A `modelgen.toml` in `--path` customises templates and the file size bound.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use modelgen::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let report = run(&cli)?;
//! ```

mod commands;


pub use commands::{run, run_cli, Cli};
