//! # CLI Module
//!
//! Command-line front end of the generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the seven CRUD source files for the table declared in a changeset:
//!
//! ```bash
//! crudforge generate --schema db/changelog/user_profile.xml \
//!     --base-package com.example --base-path src/main/java
//! ```
//!
//! Options:
//! - `--schema <FILE>` - Changeset to read (`-` or omitted: stdin)
//! - `--base-package <PKG>` / `--base-path <DIR>` - override the config file
//! - `--config <FILE>` - TOML config (default: `crudforge.toml` next to the schema)
//! - `--dry-run` - list target paths, write nothing
//! - `--direct` - write files one by one instead of staging them
//!
//! ### `inspect`
//!
//! Show what the extractor sees, as text or JSON:
//!
//! ```bash
//! crudforge inspect --schema user_profile.xml --format json
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use crudforge::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{render_inspect, resolve_generator_config, run_cli, Cli, Commands, InspectFormat};
