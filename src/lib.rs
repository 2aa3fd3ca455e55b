//! # crudforge
//!
//! **crudforge** turns a Liquibase `createTable` changeset into a complete Spring Boot CRUD
//! layer: entity, DTO, service interface and implementation, REST resource, repository and
//! mapper, all named consistently from one table definition.
//!
//! ## Architecture
//!
//! - **[`changeset`]** - reading the changeset and extracting an immutable [`TableSchema`]
//! - **[`generator`]** - naming rules, type mapping, Askama templates and file emission
//! - **[`config`]** - base package / base path resolution from flags and `crudforge.toml`
//! - **[`cli`]** - the `crudforge` command-line interface
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`error`]** - the [`GeneratorError`] every pipeline stage reports
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(crudforge)
//!     participant Load as changeset::load_schema
//!     participant Tpl as generator::templates
//!     participant Emit as generator::write_artifacts
//!     participant FS as File System
//!
//!     User->>CLI: crudforge generate --schema user_profile.xml
//!     CLI->>Load: load_schema(source)
//!     Load->>Load: Parse XML, first createTable,<br/>drop identity column
//!     Load-->>CLI: TableSchema
//!     CLI->>Tpl: render_artifact(kind, ctx) × 7
//!     Tpl-->>CLI: Vec<ArtifactSpec>
//!     CLI->>Emit: write_artifacts(artifacts, Staged)
//!     Emit->>FS: stage, then rename into place
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! crudforge generate --schema user_profile.xml \
//!     --base-package com.example --base-path src/main/java
//! ```
//!
//! produces, under `src/main/java/com/example/`:
//!
//! ```text
//! domain/UserProfile.java
//! service/dto/UserProfileDTO.java
//! service/UserProfileService.java
//! service/impl/UserProfileServiceImpl.java
//! web/rest/UserProfileResource.java
//! repository/UserProfileRepository.java
//! mapper/UserProfileMapper.java
//! ```

pub mod changeset;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

pub use changeset::{load_schema, parse_changeset, SchemaSource, TableSchema};
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::{generate_project, GenerateOptions};
