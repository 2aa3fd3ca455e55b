//! # Generator Module
//!
//! The generator turns one [`TableSchema`](crate::changeset::TableSchema) into
//! the seven source files of a Spring Boot CRUD layer.
//!
//! ## Overview
//!
//! For a table `user_profile` under base package `com.example` it produces:
//!
//! - **Entity** - `domain/UserProfile.java`, JPA entity with `@Column` names
//! - **Transfer Object** - `service/dto/UserProfileDTO.java`
//! - **Service Interface** - `service/UserProfileService.java`
//! - **Service Implementation** - `service/impl/UserProfileServiceImpl.java`
//! - **Resource Handler** - `web/rest/UserProfileResource.java`, REST routes under `/api/userProfile`
//! - **Repository** - `repository/UserProfileRepository.java`
//! - **Mapper** - `mapper/UserProfileMapper.java`, MapStruct entity/DTO conversion
//!
//! ## Architecture
//!
//! ```text
//! Changeset → Extractor → Naming + Type Mapping → Template Rendering → File Emitter
//! ```
//!
//! 1. **Naming** ([`snake_to_camel`], [`entity_name`]) - every casing rule in one place
//! 2. **Type Mapping** ([`map_storage_type`]) - storage type → [`SemanticType`]
//! 3. **Template Rendering** ([`render_artifact`]) - one Askama template per
//!    [`ArtifactKind`], all fed from a single [`ArtifactContext`]
//! 4. **Emission** ([`write_artifacts`]) - staged or direct writes
//!
//! Because every template reads the same precomputed context, the artifacts
//! cannot drift apart on type names, packages or field lists.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudforge::changeset::SchemaSource;
//! use crudforge::config::GeneratorConfig;
//! use crudforge::generator::{generate_project, GenerateOptions};
//!
//! let config = GeneratorConfig::new("com.example", "src/main/java")?;
//! let source = SchemaSource::File("changelog/user_profile.xml".into());
//! let report = generate_project(&source, &config, &GenerateOptions::default())?;
//! for artifact in &report.artifacts {
//!     println!("{}", artifact.relative_path.display());
//! }
//! ```
//!
//! ## Templates
//!
//! Templates live in the crate's `templates/` directory:
//!
//! - `entity.java.txt`, `dto.java.txt`
//! - `service.java.txt`, `service_impl.java.txt`
//! - `resource.java.txt`, `repository.java.txt`, `mapper.java.txt`

mod naming;
mod project;
mod schema;
mod templates;
#[cfg(test)]
mod tests;

pub use naming::*;
pub use project::*;
pub use schema::*;
pub use templates::*;
