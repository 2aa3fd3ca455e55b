use askama::Template;
use serde::Serialize;
use std::fmt;

use super::naming::lower_first;
use super::schema::FieldDef;
use crate::changeset::TableSchema;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;

/// The seven artifacts generated per table, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArtifactKind {
    Entity,
    TransferObject,
    ServiceInterface,
    ServiceImplementation,
    ResourceHandler,
    RepositoryAbstraction,
    Mapper,
}

impl ArtifactKind {
    /// Every kind, in emission order
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::Entity,
        ArtifactKind::TransferObject,
        ArtifactKind::ServiceInterface,
        ArtifactKind::ServiceImplementation,
        ArtifactKind::ResourceHandler,
        ArtifactKind::RepositoryAbstraction,
        ArtifactKind::Mapper,
    ];

    /// Sub-namespace under the base package, `/`-separated
    #[must_use]
    pub fn layer(self) -> &'static str {
        match self {
            ArtifactKind::Entity => "domain",
            ArtifactKind::TransferObject => "service/dto",
            ArtifactKind::ServiceInterface => "service",
            ArtifactKind::ServiceImplementation => "service/impl",
            ArtifactKind::ResourceHandler => "web/rest",
            ArtifactKind::RepositoryAbstraction => "repository",
            ArtifactKind::Mapper => "mapper",
        }
    }

    /// Appended to the entity name to form the type name
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Entity => "",
            ArtifactKind::TransferObject => "DTO",
            ArtifactKind::ServiceInterface => "Service",
            ArtifactKind::ServiceImplementation => "ServiceImpl",
            ArtifactKind::ResourceHandler => "Resource",
            ArtifactKind::RepositoryAbstraction => "Repository",
            ArtifactKind::Mapper => "Mapper",
        }
    }

    /// Human-readable label used in logs and errors
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Entity => "entity",
            ArtifactKind::TransferObject => "transfer object",
            ArtifactKind::ServiceInterface => "service interface",
            ArtifactKind::ServiceImplementation => "service implementation",
            ArtifactKind::ResourceHandler => "resource handler",
            ArtifactKind::RepositoryAbstraction => "repository",
            ArtifactKind::Mapper => "mapper",
        }
    }

    /// Type name for `entity_name` (e.g. `UserProfileServiceImpl`)
    #[must_use]
    pub fn type_name(self, entity_name: &str) -> String {
        format!("{entity_name}{}", self.suffix())
    }

    /// Fully-qualified package of this kind under `base_package`
    #[must_use]
    pub fn package(self, base_package: &str) -> String {
        format!("{base_package}.{}", self.layer().replace('/', "."))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A generated type as other artifacts refer to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Simple name (e.g. `UserProfileDTO`)
    pub name: String,
    /// Package it lives in (e.g. `com.example.service.dto`)
    pub package: String,
    /// `package.name`, as written in imports
    pub qualified: String,
}

impl TypeRef {
    fn new(kind: ArtifactKind, entity_name: &str, base_package: &str) -> Self {
        let name = kind.type_name(entity_name);
        let package = kind.package(base_package);
        TypeRef {
            qualified: format!("{package}.{name}"),
            name,
            package,
        }
    }
}

/// Client-visible identity failures the generated resource raises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityCheck {
    /// Create received a body that already carries an id
    AlreadyIdentified,
    /// Update received a body without an id
    MissingIdentity,
    /// Path id and body id differ
    IdentityMismatch,
    /// No stored entity has the path id
    IdentityNotFound,
}

impl IdentityCheck {
    /// Checks guarding the create operation, in evaluation order
    pub const CREATE: [IdentityCheck; 1] = [IdentityCheck::AlreadyIdentified];
    /// Checks guarding update and partial update, in evaluation order
    pub const UPDATE: [IdentityCheck; 3] = [
        IdentityCheck::MissingIdentity,
        IdentityCheck::IdentityMismatch,
        IdentityCheck::IdentityNotFound,
    ];

    /// Error key sent to the client
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            IdentityCheck::AlreadyIdentified => "idexists",
            IdentityCheck::MissingIdentity => "idnull",
            IdentityCheck::IdentityMismatch => "idinvalid",
            IdentityCheck::IdentityNotFound => "idnotfound",
        }
    }
}

/// One identity check rendered into Java
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckView {
    /// Java boolean expression that is true when the request must be rejected
    pub condition: String,
    pub message: String,
    pub key: &'static str,
}

impl CheckView {
    fn new(check: IdentityCheck, ctx_var: &str, dto_var: &str, repository_var: &str) -> Self {
        let (condition, message) = match check {
            IdentityCheck::AlreadyIdentified => (
                format!("{dto_var}.getId() != null"),
                format!("A new {ctx_var} cannot already have an ID"),
            ),
            IdentityCheck::MissingIdentity => {
                (format!("{dto_var}.getId() == null"), "Invalid id".to_string())
            }
            IdentityCheck::IdentityMismatch => (
                format!("!Objects.equals(id, {dto_var}.getId())"),
                "Invalid id".to_string(),
            ),
            IdentityCheck::IdentityNotFound => (
                format!("!{repository_var}.existsById(id)"),
                "Entity not found".to_string(),
            ),
        };
        CheckView {
            condition,
            message,
            key: check.key(),
        }
    }
}

/// Every identifier the templates print, derived once per run
///
/// Templates only interpolate these values, so all seven artifacts agree on
/// naming by construction.
#[derive(Debug, Clone)]
pub struct ArtifactContext {
    /// Namespace every artifact lives under
    pub base_package: String,
    /// Persisted table name, as declared
    pub table_name: String,
    pub entity: TypeRef,
    pub dto: TypeRef,
    pub service: TypeRef,
    pub service_impl: TypeRef,
    pub resource: TypeRef,
    pub repository: TypeRef,
    pub mapper: TypeRef,
    /// lowerCamel entity name (e.g. `userProfile`), also the resource's `ENTITY_NAME`
    pub var: String,
    pub dto_var: String,
    pub service_var: String,
    pub repository_var: String,
    pub mapper_var: String,
    /// Base route of the resource (e.g. `/api/userProfile`)
    pub api_path: String,
    pub fields: Vec<FieldDef>,
    pub create_checks: Vec<CheckView>,
    pub update_checks: Vec<CheckView>,
}

impl ArtifactContext {
    pub fn new(schema: &TableSchema, config: &GeneratorConfig) -> Self {
        let entity_name = schema.entity_name();
        let base_package = config.base_package.as_str();
        let type_ref = |kind| TypeRef::new(kind, entity_name, base_package);

        let var = lower_first(entity_name);
        let dto_var = format!("{var}DTO");
        let repository_var = format!("{var}Repository");
        let checks = |list: &[IdentityCheck]| -> Vec<CheckView> {
            list.iter()
                .map(|c| CheckView::new(*c, &var, &dto_var, &repository_var))
                .collect()
        };
        let create_checks = checks(&IdentityCheck::CREATE);
        let update_checks = checks(&IdentityCheck::UPDATE);

        ArtifactContext {
            base_package: base_package.to_string(),
            table_name: schema.raw_table_name().to_string(),
            entity: type_ref(ArtifactKind::Entity),
            dto: type_ref(ArtifactKind::TransferObject),
            service: type_ref(ArtifactKind::ServiceInterface),
            service_impl: type_ref(ArtifactKind::ServiceImplementation),
            resource: type_ref(ArtifactKind::ResourceHandler),
            repository: type_ref(ArtifactKind::RepositoryAbstraction),
            mapper: type_ref(ArtifactKind::Mapper),
            service_var: format!("{var}Service"),
            mapper_var: format!("{var}Mapper"),
            api_path: format!("/api/{var}"),
            fields: schema.columns().iter().map(FieldDef::from_column).collect(),
            create_checks,
            update_checks,
            var,
            dto_var,
            repository_var,
        }
    }

    /// Type generated for `kind`
    #[must_use]
    pub fn type_ref(&self, kind: ArtifactKind) -> &TypeRef {
        match kind {
            ArtifactKind::Entity => &self.entity,
            ArtifactKind::TransferObject => &self.dto,
            ArtifactKind::ServiceInterface => &self.service,
            ArtifactKind::ServiceImplementation => &self.service_impl,
            ArtifactKind::ResourceHandler => &self.resource,
            ArtifactKind::RepositoryAbstraction => &self.repository,
            ArtifactKind::Mapper => &self.mapper,
        }
    }
}

/// JPA entity
#[derive(Template)]
#[template(path = "entity.java.txt", escape = "none")]
pub struct EntityTemplate<'a> {
    pub ctx: &'a ArtifactContext,
}

/// Transfer object
#[derive(Template)]
#[template(path = "dto.java.txt", escape = "none")]
pub struct DtoTemplate<'a> {
    pub ctx: &'a ArtifactContext,
}

/// Service interface
#[derive(Template)]
#[template(path = "service.java.txt", escape = "none")]
pub struct ServiceTemplate<'a> {
    pub ctx: &'a ArtifactContext,
}

/// Service implementation delegating to repository and mapper
#[derive(Template)]
#[template(path = "service_impl.java.txt", escape = "none")]
pub struct ServiceImplTemplate<'a> {
    pub ctx: &'a ArtifactContext,
}

/// REST resource
#[derive(Template)]
#[template(path = "resource.java.txt", escape = "none")]
pub struct ResourceTemplate<'a> {
    pub ctx: &'a ArtifactContext,
}

/// Spring Data repository
#[derive(Template)]
#[template(path = "repository.java.txt", escape = "none")]
pub struct RepositoryTemplate<'a> {
    pub ctx: &'a ArtifactContext,
}

/// MapStruct mapper
#[derive(Template)]
#[template(path = "mapper.java.txt", escape = "none")]
pub struct MapperTemplate<'a> {
    pub ctx: &'a ArtifactContext,
}

/// Render the source text of one artifact
///
/// # Errors
///
/// Returns [`GeneratorError::Render`] if the template fails to render.
pub fn render_artifact(
    kind: ArtifactKind,
    ctx: &ArtifactContext,
) -> Result<String, GeneratorError> {
    let rendered = match kind {
        ArtifactKind::Entity => EntityTemplate { ctx }.render(),
        ArtifactKind::TransferObject => DtoTemplate { ctx }.render(),
        ArtifactKind::ServiceInterface => ServiceTemplate { ctx }.render(),
        ArtifactKind::ServiceImplementation => ServiceImplTemplate { ctx }.render(),
        ArtifactKind::ResourceHandler => ResourceTemplate { ctx }.render(),
        ArtifactKind::RepositoryAbstraction => RepositoryTemplate { ctx }.render(),
        ArtifactKind::Mapper => MapperTemplate { ctx }.render(),
    };
    rendered.map_err(|source| GeneratorError::Render {
        artifact: kind.label(),
        source,
    })
}
