#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::changeset::{ColumnSpec, TableSchema};
use crate::config::GeneratorConfig;
use std::path::PathBuf;

fn user_profile() -> TableSchema {
    TableSchema::new(
        "user_profile",
        vec![
            ColumnSpec::new("id", "bigint"),
            ColumnSpec::new("first_name", "varchar(255)"),
            ColumnSpec::new("age", "int"),
            ColumnSpec::new("active", "boolean"),
        ],
    )
}

fn config() -> GeneratorConfig {
    GeneratorConfig::new("com.example", "out").unwrap()
}

fn render(kind: ArtifactKind) -> String {
    let ctx = ArtifactContext::new(&user_profile(), &config());
    render_artifact(kind, &ctx).unwrap()
}

/// Text between `start` and the next occurrence of `end`
fn section<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let from = text.find(start).expect("start marker");
    let to = from + text[from..].find(end).expect("end marker");
    &text[from..to]
}

#[test]
fn test_snake_to_camel() {
    assert_eq!(snake_to_camel("first_name"), "firstName");
    assert_eq!(snake_to_camel("user_profile"), "userProfile");
    assert_eq!(snake_to_camel("single"), "single");
    assert_eq!(snake_to_camel(""), "");
}

#[test]
fn test_snake_to_camel_edge_cases() {
    assert_eq!(snake_to_camel("_id"), "Id");
    assert_eq!(snake_to_camel("trailing_"), "trailing");
    assert_eq!(snake_to_camel("double__underscore"), "doubleUnderscore");
    assert_eq!(snake_to_camel("already_Upper"), "alreadyUpper");
}

#[test]
fn test_capitalize_and_lower_first() {
    assert_eq!(capitalize("userProfile"), "UserProfile");
    assert_eq!(capitalize("x"), "X");
    assert_eq!(capitalize(""), "");
    assert_eq!(lower_first("UserProfile"), "userProfile");
    assert_eq!(lower_first(""), "");
}

#[test]
fn test_camel_to_snake() {
    assert_eq!(camel_to_snake("firstName"), "first_name");
    assert_eq!(camel_to_snake("age"), "age");
    assert_eq!(camel_to_snake("userID"), "user_id");
    assert_eq!(camel_to_snake("HTTPServer"), "httpserver");
    assert_eq!(camel_to_snake(""), "");
}

#[test]
fn test_lowercase_snake_round_trips() {
    for name in ["first_name", "created_at_utc", "age", "order_item_id"] {
        assert_eq!(camel_to_snake(&snake_to_camel(name)), name);
    }
}

#[test]
fn test_entity_name() {
    assert_eq!(entity_name("user_profile"), "UserProfile");
    assert_eq!(entity_name("order_item"), "OrderItem");
    assert_eq!(entity_name("account"), "Account");
}

#[test]
fn test_clean_storage_type() {
    assert_eq!(clean_storage_type("varchar(255)"), "varchar");
    assert_eq!(clean_storage_type("decimal(10,2)"), "decimal");
    assert_eq!(clean_storage_type("bigint"), "bigint");
    assert_eq!(clean_storage_type(""), "");
}

#[test]
fn test_map_storage_type_table() {
    assert_eq!(map_storage_type("int"), SemanticType::Integer);
    assert_eq!(map_storage_type("long"), SemanticType::LongInteger);
    assert_eq!(map_storage_type("bigint"), SemanticType::LongInteger);
    assert_eq!(map_storage_type("boolean"), SemanticType::Boolean);
    assert_eq!(map_storage_type("double"), SemanticType::FloatingPoint);
    assert_eq!(map_storage_type("string"), SemanticType::Text);
}

#[test]
fn test_map_storage_type_fallback() {
    // varchar is not in the table, it only reaches text through the fallback
    assert_eq!(map_storage_type("varchar"), SemanticType::Text);
    assert_eq!(lookup_storage_type("varchar"), None);
    assert_eq!(map_storage_type("timestamp"), SemanticType::Text);
    assert_eq!(map_storage_type(""), SemanticType::Text);
}

#[test]
fn test_map_storage_type_is_case_sensitive() {
    assert_eq!(map_storage_type("INT"), SemanticType::Text);
    assert_eq!(map_storage_type("BigInt"), SemanticType::Text);
    assert_eq!(lookup_storage_type("Boolean"), None);
}

#[test]
fn test_semantic_type_names() {
    assert_eq!(SemanticType::LongInteger.to_string(), "long-integer");
    assert_eq!(SemanticType::FloatingPoint.java_type(), "Double");
    assert_eq!(
        serde_json::to_value(SemanticType::FloatingPoint).unwrap(),
        serde_json::json!("floating-point")
    );
}

#[test]
fn test_field_def_from_column() {
    let field = FieldDef::from_column(&ColumnSpec::new("first_name", "varchar(255)"));
    assert_eq!(field.name, "firstName");
    assert_eq!(field.accessor, "FirstName");
    assert_eq!(field.column_name, "first_name");
    assert_eq!(field.semantic_type, SemanticType::Text);
    assert_eq!(field.java_type, "String");
}

#[test]
fn test_artifact_paths() {
    let config = config();
    let expected = [
        (ArtifactKind::Entity, "out/com/example/domain/UserProfile.java"),
        (
            ArtifactKind::TransferObject,
            "out/com/example/service/dto/UserProfileDTO.java",
        ),
        (
            ArtifactKind::ServiceInterface,
            "out/com/example/service/UserProfileService.java",
        ),
        (
            ArtifactKind::ServiceImplementation,
            "out/com/example/service/impl/UserProfileServiceImpl.java",
        ),
        (
            ArtifactKind::ResourceHandler,
            "out/com/example/web/rest/UserProfileResource.java",
        ),
        (
            ArtifactKind::RepositoryAbstraction,
            "out/com/example/repository/UserProfileRepository.java",
        ),
        (
            ArtifactKind::Mapper,
            "out/com/example/mapper/UserProfileMapper.java",
        ),
    ];
    for (kind, path) in expected {
        assert_eq!(
            artifact_path(&config, kind, "UserProfile"),
            PathBuf::from(path),
            "{kind}"
        );
    }
}

#[test]
fn test_artifact_kind_packages() {
    assert_eq!(
        ArtifactKind::ServiceImplementation.package("com.example"),
        "com.example.service.impl"
    );
    assert_eq!(
        ArtifactKind::ResourceHandler.package("org.acme.app"),
        "org.acme.app.web.rest"
    );
    assert_eq!(ArtifactKind::Entity.type_name("OrderItem"), "OrderItem");
    assert_eq!(ArtifactKind::TransferObject.type_name("OrderItem"), "OrderItemDTO");
}

#[test]
fn test_generate_artifacts_order_and_count() {
    let artifacts = generate_artifacts(&user_profile(), &config()).unwrap();
    let kinds: Vec<_> = artifacts.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, ArtifactKind::ALL.to_vec());
}

#[test]
fn test_generate_artifacts_is_deterministic() {
    let first = generate_artifacts(&user_profile(), &config()).unwrap();
    let second = generate_artifacts(&user_profile(), &config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_artifacts_rejects_empty_entity_name() {
    let schema = TableSchema::new("_", vec![ColumnSpec::new("name", "string")]);
    let err = generate_artifacts(&schema, &config()).unwrap_err();
    assert_eq!(err.stage(), "parse");
}

#[test]
fn test_generate_artifacts_rejects_path_like_table_names() {
    for table in ["../escape", "/abs/x", "nested/entity"] {
        let schema = TableSchema::new(table, vec![ColumnSpec::new("name", "string")]);
        let err = generate_artifacts(&schema, &config()).unwrap_err();
        assert_eq!(err.stage(), "parse", "{table:?}");
    }
}

#[test]
fn test_generate_artifacts_rejects_duplicate_fields() {
    let schema = TableSchema::new(
        "t",
        vec![
            ColumnSpec::new("first_name", "string"),
            ColumnSpec::new("firstName", "string"),
        ],
    );
    let err = generate_artifacts(&schema, &config()).unwrap_err();
    assert!(err.to_string().contains("duplicates"), "{err}");
}

#[test]
fn test_artifacts_stay_under_base_path_with_parent_segments() {
    let config = GeneratorConfig::new("com.example", "../out").unwrap();
    let artifacts = generate_artifacts(&user_profile(), &config).unwrap();
    assert!(artifacts
        .iter()
        .all(|a| a.relative_path.starts_with("../out/com/example")));
}

#[test]
fn test_is_java_identifier() {
    for ok in ["a", "A1", "_x", "$", "first$name", "UserProfile"] {
        assert!(is_java_identifier(ok), "{ok:?}");
    }
    for bad in ["", "1a", "a-b", "a.b", "a/b", "..", "a b", "a\"b", "caf\u{e9}"] {
        assert!(!is_java_identifier(bad), "{bad:?}");
    }
}

#[test]
fn test_context_names() {
    let ctx = ArtifactContext::new(&user_profile(), &config());
    assert_eq!(ctx.entity.qualified, "com.example.domain.UserProfile");
    assert_eq!(ctx.dto.qualified, "com.example.service.dto.UserProfileDTO");
    assert_eq!(ctx.var, "userProfile");
    assert_eq!(ctx.dto_var, "userProfileDTO");
    assert_eq!(ctx.repository_var, "userProfileRepository");
    assert_eq!(ctx.api_path, "/api/userProfile");
    assert_eq!(ctx.type_ref(ArtifactKind::Mapper).name, "UserProfileMapper");
    let names: Vec<_> = ctx.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["firstName", "age", "active"]);
}

#[test]
fn test_entity_template() {
    let out = render(ArtifactKind::Entity);
    assert!(out.starts_with("package com.example.domain;"));
    assert!(out.contains("@Table(name = \"user_profile\")"));
    assert!(out.contains("public class UserProfile implements Serializable"));
    assert!(out.contains("@Column(name = \"first_name\")"));
    assert!(out.contains("private String firstName;"));
    assert!(out.contains("private Integer age;"));
    assert!(out.contains("private Boolean active;"));
    assert!(out.contains("public String getFirstName()"));
    assert!(out.contains("public void setAge(Integer age)"));
    assert!(out.contains("public Long getId()"));
    // identity is declared once, never as a mapped column
    assert_eq!(out.matches("private Long id;").count(), 1);
    assert!(!out.contains("@Column(name = \"id\")"));
}

#[test]
fn test_dto_template() {
    let out = render(ArtifactKind::TransferObject);
    assert!(out.starts_with("package com.example.service.dto;"));
    assert!(out.contains("public class UserProfileDTO implements Serializable"));
    assert!(out.contains("private String firstName;"));
    assert!(out.contains("public void setActive(Boolean active)"));
    assert!(!out.contains("@Column"));
}

#[test]
fn test_service_templates() {
    let service = render(ArtifactKind::ServiceInterface);
    assert!(service.contains("public interface UserProfileService"));
    assert!(service.contains("UserProfileDTO save(UserProfileDTO userProfileDTO);"));
    assert!(service.contains("Optional<UserProfileDTO> partialUpdate(UserProfileDTO userProfileDTO);"));
    assert!(service.contains("void delete(Long id);"));

    let service_impl = render(ArtifactKind::ServiceImplementation);
    assert!(service_impl.starts_with("package com.example.service.impl;"));
    assert!(service_impl.contains("implements UserProfileService"));
    assert!(service_impl.contains("import com.example.repository.UserProfileRepository;"));
    assert!(service_impl.contains("import com.example.mapper.UserProfileMapper;"));
}

#[test]
fn test_resource_template_routes() {
    let out = render(ArtifactKind::ResourceHandler);
    assert!(out.starts_with("package com.example.web.rest;"));
    assert!(out.contains("@RequestMapping(\"/api/userProfile\")"));
    assert!(out.contains("private static final String ENTITY_NAME = \"userProfile\";"));
    for method in [
        "createUserProfile(",
        "updateUserProfile(",
        "partialUpdateUserProfile(",
        "getAllUserProfiles(",
        "getUserProfile(",
        "deleteUserProfile(",
    ] {
        assert!(out.contains(method), "missing {method}");
    }
    assert!(out.contains("import com.example.web.rest.errors.BadRequestAlertException;"));
}

#[test]
fn test_resource_create_rejects_existing_id() {
    let out = render(ArtifactKind::ResourceHandler);
    let create = section(&out, "createUserProfile(", "@PutMapping");
    assert!(create.contains("if (userProfileDTO.getId() != null) {"));
    assert!(create.contains(
        "throw new BadRequestAlertException(\"A new userProfile cannot already have an ID\", ENTITY_NAME, \"idexists\");"
    ));
    assert!(!create.contains("idnull"));
}

#[test]
fn test_resource_update_identity_checks() {
    let out = render(ArtifactKind::ResourceHandler);
    let update = section(&out, "updateUserProfile(", "@PatchMapping");
    let idnull = update.find("\"idnull\"").expect("idnull check");
    let idinvalid = update.find("\"idinvalid\"").expect("idinvalid check");
    let idnotfound = update.find("\"idnotfound\"").expect("idnotfound check");
    assert!(idnull < idinvalid && idinvalid < idnotfound);
    assert!(update.contains("if (!Objects.equals(id, userProfileDTO.getId())) {"));
    assert!(update.contains("if (!userProfileRepository.existsById(id)) {"));

    let patch = section(&out, "partialUpdateUserProfile(", "@GetMapping");
    assert!(patch.contains("\"idnull\""));
    assert!(patch.contains("\"idinvalid\""));
    assert!(patch.contains("\"idnotfound\""));
}

#[test]
fn test_repository_template() {
    let out = render(ArtifactKind::RepositoryAbstraction);
    assert!(out.starts_with("package com.example.repository;"));
    assert!(out.contains("import com.example.domain.UserProfile;"));
    assert!(out.contains(
        "public interface UserProfileRepository extends JpaRepository<UserProfile, Long> {}"
    ));
}

#[test]
fn test_mapper_template() {
    let out = render(ArtifactKind::Mapper);
    assert!(out.starts_with("package com.example.mapper;"));
    assert!(out.contains("public interface UserProfileMapper"));
    assert!(out.contains("UserProfile toEntity(UserProfileDTO dto);"));
    assert!(out.contains("UserProfileDTO toDto(UserProfile entity);"));
    assert!(out.contains("List<UserProfileDTO> toDto(List<UserProfile> entityList);"));
    assert!(out.contains("void partialUpdate(@MappingTarget UserProfile entity, UserProfileDTO dto);"));
    assert!(out.contains("NullValuePropertyMappingStrategy.IGNORE"));
}

#[test]
fn test_artifacts_agree_on_names() {
    let schema = TableSchema::new(
        "order_item",
        vec![
            ColumnSpec::new("quantity", "int"),
            ColumnSpec::new("unit_price", "double"),
        ],
    );
    let config = GeneratorConfig::new("shop", "src").unwrap();
    let artifacts = generate_artifacts(&schema, &config).unwrap();
    for artifact in &artifacts {
        let type_name = artifact.kind.type_name("OrderItem");
        assert!(
            artifact.content.contains(&format!(" {type_name} ")),
            "{} does not declare {type_name}",
            artifact.kind
        );
        assert!(artifact
            .content
            .starts_with(&format!("package {};", artifact.kind.package("shop"))));
        assert!(!artifact.content.contains("UserProfile"));
    }
    let entity = &artifacts[0].content;
    assert!(entity.contains("private Double unitPrice;"));
    assert!(entity.contains("@Column(name = \"unit_price\")"));
    assert!(artifacts[4].content.contains("@RequestMapping(\"/api/orderItem\")"));
}

#[test]
fn test_order_item_fields_in_entity_and_dto() {
    let schema = TableSchema::new(
        "order_item",
        vec![
            ColumnSpec::new("quantity", "int"),
            ColumnSpec::new("note", "string"),
        ],
    );
    let artifacts = generate_artifacts(&schema, &config()).unwrap();
    for artifact in &artifacts[..2] {
        assert!(artifact.content.contains("private Integer quantity;"));
        assert!(artifact.content.contains("private String note;"));
    }
    let stems = ["OrderItem", "orderItem"];
    for artifact in &artifacts {
        assert!(
            stems.iter().any(|stem| artifact.content.contains(stem)),
            "{}",
            artifact.kind
        );
    }
}

#[test]
fn test_user_profile_scenario_paths_and_fields() {
    let schema = TableSchema::new(
        "user_profile",
        vec![
            ColumnSpec::new("id", "bigint"),
            ColumnSpec::new("first_name", "varchar(255)"),
            ColumnSpec::new("email", "varchar(255)"),
        ],
    );
    let artifacts = generate_artifacts(&schema, &config()).unwrap();
    let paths: Vec<_> = artifacts.iter().map(|a| a.relative_path.clone()).collect();
    let expected: Vec<_> = ArtifactKind::ALL
        .iter()
        .map(|&kind| artifact_path(&config(), kind, "UserProfile"))
        .collect();
    assert_eq!(paths, expected);
    for artifact in &artifacts[..2] {
        assert_eq!(artifact.content.matches("private String ").count(), 2);
        assert!(artifact.content.contains("private String firstName;"));
        assert!(artifact.content.contains("private String email;"));
    }
}

#[test]
fn test_table_without_columns() {
    let schema = TableSchema::new("audit", vec![ColumnSpec::new("ID", "bigint")]);
    assert!(schema.columns().is_empty());
    let artifacts = generate_artifacts(&schema, &config()).unwrap();
    assert_eq!(artifacts.len(), 7);
    assert!(artifacts[0].content.contains("private Long id;"));
    assert!(!artifacts[0].content.contains("@Column"));
}
