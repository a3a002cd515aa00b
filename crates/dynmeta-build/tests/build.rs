use dynmeta_build::{
    BuildError, Error,
    config::DEFAULT_VENDOR,
    prelude::*,
};
use dynmeta_schema::keys::{fields, metadata, settings};

fn person() -> Entity {
    Entity::new("org.example.hr.Person")
        .with_module("Hr")
        .with_field(Field::new("id", Type::scalar("long")))
        .with_field(Field::new("name", Type::text()).required().with_lookup("byName"))
        .with_field(
            Field::new("department", Type::relationship(RelationKind::ManyToOne))
                .with_metadata(metadata::RELATED_CLASS, "org.example.hr.Department"),
        )
        .with_field(Field::new(fields::CREATOR, Type::text()))
        .with_field(Field::new(fields::MODIFICATION_DATE, Type::scalar("datetime")))
}

fn visit() -> Entity {
    Entity::new("org.example.clinic.Visit")
        .with_module("Clinic")
        .with_namespace("front-desk")
        .with_field(Field::new("id", Type::scalar("long")))
        .with_field(
            Field::new("notes", Type::text())
                .with_setting(FieldSetting::new(settings::STRING_MAX_LENGTH, "5000").with_default("255"))
                .with_setting(FieldSetting::new(settings::STRING_TEXT_AREA, "true")),
        )
        .with_field(
            Field::new("tags", Type::combobox())
                .with_setting(FieldSetting::new(settings::ALLOW_USER_SUPPLIED, "true"))
                .with_setting(FieldSetting::new(settings::ALLOW_MULTIPLE_SELECTIONS, "true")),
        )
        .with_field(
            Field::new("status", Type::combobox())
                .with_setting(FieldSetting::new(settings::ALLOW_MULTIPLE_SELECTIONS, "false")),
        )
        .with_field(
            Field::new("attributes", Type::map())
                .with_metadata(metadata::MAP_KEY_TYPE, "text")
                .with_metadata(metadata::MAP_VALUE_TYPE, "text"),
        )
        .with_field(
            Field::new("scores", Type::map())
                .with_metadata(metadata::MAP_KEY_TYPE, "text")
                .with_metadata(metadata::MAP_VALUE_TYPE, "integer"),
        )
        .with_field(Field::new("opensAt", Type::time()))
        .with_field(
            Field::new("room", Type::text())
                .with_metadata(metadata::DATABASE_COLUMN_NAME, "ROOM_NO")
                .with_setting(FieldSetting::new(settings::STRING_MAX_LENGTH, "16").with_default("255")),
        )
}

fn build_standard(catalog: &EntityCatalog, entity: &Entity) -> MetadataDocument {
    let builder = EntityMetadataBuilder::new(catalog);
    let mut doc = MetadataDocument::new();
    builder
        .add_entity_metadata(&mut doc, entity, &ClassDeclaration::for_entity(entity))
        .expect("entity builds");

    doc
}

fn generated_class<'a>(doc: &'a MetadataDocument, simple_name: &str) -> &'a ClassMetadata {
    doc.class(&format!("dynmeta.entity.{simple_name}"))
        .expect("class is in the generated package")
}

#[test]
fn person_maps_to_module_table_with_identity() {
    let entity = person();
    let catalog = EntityCatalog::new().with(entity.clone());
    let doc = build_standard(&catalog, &entity);
    let class = generated_class(&doc, "Person");

    assert_eq!(class.table.as_deref(), Some("HR_PERSON"));
    assert!(class.detachable);
    assert_eq!(class.identity_type, Some(IdentityType::Application));
    assert_eq!(
        class.persistence_modifier,
        Some(ClassPersistenceModifier::PersistenceCapable)
    );
    assert_eq!(
        class.inheritance.as_ref().map(|i| i.custom_strategy.as_str()),
        Some("complete-table")
    );
    assert_eq!(
        class.origin,
        Some(ClassOrigin {
            entity: Some("org.example.hr.Person".into()),
            variant: EntityType::Standard,
        })
    );

    let id = class.field("id").expect("identity mapped");
    assert!(id.primary_key);
    assert_eq!(id.value_strategy, Some(ValueStrategy::Increment));
    assert_eq!(id.indexed, Some(true));
    assert_eq!(id.null_value, None);

    // every field maps to exactly one node
    assert_eq!(class.fields.len(), entity.fields.len());
}

#[test]
fn many_to_one_relationship_is_not_dependent_on_live_class() {
    let entity = person();
    let catalog = EntityCatalog::new().with(entity.clone());
    let doc = build_standard(&catalog, &entity);
    let department = generated_class(&doc, "Person")
        .field("department")
        .expect("relationship mapped");

    assert_eq!(department.dependent, Some(false));
    assert_eq!(department.persistence_modifier, Some(PersistenceModifier::Persistent));
    assert_eq!(department.default_fetch_group, Some(true));
    assert_eq!(department.null_value, Some(NullValue::None));
    assert!(department.collection.is_none());
}

#[test]
fn audit_fields_use_value_generators() {
    let entity = person();
    let catalog = EntityCatalog::new().with(entity.clone());
    let doc = build_standard(&catalog, &entity);
    let class = generated_class(&doc, "Person");

    let creator = class.field(fields::CREATOR).expect("creator mapped");
    assert_eq!(creator.persistence_modifier, Some(PersistenceModifier::Persistent));
    assert_eq!(creator.default_fetch_group, Some(true));
    assert_eq!(
        creator.extension(DEFAULT_VENDOR, "custom-value-strategy"),
        Some("ovg.creator")
    );

    let modified = class.field(fields::MODIFICATION_DATE).expect("date mapped");
    assert_eq!(
        modified.extension(DEFAULT_VENDOR, "custom-value-strategy"),
        Some("ovg.modificationDate")
    );
}

#[test]
fn lookup_and_required_fields() {
    let entity = person();
    let catalog = EntityCatalog::new().with(entity.clone());
    let doc = build_standard(&catalog, &entity);
    let name = generated_class(&doc, "Person")
        .field("name")
        .expect("name mapped");

    assert_eq!(name.indexed, Some(true));
    assert_eq!(name.null_value, Some(NullValue::Exception));
    assert!(name.column.is_none());
}

#[test]
fn visit_columns_and_containers() {
    let entity = visit();
    let catalog = EntityCatalog::new().with(entity.clone());
    let doc = build_standard(&catalog, &entity);
    let class = generated_class(&doc, "Visit");
    assert_eq!(class.table.as_deref(), Some("CLINIC_FRONT_DESK_VISIT"));

    let notes = class.field("notes").expect("notes mapped");
    let column = notes.column.as_ref().expect("notes column");
    assert_eq!(column.sql_type.as_deref(), Some("CLOB"));
    assert_eq!(column.length, None);
    assert_eq!(notes.indexed, Some(false));

    let room = class.field("room").expect("room mapped");
    let column = room.column.as_ref().expect("room column");
    assert_eq!(column.name.as_deref(), Some("ROOM_NO"));
    assert_eq!(column.length, Some(16));

    let tags = class.field("tags").expect("tags mapped");
    assert_eq!(tags.table.as_deref(), Some("CLINIC_FRONT_DESK_VISIT_TAGS"));
    assert_eq!(
        tags.join.as_ref().and_then(|j| j.column.as_deref()),
        Some("tags_OID")
    );
    assert_eq!(tags.default_fetch_group, Some(true));

    let status = class.field("status").expect("status mapped");
    assert_eq!(status.table, None);
    assert_eq!(status.join, None);
    assert_eq!(status.default_fetch_group, None);

    let opens_at = class.field("opensAt").expect("time mapped");
    assert_eq!(opens_at.default_fetch_group, Some(true));
    assert_eq!(
        opens_at.extension(DEFAULT_VENDOR, "type-converter-name"),
        Some("dn.time-string")
    );
}

#[test]
fn text_maps_get_side_tables_and_others_are_serialized() {
    let entity = visit();
    let catalog = EntityCatalog::new().with(entity.clone());
    let doc = build_standard(&catalog, &entity);
    let class = generated_class(&doc, "Visit");

    let attributes = class.field("attributes").expect("text map mapped");
    assert_eq!(attributes.serialized, Some(false));
    assert_eq!(
        attributes.table.as_deref(),
        Some("CLINIC_FRONT_DESK_VISIT_ATTRIBUTES")
    );
    assert!(attributes.join.is_some());
    let map = attributes.map.as_ref().expect("map node");
    assert_eq!(map.key_type.as_deref(), Some("text"));
    assert_eq!(map.value_type.as_deref(), Some("text"));
    assert_eq!(attributes.default_fetch_group, Some(true));

    let scores = class.field("scores").expect("mixed map mapped");
    assert_eq!(scores.serialized, Some(true));
    assert_eq!(scores.table, None);
    assert_eq!(scores.join, None);
    let map = scores.map.as_ref().expect("map node");
    assert_eq!(map.serialized_key, Some(true));
    assert_eq!(map.serialized_value, Some(true));
}

#[test]
fn repeated_builds_reuse_the_class_node() {
    let entity = person();
    let catalog = EntityCatalog::new().with(entity.clone());
    let builder = EntityMetadataBuilder::new(&catalog);
    let decl = ClassDeclaration::for_entity(&entity);
    let mut doc = MetadataDocument::new();

    builder.add_entity_metadata(&mut doc, &entity, &decl).unwrap();
    let first = doc.clone();
    builder.add_entity_metadata(&mut doc, &entity, &decl).unwrap();

    assert_eq!(doc, first);
    assert_eq!(doc.classes().count(), 1);
}

#[test]
fn variants_share_the_package() {
    let entity = person().developer_defined();
    let catalog = EntityCatalog::new().with(entity.clone());
    let builder = EntityMetadataBuilder::new(&catalog);
    let decl = ClassDeclaration::for_entity(&entity);
    let mut doc = MetadataDocument::new();

    builder.add_entity_metadata(&mut doc, &entity, &decl).unwrap();
    for variant in [EntityType::History, EntityType::Trash] {
        let class = GeneratedClass::variant_of(&entity, variant);
        builder
            .add_helper_class_metadata(&mut doc, &class, Some(&entity), variant, &decl)
            .unwrap();
    }

    assert_eq!(doc.packages.len(), 1);
    assert_eq!(
        doc.classes().map(|(_, c)| c.table.clone().unwrap_or_default()).collect::<Vec<_>>(),
        ["HR_PERSON", "HR_PERSON__HISTORY", "HR_PERSON__TRASH"]
    );

    let trash = doc.class("org.example.hr.Person__TRASH").expect("trash class");
    assert_eq!(trash.field("department").and_then(|f| f.dependent), Some(true));
    // lookups only index the live class
    assert_eq!(trash.field("name").and_then(|f| f.indexed), None);
}

#[test]
fn explicit_table_names_carry_variant_marker() {
    let entity = person().with_table_name("people");
    let catalog = EntityCatalog::new().with(entity.clone());
    let builder = EntityMetadataBuilder::new(&catalog);
    let decl = ClassDeclaration::for_entity(&entity);
    let mut doc = MetadataDocument::new();

    builder.add_entity_metadata(&mut doc, &entity, &decl).unwrap();
    let class = GeneratedClass::variant_of(&entity, EntityType::History);
    builder
        .add_helper_class_metadata(&mut doc, &class, Some(&entity), EntityType::History, &decl)
        .unwrap();

    assert_eq!(
        generated_class(&doc, "Person").table.as_deref(),
        Some("people")
    );
    assert_eq!(
        doc.class("org.example.hr.Person__HISTORY")
            .and_then(|c| c.table.as_deref()),
        Some("people__HISTORY")
    );
}

#[test]
fn subclasses_skip_inherited_fields_but_index_inherited_lookups() {
    let parent = Entity::new("org.example.hr.Person")
        .with_module("Hr")
        .with_field(Field::new("id", Type::scalar("long")))
        .with_field(Field::new("code", Type::text()));
    let child = Entity::new("org.example.hr.Manager")
        .with_module("Hr")
        .with_super_class("org.example.hr.Person")
        .with_field(Field::new("id", Type::scalar("long")))
        .with_field(Field::new("code", Type::text()).with_lookup("byCode"))
        .with_field(Field::new("level", Type::scalar("integer")));
    let catalog = EntityCatalog::new().with(parent).with(child.clone());

    let doc = build_standard(&catalog, &child);
    let class = generated_class(&doc, "Manager");

    assert!(class.field("id").is_none(), "only base classes carry identity");
    assert!(class.field("code").is_none());
    assert!(class.field("level").is_some());

    let inherited = class.field("Person.code").expect("inherited lookup node");
    assert_eq!(inherited.indexed, Some(true));
    assert_eq!(inherited.null_value, Some(NullValue::None));
}

#[test]
fn framework_subclasses_skip_audit_fields_and_identity() {
    let entity = person().framework_subclass();
    let catalog = EntityCatalog::new().with(entity.clone());
    let doc = build_standard(&catalog, &entity);
    let class = generated_class(&doc, "Person");

    assert!(class.field("id").is_none());
    assert!(class.field(fields::CREATOR).is_none());
    assert!(class.field(fields::MODIFICATION_DATE).is_none());
    assert!(class.field("name").is_some());
}

#[test]
fn framework_subclass_lookups_index_the_base_class_field() {
    let entity = Entity::new("org.example.hr.Ticket")
        .with_module("Hr")
        .framework_subclass()
        .with_field(Field::new(fields::OWNER, Type::text()).with_lookup("byOwner"))
        .with_field(Field::new("subject", Type::text()));
    let catalog = EntityCatalog::new().with(entity.clone());

    let doc = build_standard(&catalog, &entity);
    let class = generated_class(&doc, "Ticket");

    assert!(class.field(fields::OWNER).is_none());
    let owner = class.field("MdsEntity.owner").expect("inherited lookup node");
    assert_eq!(owner.indexed, Some(true));
    assert_eq!(owner.null_value, Some(NullValue::None));
    assert!(class.fields.iter().all(|f| !f.name.starts_with('.')));

    let config = MappingConfig::from_toml_str("framework_base_class = \"app.domain.Audited\"")
        .unwrap();
    let builder = EntityMetadataBuilder::with_config(&catalog, config);
    let mut doc = MetadataDocument::new();
    builder
        .add_entity_metadata(&mut doc, &entity, &ClassDeclaration::for_entity(&entity))
        .unwrap();

    assert!(
        generated_class(&doc, "Ticket")
            .field("Audited.owner")
            .is_some_and(|f| f.indexed == Some(true))
    );
}

#[test]
fn enum_list_combobox_gets_a_side_table() {
    let entity = Entity::new("org.example.hr.Person")
        .with_module("Hr")
        .with_field(
            Field::new("colors", Type::combobox())
                .with_setting(FieldSetting::new(settings::ALLOW_USER_SUPPLIED, "false"))
                .with_setting(FieldSetting::new(settings::ALLOW_MULTIPLE_SELECTIONS, "true")),
        );
    let catalog = EntityCatalog::new().with(entity.clone());

    let doc = build_standard(&catalog, &entity);
    let colors = generated_class(&doc, "Person")
        .field("colors")
        .expect("combobox mapped");

    assert_eq!(colors.table.as_deref(), Some("HR_PERSON_COLORS"));
    assert_eq!(
        colors.join.as_ref().and_then(|j| j.column.as_deref()),
        Some("colors_OID")
    );
    assert_eq!(colors.default_fetch_group, Some(true));
}

#[test]
fn missing_superclass_entity_is_an_error() {
    let orphan = Entity::new("org.example.hr.Orphan")
        .with_super_class("org.example.hr.Missing")
        .with_field(Field::new("code", Type::text()));
    let catalog = EntityCatalog::new().with(orphan.clone());
    let builder = EntityMetadataBuilder::new(&catalog);
    let mut doc = MetadataDocument::new();

    let err = builder
        .add_entity_metadata(&mut doc, &orphan, &ClassDeclaration::for_entity(&orphan))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::BuildError(BuildError::UnknownSuperclass { .. })
    ));
}

#[test]
fn helper_classes_detect_identity_from_definition() {
    let catalog = EntityCatalog::new();
    let builder = EntityMetadataBuilder::new(&catalog);
    let mut doc = MetadataDocument::new();

    let root = GeneratedClass::new("org.example.schema.Snapshot").with_module("Core");
    let root_decl = ClassDeclaration::new("org.example.schema.Snapshot")
        .with_field(FieldDeclaration::new("id"));
    builder
        .add_base_metadata(&mut doc, &root, EntityType::Schema, &root_decl)
        .unwrap();

    let child = GeneratedClass::new("org.example.schema.Delta");
    let child_decl = ClassDeclaration::new("org.example.schema.Delta")
        .with_superclass("org.example.schema.Snapshot")
        .with_inherited(FieldDeclaration::new("id"));
    builder
        .add_base_metadata(&mut doc, &child, EntityType::Schema, &child_decl)
        .unwrap();

    let snapshot = doc.class("org.example.schema.Snapshot").expect("snapshot");
    assert_eq!(snapshot.table.as_deref(), Some("CORE_SNAPSHOT"));
    assert!(snapshot.field("id").is_some_and(|f| f.primary_key));
    assert_eq!(
        snapshot.origin,
        Some(ClassOrigin {
            entity: None,
            variant: EntityType::Schema,
        })
    );

    let delta = doc.class("org.example.schema.Delta").expect("delta");
    assert_eq!(delta.table.as_deref(), Some("MDS_DELTA"));
    assert!(delta.fields.is_empty());
}

#[test]
fn config_changes_module_and_package() {
    let config = MappingConfig::from_toml_str(
        r#"
        default_module = "CORE"
        generated_entity_package = "app.generated"
        vendor = "orm"
        "#,
    )
    .unwrap();
    let entity = Entity::new("org.example.Note")
        .with_field(Field::new("createdAt", Type::time()));
    let catalog = EntityCatalog::new().with(entity.clone());
    let builder = EntityMetadataBuilder::with_config(&catalog, config);
    let mut doc = MetadataDocument::new();

    builder
        .add_entity_metadata(&mut doc, &entity, &ClassDeclaration::for_entity(&entity))
        .unwrap();

    let class = doc.class("app.generated.Note").expect("relocated class");
    assert_eq!(class.table.as_deref(), Some("CORE_NOTE"));
    assert_eq!(
        class
            .field("createdAt")
            .and_then(|f| f.extension("orm", "type-converter-name")),
        Some("dn.time-string")
    );
}
