mod column;
mod container;
mod relation;

use crate::{
    Error,
    classify::{FieldStrategy, classify},
    config::MappingConfig,
    document::{
        ClassMetadata, ClassOrigin, ClassPersistenceModifier, IdentityType, InheritanceMetadata,
        MetadataDocument, NullValue, ValueStrategy,
    },
    naming::NamingPolicy,
};
use dynmeta_schema::{
    ID_FIELD_NAME, class_name, is_audit_field,
    prelude::{ClassDefinition, Entity, EntityStore, EntityType, Field, GeneratedClass},
};
use thiserror::Error as ThisError;
use tracing::debug;

/// Inheritance strategy: every class maps all of its fields to its own table.
pub const INHERITANCE_STRATEGY: &str = "complete-table";

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("entity '{entity}' is not a base entity but its superclass '{super_class}' is not stored")]
    UnknownSuperclass { entity: String, super_class: String },

    /// Max lengths must be non-negative integers; negative values such as
    /// `-1` are rejected along with non-numeric ones.
    #[error("field '{field}' has an invalid max length '{value}'")]
    InvalidMaxLength { field: String, value: String },
}

///
/// Target
/// Everything one field mapping needs to know about the class being built.
///

struct Target<'a> {
    entity: &'a Entity,
    variant: EntityType,
    definition: &'a dyn ClassDefinition,
}

///
/// EntityMetadataBuilder
///
/// Adds the metadata of one class at a time to a document. Every operation
/// finds and reuses the package and class nodes it needs, so the live class
/// and its history, trash and helper classes can be built into the same
/// document in any order.
///

pub struct EntityMetadataBuilder<'a, S: EntityStore + ?Sized> {
    store: &'a S,
    config: MappingConfig,
    naming: NamingPolicy,
}

impl<'a, S: EntityStore + ?Sized> EntityMetadataBuilder<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, MappingConfig::default())
    }

    #[must_use]
    pub fn with_config(store: &'a S, config: MappingConfig) -> Self {
        let naming = NamingPolicy::from_config(&config);

        Self {
            store,
            config,
            naming,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &MappingConfig {
        &self.config
    }

    #[must_use]
    pub const fn naming(&self) -> &NamingPolicy {
        &self.naming
    }

    /// Add the metadata of the live (standard) class of an entity.
    pub fn add_entity_metadata(
        &self,
        doc: &mut MetadataDocument,
        entity: &Entity,
        definition: &dyn ClassDefinition,
    ) -> Result<(), Error> {
        let class_name = if entity.developer_defined {
            entity.class_name.clone()
        } else {
            class_name::entity_name(&entity.class_name, &self.config.generated_entity_package)
        };
        let table = self.naming.table_name(
            &entity.class_name,
            &entity.module,
            &entity.namespace,
            entity.explicit_table_name(),
            None,
        );

        debug!(class = %class_name, %table, "adding entity metadata");

        let cmd = doc
            .get_or_create_package(class_name::package(&class_name))
            .get_or_create_class(class_name::simple_name(&class_name));
        init_class(
            cmd,
            table,
            ClassOrigin {
                entity: Some(entity.class_name.clone()),
                variant: EntityType::Standard,
            },
        );

        if !entity.subclass_of_framework_base
            && entity.base_entity
            && entity.get_field(ID_FIELD_NAME).is_some()
        {
            add_id_field(cmd);
        }

        let target = Target {
            entity,
            variant: EntityType::Standard,
            definition,
        };

        self.add_fields(cmd, &target)
    }

    /// Add the metadata of a generated class: a history or trash copy of an
    /// entity, or a helper class when no entity is given.
    pub fn add_helper_class_metadata(
        &self,
        doc: &mut MetadataDocument,
        class: &GeneratedClass,
        entity: Option<&Entity>,
        variant: EntityType,
        definition: &dyn ClassDefinition,
    ) -> Result<(), Error> {
        let table = self.naming.table_name(
            &class.class_name,
            &class.module,
            &class.namespace,
            entity.and_then(Entity::explicit_table_name),
            Some(variant),
        );

        debug!(class = %class.class_name, %table, %variant, "adding helper class metadata");

        let cmd = doc
            .get_or_create_package(class.package())
            .get_or_create_class(class.simple_name());
        init_class(
            cmd,
            table,
            ClassOrigin {
                entity: entity.map(|e| e.class_name.clone()),
                variant,
            },
        );

        // generated classes are inspected directly: a root class declaring `id`
        if definition.field(ID_FIELD_NAME).is_some() && definition.superclass_name().is_none() {
            add_id_field(cmd);
        }

        match entity {
            Some(entity) => {
                let target = Target {
                    entity,
                    variant,
                    definition,
                };

                self.add_fields(cmd, &target)
            }
            None => Ok(()),
        }
    }

    /// Add the metadata of a helper class that is not backed by an entity.
    pub fn add_base_metadata(
        &self,
        doc: &mut MetadataDocument,
        class: &GeneratedClass,
        variant: EntityType,
        definition: &dyn ClassDefinition,
    ) -> Result<(), Error> {
        self.add_helper_class_metadata(doc, class, None, variant, definition)
    }

    fn add_fields(&self, cmd: &mut ClassMetadata, target: &Target<'_>) -> Result<(), Error> {
        let entity = target.entity;

        for field in &entity.fields {
            // identity metadata was added with the class
            if field.name == ID_FIELD_NAME {
                continue;
            }

            let mut mapped = None;
            if self.is_not_inherited(&field.name, entity)? {
                self.set_field_metadata(cmd, target, field)?;
                mapped = Some(field.name.clone());
            }

            // lookup fields are indexed so instances are retrieved faster
            if !field.lookups.is_empty() && target.variant.is_standard() {
                let name = mapped.get_or_insert_with(|| {
                    format!("{}.{}", self.declaring_class(entity), field.name)
                });
                cmd.get_or_create_field(name).indexed = Some(true);
            }

            if let Some(fmd) = mapped.as_deref().and_then(|name| cmd.field_mut(name)) {
                column::set_column_parameters(fmd, field)?;
                fmd.null_value = Some(if field.required {
                    NullValue::Exception
                } else {
                    NullValue::None
                });
            }
        }

        Ok(())
    }

    // Simple name of the superclass that carries an inherited field. Audit
    // fields of framework subclasses live on the framework base class.
    fn declaring_class<'e>(&'e self, entity: &'e Entity) -> &'e str {
        let super_class = match entity.super_class.as_deref() {
            Some(super_class) => super_class,
            None if entity.subclass_of_framework_base => &self.config.framework_base_class,
            None => "",
        };

        class_name::simple_name(super_class)
    }

    // A field is skipped when a superclass already carries its metadata.
    fn is_not_inherited(&self, field_name: &str, entity: &Entity) -> Result<bool, BuildError> {
        if entity.subclass_of_framework_base && is_audit_field(field_name) {
            return Ok(false);
        }
        if entity.base_entity {
            return Ok(true);
        }

        let super_class = entity.super_class.as_deref().unwrap_or_default();
        let parent = self.store.retrieve_by_class_name(super_class).ok_or_else(|| {
            BuildError::UnknownSuperclass {
                entity: entity.class_name.clone(),
                super_class: super_class.to_string(),
            }
        })?;

        Ok(parent.get_field(field_name).is_none())
    }

    fn set_field_metadata(
        &self,
        cmd: &mut ClassMetadata,
        target: &Target<'_>,
        field: &Field,
    ) -> Result<(), Error> {
        match classify(field) {
            FieldStrategy::AutoGenerated => {
                self.set_auto_generation_metadata(cmd, &field.name);
            }
            FieldStrategy::Combobox => {
                container::set_combobox_metadata(cmd, field, target.definition);
            }
            FieldStrategy::Relationship(_) => {
                self.set_relationship_metadata(cmd, target, field)?;
            }
            FieldStrategy::Map => {
                container::set_map_metadata(cmd, field, target.definition);
            }
            FieldStrategy::Temporal => {
                self.set_time_metadata(cmd, &field.name);
            }
            FieldStrategy::Identity | FieldStrategy::Plain => {
                cmd.new_field(&field.name);
            }
        }

        Ok(())
    }
}

fn init_class(cmd: &mut ClassMetadata, table: String, origin: ClassOrigin) {
    cmd.table = Some(table);
    cmd.detachable = true;
    cmd.identity_type = Some(IdentityType::Application);
    cmd.persistence_modifier = Some(ClassPersistenceModifier::PersistenceCapable);
    cmd.inheritance = Some(InheritanceMetadata {
        custom_strategy: INHERITANCE_STRATEGY.to_string(),
    });
    cmd.origin = Some(origin);
}

fn add_id_field(cmd: &mut ClassMetadata) {
    let fmd = cmd.new_field(ID_FIELD_NAME);
    fmd.value_strategy = Some(ValueStrategy::Increment);
    fmd.primary_key = true;
    fmd.indexed = Some(true);
}
