//! Read-only entity model consumed by the persistence metadata builder.
//!
//! Everything in this crate describes *what the user defined*: entities, their
//! fields and types, the generated variants of an entity, and the collaborator
//! seams (entity store, class definitions, enhanced-class registry) the builder
//! reads from. Nothing here mutates or derives mapping output.

pub mod class_def;
pub mod class_name;
pub mod entity_type;
pub mod holder;
pub mod keys;
pub mod node;
pub mod registry;
pub mod store;
pub mod types;

/// Name of the identity field carried by every base entity.
pub const ID_FIELD_NAME: &str = "id";

/// Audit fields whose values are generated by the runtime.
pub const AUDIT_FIELD_NAMES: [&str; 5] = [
    keys::fields::CREATOR,
    keys::fields::OWNER,
    keys::fields::CREATION_DATE,
    keys::fields::MODIFIED_BY,
    keys::fields::MODIFICATION_DATE,
];

/// Returns true when the field name is one of the runtime-generated audit fields.
#[must_use]
pub fn is_audit_field(name: &str) -> bool {
    AUDIT_FIELD_NAMES.contains(&name)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ID_FIELD_NAME,
        class_def::{
            ClassDeclaration, ClassDefinition, ElementAnnotation, FieldDeclaration, JoinAnnotation,
            PersistentAnnotation,
        },
        entity_type::EntityType,
        holder::{ComboboxHolder, RelationshipHolder},
        node::{Entity, Field, FieldMetadataEntry, FieldSetting, GeneratedClass},
        registry::EnhancedClassRegistry,
        store::{EntityCatalog, EntityStore},
        types::{RelationKind, Type, TypeKind},
    };
    pub use serde::{Deserialize, Serialize};
}
