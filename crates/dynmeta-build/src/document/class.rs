use crate::document::FieldMetadata;
use dynmeta_schema::entity_type::EntityType;
use serde::{Deserialize, Serialize};
use std::ops::Not;

///
/// IdentityType
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityType {
    Application,
    Datastore,
    Nondurable,
}

///
/// ClassPersistenceModifier
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassPersistenceModifier {
    PersistenceCapable,
    PersistenceAware,
    NonPersistent,
}

///
/// InheritanceMetadata
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InheritanceMetadata {
    pub custom_strategy: String,
}

///
/// ClassOrigin
///
/// Entity and variant a class node was built for. Classes built without an
/// entity (plain helpers) carry only the variant.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClassOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    pub variant: EntityType,
}

///
/// ClassMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClassMetadata {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub detachable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<IdentityType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence_modifier: Option<ClassPersistenceModifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance: Option<InheritanceMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<ClassOrigin>,

    #[serde(default)]
    pub fields: Vec<FieldMetadata>,
}

impl ClassMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Start a fresh node for the field, discarding one left by an earlier pass.
    pub fn new_field(&mut self, name: &str) -> &mut FieldMetadata {
        let pos = match self.fields.iter().position(|f| f.name == name) {
            Some(pos) => {
                self.fields[pos] = FieldMetadata::new(name);
                pos
            }
            None => {
                self.fields.push(FieldMetadata::new(name));
                self.fields.len() - 1
            }
        };

        &mut self.fields[pos]
    }

    /// Existing node for the field, or a new empty one.
    pub fn get_or_create_field(&mut self, name: &str) -> &mut FieldMetadata {
        let pos = match self.fields.iter().position(|f| f.name == name) {
            Some(pos) => pos,
            None => {
                self.fields.push(FieldMetadata::new(name));
                self.fields.len() - 1
            }
        };

        &mut self.fields[pos]
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldMetadata> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}
