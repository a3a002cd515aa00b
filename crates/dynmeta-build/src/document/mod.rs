//! Persistence metadata document handed to the ORM runtime.
//!
//! The tree is Package → Class → Field. Node and attribute names are the
//! external contract and serialize in kebab-case.

mod class;
mod field;

pub use class::{ClassMetadata, ClassOrigin, ClassPersistenceModifier, IdentityType, InheritanceMetadata};
pub use field::{
    CollectionMetadata, ColumnMetadata, ElementMetadata, ExtensionMetadata, FieldMetadata,
    JoinMetadata, MapMetadata, NullValue, PersistenceModifier, ValueStrategy,
};

use dynmeta_schema::class_name;
use serde::{Deserialize, Serialize};

///
/// MetadataDocument
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MetadataDocument {
    #[serde(default)]
    pub packages: Vec<PackageMetadata>,
}

impl MetadataDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a package by exact name, appending a new one when absent.
    pub fn get_or_create_package(&mut self, name: &str) -> &mut PackageMetadata {
        let pos = match self.packages.iter().position(|p| p.name == name) {
            Some(pos) => pos,
            None => {
                self.packages.push(PackageMetadata::new(name));
                self.packages.len() - 1
            }
        };

        &mut self.packages[pos]
    }

    #[must_use]
    pub fn package(&self, name: &str) -> Option<&PackageMetadata> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Look up a class by its fully qualified name.
    #[must_use]
    pub fn class(&self, class_name: &str) -> Option<&ClassMetadata> {
        self.package(class_name::package(class_name))?
            .class(class_name::simple_name(class_name))
    }

    /// All classes with their package name, in document order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassMetadata)> {
        self.packages
            .iter()
            .flat_map(|p| p.classes.iter().map(move |c| (p.name.as_str(), c)))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

///
/// PackageMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageMetadata {
    pub name: String,

    #[serde(default)]
    pub classes: Vec<ClassMetadata>,
}

impl PackageMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
        }
    }

    /// Find a class by exact simple name, appending a new one when absent.
    pub fn get_or_create_class(&mut self, simple_name: &str) -> &mut ClassMetadata {
        let pos = match self.classes.iter().position(|c| c.name == simple_name) {
            Some(pos) => pos,
            None => {
                self.classes.push(ClassMetadata::new(simple_name));
                self.classes.len() - 1
            }
        };

        &mut self.classes[pos]
    }

    #[must_use]
    pub fn class(&self, simple_name: &str) -> Option<&ClassMetadata> {
        self.classes.iter().find(|c| c.name == simple_name)
    }
}
