//! Reflective view of a generated class definition.
//!
//! The builder never inspects generated classes directly. It asks a
//! [`ClassDefinition`] for the declared fields and the persistence
//! annotations they carry.

use crate::prelude::*;

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

///
/// PersistentAnnotation
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PersistentAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fetch_group: Option<String>,
}

///
/// JoinAnnotation
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JoinAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

///
/// ElementAnnotation
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ElementAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

///
/// FieldDeclaration
/// A field as declared on a class, with its persistence annotations.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDeclaration {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent: Option<PersistentAnnotation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join: Option<JoinAnnotation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementAnnotation>,
}

impl FieldDeclaration {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_persistent(mut self, persistent: PersistentAnnotation) -> Self {
        self.persistent = Some(persistent);
        self
    }

    #[must_use]
    pub fn with_join(mut self, column: Option<&str>) -> Self {
        self.join = Some(JoinAnnotation {
            column: column.map(str::to_string),
        });
        self
    }

    #[must_use]
    pub fn with_element(mut self, column: Option<&str>) -> Self {
        self.element = Some(ElementAnnotation {
            column: column.map(str::to_string),
        });
        self
    }

    #[must_use]
    pub fn persistent_table(&self) -> Option<&str> {
        non_blank(self.persistent.as_ref().and_then(|p| p.table.as_ref()))
    }

    #[must_use]
    pub fn mapped_by(&self) -> Option<&str> {
        non_blank(self.persistent.as_ref().and_then(|p| p.mapped_by.as_ref()))
    }

    /// Explicit fetch-group declaration, if any.
    #[must_use]
    pub fn default_fetch_group(&self) -> Option<&str> {
        non_blank(
            self.persistent
                .as_ref()
                .and_then(|p| p.default_fetch_group.as_ref()),
        )
    }

    #[must_use]
    pub const fn has_join(&self) -> bool {
        self.join.is_some()
    }

    #[must_use]
    pub fn join_column(&self) -> Option<&str> {
        non_blank(self.join.as_ref().and_then(|j| j.column.as_ref()))
    }

    #[must_use]
    pub fn element_column(&self) -> Option<&str> {
        non_blank(self.element.as_ref().and_then(|e| e.column.as_ref()))
    }
}

///
/// ClassDefinition
///

pub trait ClassDefinition {
    fn class_name(&self) -> &str;

    /// Direct superclass, `None` for root classes.
    fn superclass_name(&self) -> Option<&str>;

    /// A field declared on this class itself.
    fn declared_field(&self, name: &str) -> Option<&FieldDeclaration>;

    /// A field declared on this class or inherited from a superclass.
    fn field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.declared_field(name)
    }
}

///
/// ClassDeclaration
/// In-memory class definition.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClassDeclaration {
    pub class_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inherited: Vec<FieldDeclaration>,
}

impl ClassDeclaration {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_inherited(mut self, field: FieldDeclaration) -> Self {
        self.inherited.push(field);
        self
    }

    /// Declaration with a bare field for every field of the entity.
    #[must_use]
    pub fn for_entity(entity: &Entity) -> Self {
        let mut decl = Self::new(entity.class_name.clone());
        decl.superclass.clone_from(&entity.super_class);
        decl.fields = entity
            .fields
            .iter()
            .map(|f| FieldDeclaration::new(f.name.clone()))
            .collect();

        decl
    }

    /// Replace (or add) the declaration of a field.
    #[must_use]
    pub fn declare(mut self, field: FieldDeclaration) -> Self {
        self.fields.retain(|f| f.name != field.name);
        self.fields.push(field);
        self
    }
}

impl ClassDefinition for ClassDeclaration {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn superclass_name(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    fn declared_field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.declared_field(name)
            .or_else(|| self.inherited.iter().find(|f| f.name == name))
    }
}
