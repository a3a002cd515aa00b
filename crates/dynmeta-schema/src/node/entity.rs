use crate::{class_name, prelude::*};
use std::ops::Not;

///
/// Entity
///
/// Snapshot of a user-defined record type as held by the entity store.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Entity {
    pub class_name: String,

    #[serde(default)]
    pub module: String,

    #[serde(default)]
    pub namespace: String,

    /// Explicitly declared table name; blank means derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<String>,

    #[serde(default)]
    pub fields: Vec<Field>,

    /// No persistent superclass.
    #[serde(default = "default_base_entity")]
    pub base_entity: bool,

    /// Inherits the framework base type that already carries the audit fields.
    #[serde(default, skip_serializing_if = "Not::not")]
    pub subclass_of_framework_base: bool,

    /// Declared in module code; its class name is used verbatim instead of
    /// being relocated into the generated-entity package.
    #[serde(default, skip_serializing_if = "Not::not")]
    pub developer_defined: bool,
}

const fn default_base_entity() -> bool {
    true
}

impl Entity {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            module: String::new(),
            namespace: String::new(),
            table_name: None,
            super_class: None,
            fields: Vec::new(),
            base_entity: true,
            subclass_of_framework_base: false,
            developer_defined: false,
        }
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Declare a persistent superclass; the entity stops being a base entity.
    #[must_use]
    pub fn with_super_class(mut self, super_class: impl Into<String>) -> Self {
        self.super_class = Some(super_class.into());
        self.base_entity = false;
        self
    }

    #[must_use]
    pub const fn framework_subclass(mut self) -> Self {
        self.subclass_of_framework_base = true;
        self
    }

    #[must_use]
    pub const fn developer_defined(mut self) -> Self {
        self.developer_defined = true;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn simple_name(&self) -> &str {
        class_name::simple_name(&self.class_name)
    }

    /// Explicit table name, treating blank declarations as absent.
    #[must_use]
    pub fn explicit_table_name(&self) -> Option<&str> {
        self.table_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}
