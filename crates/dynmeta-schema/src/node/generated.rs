use crate::{class_name, entity_type::EntityType, prelude::*};

///
/// GeneratedClass
/// A class produced for an entity variant or an internal helper, identified
/// by its own name but sharing the module and namespace of its origin.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneratedClass {
    pub class_name: String,

    #[serde(default)]
    pub module: String,

    #[serde(default)]
    pub namespace: String,
}

impl GeneratedClass {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            module: String::new(),
            namespace: String::new(),
        }
    }

    /// Generated class for a history or trash copy of an entity.
    #[must_use]
    pub fn variant_of(entity: &Entity, variant: EntityType) -> Self {
        Self {
            class_name: format!("{}{}", entity.class_name, variant.class_suffix()),
            module: entity.module.clone(),
            namespace: entity.namespace.clone(),
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
    pub fn package(&self) -> &str {
        class_name::package(&self.class_name)
    }

    #[must_use]
    pub fn simple_name(&self) -> &str {
        class_name::simple_name(&self.class_name)
    }
}
