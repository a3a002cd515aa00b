//! Table, join-table and column naming.
//!
//! Derived names are part of the on-disk schema and must stay stable across
//! releases.

use crate::config::{DEFAULT_MODULE, MappingConfig};
use dynmeta_schema::{class_name, entity_type::EntityType, node::Entity};

/// Upper-case a name and replace dashes and spaces with underscores.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.replace(['-', ' '], "_").to_uppercase()
}

/// `{base}_{suffix}`, normalized; a blank suffix leaves the base alone.
#[must_use]
pub fn suffixed_table_name(base: &str, suffix: &str) -> String {
    if suffix.trim().is_empty() {
        normalize(base)
    } else {
        normalize(&format!("{base}_{suffix}"))
    }
}

/// Element column pointing at the related class, e.g. `TEAM_ID`.
#[must_use]
pub fn element_column_name(related_class: &str) -> String {
    let base = class_name::trim_variant_suffix(related_class);

    format!("{}_ID", class_name::simple_name(base)).to_uppercase()
}

/// Join column pointing back at the owning class, e.g. `PERSON_ID`.
#[must_use]
pub fn join_column_name(owning_class: &str) -> String {
    format!("{}_ID", class_name::simple_name(owning_class)).to_uppercase()
}

///
/// NamingPolicy
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamingPolicy {
    default_module: String,
}

impl NamingPolicy {
    #[must_use]
    pub fn new(default_module: impl Into<String>) -> Self {
        Self {
            default_module: default_module.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &MappingConfig) -> Self {
        Self::new(config.default_module.clone())
    }

    fn module<'a>(&'a self, module: &'a str) -> &'a str {
        if module.trim().is_empty() {
            &self.default_module
        } else {
            module
        }
    }

    // {module}_{namespace}_ with the namespace part only when present
    fn prefix(&self, module: &str, namespace: &str) -> String {
        let mut prefix = format!("{}_", self.module(module));
        if !namespace.trim().is_empty() {
            prefix.push_str(namespace);
            prefix.push('_');
        }

        prefix
    }

    /// Table of a class.
    ///
    /// Derived names are `{MODULE}_{NAMESPACE}_{SIMPLE_NAME}`. An explicit
    /// table is used verbatim, with `__{VARIANT}` appended for non-standard
    /// variants.
    #[must_use]
    pub fn table_name(
        &self,
        class_name: &str,
        module: &str,
        namespace: &str,
        explicit_table: Option<&str>,
        variant: Option<EntityType>,
    ) -> String {
        match explicit_table.filter(|t| !t.trim().is_empty()) {
            Some(table) => variant.map_or_else(|| table.to_string(), |v| v.table_name(table)),
            None => normalize(&format!(
                "{}{}",
                self.prefix(module, namespace),
                class_name::simple_name(class_name)
            )),
        }
    }

    /// Table holding a given variant of an entity.
    #[must_use]
    pub fn entity_table_name(&self, entity: &Entity, variant: EntityType) -> String {
        let explicit = entity.explicit_table_name();
        let table = self.table_name(
            &entity.class_name,
            &entity.module,
            &entity.namespace,
            explicit,
            Some(variant),
        );

        if explicit.is_some() || variant.is_standard() {
            table
        } else {
            suffixed_table_name(&table, &format!("_{variant}"))
        }
    }

    /// Join table of a many-to-many relation.
    ///
    /// The inverse name keeps its variant suffix at the very end, so the
    /// standard, history and trash join tables of a pair never collide.
    #[must_use]
    pub fn join_table_name(
        &self,
        module: &str,
        namespace: &str,
        owning_field: &str,
        inverse_field_with_suffix: &str,
    ) -> String {
        normalize(&format!(
            "{}Join_{}_{}{}",
            self.prefix(module, namespace),
            class_name::trim_variant_suffix(inverse_field_with_suffix),
            owning_field,
            class_name::variant_suffix(inverse_field_with_suffix),
        ))
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE)
    }
}
