//! Helpers for dotted class names (`package.SimpleName`).

use crate::entity_type::EntityType;

/// Package part of a class name, empty for classes in the root package.
#[must_use]
pub fn package(class_name: &str) -> &str {
    class_name.rsplit_once('.').map_or("", |(pkg, _)| pkg)
}

/// Simple (unqualified) part of a class name.
#[must_use]
pub fn simple_name(class_name: &str) -> &str {
    class_name.rsplit_once('.').map_or(class_name, |(_, name)| name)
}

/// Relocate a class into the generated-entity package, keeping its simple name.
#[must_use]
pub fn entity_name(class_name: &str, generated_package: &str) -> String {
    join(generated_package, simple_name(class_name))
}

/// Join a package and a simple name.
#[must_use]
pub fn join(package: &str, simple_name: &str) -> String {
    if package.is_empty() {
        simple_name.to_string()
    } else {
        format!("{package}.{simple_name}")
    }
}

/// Strip a history or trash suffix, if any.
#[must_use]
pub fn trim_variant_suffix(name: &str) -> &str {
    name.strip_suffix(EntityType::HISTORY_SUFFIX)
        .or_else(|| name.strip_suffix(EntityType::TRASH_SUFFIX))
        .unwrap_or(name)
}

/// The history or trash suffix carried by a name, empty when there is none.
#[must_use]
pub fn variant_suffix(name: &str) -> &'static str {
    EntityType::for_class_name(name).class_suffix()
}
