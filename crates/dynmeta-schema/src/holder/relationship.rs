use crate::{
    keys::{metadata, settings},
    prelude::*,
};
use thiserror::Error as ThisError;

///
/// HolderError
///

#[derive(Debug, ThisError)]
pub enum HolderError {
    #[error("field '{field}' is not a relationship")]
    NotRelationship { field: String },

    #[error("relationship field '{field}' does not declare a related class")]
    MissingRelatedClass { field: String },
}

///
/// RelationshipHolder
///
/// Relationship view of a field. For history and trash builds the related
/// class and related field carry the variant suffix, so the shadow copy
/// points at the matching shadow of the other side.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelationshipHolder {
    kind: RelationKind,
    related_class: String,
    related_field: Option<String>,
    owning_side: bool,
    cascade_persist: bool,
    cascade_update: bool,
    cascade_delete: bool,
}

impl RelationshipHolder {
    pub fn new(field: &Field, variant: EntityType) -> Result<Self, HolderError> {
        let kind = field
            .ty
            .relation_kind()
            .ok_or_else(|| HolderError::NotRelationship {
                field: field.name.clone(),
            })?;

        let related_class = field
            .metadata_value(metadata::RELATED_CLASS)
            .ok_or_else(|| HolderError::MissingRelatedClass {
                field: field.name.clone(),
            })?;

        let suffix = if variant.is_shadow() {
            variant.class_suffix()
        } else {
            ""
        };
        let related_field = field.metadata_value(metadata::RELATED_FIELD);

        // unidirectional relations have no other side to own the join
        let owning_side = related_field.is_none()
            || field
                .metadata_value(metadata::OWNING_SIDE)
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

        let cascade = |name: &str, default: bool| {
            field
                .get_setting(name)
                .map_or(default, FieldSetting::is_true)
        };

        Ok(Self {
            kind,
            related_class: format!("{related_class}{suffix}"),
            related_field: related_field.map(|name| format!("{name}{suffix}")),
            owning_side,
            cascade_persist: cascade(settings::CASCADE_PERSIST, true),
            cascade_update: cascade(settings::CASCADE_UPDATE, true),
            cascade_delete: cascade(settings::CASCADE_DELETE, false),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> RelationKind {
        self.kind
    }

    /// One-to-one, including the many-to-one side of a one-to-many.
    #[must_use]
    pub const fn is_one_to_one(&self) -> bool {
        self.kind.is_single_valued()
    }

    #[must_use]
    pub const fn is_many_to_many(&self) -> bool {
        matches!(self.kind, RelationKind::ManyToMany)
    }

    #[must_use]
    pub fn related_class(&self) -> &str {
        &self.related_class
    }

    #[must_use]
    pub fn related_field(&self) -> Option<&str> {
        self.related_field.as_deref()
    }

    #[must_use]
    pub const fn is_owning_side(&self) -> bool {
        self.owning_side
    }

    #[must_use]
    pub const fn is_cascade_persist(&self) -> bool {
        self.cascade_persist
    }

    #[must_use]
    pub const fn is_cascade_update(&self) -> bool {
        self.cascade_update
    }

    #[must_use]
    pub const fn is_cascade_delete(&self) -> bool {
        self.cascade_delete
    }

    /// Whether related records are deleted together with the owner.
    /// Trash copies always own their children so they can be purged.
    #[must_use]
    pub const fn is_dependent(&self, variant: EntityType) -> bool {
        self.cascade_delete || matches!(variant, EntityType::Trash)
    }
}
