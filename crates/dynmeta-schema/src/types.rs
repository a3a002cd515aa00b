use crate::prelude::*;
use derive_more::{Display, FromStr};

/// Native type name used for free-text values.
pub const TEXT_TYPE_CLASS: &str = "text";

///
/// RelationKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum RelationKind {
    ManyToMany,
    ManyToOne,
    OneToMany,
    OneToOne,
}

impl RelationKind {
    /// Single-valued on this side (one-to-one and many-to-one).
    #[must_use]
    pub const fn is_single_valued(self) -> bool {
        matches!(self, Self::OneToOne | Self::ManyToOne)
    }

    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

///
/// TypeKind
///
/// Structural classification of a field type. Scalars cover every type the
/// runtime persists natively without special rules.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeKind {
    #[default]
    Scalar,
    Combobox,
    Map,
    Relationship(RelationKind),
    Time,
}

///
/// Type
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Type {
    pub display_name: String,
    pub type_class: String,

    #[serde(default)]
    pub kind: TypeKind,
}

impl Type {
    #[must_use]
    pub fn new(display_name: impl Into<String>, type_class: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            display_name: display_name.into(),
            type_class: type_class.into(),
            kind,
        }
    }

    #[must_use]
    pub fn text() -> Self {
        Self::new("Text", TEXT_TYPE_CLASS, TypeKind::Scalar)
    }

    #[must_use]
    pub fn scalar(type_class: &str) -> Self {
        Self::new(type_class, type_class, TypeKind::Scalar)
    }

    #[must_use]
    pub fn combobox() -> Self {
        Self::new("Combobox", "combobox", TypeKind::Combobox)
    }

    #[must_use]
    pub fn map() -> Self {
        Self::new("Map", "map", TypeKind::Map)
    }

    #[must_use]
    pub fn time() -> Self {
        Self::new("Time", "time", TypeKind::Time)
    }

    #[must_use]
    pub fn relationship(kind: RelationKind) -> Self {
        Self::new(
            kind.to_string(),
            "relationship",
            TypeKind::Relationship(kind),
        )
    }

    #[must_use]
    pub const fn is_relationship(&self) -> bool {
        matches!(self.kind, TypeKind::Relationship(_))
    }

    #[must_use]
    pub const fn relation_kind(&self) -> Option<RelationKind> {
        match self.kind {
            TypeKind::Relationship(kind) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_kinds_split_into_single_and_collection() {
        assert!(RelationKind::OneToOne.is_single_valued());
        assert!(RelationKind::ManyToOne.is_single_valued());
        assert!(RelationKind::OneToMany.is_collection());
        assert!(RelationKind::ManyToMany.is_collection());
        assert!(!RelationKind::ManyToMany.is_single_valued());
    }

    #[test]
    fn relation_kind_parses_from_its_display_name() {
        let kind: RelationKind = "ManyToMany".parse().expect("known relation kind");
        assert_eq!(kind, RelationKind::ManyToMany);
        assert!("Sideways".parse::<RelationKind>().is_err());
    }

    #[test]
    fn type_kind_round_trips_through_json() {
        let ty = Type::relationship(RelationKind::OneToMany);
        let json = serde_json::to_string(&ty).expect("serialize");
        let back: Type = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.relation_kind(), Some(RelationKind::OneToMany));
    }
}
