use dynmeta_schema::{
    ID_FIELD_NAME, is_audit_field,
    node::Field,
    types::{RelationKind, TypeKind},
};

///
/// FieldStrategy
/// The mapping rule set applied to one field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldStrategy {
    Identity,
    AutoGenerated,
    Combobox,
    Relationship(RelationKind),
    Map,
    Temporal,
    Plain,
}

/// Pick the strategy for a field.
///
/// Framework-owned names win over the declared type, and the type kind is
/// checked before anything else, so a relationship is never mistaken for a
/// container.
#[must_use]
pub fn classify(field: &Field) -> FieldStrategy {
    if field.name == ID_FIELD_NAME {
        return FieldStrategy::Identity;
    }
    if is_audit_field(&field.name) {
        return FieldStrategy::AutoGenerated;
    }

    match field.ty.kind {
        TypeKind::Combobox => FieldStrategy::Combobox,
        TypeKind::Relationship(kind) => FieldStrategy::Relationship(kind),
        TypeKind::Map => FieldStrategy::Map,
        TypeKind::Time => FieldStrategy::Temporal,
        TypeKind::Scalar => FieldStrategy::Plain,
    }
}
