//! Well-known names shared between the entity store and the mapping builder.
//!
//! These strings are persisted with entity definitions, so they must not change.

///
/// fields
/// Framework-owned field names.
///

pub mod fields {
    pub const CREATOR: &str = "creator";
    pub const OWNER: &str = "owner";
    pub const CREATION_DATE: &str = "creationDate";
    pub const MODIFIED_BY: &str = "modifiedBy";
    pub const MODIFICATION_DATE: &str = "modificationDate";
}

///
/// settings
/// Per-field setting names.
///

pub mod settings {
    pub const STRING_MAX_LENGTH: &str = "maxLength";
    pub const STRING_TEXT_AREA: &str = "textArea";

    pub const ALLOW_USER_SUPPLIED: &str = "allowUserSupplied";
    pub const ALLOW_MULTIPLE_SELECTIONS: &str = "allowMultipleSelections";

    pub const CASCADE_PERSIST: &str = "cascadePersist";
    pub const CASCADE_UPDATE: &str = "cascadeUpdate";
    pub const CASCADE_DELETE: &str = "cascadeDelete";
}

///
/// metadata
/// Per-field metadata keys.
///

pub mod metadata {
    pub const DATABASE_COLUMN_NAME: &str = "databaseColumnName";

    pub const MAP_KEY_TYPE: &str = "mapKeyType";
    pub const MAP_VALUE_TYPE: &str = "mapValueType";

    pub const RELATED_CLASS: &str = "related.class";
    pub const RELATED_FIELD: &str = "related.field";
    pub const OWNING_SIDE: &str = "related.owningSide";
}
