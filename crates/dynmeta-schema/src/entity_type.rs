use crate::prelude::*;
use derive_more::Display;

///
/// EntityType
///
/// Variant of an entity a class is generated for. The live entity is
/// `Standard`; `History` and `Trash` are generated shadow copies; `Schema`
/// marks helper classes that are not backed by an entity.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum EntityType {
    #[default]
    #[display("STANDARD")]
    Standard,

    #[display("HISTORY")]
    History,

    #[display("TRASH")]
    Trash,

    #[display("SCHEMA")]
    Schema,
}

impl EntityType {
    pub const HISTORY_SUFFIX: &str = "__HISTORY";
    pub const TRASH_SUFFIX: &str = "__TRASH";

    #[must_use]
    pub const fn is_standard(self) -> bool {
        matches!(self, Self::Standard)
    }

    /// History and trash copies mirror the relationships of the live entity.
    #[must_use]
    pub const fn is_shadow(self) -> bool {
        matches!(self, Self::History | Self::Trash)
    }

    /// Class-name suffix of the generated variant, empty for the rest.
    #[must_use]
    pub const fn class_suffix(self) -> &'static str {
        match self {
            Self::History => Self::HISTORY_SUFFIX,
            Self::Trash => Self::TRASH_SUFFIX,
            Self::Standard | Self::Schema => "",
        }
    }

    /// Append the variant marker to an explicitly declared table name.
    #[must_use]
    pub fn table_name(self, table: &str) -> String {
        if self.is_standard() {
            table.to_string()
        } else {
            format!("{table}__{self}")
        }
    }

    /// Recover the variant from a generated class name.
    ///
    /// Only needed for documents that were produced without a stored variant
    /// tag; builder output always records the variant explicitly.
    #[must_use]
    pub fn for_class_name(class_name: &str) -> Self {
        if class_name.ends_with(Self::HISTORY_SUFFIX) {
            Self::History
        } else if class_name.ends_with(Self::TRASH_SUFFIX) {
            Self::Trash
        } else {
            Self::Standard
        }
    }
}
