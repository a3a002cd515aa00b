mod entity;
mod field;
mod generated;

pub use entity::Entity;
pub use field::{Field, FieldMetadataEntry, FieldSetting};
pub use generated::GeneratedClass;
