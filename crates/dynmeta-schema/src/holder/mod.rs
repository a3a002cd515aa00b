//! Views derived from a field's settings and metadata.
//!
//! Holders are computed on demand and never stored with the entity.

mod combobox;
mod relationship;

pub use combobox::ComboboxHolder;
pub use relationship::{HolderError, RelationshipHolder};
