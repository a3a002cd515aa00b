//! Persistence metadata builder for runtime-defined entities.
//!
//! Building is two-pass. [`EntityMetadataBuilder`] populates a
//! [`MetadataDocument`] once per entity and generated variant, then
//! [`fix_enhancer_issues`] reconciles cross-class decisions over the finished
//! document before it is handed to the runtime.

pub mod builder;
pub mod classify;
pub mod config;
pub mod document;
pub mod fixup;
pub mod naming;

pub use builder::{BuildError, EntityMetadataBuilder};
pub use config::{ConfigError, MappingConfig};
pub use document::MetadataDocument;
pub use fixup::fix_enhancer_issues;

use dynmeta_schema::holder::HolderError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, EntityMetadataBuilder, MappingConfig, MetadataDocument,
        classify::{FieldStrategy, classify},
        document::*,
        fix_enhancer_issues,
        naming::NamingPolicy,
    };
    pub use dynmeta_schema::prelude::*;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    HolderError(#[from] HolderError),
}
