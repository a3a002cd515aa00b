use serde::{Deserialize, Serialize};
use std::ops::Not;

///
/// PersistenceModifier
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistenceModifier {
    Persistent,
    Transactional,
    None,
}

///
/// NullValue
/// Runtime behaviour when a null is written.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullValue {
    Exception,
    Default,
    None,
}

///
/// ValueStrategy
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueStrategy {
    Increment,
    Identity,
    Native,
    Sequence,
}

///
/// ColumnMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColumnMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_type: Option<String>,
}

///
/// JoinMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct JoinMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer: Option<bool>,
}

///
/// ElementMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ElementMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

///
/// CollectionMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CollectionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_element: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized_element: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_element: Option<bool>,
}

///
/// MapMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized_key: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized_value: Option<bool>,
}

///
/// ExtensionMetadata
/// Vendor-specific key/value understood by the runtime.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtensionMetadata {
    pub vendor: String,
    pub key: String,
    pub value: String,
}

///
/// FieldMetadata
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FieldMetadata {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence_modifier: Option<PersistenceModifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fetch_group: Option<bool>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub primary_key: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_strategy: Option<ValueStrategy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_value: Option<NullValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join: Option<JoinMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapMetadata>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<ExtensionMetadata>,
}

impl FieldMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace the join node with a fresh one.
    pub fn new_join(&mut self) -> &mut JoinMetadata {
        self.join.insert(JoinMetadata::default())
    }

    /// Existing join node, or a new inner join.
    pub fn inner_join(&mut self) -> &mut JoinMetadata {
        self.join.get_or_insert_with(|| JoinMetadata {
            column: None,
            outer: Some(false),
        })
    }

    pub fn collection_mut(&mut self) -> &mut CollectionMetadata {
        self.collection.get_or_insert_with(CollectionMetadata::default)
    }

    /// Set a vendor extension, replacing an earlier value for the same key.
    pub fn set_extension(&mut self, vendor: &str, key: &str, value: impl Into<String>) {
        let value = value.into();

        match self
            .extensions
            .iter_mut()
            .find(|e| e.vendor == vendor && e.key == key)
        {
            Some(ext) => ext.value = value,
            None => self.extensions.push(ExtensionMetadata {
                vendor: vendor.to_string(),
                key: key.to_string(),
                value,
            }),
        }
    }

    #[must_use]
    pub fn extension(&self, vendor: &str, key: &str) -> Option<&str> {
        self.extensions
            .iter()
            .find(|e| e.vendor == vendor && e.key == key)
            .map(|e| e.value.as_str())
    }
}
