use crate::prelude::*;
use std::ops::Not;

///
/// FieldSetting
/// A named per-field setting together with the default it was declared with.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldSetting {
    pub name: String,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl FieldSetting {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// True when the value differs from the declared default.
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.default_value.as_deref() != Some(self.value.as_str())
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        self.value.trim().eq_ignore_ascii_case("true")
    }
}

///
/// FieldMetadataEntry
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldMetadataEntry {
    pub key: String,
    pub value: String,
}

///
/// Field
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: Type,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<FieldSetting>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<FieldMetadataEntry>,

    /// Names of the lookups this field participates in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lookups: Vec<String>,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            settings: Vec::new(),
            metadata: Vec::new(),
            lookups: Vec::new(),
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_setting(mut self, setting: FieldSetting) -> Self {
        self.settings.push(setting);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(FieldMetadataEntry {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn with_lookup(mut self, lookup: impl Into<String>) -> Self {
        self.lookups.push(lookup.into());
        self
    }

    #[must_use]
    pub fn get_setting(&self, name: &str) -> Option<&FieldSetting> {
        self.settings.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn get_metadata(&self, key: &str) -> Option<&FieldMetadataEntry> {
        self.metadata.iter().find(|m| m.key == key)
    }

    /// Metadata value for the key, treating blank values as absent.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.get_metadata(key)
            .map(|m| m.value.as_str())
            .filter(|value| !value.trim().is_empty())
    }
}
