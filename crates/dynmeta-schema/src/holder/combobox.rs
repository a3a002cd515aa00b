use crate::{keys::settings, prelude::*};

///
/// ComboboxHolder
/// Storage-relevant view of a combobox field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ComboboxHolder {
    allow_user_supplied: bool,
    allow_multiple: bool,
}

impl ComboboxHolder {
    #[must_use]
    pub fn new(field: &Field) -> Self {
        let flag = |name: &str| field.get_setting(name).is_some_and(FieldSetting::is_true);

        Self {
            allow_user_supplied: flag(settings::ALLOW_USER_SUPPLIED),
            allow_multiple: flag(settings::ALLOW_MULTIPLE_SELECTIONS),
        }
    }

    /// Multiple free-text values.
    #[must_use]
    pub const fn is_string_list(&self) -> bool {
        self.allow_multiple && self.allow_user_supplied
    }

    /// Multiple values drawn from the fixed enumeration.
    #[must_use]
    pub const fn is_enum_list(&self) -> bool {
        self.allow_multiple && !self.allow_user_supplied
    }

    /// Values are stored in a side table rather than inline.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        self.is_string_list() || self.is_enum_list()
    }

    #[must_use]
    pub const fn allows_user_supplied(&self) -> bool {
        self.allow_user_supplied
    }
}
