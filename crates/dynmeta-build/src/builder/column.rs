use super::BuildError;
use crate::document::{ColumnMetadata, FieldMetadata};
use dynmeta_schema::{
    keys::{metadata, settings},
    prelude::{ClassDefinition, Field, FieldSetting},
};
use tracing::warn;

/// SQL type of long-text columns.
pub const LONG_TEXT_SQL_TYPE: &str = "CLOB";

/// Apply column-level settings that hold regardless of the field strategy.
///
/// A column node is only created when the field carries an explicit column
/// name, a max length or a text-area setting.
pub(super) fn set_column_parameters(fmd: &mut FieldMetadata, field: &Field) -> Result<(), BuildError> {
    let column_name = field.get_metadata(metadata::DATABASE_COLUMN_NAME);
    let max_length = field.get_setting(settings::STRING_MAX_LENGTH);
    let text_area = field.get_setting(settings::STRING_TEXT_AREA);

    if column_name.is_none() && max_length.is_none() && text_area.is_none() {
        return Ok(());
    }

    let mut column = ColumnMetadata::default();

    if text_area.is_some_and(FieldSetting::is_true) {
        // large objects carry no length and cannot be indexed
        fmd.indexed = Some(false);
        column.sql_type = Some(LONG_TEXT_SQL_TYPE.to_string());
    } else if let Some(setting) = max_length.filter(|s| s.is_overridden()) {
        let length = setting
            .value
            .trim()
            .parse()
            .map_err(|_| BuildError::InvalidMaxLength {
                field: field.name.clone(),
                value: setting.value.clone(),
            })?;
        column.length = Some(length);
    }

    if let Some(name) = field.metadata_value(metadata::DATABASE_COLUMN_NAME) {
        column.name = Some(name.to_string());
    }

    fmd.column = Some(column);

    Ok(())
}

/// Put the field in the default fetch group unless its declaration says
/// otherwise. An unresolvable field is fetched eagerly.
pub(super) fn add_default_fetch_group(fmd: &mut FieldMetadata, definition: &dyn ClassDefinition) {
    match definition.field(&fmd.name) {
        None => {
            warn!(
                field = %fmd.name,
                class = %definition.class_name(),
                "unable to retrieve field from class, putting it in the default fetch group"
            );
            fmd.default_fetch_group = Some(true);
        }
        Some(decl) if decl.default_fetch_group().is_none() => {
            fmd.default_fetch_group = Some(true);
        }
        Some(_) => {}
    }
}
