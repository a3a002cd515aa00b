use super::{EntityMetadataBuilder, column::add_default_fetch_group};
use crate::{
    document::{ClassMetadata, MapMetadata, PersistenceModifier},
    naming::suffixed_table_name,
};
use dynmeta_schema::{
    keys::metadata,
    prelude::{ClassDefinition, ComboboxHolder, EntityStore, Field},
    types::TEXT_TYPE_CLASS,
};

/// Extension key naming the runtime's value generator for a field.
pub const VALUE_GENERATOR: &str = "custom-value-strategy";

/// Extension key naming the runtime's type converter for a field.
pub const TYPE_CONVERTER: &str = "type-converter-name";

/// Converter persisting time-of-day values as canonical strings.
pub const TIME_CONVERTER: &str = "dn.time-string";

impl<S: EntityStore + ?Sized> EntityMetadataBuilder<'_, S> {
    pub(super) fn set_auto_generation_metadata(&self, cmd: &mut ClassMetadata, name: &str) {
        let fmd = cmd.new_field(name);
        fmd.persistence_modifier = Some(PersistenceModifier::Persistent);
        fmd.default_fetch_group = Some(true);
        fmd.set_extension(&self.config.vendor, VALUE_GENERATOR, format!("ovg.{name}"));
    }

    pub(super) fn set_time_metadata(&self, cmd: &mut ClassMetadata, name: &str) {
        let fmd = cmd.new_field(name);
        fmd.persistence_modifier = Some(PersistenceModifier::Persistent);
        fmd.default_fetch_group = Some(true);
        fmd.set_extension(&self.config.vendor, TYPE_CONVERTER, TIME_CONVERTER);
    }
}

// Multi-valued lists live in `{OWNER_TABLE}_{FIELD}`, joined on `{field}_OID`.
pub(super) fn set_combobox_metadata(
    cmd: &mut ClassMetadata,
    field: &Field,
    definition: &dyn ClassDefinition,
) {
    let holder = ComboboxHolder::new(field);
    let owner_table = cmd.table.clone().unwrap_or_default();
    let fmd = cmd.new_field(&field.name);

    if holder.is_list() {
        add_default_fetch_group(fmd, definition);
        fmd.table = Some(suffixed_table_name(&owner_table, &field.name));
        fmd.new_join().column = Some(format!("{}_OID", field.name));
    }
}

// Text-to-text maps get a key/value side table; anything else is
// serialized whole.
pub(super) fn set_map_metadata(
    cmd: &mut ClassMetadata,
    field: &Field,
    definition: &dyn ClassDefinition,
) {
    let owner_table = cmd.table.clone().unwrap_or_default();
    let fmd = cmd.new_field(&field.name);

    let key_type = field.get_metadata(metadata::MAP_KEY_TYPE);
    let value_type = field.get_metadata(metadata::MAP_VALUE_TYPE);
    let serialized = match (key_type, value_type) {
        (Some(key), Some(value)) => key.value != TEXT_TYPE_CLASS || value.value != TEXT_TYPE_CLASS,
        _ => false,
    };

    fmd.serialized = Some(serialized);
    add_default_fetch_group(fmd, definition);

    if serialized {
        fmd.map = Some(MapMetadata {
            serialized_key: Some(true),
            serialized_value: Some(true),
            ..MapMetadata::default()
        });
    } else {
        fmd.map = Some(MapMetadata {
            key_type: Some(TEXT_TYPE_CLASS.to_string()),
            value_type: Some(TEXT_TYPE_CLASS.to_string()),
            ..MapMetadata::default()
        });
        fmd.table = Some(suffixed_table_name(&owner_table, &field.name));
        fmd.new_join();
    }
}
