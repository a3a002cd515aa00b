use super::{EntityMetadataBuilder, Target, column::add_default_fetch_group};
use crate::{
    Error,
    document::{ClassMetadata, ElementMetadata, FieldMetadata, PersistenceModifier},
    naming::{element_column_name, join_column_name},
};
use dynmeta_schema::prelude::{
    ClassDefinition, EntityStore, Field, FieldDeclaration, RelationshipHolder,
};

pub const CASCADE_PERSIST: &str = "cascade-persist";
pub const CASCADE_UPDATE: &str = "cascade-update";

impl<S: EntityStore + ?Sized> EntityMetadataBuilder<'_, S> {
    pub(super) fn set_relationship_metadata(
        &self,
        cmd: &mut ClassMetadata,
        target: &Target<'_>,
        field: &Field,
    ) -> Result<(), Error> {
        let variant = target.variant;
        let holder = RelationshipHolder::new(field, variant)?;

        let fmd = cmd.new_field(&field.name);
        add_default_fetch_group(fmd, target.definition);

        // live entities always propagate saves to their relations
        let (persist, update) = if variant.is_standard() {
            (true, true)
        } else {
            (holder.is_cascade_persist(), holder.is_cascade_update())
        };
        let vendor = &self.config.vendor;
        fmd.set_extension(vendor, CASCADE_PERSIST, persist.to_string());
        fmd.set_extension(vendor, CASCADE_UPDATE, update.to_string());

        self.process_relationship(fmd, &holder, target, field);

        Ok(())
    }

    fn process_relationship(
        &self,
        fmd: &mut FieldMetadata,
        holder: &RelationshipHolder,
        target: &Target<'_>,
        field: &Field,
    ) {
        let variant = target.variant;

        if holder.is_one_to_one() {
            fmd.persistence_modifier = Some(PersistenceModifier::Persistent);
            fmd.dependent = Some(holder.is_dependent(variant));
        } else {
            let collection = fmd.collection_mut();
            collection.element_type = Some(holder.related_class().to_string());
            collection.embedded_element = Some(false);
            collection.serialized_element = Some(false);
            collection.dependent_element = Some(holder.is_dependent(variant));
        }

        if holder.is_many_to_many() {
            self.add_many_to_many_metadata(fmd, holder, target, field);
        }

        if variant.is_shadow() {
            add_mapped_by(fmd, field, target.definition);
        }
    }

    // Only the non-owning side names the join table and its columns; the
    // owning side keeps the runtime defaults. Explicit declarations on a live
    // class are left for the runtime to read itself.
    fn add_many_to_many_metadata(
        &self,
        fmd: &mut FieldMetadata,
        holder: &RelationshipHolder,
        target: &Target<'_>,
        field: &Field,
    ) {
        let decl = target.definition.declared_field(&field.name);
        let standard = target.variant.is_standard();
        let join_column = decl.and_then(FieldDeclaration::join_column);

        // both sides of a many-to-many need a join node
        if join_column.is_none() || !standard {
            fmd.new_join().outer = Some(false);
        }

        if holder.is_owning_side() {
            return;
        }

        match (decl.and_then(FieldDeclaration::persistent_table), standard) {
            (Some(table), false) => fmd.table = Some(target.variant.table_name(table)),
            (Some(_), true) => {}
            (None, _) => {
                let entity = target.entity;
                fmd.table = Some(self.naming.join_table_name(
                    &entity.module,
                    &entity.namespace,
                    &field.name,
                    holder.related_field().unwrap_or_default(),
                ));
            }
        }

        match (decl.and_then(FieldDeclaration::element_column), standard) {
            (Some(column), false) => set_element_column(fmd, column.to_string()),
            (Some(_), true) => {}
            (None, _) => set_element_column(fmd, element_column_name(holder.related_class())),
        }

        match (join_column, standard) {
            (Some(column), false) => fmd.inner_join().column = Some(column.to_string()),
            (Some(_), true) => {}
            (None, _) => {
                fmd.inner_join().column = Some(join_column_name(&target.entity.class_name));
            }
        }
    }
}

fn set_element_column(fmd: &mut FieldMetadata, column: String) {
    fmd.element = Some(ElementMetadata {
        column: Some(column),
    });
}

// History and trash copies keep the ownership direction of the live class.
fn add_mapped_by(fmd: &mut FieldMetadata, field: &Field, definition: &dyn ClassDefinition) {
    if let Some(mapped_by) = definition
        .declared_field(&field.name)
        .and_then(FieldDeclaration::mapped_by)
    {
        fmd.mapped_by = Some(mapped_by.to_string());
    }
}
