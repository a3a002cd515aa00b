//! Second pass over a finished document.
//!
//! Collection metadata may be written before the class it points at reaches
//! its final, enhanced shape. Once every class is in the document, this pass
//! re-derives the relationship flags and stops embedding elements whose class
//! was enhanced.

use crate::{
    Error,
    document::{ClassMetadata, CollectionMetadata, FieldMetadata, MetadataDocument},
};
use dynmeta_schema::{
    class_name,
    prelude::{EnhancedClassRegistry, EntityStore, EntityType, Field, RelationshipHolder},
};
use tracing::debug;

/// Reconcile relationship and collection metadata across the whole document.
///
/// Classes that do not resolve to a stored entity are left untouched.
pub fn fix_enhancer_issues<S, R>(
    mut doc: MetadataDocument,
    store: &S,
    registry: &R,
) -> Result<MetadataDocument, Error>
where
    S: EntityStore + ?Sized,
    R: EnhancedClassRegistry + ?Sized,
{
    for package in &mut doc.packages {
        for class in &mut package.classes {
            let (entity_class, variant) = resolve_origin(&package.name, class);

            let Some(entity) = entity_class.and_then(|name| store.retrieve_by_class_name(&name))
            else {
                debug!(package = %package.name, class = %class.name, "skipping class without entity");
                continue;
            };

            for fmd in &mut class.fields {
                if let Some(field) = entity.get_field(&fmd.name)
                    && field.ty.is_relationship()
                {
                    fix_relation_metadata(fmd, field, variant)?;
                }

                if let Some(collection) = fmd.collection.as_mut() {
                    fix_collection_metadata(collection, registry);
                }
            }
        }
    }

    Ok(doc)
}

// Entity class and variant of a class node. Nodes built here record both;
// anything else falls back to reading the variant suffix off the name.
fn resolve_origin(package: &str, class: &ClassMetadata) -> (Option<String>, EntityType) {
    match &class.origin {
        Some(origin) => (origin.entity.clone(), origin.variant),
        None => {
            let qualified = class_name::join(package, &class.name);
            let variant = EntityType::for_class_name(&qualified);

            (
                Some(class_name::trim_variant_suffix(&qualified).to_string()),
                variant,
            )
        }
    }
}

fn fix_relation_metadata(
    fmd: &mut FieldMetadata,
    field: &Field,
    variant: EntityType,
) -> Result<(), Error> {
    let holder = RelationshipHolder::new(field, variant)?;
    let dependent = holder.is_dependent(variant);

    if holder.is_one_to_one() {
        fmd.dependent = Some(dependent);
    } else if let Some(collection) = fmd.collection.as_mut() {
        collection.dependent_element = Some(dependent);
    }

    Ok(())
}

fn fix_collection_metadata<R>(collection: &mut CollectionMetadata, registry: &R)
where
    R: EnhancedClassRegistry + ?Sized,
{
    let Some(element_type) = collection.element_type.as_deref() else {
        return;
    };

    if registry.is_enhanced(class_name::trim_variant_suffix(element_type)) {
        collection.embedded_element = Some(false);
    }
}
