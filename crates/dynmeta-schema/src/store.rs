use crate::prelude::*;
use std::collections::BTreeMap;

///
/// EntityStore
/// Read-only access to the stored entity definitions.
///

pub trait EntityStore {
    fn retrieve_by_class_name(&self, class_name: &str) -> Option<&Entity>;
}

///
/// EntityCatalog
/// In-memory entity store keyed by class name.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EntityCatalog {
    entities: BTreeMap<String, Entity>,
}

impl EntityCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, returning the definition it replaced.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.class_name.clone(), entity)
    }

    #[must_use]
    pub fn with(mut self, entity: Entity) -> Self {
        self.insert(entity);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityStore for EntityCatalog {
    fn retrieve_by_class_name(&self, class_name: &str) -> Option<&Entity> {
        self.entities.get(class_name)
    }
}

impl FromIterator<Entity> for EntityCatalog {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entity in iter {
            catalog.insert(entity);
        }

        catalog
    }
}
