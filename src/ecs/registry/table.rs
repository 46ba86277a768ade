//! Storage for all registered entities.

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::ecs::{Entity, EntityKey};
use crate::error::{RegistryError, Result};

/// Registered entities, indexed by key and by identifier.
///
/// Keeps list of keys in registration order, updated on every mutation,
/// so full list of entities is available without recomputation.
///
#[derive(Default)]
pub struct EntityTable {
    entities: SlotMap<EntityKey, Entity>,
    identifiers: HashMap<String, EntityKey>,
    order: Vec<EntityKey>,
}

impl EntityTable {
    /// Registers the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if entity with the same identifier is already registered.
    /// Table is not changed in this case.
    ///
    pub fn insert(&mut self, entity: Entity) -> Result<EntityKey> {
        if self.identifiers.contains_key(entity.id()) {
            return Err(RegistryError::DuplicateIdentifier(entity.id().to_string()));
        }
        let id = entity.id().to_string();
        let key = self.entities.insert(entity);
        self.identifiers.insert(id, key);
        self.order.push(key);
        Ok(key)
    }

    /// Deregisters the entity, handing it back.
    pub fn remove(&mut self, key: EntityKey) -> Option<Entity> {
        let entity = self.entities.remove(key)?;
        self.identifiers.remove(entity.id());
        self.order.retain(|&other| other != key);
        Some(entity)
    }

    pub fn contains(&self, key: EntityKey) -> bool {
        self.entities.contains_key(key)
    }

    pub fn get(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Looks up key of the entity by its identifier.
    pub fn find(&self, id: &str) -> Option<EntityKey> {
        self.identifiers.get(id).copied()
    }

    /// Keys of all entities in registration order.
    pub fn keys(&self) -> &[EntityKey] {
        &self.order
    }

    /// Returns iterator over all entities with their keys in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        let entities = &self.entities;
        self.order
            .iter()
            .filter_map(move |&key| Some((key, entities.get(key)?)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.identifiers.clear();
        self.order.clear();
    }
}
