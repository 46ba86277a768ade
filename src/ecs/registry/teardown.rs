//! Cleanup callbacks of registered entities.

use std::rc::Rc;

use slotmap::SecondaryMap;

use crate::ecs::{Entity, EntityKey};

/// Cleanup action which runs once when its entity is removed from the registry.
pub type TeardownCallback = Rc<dyn Fn(&Entity)>;

/// Callbacks of each entity in registration order.
#[derive(Default)]
pub struct TeardownRegistry {
    callbacks: SecondaryMap<EntityKey, Vec<TeardownCallback>>,
}

impl TeardownRegistry {
    pub fn register(&mut self, key: EntityKey, callback: TeardownCallback) {
        match self.callbacks.get_mut(key) {
            Some(callbacks) => callbacks.push(callback),
            None => {
                self.callbacks.insert(key, vec![callback]);
            }
        }
    }

    /// Forgets all callbacks of the entity and runs them, last registered first.
    ///
    /// Returns count of callbacks which were run.
    ///
    pub fn run(&mut self, key: EntityKey, entity: &Entity) -> usize {
        let callbacks = match self.callbacks.remove(key) {
            Some(callbacks) => callbacks,
            None => return 0,
        };
        for callback in callbacks.iter().rev() {
            callback(entity);
        }
        callbacks.len()
    }

    /// Count of callbacks registered for the entity.
    pub fn len(&self, key: EntityKey) -> usize {
        self.callbacks.get(key).map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        self.callbacks.clear();
    }
}
