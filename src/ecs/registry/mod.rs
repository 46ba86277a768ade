//! Registry of entities with cached queries.

use std::fmt;
use std::iter;
use std::rc::Rc;

use crate::config::{Config, REGISTRY_NAME, REGISTRY_VERSION};
use crate::error::{RegistryError, Result};

use super::component::{Bundle, Component, ComponentType};
use super::{DeltaTime, Entity, EntityKey, Query, System};

pub use cache::Matches;
pub use statistics::Statistics;
pub use teardown::TeardownCallback;

use cache::{QueryCache, QueryKey};
use index::InvalidationIndex;
use table::EntityTable;
use teardown::TeardownRegistry;

mod cache;
mod index;
mod statistics;
mod table;
mod teardown;

/// Storage for entities which answers queries over their component types.
///
/// Results of queries are cached until some change of the registry
/// could affect them: registration or removal of an entity,
/// addition or removal of a component through the registry.
/// Registered entities are owned by the registry, so there is no other way
/// to change which components they have.
///
pub struct Registry {
    config: Config,
    table: EntityTable,
    cache: QueryCache,
    index: InvalidationIndex,
    teardown: TeardownRegistry,
    statistics: Statistics,
}

impl Registry {
    /// Creates an empty registry with given configuration.
    pub fn new(config: Config) -> Self {
        log::debug!(
            "created registry `{}` v{} ({} v{})",
            config.name(),
            config.version(),
            REGISTRY_NAME,
            *REGISTRY_VERSION,
        );
        Self {
            config,
            table: EntityTable::default(),
            cache: QueryCache::default(),
            index: InvalidationIndex::default(),
            teardown: TeardownRegistry::default(),
            statistics: Statistics::default(),
        }
    }

    /// Configuration of this registry.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers the entity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentifier`] if entity with the same identifier
    /// is already registered. Registry is not changed in this case.
    ///
    pub fn add(&mut self, entity: Entity) -> Result<EntityKey> {
        let key = self.table.insert(entity)?;
        if let Some(entity) = self.table.get(key) {
            let evicted = self
                .index
                .invalidate(entity.component_types(), true, &mut self.cache);
            self.statistics.evictions += evicted as u64;
            log::trace!("added entity `{}` as {:?}", entity.id(), key);
        }
        Ok(key)
    }

    /// Looks up key of the entity by its identifier.
    pub fn find(&self, id: &str) -> Option<EntityKey> {
        self.table.find(id)
    }

    /// Retrieves an immutable reference to registered entity.
    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.table.get(key)
    }

    /// Returns `true` if the entity is registered.
    pub fn contains(&self, key: EntityKey) -> bool {
        self.table.contains(key)
    }

    /// Deregisters the entity, running its teardown callbacks first.
    ///
    /// Accepts `None` to allow chaining with [`find`](Registry::find),
    /// does nothing in this case or if the entity is not registered.
    ///
    /// Returns the entity back to the caller.
    ///
    pub fn remove<K>(&mut self, entity: K) -> Option<Entity>
    where
        K: Into<Option<EntityKey>>,
    {
        let key = entity.into()?;
        let entity = self.table.get(key)?;
        let callbacks = self.teardown.run(key, entity);

        let entity = self.table.remove(key)?;
        let evicted = self
            .index
            .invalidate(entity.component_types(), true, &mut self.cache);
        self.statistics.evictions += evicted as u64;
        log::trace!(
            "removed entity `{}`, {} teardown callbacks run",
            entity.id(),
            callbacks,
        );
        Some(entity)
    }

    /// Removes all entities, running teardown callbacks of each one,
    /// and forgets all cached queries.
    pub fn clear(&mut self) {
        let mut callbacks = 0;
        for (key, entity) in self.table.iter() {
            callbacks += self.teardown.run(key, entity);
        }
        let count = self.table.len();
        self.statistics.evictions += self.cache.len() as u64;

        self.table.clear();
        self.cache.clear();
        self.index.clear();
        self.teardown.clear();
        log::debug!(
            "cleared registry `{}`: {} entities removed, {} teardown callbacks run",
            self.config.name(),
            count,
            callbacks,
        );
    }

    /// Returns keys of all entities which match the query, in registration order.
    ///
    /// Result is cached, so repeated queries are cheap until the registry changes.
    ///
    pub fn get(&mut self, query: &Query) -> Matches {
        if let Some(key) = self.cache.key(query) {
            if let Some(matches) = self.cache.get(key).cloned() {
                self.statistics.hits += 1;
                if self.config.enable_validation() {
                    return self.validate(key, query, matches);
                }
                return matches;
            }
        }

        self.statistics.misses += 1;
        let (key, first_time) = self.cache.intern(query);
        if first_time {
            self.register_dependencies(key, query);
        }
        let matches = self.scan(query);
        log::trace!("cached `{}`: {} entities", query, matches.len());
        self.cache.insert(key, matches.clone());
        matches
    }

    /// Keys of all registered entities in registration order.
    pub fn all(&self) -> &[EntityKey] {
        self.table.keys()
    }

    /// Count of registered entities.
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// Returns iterator over entities of the query result which are still registered.
    pub fn entities<'a>(&'a self, matches: &'a Matches) -> impl Iterator<Item = &'a Entity> {
        matches.iter().filter_map(move |&key| self.table.get(key))
    }

    /// Inserts component of type `T` and attaches it to registered entity.
    /// If component was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownEntity`] if the entity is not registered.
    ///
    pub fn add_component<T>(&mut self, key: EntityKey, component: T) -> Result<Option<T>>
    where
        T: Component,
    {
        let entity = self
            .table
            .get_mut(key)
            .ok_or(RegistryError::UnknownEntity(key))?;
        let prev = entity.insert(component);
        self.invalidate(iter::once(ComponentType::of::<T>()));
        Ok(prev)
    }

    /// Attaches all components of the bundle to registered entity,
    /// replacing attached components of the same types.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownEntity`] if the entity is not registered.
    ///
    pub fn add_components<B>(&mut self, key: EntityKey, bundle: B) -> Result<()>
    where
        B: Bundle,
    {
        let entity = self
            .table
            .get_mut(key)
            .ok_or(RegistryError::UnknownEntity(key))?;
        let components = bundle.into_components();
        let kinds: Vec<_> = components.iter().map(|c| c.component_type()).collect();
        for component in components {
            entity.insert_boxed(component);
        }
        self.invalidate(kinds);
        Ok(())
    }

    /// Removes component of type `T` and detaches it from registered entity.
    ///
    /// Returns component that was previously attached to the entity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownEntity`] if the entity is not registered.
    ///
    pub fn remove_component<T>(&mut self, key: EntityKey) -> Result<Option<T>>
    where
        T: Component,
    {
        let entity = self
            .table
            .get_mut(key)
            .ok_or(RegistryError::UnknownEntity(key))?;
        let prev = entity.remove::<T>();
        if prev.is_some() {
            self.invalidate(iter::once(ComponentType::of::<T>()));
        }
        Ok(prev)
    }

    /// Retrieves a mutable reference to component of type `T` attached to registered entity.
    ///
    /// Value of the component can be changed, but not its presence,
    /// so no cached query is affected.
    ///
    pub fn component_mut<T>(&mut self, key: EntityKey) -> Option<&mut T>
    where
        T: Component,
    {
        self.table.get_mut(key)?.get_mut()
    }

    /// Schedules the callback to run when any of the entities is removed.
    ///
    /// Entities which are not registered are skipped.
    /// Callbacks of one entity run in reverse order of their registration.
    ///
    pub fn on_teardown<I, F>(&mut self, entities: I, callback: F)
    where
        I: IntoIterator<Item = EntityKey>,
        F: Fn(&Entity) + 'static,
    {
        let callback: TeardownCallback = Rc::new(callback);
        for key in entities {
            if self.table.contains(key) {
                self.teardown.register(key, Rc::clone(&callback));
            } else {
                log::trace!("skipped teardown callback of unregistered {:?}", key);
            }
        }
    }

    /// Count of teardown callbacks scheduled for the entity.
    pub fn teardown_count(&self, key: EntityKey) -> usize {
        self.teardown.len(key)
    }

    /// Evaluates query of the system and lets the system handle its result once.
    ///
    /// # Errors
    ///
    /// Returns an error if the system failed to handle its entities.
    ///
    pub fn run<S>(&mut self, system: &mut S, delta_time: DeltaTime) -> Result<()>
    where
        S: System + ?Sized,
    {
        let matches = self.get(system.query());
        system.update(self, &matches, delta_time)
    }

    /// Statistics of query evaluation of this registry.
    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// Count of queries which currently have cached result.
    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }

    /// Count of cached queries which could be affected by the type.
    pub fn dependents(&self, kind: ComponentType) -> usize {
        self.index.dependents(kind)
    }

    fn register_dependencies(&mut self, key: QueryKey, query: &Query) {
        for kind in query.component_types() {
            self.index.register(kind, key);
        }
        if query.must_have().is_empty() {
            self.index.register_membership(key);
        }
    }

    fn invalidate<I>(&mut self, kinds: I)
    where
        I: IntoIterator<Item = ComponentType>,
    {
        let evicted = self.index.invalidate(kinds, false, &mut self.cache);
        self.statistics.evictions += evicted as u64;
    }

    fn scan(&mut self, query: &Query) -> Matches {
        self.statistics.scans += 1;
        self.table
            .iter()
            .filter(|(_, entity)| query.matches(entity))
            .map(|(key, _)| key)
            .collect()
    }

    fn validate(&mut self, key: QueryKey, query: &Query, cached: Matches) -> Matches {
        let actual = self.scan(query);
        if actual == cached {
            return cached;
        }
        log::error!(
            "stale cache entry of `{}` in registry `{}`: {} cached entities, {} actual",
            query,
            self.config.name(),
            cached.len(),
            actual.len(),
        );
        self.cache.insert(key, actual.clone());
        actual
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.config.name())
            .field("entities", &self.table.len())
            .field("cached_queries", &self.cache.len())
            .field("statistics", &self.statistics)
            .finish()
    }
}
