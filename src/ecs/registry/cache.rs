//! Cache of query results.

use std::collections::HashMap;
use std::ops::Deref;
use std::rc::Rc;

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::ecs::{EntityKey, Query};

new_key_type! {
    /// Interned key of the query ever evaluated by the registry.
    pub struct QueryKey;
}

/// Keys of entities matching some query, in registration order.
///
/// This is a read-only snapshot: it is not updated when the registry changes,
/// query the registry again to get a fresh one. Cloning is cheap.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches(Rc<[EntityKey]>);

impl Matches {
    /// Returns `true` if both snapshots are the same cache entry.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl Deref for Matches {
    type Target = [EntityKey];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<EntityKey> for Matches {
    fn from_iter<T: IntoIterator<Item = EntityKey>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a EntityKey;
    type IntoIter = std::slice::Iter<'a, EntityKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Interned queries and their cached results.
///
/// Queries stay interned until the cache is cleared,
/// only their results are evicted.
///
#[derive(Default)]
pub struct QueryCache {
    keys: HashMap<Query, QueryKey>,
    queries: SlotMap<QueryKey, Query>,
    entries: SecondaryMap<QueryKey, Matches>,
}

impl QueryCache {
    /// Returns key of already interned query.
    pub fn key(&self, query: &Query) -> Option<QueryKey> {
        self.keys.get(query).copied()
    }

    /// Interns the query if needed.
    ///
    /// Returns its key and `true` if the query was seen for the first time.
    ///
    pub fn intern(&mut self, query: &Query) -> (QueryKey, bool) {
        if let Some(key) = self.key(query) {
            return (key, false);
        }
        let key = self.queries.insert(query.clone());
        self.keys.insert(query.clone(), key);
        (key, true)
    }

    pub fn query(&self, key: QueryKey) -> Option<&Query> {
        self.queries.get(key)
    }

    pub fn get(&self, key: QueryKey) -> Option<&Matches> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: QueryKey, matches: Matches) {
        self.entries.insert(key, matches);
    }

    /// Drops cached result of the query, if any.
    pub fn evict(&mut self, key: QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Count of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.queries.clear();
        self.entries.clear();
    }
}
