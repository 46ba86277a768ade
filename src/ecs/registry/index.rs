//! Index of dependencies between component types and cached queries.

use std::collections::{HashMap, HashSet};

use crate::ecs::ComponentType;

use super::cache::{QueryCache, QueryKey};

/// Which queries could be affected by a change of some component type.
///
/// Edges are only ever added: once a query depends on a type, it always does.
/// Invalidation evicts cached results, never edges.
///
#[derive(Default)]
pub struct InvalidationIndex {
    edges: HashMap<ComponentType, HashSet<QueryKey>>,
    /// Queries without required types, affected by every added or removed entity.
    membership: HashSet<QueryKey>,
}

impl InvalidationIndex {
    /// Adds an edge from the type to the query.
    ///
    /// Returns `false` if the edge already existed.
    ///
    pub fn register(&mut self, kind: ComponentType, key: QueryKey) -> bool {
        self.edges.entry(kind).or_default().insert(key)
    }

    /// Marks the query as affected by any change of entity set.
    pub fn register_membership(&mut self, key: QueryKey) -> bool {
        self.membership.insert(key)
    }

    /// Evicts cached results of all queries reachable from given types.
    /// If `membership` is `true`, queries affected by entity set changes are evicted too.
    ///
    /// Returns count of evicted cache entries.
    ///
    pub fn invalidate<I>(&self, kinds: I, membership: bool, cache: &mut QueryCache) -> usize
    where
        I: IntoIterator<Item = ComponentType>,
    {
        let mut evicted = 0;
        for kind in kinds {
            let keys = match self.edges.get(&kind) {
                Some(keys) => keys,
                None => continue,
            };
            for &key in keys {
                if cache.evict(key) {
                    log::trace!("evicted `{}` because of {}", display(cache, key), kind);
                    evicted += 1;
                }
            }
        }
        if membership {
            for &key in &self.membership {
                if cache.evict(key) {
                    log::trace!("evicted `{}` because entity set changed", display(cache, key));
                    evicted += 1;
                }
            }
        }
        evicted
    }

    /// Count of edges from the type.
    pub fn dependents(&self, kind: ComponentType) -> usize {
        self.edges.get(&kind).map_or(0, HashSet::len)
    }

    pub fn clear(&mut self) {
        self.edges.clear();
        self.membership.clear();
    }
}

fn display(cache: &QueryCache, key: QueryKey) -> String {
    cache
        .query(key)
        .map_or_else(|| format!("{:?}", key), ToString::to_string)
}
