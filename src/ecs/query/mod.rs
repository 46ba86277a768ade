//! Utilities for *queries* over entities in ECS.

use std::fmt;

use super::component::{Component, ComponentType, Signature};
use super::Entity;


/// Predicate over component types attached to the entity.
///
/// Entity matches the query if it has components of all `must_have` types
/// and has no components of `must_not_have` types.
///
/// Both lists are kept sorted and without duplicates,
/// so queries built in different order are equal and have equal hashes.
/// This makes the query its own cache key.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    must_have: Vec<ComponentType>,
    must_not_have: Vec<ComponentType>,
}

impl Query {
    /// Creates a query which matches every entity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires component of type `T` to be attached.
    pub fn with<T>(self) -> Self
    where
        T: Component,
    {
        self.with_type(ComponentType::of::<T>())
    }

    /// Requires component of type `T` to be absent.
    pub fn without<T>(self) -> Self
    where
        T: Component,
    {
        self.without_type(ComponentType::of::<T>())
    }

    /// Requires components of all types of the signature to be attached.
    pub fn with_all<S>(mut self) -> Self
    where
        S: Signature,
    {
        for kind in S::component_types().iter() {
            insert_sorted(&mut self.must_have, *kind);
        }
        self
    }

    /// Requires components of all types of the signature to be absent.
    pub fn without_all<S>(mut self) -> Self
    where
        S: Signature,
    {
        for kind in S::component_types().iter() {
            insert_sorted(&mut self.must_not_have, *kind);
        }
        self
    }

    /// Requires component of given type to be attached.
    pub fn with_type(mut self, kind: ComponentType) -> Self {
        insert_sorted(&mut self.must_have, kind);
        self
    }

    /// Requires component of given type to be absent.
    pub fn without_type(mut self, kind: ComponentType) -> Self {
        insert_sorted(&mut self.must_not_have, kind);
        self
    }

    /// Types which must be attached, in canonical order.
    pub fn must_have(&self) -> &[ComponentType] {
        &self.must_have
    }

    /// Types which must be absent, in canonical order.
    pub fn must_not_have(&self) -> &[ComponentType] {
        &self.must_not_have
    }

    /// All types this query refers to.
    pub fn component_types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.must_have
            .iter()
            .chain(self.must_not_have.iter())
            .copied()
    }

    /// Returns `true` if the entity satisfies this query.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.must_have.iter().all(|&kind| entity.has_type(kind))
            && !self.must_not_have.iter().any(|&kind| entity.has_type(kind))
    }
}

fn insert_sorted(types: &mut Vec<ComponentType>, kind: ComponentType) {
    if let Err(index) = types.binary_search(&kind) {
        types.insert(index, kind);
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.must_have.is_empty() && self.must_not_have.is_empty() {
            return f.write_str("*");
        }
        let with = self.must_have.iter().map(|kind| ('+', kind));
        let without = self.must_not_have.iter().map(|kind| ('-', kind));
        for (i, (sign, kind)) in with.chain(without).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", sign, kind)?;
        }
        Ok(())
    }
}
