//! Utilities for *entities* in ECS.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, Local};
use slotmap::new_key_type;
use uuid::Uuid;

use super::component::{BoxedComponent, Bundle, Component, ComponentType};

mod tests;

new_key_type! {
    /// Key of the *entity* registered in the [registry](crate::ecs::Registry).
    pub struct EntityKey;
}

/// Uniquely identified container of components.
///
/// Entity holds at most one component of each type.
/// It is created by the caller and then moved into the [registry](crate::ecs::Registry),
/// which gives out only shared references to it. This way the set of component types
/// of a registered entity can be changed only through the registry.
///
pub struct Entity {
    id: String,
    components: HashMap<ComponentType, BoxedComponent>,
    created: DateTime<Local>,
}

impl Entity {
    /// Creates an empty entity with generated unique identifier.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Creates an empty entity with provided identifier.
    pub fn with_id<T>(id: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            id: id.into(),
            components: HashMap::new(),
            created: Local::now(),
        }
    }

    /// Attaches component to this entity, replacing previous one of the same type.
    pub fn with<T>(mut self, component: T) -> Self
    where
        T: Component,
    {
        self.insert(component);
        self
    }

    /// Attaches all components of the bundle to this entity.
    pub fn with_bundle<B>(mut self, bundle: B) -> Self
    where
        B: Bundle,
    {
        for component in bundle.into_components() {
            self.insert_boxed(component);
        }
        self
    }

    /// Unique identifier of this entity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Inserts component of type `T` and attaches it to the entity.
    /// If component was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    pub fn insert<T>(&mut self, component: T) -> Option<T>
    where
        T: Component,
    {
        let prev = self.insert_boxed(BoxedComponent::new(component))?;
        prev.downcast().ok()
    }

    /// Same as [`insert`](Entity::insert) but for component with erased type.
    pub fn insert_boxed(&mut self, component: BoxedComponent) -> Option<BoxedComponent> {
        self.components.insert(component.component_type(), component)
    }

    /// Removes component of type `T` and detaches it from the entity.
    ///
    /// Returns component that was previously attached to the entity.
    ///
    pub fn remove<T>(&mut self) -> Option<T>
    where
        T: Component,
    {
        let prev = self.components.remove(&ComponentType::of::<T>())?;
        prev.downcast().ok()
    }

    /// Returns `true` if component of type `T` is attached to the entity.
    pub fn has<T>(&self) -> bool
    where
        T: Component,
    {
        self.has_type(ComponentType::of::<T>())
    }

    /// Returns `true` if component of given type is attached to the entity.
    pub fn has_type(&self, kind: ComponentType) -> bool {
        self.components.contains_key(&kind)
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self) -> Option<&T>
    where
        T: Component,
    {
        self.components
            .get(&ComponentType::of::<T>())?
            .downcast_ref()
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Component,
    {
        self.components
            .get_mut(&ComponentType::of::<T>())?
            .downcast_mut()
    }

    /// Returns iterator over types of all components attached to the entity.
    pub fn component_types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.components.keys().copied()
    }

    /// Count of components attached to the entity.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components attached to the entity.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Moment of time when this entity was created.
    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    /// Time passed since creation of this entity.
    pub fn age(&self) -> Duration {
        Local::now() - self.created
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut types: Vec<_> = self.component_types().collect();
        types.sort();
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("components", &types)
            .finish()
    }
}
