//! Utilities for *components* in ECS.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

pub use signature::{Bundle, Signature};

mod signature;
mod tests;

/// Objects of this trait represent *component* of ECS.
///
/// Components are plain data: registry never looks inside of them,
/// only at their [type](ComponentType).
///
pub trait Component: Any {}

impl<T> Component for T where T: Any {}

/// Identity of the *component type*, not of the component instance.
///
/// Equality, hashing and ordering use [`TypeId`] only,
/// the type name is kept for log messages.
///
#[derive(Copy, Clone)]
pub struct ComponentType {
    id: TypeId,
    name: &'static str,
}

impl ComponentType {
    /// Returns identity of the component type `T`.
    pub fn of<T>() -> Self
    where
        T: Component,
    {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying [`TypeId`] of the component type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Name of the component type, for diagnostics only.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentType {}

impl Hash for ComponentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl PartialOrd for ComponentType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComponentType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `foo::bar::Position` -> `Position`, generics are printed as is
        let name = match self.name.find('<') {
            Some(generics) => &self.name[..generics],
            None => self.name,
        };
        let short = name.rsplit("::").next().unwrap_or(name);
        write!(f, "{}{}", short, &self.name[name.len()..])
    }
}

/// Component instance with erased type.
///
/// Used to pass lists of components of different types at once.
///
pub struct BoxedComponent {
    kind: ComponentType,
    value: Box<dyn Any>,
}

impl BoxedComponent {
    /// Erases type of the component.
    pub fn new<T>(component: T) -> Self
    where
        T: Component,
    {
        Self {
            kind: ComponentType::of::<T>(),
            value: Box::new(component),
        }
    }

    /// Type of the component inside.
    pub fn component_type(&self) -> ComponentType {
        self.kind
    }

    /// Returns component back if it has type `T`.
    pub fn downcast<T>(self) -> Result<T, Self>
    where
        T: Component,
    {
        let kind = self.kind;
        match self.value.downcast::<T>() {
            Ok(component) => Ok(*component),
            Err(value) => Err(Self { kind, value }),
        }
    }

    /// Retrieves an immutable reference to component if it has type `T`.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Component,
    {
        self.value.downcast_ref()
    }

    /// Retrieves a mutable reference to component if it has type `T`.
    pub fn downcast_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Component,
    {
        self.value.downcast_mut()
    }
}

impl fmt::Debug for BoxedComponent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("BoxedComponent").field(&self.kind).finish()
    }
}
