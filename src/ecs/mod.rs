//! Entity Component System (ECS) utilities: entities, components
//! and registry which answers cached queries over them.

pub use component::{BoxedComponent, Bundle, Component, ComponentType, Signature};
pub use entity::{Entity, EntityKey};
pub use query::Query;
pub use registry::{Matches, Registry, Statistics, TeardownCallback};
pub use system::{DeltaTime, System};

mod component;
mod entity;
mod query;
mod registry;
mod system;
