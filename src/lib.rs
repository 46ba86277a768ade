//! Entity registry with cached component queries for simple game engine.
//!
//! Entities are containers of components of different types.
//! [`Registry`] stores them and answers [queries](Query) like
//! "all entities which have `Position` and `Velocity` but not `Frozen`",
//! caching results until some change of the registry could affect them.

pub use config::Config;
pub use ecs::{Entity, EntityKey, Matches, Query, Registry, System};
pub use error::{RegistryError, Result};

pub mod config;
pub mod ecs;
pub mod error;
