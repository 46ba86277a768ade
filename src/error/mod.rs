//! Utilities for entity registry error handling.

use thiserror::Error;

use crate::ecs::EntityKey;

/// Result of any registry operation which can return an error.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// General error type of entity registry.
///
/// Every error is local to the call which produced it:
/// registry state is left untouched when an error is returned.
///
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("entity with identifier `{0}` is already registered")]
    DuplicateIdentifier(String),

    #[error("there is no registered entity with key {0:?}")]
    UnknownEntity(EntityKey),
}
