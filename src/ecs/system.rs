//! Utilities for *systems* in ECS.

use std::time::Duration;

use crate::error::Result;

use super::{Matches, Query, Registry};

/// Type which represents duration between two updates.
pub type DeltaTime = Duration;

/// Objects of this trait represent *system* of ECS.
///
/// System is run by [`Registry::run`] which evaluates its query
/// and hands the result to [`update`](System::update).
///
pub trait System {
    /// Query which selects entities handled by this system.
    fn query(&self) -> &Query;

    /// Handles state of the current system with entities matched by the query.
    ///
    /// Registry could be changed here, but `matches` will not reflect these changes.
    ///
    fn update(&mut self, registry: &mut Registry, matches: &Matches, delta_time: DeltaTime)
        -> Result<()>;
}
