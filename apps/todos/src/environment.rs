//! Dependencies injected into the to-do reducers.

use slicekit_core::environment::{IdGenerator, UuidIdGenerator};
use std::sync::Arc;

/// Environment shared by every slice of the to-do store
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of ids for created items
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TodoEnvironment {
    /// Random UUID ids
    fn default() -> Self {
        Self::new(Arc::new(UuidIdGenerator))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}
