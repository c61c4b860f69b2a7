//! # Slicekit Testing
//!
//! Testing utilities and helpers for slicekit reducers and stores.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Effect assertion helpers
//! - Deterministic environment mocks ([`SequentialIdGenerator`])
//! - [`RecordingMiddleware`] for observing what a `Store` applied
//!
//! ## Example
//!
//! ```ignore
//! use slicekit_testing::{SequentialIdGenerator, ReducerTest};
//!
//! ReducerTest::new(TodosReducer::new())
//!     .with_env(TodosEnvironment::new(Arc::new(SequentialIdGenerator::new("todo"))))
//!     .given_state(TodoListState::default())
//!     .when_action(TodosAction::create("Buy milk"))
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .run();
//! ```

/// Given-When-Then harness for reducers
pub mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits and runtime hooks
pub mod mocks {
    use slicekit_core::action::ActionType;
    use slicekit_core::environment::IdGenerator;
    use slicekit_runtime::Middleware;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};

    /// Predictable ids: `<prefix>-1`, `<prefix>-2`, ...
    ///
    /// # Example
    ///
    /// ```
    /// use slicekit_testing::mocks::SequentialIdGenerator;
    /// use slicekit_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new("todo");
    /// assert_eq!(ids.next_id(), "todo-1");
    /// assert_eq!(ids.next_id(), "todo-2");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: String,
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `<prefix>-1`
        #[must_use]
        pub fn new(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                next: AtomicU64::new(1),
            }
        }

        /// Number of ids handed out so far
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.next.load(Ordering::SeqCst) - 1
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            format!("{}-{n}", self.prefix)
        }
    }

    /// Always returns the same id; for exercising collision handling
    #[derive(Debug, Clone)]
    pub struct FixedIdGenerator(pub String);

    impl IdGenerator for FixedIdGenerator {
        fn next_id(&self) -> String {
            self.0.clone()
        }
    }

    /// Records the type of every action a Store applied, in order
    ///
    /// Clones share the same log, so keep one clone and install the other.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingMiddleware {
        applied: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RecordingMiddleware {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Action types recorded so far
        #[must_use]
        pub fn applied(&self) -> Vec<&'static str> {
            self.applied
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl<S, A> Middleware<S, A> for RecordingMiddleware
    where
        A: ActionType,
    {
        fn after(&self, action: &A, _state: &S) {
            self.applied
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(action.action_type());
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedIdGenerator, RecordingMiddleware, SequentialIdGenerator};
