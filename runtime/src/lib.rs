//! # Slicekit Runtime
//!
//! The Store runtime that dispatches actions through a reducer, runs
//! middleware around each transition and executes the returned effects.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, applies actions one at a time
//! - **Middleware**: Observes every transition (see [`LoggerMiddleware`])
//! - **Effect Executor**: Runs effect descriptions and feeds produced actions back
//!
//! ## Example
//!
//! ```ignore
//! use slicekit_runtime::{Store, StoreConfig};
//!
//! let store = Store::with_config(initial_state, my_reducer, environment, StoreConfig::from_env());
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use slicekit_core::{action::ActionType, effect::Effect, reducer::Reducer};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store configuration loaded from the environment
pub mod config;

/// Hooks around reducer execution
pub mod middleware;

pub use config::StoreConfig;
pub use middleware::{LoggerMiddleware, Middleware};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducers themselves never fail; these errors only concern the
    /// Store's own lifecycle.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// The Store and its dispatch loop
pub mod store {
    use super::{
        Arc, ActionType, Effect, LoggerMiddleware, Middleware, Reducer, RwLock, StoreConfig,
        StoreError,
    };
    use std::fmt::Debug;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; a single writer applies actions in order)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Middleware (observers of every transition)
    /// 5. Effect execution (with feedback loop)
    ///
    /// Cloning a Store yields another handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        middleware: Vec<Arc<dyn Middleware<S, A>>>,
        shutdown: Arc<AtomicBool>,
        /// Every applied action is broadcast to subscribers, in the order
        /// the actions were applied.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: ActionType + Send + Sync + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// No middleware is installed and the broadcast capacity is the default.
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::build(initial_state, reducer, environment, &StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// Installs [`LoggerMiddleware`] when `config.action_logging` is set.
        ///
        /// # Example
        ///
        /// ```ignore
        /// let store = Store::with_config(
        ///     AppState::seeded(&ids),
        ///     AppReducer::new(),
        ///     env,
        ///     StoreConfig::from_env(),
        /// );
        /// ```
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self
        where
            S: Debug,
            A: Debug,
        {
            let store = Self::build(initial_state, reducer, environment, &config);
            if config.action_logging {
                store.with_middleware(LoggerMiddleware)
            } else {
                store
            }
        }

        fn build(initial_state: S, reducer: R, environment: E, config: &StoreConfig) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                middleware: Vec::new(),
                shutdown: Arc::new(AtomicBool::new(false)),
                action_broadcast,
            }
        }

        /// Append a middleware; middleware runs in the order it was added
        #[must_use]
        pub fn with_middleware<M>(mut self, middleware: M) -> Self
        where
            M: Middleware<S, A> + 'static,
        {
            self.middleware.push(Arc::new(middleware));
            self
        }

        /// Number of installed middleware
        #[must_use]
        pub fn middleware_count(&self) -> usize {
            self.middleware.len()
        }

        /// Send an action to the store
        ///
        /// Applies and broadcasts the action under the write lock (middleware
        /// `before`, reducer, middleware `after`, broadcast), then starts the
        /// returned effects in the background. Returns once the new state
        /// is visible to readers.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!(
                    action_type = action.action_type(),
                    "Rejected action: store is shutting down"
                );
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let action_type = action.action_type();
            tracing::debug!(action_type, "Processing action");
            metrics::counter!("store.actions.total", "type" => action_type).increment(1);

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                for middleware in &self.middleware {
                    middleware.before(&action, &state);
                }

                let span = tracing::debug_span!("reducer_execution", action_type);
                let effects = span.in_scope(|| {
                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut state, action.clone(), &self.environment);
                    metrics::histogram!("store.reducer.duration_seconds")
                        .record(start.elapsed().as_secs_f64());
                    effects
                });

                for middleware in &self.middleware {
                    middleware.after(&action, &state);
                }

                // Sent under the lock: subscribers receive actions in the
                // order they were applied. No subscribers is not an error.
                let _ = self.action_broadcast.send(action);

                effects
            };

            tracing::trace!("Executing {} effects", effects.len());
            for effect in effects {
                self.execute_effect(effect);
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let open = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Clone the current state
        ///
        /// The snapshot is independent of the store: later actions do not
        /// change it.
        pub async fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state(S::clone).await
        }

        /// Subscribe to every action applied from now on
        ///
        /// Slow subscribers that fall more than the configured capacity
        /// behind receive `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Stop accepting actions
        ///
        /// Effects already running are left to finish; actions they produce
        /// are rejected.
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!("Store shut down");
            }
        }

        /// Returns true once [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        /// Execute an effect
        ///
        /// - `None`: No-op
        /// - `Future`: Spawns the computation, sends the resulting action if `Some`
        /// - `Parallel`: Executes each child effect
        fn execute_effect(&self, effect: Effect<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);

                    let store = self.clone();
                    tokio::spawn(async move {
                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            if let Err(error) = store.send(action).await {
                                tracing::debug!(%error, "Dropped action produced by effect");
                            }
                        }
                    });
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    for effect in effects {
                        self.execute_effect(effect);
                    }
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                middleware: self.middleware.clone(),
                shutdown: Arc::clone(&self.shutdown),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
