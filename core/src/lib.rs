//! # Slicekit Core
//!
//! Core traits and types for building application state out of slices.
//!
//! A slice is an independently addressable portion of the application state
//! paired with the reducer that transitions it. Slices are composed into a
//! single top-level state by the utilities in [`composition`], and driven by
//! the `Store` in the runtime crate.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, `Clone`-able data for a slice
//! - **Action**: A description of an intended change (operation + payload)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits (e.g. [`environment::IdGenerator`])
//!
//! ## Example
//!
//! ```
//! use slicekit_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CountState {
//!     count: u64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CountAction {
//!     Bump,
//! }
//!
//! struct CountReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = CountState;
//!     type Action = CountAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CountState,
//!         action: CountAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CountAction>; 4]> {
//!         match action {
//!             CountAction::Bump => state.count += 1,
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! let mut state = CountState::default();
//! let _ = CountReducer.reduce(&mut state, CountAction::Bump, &());
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Action module - naming of actions across slices
///
/// Every action belongs to a slice and carries a stable, slice-qualified
/// type name such as `"todos/create"`. Cross-slice reactions and logging key
/// on this name rather than on the concrete Rust type.
pub mod action {
    /// Gives an action its slice-qualified type name.
    ///
    /// Usually implemented with `#[derive(Action)]` from `slicekit-macros`.
    ///
    /// # Example
    ///
    /// ```
    /// use slicekit_core::action::ActionType;
    ///
    /// enum LightAction {
    ///     On,
    ///     Off,
    /// }
    ///
    /// impl ActionType for LightAction {
    ///     fn action_type(&self) -> &'static str {
    ///         match self {
    ///             Self::On => "light/on",
    ///             Self::Off => "light/off",
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(LightAction::Off.action_type(), "light/off");
    /// ```
    pub trait ActionType {
        /// Returns the `"<slice>/<operation>"` name of this action
        fn action_type(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// The state is handed in by exclusive reference and owned by the caller, so
/// a snapshot cloned before the call never observes the transition.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The slice state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Implementations update `state` in place and return effect
        /// descriptions for the runtime to execute. They never fail: inputs
        /// the reducer cannot act on leave the state unchanged.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Parallel(effects) => effects.iter().all(Effect::is_none),
                Effect::Future(_) => false,
            }
        }

        /// Lift an effect of a child action type into a parent action type
        ///
        /// Used when a slice reducer is scoped into a larger state so that
        /// actions its effects produce re-enter the store as parent actions.
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            F: Fn(Action) -> B + Clone + Send + Sync + 'static,
            Action: 'static,
            B: 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => Effect::Parallel(
                    effects.into_iter().map(|effect| effect.map(f.clone())).collect(),
                ),
                Effect::Future(fut) => Effect::Future(Box::pin(async move { fut.await.map(f) })),
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    /// Produces fresh identifiers for newly created entities
    ///
    /// Implementations must not repeat an identifier for the lifetime of the
    /// process.
    pub trait IdGenerator: Send + Sync {
        /// Returns the next unused identifier
        fn next_id(&self) -> String;
    }

    /// Random v4 UUIDs rendered as hyphenated strings
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidIdGenerator;

    impl IdGenerator for UuidIdGenerator {
        fn next_id(&self) -> String {
            uuid::Uuid::new_v4().to_string()
        }
    }
}
