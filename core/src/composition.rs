//! Reducer composition utilities
//!
//! Application state is assembled from slices. This module provides the two
//! ways slices are wired together:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action, in order
//! - **`scope_reducer`**: Focus a slice reducer on one field of a larger state
//!   and on the subset of actions addressed to it
//!
//! A typical container scopes every slice reducer onto its field and combines
//! the scoped reducers:
//!
//! ```
//! use slicekit_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
//! use slicekit_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct AppState {
//!     lamp: bool,
//!     presses: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Lamp(bool),
//! }
//!
//! struct LampReducer;
//!
//! impl Reducer for LampReducer {
//!     type State = bool;
//!     type Action = bool;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut bool, on: bool, _env: &()) -> SmallVec<[Effect<bool>; 4]> {
//!         *state = on;
//!         SmallVec::new()
//!     }
//! }
//!
//! struct PressReducer;
//!
//! impl Reducer for PressReducer {
//!     type State = u32;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut u32, _action: AppAction, _env: &()) -> SmallVec<[Effect<AppAction>; 4]> {
//!         *state += 1;
//!         SmallVec::new()
//!     }
//! }
//!
//! let app: CombinedReducer<AppState, AppAction, ()> = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         LampReducer,
//!         |s: &AppState| &s.lamp,
//!         |s: &mut AppState, lamp| s.lamp = lamp,
//!         |a: AppAction| match a {
//!             AppAction::Lamp(on) => Some(on),
//!         },
//!         AppAction::Lamp,
//!     )),
//!     Box::new(scope_reducer(
//!         PressReducer,
//!         |s: &AppState| &s.presses,
//!         |s: &mut AppState, presses| s.presses = presses,
//!         Some,
//!         |a: AppAction| a,
//!     )),
//! ]);
//!
//! let mut state = AppState::default();
//! let _ = app.reduce(&mut state, AppAction::Lamp(true), &());
//! assert!(state.lamp);
//! assert_eq!(state.presses, 1);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, in the order given, and all effects are
/// collected and concatenated. Every reducer sees the state as left by the
/// reducers before it.
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers in the combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a slice reducer to a field of a larger state and to a subset of its actions.
///
/// - `get_state` / `set_state` select the slice inside the parent state.
/// - `to_local` extracts the slice's action from a parent action; `None`
///   means the action is not addressed to this slice, and the parent state
///   is left untouched.
/// - `from_local` wraps actions produced by the slice's effects back into
///   the parent action type.
///
/// The slice is copied out, reduced, and written back, so the parent never
/// holds a partially updated slice.
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    to_local: fn(A) -> Option<SubA>,
    from_local: fn(SubA) -> A,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        to_local,
        from_local,
    }
}

/// A scoped reducer that operates on a subset of state and actions.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    to_local: fn(A) -> Option<SubA>,
    from_local: fn(SubA) -> A,
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(local_action) = (self.to_local)(action) else {
            return SmallVec::new();
        };

        let mut sub_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut sub_state, local_action, env);
        (self.set_state)(state, sub_state);

        let from_local = self.from_local;
        effects
            .into_iter()
            .map(|effect| effect.map(from_local))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smallvec;

    #[derive(Clone, Debug, Default)]
    struct ParentState {
        total: i32,
        label: String,
        seen: u32,
    }

    #[derive(Clone, Debug)]
    enum ParentAction {
        Add(i32),
        Label(String),
    }

    struct AddReducer;

    impl Reducer for AddReducer {
        type State = i32;
        type Action = i32;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut i32,
            action: i32,
            _env: &(),
        ) -> SmallVec<[Effect<i32>; 4]> {
            *state += action;
            smallvec![Effect::Future(Box::pin(async move { Some(action) }))]
        }
    }

    struct LabelReducer;

    impl Reducer for LabelReducer {
        type State = String;
        type Action = String;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut String,
            action: String,
            _env: &(),
        ) -> SmallVec<[Effect<String>; 4]> {
            *state = action;
            SmallVec::new()
        }
    }

    struct SeenReducer;

    impl Reducer for SeenReducer {
        type State = u32;
        type Action = ParentAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut u32,
            _action: ParentAction,
            _env: &(),
        ) -> SmallVec<[Effect<ParentAction>; 4]> {
            *state += 1;
            SmallVec::new()
        }
    }

    fn scoped_add() -> impl Reducer<State = ParentState, Action = ParentAction, Environment = ()>
    + Send
    + Sync {
        scope_reducer(
            AddReducer,
            |p: &ParentState| &p.total,
            |p: &mut ParentState, total| p.total = total,
            |a| match a {
                ParentAction::Add(n) => Some(n),
                ParentAction::Label(_) => None,
            },
            ParentAction::Add,
        )
    }

    fn scoped_label() -> impl Reducer<State = ParentState, Action = ParentAction, Environment = ()>
    + Send
    + Sync {
        scope_reducer(
            LabelReducer,
            |p: &ParentState| &p.label,
            |p: &mut ParentState, label| p.label = label,
            |a| match a {
                ParentAction::Label(label) => Some(label),
                ParentAction::Add(_) => None,
            },
            ParentAction::Label,
        )
    }

    #[test]
    fn test_scope_reducer_ignores_foreign_actions() {
        let scoped = scoped_add();
        let mut state = ParentState {
            total: 5,
            label: "keep".to_string(),
            seen: 0,
        };

        let effects = scoped.reduce(&mut state, ParentAction::Label("x".to_string()), &());
        assert!(effects.is_empty());
        assert_eq!(state.total, 5);
        assert_eq!(state.label, "keep");

        let _ = scoped.reduce(&mut state, ParentAction::Add(3), &());
        assert_eq!(state.total, 8);
        assert_eq!(state.label, "keep");
    }

    #[tokio::test]
    async fn test_scope_reducer_lifts_effects() {
        let scoped = scoped_add();
        let mut state = ParentState::default();

        let mut effects = scoped.reduce(&mut state, ParentAction::Add(2), &());
        assert_eq!(effects.len(), 1);
        let Some(Effect::Future(fut)) = effects.pop() else {
            unreachable!("AddReducer returns one future");
        };
        assert!(matches!(fut.await, Some(ParentAction::Add(2))));
    }

    #[test]
    fn test_combine_reducers_runs_in_order() {
        let combined: CombinedReducer<ParentState, ParentAction, ()> = combine_reducers(vec![
            Box::new(scoped_add()),
            Box::new(scoped_label()),
            Box::new(scope_reducer(
                SeenReducer,
                |p: &ParentState| &p.seen,
                |p: &mut ParentState, seen| p.seen = seen,
                Some,
                |a| a,
            )),
        ]);
        assert_eq!(combined.len(), 3);

        let mut state = ParentState::default();

        let effects = combined.reduce(&mut state, ParentAction::Add(4), &());
        assert_eq!(state.total, 4);
        assert_eq!(state.seen, 1);
        assert_eq!(effects.len(), 1);

        let effects = combined.reduce(&mut state, ParentAction::Label("Alice".to_string()), &());
        assert_eq!(state.label, "Alice");
        assert_eq!(state.total, 4);
        assert_eq!(state.seen, 2);
        assert!(effects.is_empty());
    }
}
