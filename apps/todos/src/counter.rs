//! The `counter` slice: counts list-changing actions.
//!
//! The counter has no actions of its own. It reacts to the action types of
//! other slices it was configured with, and counts every such dispatch,
//! including ones the other slice turned into a no-op.

use crate::environment::TodoEnvironment;
use crate::types::ChangeCounter;
use slicekit_core::{action::ActionType, effect::Effect, reducer::Reducer, SmallVec};
use std::marker::PhantomData;

/// Reducer incrementing a [`ChangeCounter`] on selected action types
///
/// Generic over the action type it observes.
#[derive(Debug, Clone, Copy)]
pub struct ChangeCounterReducer<A> {
    counted: &'static [&'static str],
    _phantom: PhantomData<fn(A)>,
}

impl<A> ChangeCounterReducer<A> {
    /// Count every action whose type is in `counted`
    #[must_use]
    pub const fn new(counted: &'static [&'static str]) -> Self {
        Self {
            counted,
            _phantom: PhantomData,
        }
    }

    /// Whether an action of this type is counted
    #[must_use]
    pub fn counts(&self, action_type: &str) -> bool {
        self.counted.contains(&action_type)
    }
}

impl<A: ActionType> Reducer for ChangeCounterReducer<A> {
    type State = ChangeCounter;
    type Action = A;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if self.counts(action.action_type()) {
            state.increment();
        }

        SmallVec::new()
    }
}
