//! The `selectedTodo` slice.

use crate::environment::TodoEnvironment;
use crate::types::{SelectedTodoState, TodoId};
use serde::{Deserialize, Serialize};
use slicekit_core::{effect::Effect, reducer::Reducer, SmallVec};
use slicekit_macros::Action;

/// Actions of the `selectedTodo` slice
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[action(slice = "selectedTodo")]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SelectedTodoAction {
    /// Replace the selection; `None` clears it
    Select {
        /// Item to select; need not exist in the list
        id: Option<TodoId>,
    },
}

impl SelectedTodoAction {
    /// Action creator for [`SelectedTodoAction::Select`]
    #[must_use]
    pub fn select<I: Into<TodoId>>(id: Option<I>) -> Self {
        Self::Select { id: id.map(Into::into) }
    }

    /// Action creator clearing the selection
    #[must_use]
    pub const fn clear() -> Self {
        Self::Select { id: None }
    }
}

/// Reducer for the `selectedTodo` slice
///
/// The selection is replaced wholesale on every action.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectedTodoReducer;

impl SelectedTodoReducer {
    /// Creates a new `SelectedTodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for SelectedTodoReducer {
    type State = SelectedTodoState;
    type Action = SelectedTodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SelectedTodoAction::Select { id } => state.replace(id),
        }

        SmallVec::new()
    }
}
