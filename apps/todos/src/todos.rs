//! The `todos` slice: the to-do list state machine.
//!
//! Every transition is total. An action naming an id that is not in the
//! list leaves the list exactly as it was; nothing here returns an error.

use crate::environment::TodoEnvironment;
use crate::types::{TodoId, TodoItem, TodoListState};
use serde::{Deserialize, Serialize};
use slicekit_core::{effect::Effect, reducer::Reducer, SmallVec};
use slicekit_macros::Action;

/// Actions of the `todos` slice
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[action(slice = "todos")]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TodosAction {
    /// Append a new, not yet completed item with a fresh id
    Create {
        /// Description of the new item; may be empty
        description: String,
    },

    /// Replace the description of an item
    Edit {
        /// Item to edit
        id: TodoId,
        /// New description
        description: String,
    },

    /// Set (not flip) the completion flag of an item
    #[serde(rename_all = "camelCase")]
    Toggle {
        /// Item to update
        id: TodoId,
        /// New completion flag
        is_complete: bool,
    },

    /// Delete an item
    Remove {
        /// Item to delete
        id: TodoId,
    },
}

impl TodosAction {
    /// Action creator for [`TodosAction::Create`]
    #[must_use]
    pub fn create(description: impl Into<String>) -> Self {
        Self::Create {
            description: description.into(),
        }
    }

    /// Action creator for [`TodosAction::Edit`]
    #[must_use]
    pub fn edit(id: impl Into<TodoId>, description: impl Into<String>) -> Self {
        Self::Edit {
            id: id.into(),
            description: description.into(),
        }
    }

    /// Action creator for [`TodosAction::Toggle`]
    #[must_use]
    pub fn toggle(id: impl Into<TodoId>, is_complete: bool) -> Self {
        Self::Toggle {
            id: id.into(),
            is_complete,
        }
    }

    /// Action creator for [`TodosAction::Remove`]
    #[must_use]
    pub fn remove(id: impl Into<TodoId>) -> Self {
        Self::Remove { id: id.into() }
    }
}

/// Reducer for the `todos` slice
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = TodoListState;
    type Action = TodosAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodosAction::Create { description } => {
                let id = TodoId::from(env.ids.next_id());
                if !state.push(TodoItem::new(id.clone(), description)) {
                    tracing::warn!(%id, "Id generator returned an id already in the list; item not created");
                }
            },
            TodosAction::Edit { id, description } => match state.get_mut(&id) {
                Some(item) => item.description = description,
                None => tracing::trace!(%id, "edit: no such item"),
            },
            TodosAction::Toggle { id, is_complete } => match state.get_mut(&id) {
                Some(item) => item.is_complete = is_complete,
                None => tracing::trace!(%id, "toggle: no such item"),
            },
            TodosAction::Remove { id } => {
                if state.remove(&id).is_none() {
                    tracing::trace!(%id, "remove: no such item");
                }
            },
        }

        SmallVec::new()
    }
}
