//! The top-level container: slices composed into one state and one reducer.
//!
//! Every dispatched [`AppAction`] goes through the slice reducers in a fixed
//! order: `todos`, then `selectedTodo`, then `counter`. The counter runs last
//! and reacts to the action type, never to what the `todos` slice did.

use crate::counter::ChangeCounterReducer;
use crate::environment::TodoEnvironment;
use crate::selected_todo::{SelectedTodoAction, SelectedTodoReducer};
use crate::todos::{TodosAction, TodosReducer};
use crate::types::{ChangeCounter, SelectedTodoState, TodoId, TodoItem, TodoListState};
use serde::{Deserialize, Serialize};
use slicekit_core::action::ActionType;
use slicekit_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use slicekit_core::environment::IdGenerator;
use slicekit_core::{effect::Effect, reducer::Reducer, SmallVec};
use slicekit_runtime::{Store, StoreConfig};

/// Items every session starts with: `(description, is_complete)`
pub const SEED_TODOS: [(&str, bool); 3] = [
    ("Learn React", true),
    ("Learn Redux", true),
    ("Learn Redux-ToolKit", false),
];

/// State of the whole application
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// The to-do list
    pub todos: TodoListState,
    /// The selected item
    pub selected_todo: SelectedTodoState,
    /// Number of list-changing actions dispatched
    pub counter: ChangeCounter,
}

impl AppState {
    /// Session start state: the seed list, no selection, zero count
    #[must_use]
    pub fn seeded(ids: &dyn IdGenerator) -> Self {
        Self {
            todos: TodoListState::from_items(SEED_TODOS.iter().map(|(description, is_complete)| {
                TodoItem::new(TodoId::from(ids.next_id()), (*description).to_string())
                    .completed(*is_complete)
            })),
            selected_todo: SelectedTodoState::default(),
            counter: ChangeCounter::default(),
        }
    }
}

/// Every action the application dispatches
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppAction {
    /// Action of the `todos` slice
    Todos(TodosAction),
    /// Action of the `selectedTodo` slice
    SelectedTodo(SelectedTodoAction),
}

impl ActionType for AppAction {
    fn action_type(&self) -> &'static str {
        match self {
            Self::Todos(action) => action.action_type(),
            Self::SelectedTodo(action) => action.action_type(),
        }
    }
}

impl From<TodosAction> for AppAction {
    fn from(action: TodosAction) -> Self {
        Self::Todos(action)
    }
}

impl From<SelectedTodoAction> for AppAction {
    fn from(action: SelectedTodoAction) -> Self {
        Self::SelectedTodo(action)
    }
}

/// Reducer of the whole application
pub struct AppReducer {
    inner: CombinedReducer<AppState, AppAction, TodoEnvironment>,
}

impl AppReducer {
    /// Wires the three slices into [`AppState`]
    #[must_use]
    pub fn new() -> Self {
        let inner: CombinedReducer<AppState, AppAction, TodoEnvironment> = combine_reducers(vec![
            Box::new(scope_reducer(
                TodosReducer::new(),
                |app: &AppState| &app.todos,
                |app: &mut AppState, todos| app.todos = todos,
                |action: AppAction| match action {
                    AppAction::Todos(action) => Some(action),
                    AppAction::SelectedTodo(_) => None,
                },
                AppAction::Todos,
            )),
            Box::new(scope_reducer(
                SelectedTodoReducer::new(),
                |app: &AppState| &app.selected_todo,
                |app: &mut AppState, selected| app.selected_todo = selected,
                |action: AppAction| match action {
                    AppAction::SelectedTodo(action) => Some(action),
                    AppAction::Todos(_) => None,
                },
                AppAction::SelectedTodo,
            )),
            Box::new(scope_reducer(
                ChangeCounterReducer::<AppAction>::new(TodosAction::ACTION_TYPES),
                |app: &AppState| &app.counter,
                |app: &mut AppState, counter| app.counter = counter,
                Some,
                |action: AppAction| action,
            )),
        ]);

        Self { inner }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        self.inner.reduce(state, action, env)
    }
}

/// The application's store
pub type AppStore = Store<AppState, AppAction, TodoEnvironment, AppReducer>;

/// Builds the single application store, seeded through the environment's id generator
#[must_use]
pub fn configure_store(env: TodoEnvironment, config: StoreConfig) -> AppStore {
    let initial = AppState::seeded(env.ids.as_ref());
    tracing::debug!(
        todos = initial.todos.len(),
        action_logging = config.action_logging,
        "Configuring store"
    );
    Store::with_config(initial, AppReducer::new(), env, config)
}
