//! To-do list store built from three slices.
//!
//! - `todos`: the ordered list of items (create, edit, toggle, remove)
//! - `selectedTodo`: which item, if any, is selected
//! - `counter`: how many list-changing actions have been dispatched
//!
//! Each slice owns its state, actions and reducer. [`AppReducer`] scopes the
//! slices onto [`AppState`] and [`configure_store`] builds the single store
//! that owns it.
//!
//! # Quick Start
//!
//! ```no_run
//! use slicekit_runtime::StoreConfig;
//! use todos::{configure_store, AppAction, TodoEnvironment, TodosAction};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = configure_store(TodoEnvironment::default(), StoreConfig::from_env());
//!
//! store.send(AppAction::from(TodosAction::create("Buy milk"))).await?;
//!
//! let state = store.snapshot().await;
//! println!("Total todos: {}", state.todos.len());
//! println!("Changes: {}", state.counter.value());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod counter;
pub mod environment;
pub mod selected_todo;
pub mod todos;
pub mod types;

pub use app::{configure_store, AppAction, AppReducer, AppState, AppStore, SEED_TODOS};
pub use counter::ChangeCounterReducer;
pub use environment::TodoEnvironment;
pub use selected_todo::{SelectedTodoAction, SelectedTodoReducer};
pub use todos::{TodosAction, TodosReducer};
pub use types::{ChangeCounter, DuplicateTodoId, SelectedTodoState, TodoId, TodoItem, TodoListState};
