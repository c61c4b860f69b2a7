//! Domain types for the to-do store.
//!
//! Every slice state is an owned value. The store hands reducers exclusive
//! access and readers take clones, so no two holders ever share a list.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A list of items named the same id twice
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate todo id: {0}")]
pub struct DuplicateTodoId(pub TodoId);

/// Opaque identifier of a to-do item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps an identifier string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, fixed at creation
    pub id: TodoId,
    /// Free-text description
    pub description: String,
    /// Whether the item is done
    pub is_complete: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed item
    #[must_use]
    pub const fn new(id: TodoId, description: String) -> Self {
        Self {
            id,
            description,
            is_complete: false,
        }
    }

    /// Sets the completion flag, builder style
    #[must_use]
    pub fn completed(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }
}

/// Ordered list of to-do items with unique ids
///
/// New items go to the end. Lookups are linear scans.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TodoItem>", into = "Vec<TodoItem>")]
pub struct TodoListState {
    items: Vec<TodoItem>,
}

impl TodoListState {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a list from items, keeping only the first item of each id
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        let mut seen = HashSet::new();
        Self {
            items: items
                .into_iter()
                .filter(|item| seen.insert(item.id.clone()))
                .collect(),
        }
    }

    /// Items in list order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Iterates items in list order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_complete).count()
    }

    /// Looks up an item by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Position of the item with this id
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Checks whether an item with this id exists
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.position(id).is_some()
    }

    /// The most recently appended item
    #[must_use]
    pub fn last(&self) -> Option<&TodoItem> {
        self.items.last()
    }

    /// Appends an item unless its id is taken; returns whether it was added
    pub(crate) fn push(&mut self, item: TodoItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub(crate) fn get_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    /// Removes the item with this id, keeping the order of the others
    pub(crate) fn remove(&mut self, id: &TodoId) -> Option<TodoItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }
}

impl TryFrom<Vec<TodoItem>> for TodoListState {
    type Error = DuplicateTodoId;

    /// Unlike [`TodoListState::from_items`], a repeated id is an error
    fn try_from(items: Vec<TodoItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = items.iter().find(|item| !seen.insert(&item.id)) {
            return Err(DuplicateTodoId(duplicate.id.clone()));
        }
        Ok(Self { items })
    }
}

impl From<TodoListState> for Vec<TodoItem> {
    fn from(state: TodoListState) -> Self {
        state.items
    }
}

impl<'a> IntoIterator for &'a TodoListState {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The currently selected item, if any
///
/// Not checked against the list: a selection may name an item that has
/// since been removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedTodoState(Option<TodoId>);

impl SelectedTodoState {
    /// Creates a selection
    #[must_use]
    pub const fn new(id: Option<TodoId>) -> Self {
        Self(id)
    }

    /// The selected id
    #[must_use]
    pub const fn id(&self) -> Option<&TodoId> {
        self.0.as_ref()
    }

    /// Dereferences the selection against a list
    ///
    /// Returns `None` when nothing is selected or the selected item is gone.
    #[must_use]
    pub fn resolve<'a>(&self, todos: &'a TodoListState) -> Option<&'a TodoItem> {
        self.0.as_ref().and_then(|id| todos.get(id))
    }

    pub(crate) fn replace(&mut self, id: Option<TodoId>) {
        self.0 = id;
    }
}

/// Number of list-changing actions dispatched so far
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeCounter(u64);

impl ChangeCounter {
    /// Creates a counter at `value`
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Current count
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub(crate) const fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}
