use crate::errors::TodoError;
use crate::models::todo::Todo;
use std::sync::{Arc, Mutex, MutexGuard};

const SAMPLE_TODOS: [&str; 5] = [
    "Buy groceries",
    "Walk the dog",
    "Read a book",
    "Write some Rust",
    "Clean the kitchen",
];

/// In-memory todo list shared by the request handlers.
///
/// Clones share the same list. Ids are assigned in increasing order and are
/// never reused, since todos are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(Mutex::new(todos)),
        }
    }

    /// A store pre-filled with a handful of sample todos.
    pub fn seeded() -> Self {
        let todos = SAMPLE_TODOS
            .iter()
            .zip(1..)
            .map(|(title, id)| Todo::new(id, *title))
            .collect();
        Self::from_todos(todos)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Todo>> {
        // A panic while holding the lock cannot leave a half-appended Vec.
        self.todos.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list(&self) -> Vec<Todo> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Todos whose title contains `term`. An empty term matches nothing.
    pub fn search(&self, term: &str) -> Vec<Todo> {
        if term.is_empty() {
            return Vec::new();
        }
        self.lock()
            .iter()
            .filter(|todo| todo.title.contains(term))
            .cloned()
            .collect()
    }

    /// Append a new todo and return the updated list.
    pub fn add(&self, title: &str) -> Result<Vec<Todo>, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let mut todos = self.lock();
        let id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        todos.push(Todo::new(id, title));
        tracing::debug!(id, title, "added todo");
        Ok(todos.clone())
    }
}
