use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new<S: Into<String>>(id: u64, title: S) -> Self {
        Todo {
            id,
            title: title.into(),
            completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}
