/// To-do list with priorities
use serde::{Deserialize, Serialize};

use crate::bookmark_data::{timestamp_days_ago, timestamp_now};
use crate::error::EditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank, lower comes first
    fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Serialized form, also used as the `<option>` value
    pub fn value(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Priority::High => "priority-high",
            Priority::Medium => "priority-medium",
            Priority::Low => "priority-low",
        }
    }

    pub fn from_value(value: &str) -> Option<Priority> {
        match value {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}

/// Serialized as a bare JSON array
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList { todos: Vec::new() }
    }

    /// Starter list shown on first run
    pub fn welcome() -> Self {
        let todo = |id, text: &str, completed, priority, days_ago| Todo {
            id,
            text: text.to_string(),
            completed,
            priority,
            created_at: timestamp_days_ago(days_ago),
        };

        TodoList {
            todos: vec![
                todo(1, "Plan the week", false, Priority::High, 0),
                todo(2, "Open a new tab", true, Priority::Medium, 1),
                todo(3, "Drag a bookmark into a folder", false, Priority::Low, 2),
            ],
        }
    }

    pub fn add(&mut self, text: &str, priority: Priority) -> Result<u64, EditError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EditError::EmptyText);
        }

        let id = self.todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.todos.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
            priority,
            created_at: timestamp_now(),
        });
        Ok(id)
    }

    pub fn toggle(&mut self, id: u64) -> bool {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .map(|todo| {
                todo.completed = !todo.completed;
            })
            .is_some()
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let original_len = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() < original_len
    }

    pub fn filtered(&self, filter: TodoFilter) -> Vec<Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// High before medium before low; ties keep insertion order
    pub fn sorted_by_priority(&self) -> Vec<Todo> {
        let mut todos = self.todos.clone();
        todos.sort_by_key(|t| t.priority.rank());
        todos
    }

    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }
}
