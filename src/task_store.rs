//! The task list, and how it maps to a storage slot
//!
//! The mutators ([`add`], [`toggle`], [`delete`]) are pure: they never touch the list they are given, and return a new one.
//! Persisting the result is up to the caller, see [`TaskStore::save`].

use std::error::Error;

use chrono::{DateTime, TimeZone};

use crate::traits::KeyValueStorage;
use crate::task::{Task, TaskId, TaskIdGenerator};
use crate::config::STORAGE_KEY;


/// Reads and writes a whole task list from/to a single storage slot
#[derive(Debug)]
pub struct TaskStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// A store that uses the default `"tasks"` slot
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self { storage, key: key.to_string() }
    }

    pub fn storage(&self) -> &S { &self.storage }
    pub fn storage_mut(&mut self) -> &mut S { &mut self.storage }

    /// Read the task list.
    ///
    /// An empty list is returned in case nothing has been stored yet.
    /// A stored value that cannot be decoded is an error.
    pub fn load(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        match self.storage.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(content) => {
                let tasks: Vec<Task> = serde_json::from_str(&content)
                    .map_err(|err| format!("Invalid content for key {:?}: {}", self.key, err))?;
                log::debug!("Loaded {} tasks", tasks.len());
                Ok(tasks)
            }
        }
    }

    /// Replace the stored task list with `tasks`
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), Box<dyn Error>> {
        let content = serde_json::to_string(tasks)?;
        self.storage.set_item(&self.key, &content)
    }
}


/// Append a new task.
///
/// Nothing is added (and no id is drawn from `ids`) in case `text` is blank
pub fn add<Tz: TimeZone>(tasks: &[Task], text: &str, ids: &mut TaskIdGenerator, now: &DateTime<Tz>) -> Vec<Task> {
    let text = text.trim();
    if text.is_empty() {
        return tasks.to_vec();
    }

    let mut new_tasks = Vec::with_capacity(tasks.len() + 1);
    new_tasks.extend_from_slice(tasks);
    new_tasks.push(Task::new(ids.next(now, tasks), text.to_string()));
    new_tasks
}

/// Invert the completion status of the task with the given id (if any)
pub fn toggle(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter()
        .map(|task| if task.id() == id { task.toggled() } else { task.clone() })
        .collect()
}

/// Remove the task with the given id (if any)
pub fn delete(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter()
        .filter(|task| task.id() != id)
        .cloned()
        .collect()
}
