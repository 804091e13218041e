//! To-do tasks

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{DateTime, TimeZone};


/// The identifier of a task.
///
/// It is derived from the creation timestamp (in milliseconds), and is serialized as a plain JSON number
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}
impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// The text as typed by the user, already trimmed
    text: String,
    completed: bool,
}

impl Task {
    /// Create a brand new, uncompleted task
    pub fn new(id: TaskId, text: String) -> Self {
        Self::new_with_parameters(id, text, false)
    }

    pub fn new_with_parameters(id: TaskId, text: String, completed: bool) -> Self {
        Self { id, text, completed }
    }

    pub fn id(&self) -> TaskId      { self.id         }
    pub fn text(&self) -> &str      { &self.text      }
    pub fn completed(&self) -> bool { self.completed  }

    /// Returns a copy of this task, with its completion status inverted
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}


/// Hands out task identifiers.
///
/// Identifiers follow the wall clock (milliseconds since the epoch), but are strictly increasing:
/// two tasks created within the same millisecond (or after the clock went backwards) still get distinct ids.
#[derive(Clone, Debug, Default)]
pub struct TaskIdGenerator {
    last: Option<i64>,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that will never hand out an id already used in `tasks`
    pub fn seeded_from(tasks: &[Task]) -> Self {
        Self {
            last: tasks.iter().map(|t| t.id().as_i64()).max(),
        }
    }

    /// Pick the id of a task created at `now`, that will be appended to `existing`
    pub fn next<Tz: TimeZone>(&mut self, now: &DateTime<Tz>, existing: &[Task]) -> TaskId {
        let candidate = now.timestamp_millis();
        let id = match self.last {
            Some(last) if candidate <= last => match last.checked_add(1) {
                Some(id) => id,
                None => {
                    // Ids ran out past the end of the range: reuse a hole, and stay in this mode
                    let id = lowest_unused_id(existing);
                    log::warn!("Task ids are exhausted, reusing id {}", id);
                    return TaskId(id);
                },
            },
            _ => candidate,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

/// The smallest non-negative id that no task of `existing` uses
fn lowest_unused_id(existing: &[Task]) -> i64 {
    let mut used: Vec<i64> = existing.iter()
        .map(|t| t.id().as_i64())
        .filter(|id| *id >= 0)
        .collect();
    used.sort_unstable();
    used.dedup();

    let mut id = 0;
    for used_id in used {
        if used_id != id {
            break;
        }
        id += 1;
    }
    id
}
