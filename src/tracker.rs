//! The application state: the task list, where it is persisted, and what time it is

use std::error::Error;
use std::time::Instant;

use crate::traits::{Clock, KeyValueStorage};
use crate::task::{Task, TaskId, TaskIdGenerator};
use crate::task_store::{self, TaskStore};
use crate::clock::ClockState;


/// Owns everything the day tracker displays.
///
/// The in-memory task list is authoritative during a session. It is written back to storage after every operation that changed it.
#[derive(Debug)]
pub struct Tracker<S: KeyValueStorage, C: Clock> {
    store: TaskStore<S>,
    tasks: Vec<Task>,
    ids: TaskIdGenerator,

    clock: C,
    clock_state: ClockState,
}

impl<S: KeyValueStorage, C: Clock> Tracker<S, C> {
    /// Load the task list from `storage`, and capture the current time.
    ///
    /// In case the stored task list is unreadable, the tracker starts with an empty list
    pub fn open(storage: S, clock: C) -> Self {
        let store = TaskStore::new(storage);
        let tasks = match store.load() {
            Ok(tasks) => tasks,
            Err(err) => {
                log::warn!("Invalid stored task list: {}. Starting with an empty list", err);
                Vec::new()
            }
        };
        log::info!("Tracker opened with {} tasks", tasks.len());

        let ids = TaskIdGenerator::seeded_from(&tasks);
        let clock_state = ClockState::new(&clock, Instant::now());
        Self { store, tasks, ids, clock, clock_state }
    }

    pub fn tasks(&self) -> &[Task] { &self.tasks }
    pub fn clock_state(&self) -> &ClockState { &self.clock_state }
    pub fn store(&self) -> &TaskStore<S> { &self.store }

    /// Add a task. Returns whether a task has actually been added (blank texts are ignored)
    pub fn add(&mut self, text: &str) -> Result<bool, Box<dyn Error>> {
        let now = self.clock.now();
        let new_tasks = task_store::add(&self.tasks, text, &mut self.ids, &now);
        self.replace(new_tasks)
    }

    /// Toggle the completion status of a task. Returns whether such a task exists
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, Box<dyn Error>> {
        let new_tasks = task_store::toggle(&self.tasks, id);
        self.replace(new_tasks)
    }

    /// Delete a task. Returns whether such a task existed
    pub fn delete(&mut self, id: TaskId) -> Result<bool, Box<dyn Error>> {
        let new_tasks = task_store::delete(&self.tasks, id);
        self.replace(new_tasks)
    }

    /// Refresh the displayed time, if it is due. Returns whether it has been refreshed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.clock_state.tick(&self.clock, now)
    }

    /// Adopt `new_tasks` and persist it, unless it is the same as the current list.
    ///
    /// The new list is kept even if it could not be saved
    fn replace(&mut self, new_tasks: Vec<Task>) -> Result<bool, Box<dyn Error>> {
        if new_tasks == self.tasks {
            return Ok(false);
        }
        self.tasks = new_tasks;

        if let Err(err) = self.store.save(&self.tasks) {
            log::warn!("Unable to save the task list: {}", err);
            return Err(err);
        }
        Ok(true)
    }
}
