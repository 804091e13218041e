//! This crate provides a day tracker: today's date, and a to-do list that survives restarts.
//!
//! The task list is a plain ordered list of [`Task`]s. The [`task_store`] module provides pure operations on it,
//! and maps it to a single slot of a [`KeyValueStorage`](traits::KeyValueStorage) (see the [`storage`] module).
//!
//! A [`Tracker`] ties everything together: it owns the list, saves it after every change, and keeps track of the displayed date. \
//! The [`view`] and [`app`] modules render it in a terminal.

pub mod traits;

mod task;
pub use task::{Task, TaskId, TaskIdGenerator};
pub mod task_store;
pub use task_store::TaskStore;
pub mod tracker;
pub use tracker::Tracker;

pub mod clock;
pub mod storage;
pub mod view;
pub mod app;

pub mod config;
pub mod mock_behaviour;
