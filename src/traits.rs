use std::error::Error;

use chrono::{DateTime, Local};

/// A durable, string-keyed storage, where every key holds a single string document
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` in case nothing has ever been stored there
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;
    /// Replaces the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;
}

/// A source of wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}
