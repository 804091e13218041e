use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use crate::traits::KeyValueStorage;
use crate::mock_behaviour::MockBehaviour;


/// A storage that only lives in memory
#[derive(Default, Debug, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,

    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that will succeed or fail according to `mock_behaviour`
    pub fn with_mock_behaviour(mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            mock_behaviour: Some(mock_behaviour),
            ..Self::default()
        }
    }

    /// How many successful `set_item` calls this storage has received
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Read a value, bypassing any mocked behaviour
    pub fn raw_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|s| s.as_str())
    }

    /// Store a value, bypassing any mocked behaviour. This is not counted as a write.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        if let Some(behaviour) = &self.mock_behaviour {
            behaviour.lock().map_err(|_| "mock behaviour mutex is poisoned")?.can_get_item()?;
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        if let Some(behaviour) = &self.mock_behaviour {
            behaviour.lock().map_err(|_| "mock behaviour mutex is poisoned")?.can_set_item()?;
        }
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_writes_leave_previous_value() {
        let behaviour = Arc::new(Mutex::new(MockBehaviour {
            set_item_behaviour: (1, 1),
            ..MockBehaviour::default()
        }));
        let mut storage = MemoryStorage::with_mock_behaviour(behaviour);

        storage.set_item("tasks", "[]").unwrap();
        assert!(storage.set_item("tasks", "[1]").is_err());
        assert_eq!(storage.get_item("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("tasks").unwrap(), None);
    }
}
