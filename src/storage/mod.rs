//! Durable key-value storages the task list can be persisted to
//!
//! [`FileStorage`] is what the application uses. [`MemoryStorage`] keeps everything in RAM, and can be told to fail
//! (see [`MockBehaviour`](crate::mock_behaviour::MockBehaviour)), which is handy in tests.

pub mod file_storage;
pub use file_storage::FileStorage;
pub mod memory_storage;
pub use memory_storage::MemoryStorage;
