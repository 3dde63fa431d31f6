//! Durable storage layer.
//!
//! Storage is a key-value port injected into the session store, so the core
//! is testable against an in-memory fake and runs against a JSON file on
//! disk in production.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Slot keys as constants.
pub mod slots {
    pub const WORKOUTS: &str = "workouts";
}

/// Key-value persistence port.
///
/// All calls are blocking and synchronous; the session store serializes
/// access through `&mut self`, so backends need no internal locking.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous value.
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Delete the slot entirely. Removing an absent slot is not an error.
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}
