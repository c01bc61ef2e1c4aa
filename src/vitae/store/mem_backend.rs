use super::backend::StorageBackend;
use crate::error::{Result, VitaeError};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since vitae is single-threaded.
/// Clones share the same slot, so a test can keep a handle to inspect or
/// corrupt what the store wrote.
#[derive(Clone, Default)]
pub struct MemBackend {
    slot: Rc<RefCell<Option<String>>>,
    simulate_write_error: Rc<RefCell<bool>>,
    writes: Rc<RefCell<usize>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose slot already holds `contents`.
    pub fn with_contents(contents: &str) -> Self {
        let backend = Self::new();
        *backend.slot.borrow_mut() = Some(contents.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw slot contents, if any.
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write_slot(&self, contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(VitaeError::Store("Simulated write error".to_string()));
        }
        *self.slot.borrow_mut() = Some(contents.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn remove_slot(&self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }

    fn slot_path(&self) -> PathBuf {
        PathBuf::from("memory://resume.json")
    }
}
