use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `Persister` handles the encoding and `DocumentStore` the business logic.
pub trait StorageBackend {
    /// Read the raw slot contents.
    /// Returns Ok(None) if the slot does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self) -> Result<Option<String>>;

    /// Replace the slot contents.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, contents: &str) -> Result<()>;

    /// Remove the slot. Removing an absent slot is not an error.
    fn remove_slot(&self) -> Result<()>;

    /// Where the slot lives. For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn slot_path(&self) -> PathBuf;
}
