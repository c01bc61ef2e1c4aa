//! # Storage Layer
//!
//! The resume lives in a single durable slot. Three pieces cooperate:
//!
//! - [`backend::StorageBackend`]: raw slot I/O. [`fs_backend::FsBackend`] writes
//!   `resume.json` into the data directory, [`mem_backend::MemBackend`] keeps it in
//!   memory for tests and can simulate write failures.
//! - [`persist::Persister`]: encodes the whole [`Document`](crate::model::Document)
//!   as JSON. It is the only code that touches the slot's contents.
//! - [`document_store::DocumentStore`]: owns the in-memory document and writes
//!   it through after every mutation.
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── resume.json   # the whole document, pretty-printed
//! └── config.json   # CLI configuration
//! ```
//!
//! The store performs no validation. Records reach it already checked by the
//! form controllers in [`crate::forms`].

pub mod backend;
pub mod document_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod persist;

pub use backend::StorageBackend;
pub use document_store::DocumentStore;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use persist::Persister;

/// Production store backed by the filesystem.
pub type FileStore = DocumentStore<FsBackend>;

/// Store used in tests.
pub type InMemoryStore = DocumentStore<MemBackend>;
