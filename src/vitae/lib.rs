//! # vitae
//!
//! A structured resume builder. A resume is one [`model::Document`]: personal
//! information, four editable entry collections (education, experience, skills,
//! projects), two render-only collections (certificates, languages) and the
//! selected presentation template.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (src/vitae/cli/)                                        │
//! │  argument parsing, prompts, terminal output, exit codes      │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼──────────────────────────────┐
//! │  API facade (api.rs)                                         │
//! │  one method per user operation, returns CmdResult            │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼──────────────────────────────┐
//! │  Commands (commands/*.rs)  ◄──►  Forms (forms/*.rs)          │
//! │  business flow, messages         draft state machine,        │
//! │                                  field validation            │
//! └───────────────┬───────────────────────────────┬─────────────┘
//!                 │                               │
//! ┌───────────────▼──────────────┐  ┌─────────────▼─────────────┐
//! │  Store (store/)              │  │  Render / Export           │
//! │  DocumentStore: CRUD and     │  │  (render/, export.rs)      │
//! │  write-through persistence   │  │  templates to Markdown,    │
//! │  over a StorageBackend       │  │  Markdown to HTML          │
//! └──────────────────────────────┘  └────────────────────────────┘
//! ```
//!
//! Only the CLI touches the terminal. Everything below the API returns
//! structured data and can be driven from tests with [`store::MemBackend`].
//!
//! ## Persistence
//!
//! Every mutation is written through to a single slot (`resume.json` in the
//! data directory). A failed write never rolls back the in-memory change: the
//! caller gets an error message saying the change only lives in this session.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod forms;
pub mod id;
pub mod model;
pub mod render;
pub mod store;
