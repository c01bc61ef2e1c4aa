//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every vitae operation, whichever client drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (selector strings become [`Selector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O beyond what the store and config do, prints nothing, and holds
//! no business rules. Those belong in `commands/*.rs` and `forms/*.rs`.
//!
//! ## Generic Over the Storage Backend
//!
//! `VitaeApi<B: StorageBackend>` works with any backend:
//! - Production: `VitaeApi<FsBackend>`
//! - Testing: `VitaeApi<MemBackend>`

use crate::commands;
use crate::commands::Selector;
use crate::error::{Result, VitaeError};
use crate::export::ExportFormat;
use crate::forms::FormRecord;
use crate::model::{Document, Template};
use crate::render::Renderer;
use crate::store::{DocumentStore, StorageBackend};
use std::path::{Path, PathBuf};

pub struct VitaeApi<B: StorageBackend> {
    store: DocumentStore<B>,
    renderer: Renderer,
    config_dir: PathBuf,
}

impl<B: StorageBackend> VitaeApi<B> {
    pub fn new(backend: B, config_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: DocumentStore::open(backend),
            renderer: Renderer::new()?,
            config_dir,
        })
    }

    pub fn document(&self) -> &Document {
        self.store.document()
    }

    pub fn store(&self) -> &DocumentStore<B> {
        &self.store
    }

    pub fn list_entries<R: FormRecord>(&self) -> Result<CmdResult> {
        commands::entries::list::<R, B>(&self.store)
    }

    pub fn add_entry<R: FormRecord>(&mut self, changes: &[EntryChange]) -> Result<CmdResult> {
        commands::entries::add::<R, B>(&mut self.store, changes)
    }

    pub fn edit_entry<R: FormRecord>(
        &mut self,
        selector: &str,
        changes: &[EntryChange],
    ) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::entries::edit::<R, B>(&mut self.store, &selector, changes)
    }

    pub fn remove_entry<R: FormRecord>(&mut self, selector: &str) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::entries::remove::<R, B>(&mut self.store, &selector)
    }

    /// Summary line of the entry a selector points at, for confirmation prompts.
    pub fn describe_entry<R: FormRecord>(&self, selector: &str) -> Result<Option<String>> {
        let selector = parse_selector(selector)?;
        let id = commands::helpers::resolve::<R, B>(&self.store, &selector);
        Ok(id
            .and_then(|id| self.store.get::<R>(&id))
            .map(|entry| entry.data.summary()))
    }

    pub fn personal_info(&self) -> Result<CmdResult> {
        commands::personal::show(&self.store)
    }

    pub fn update_personal_info(&mut self, changes: &[(String, String)]) -> Result<CmdResult> {
        commands::personal::update(&mut self.store, changes)
    }

    pub fn template(&self) -> Result<CmdResult> {
        commands::template::show(&self.store)
    }

    pub fn set_template(&mut self, name: &str) -> Result<CmdResult> {
        commands::template::set(&mut self.store, name)
    }

    pub fn preview(&self, template: Option<Template>) -> Result<CmdResult> {
        commands::preview::run(&self.store, &self.renderer, template)
    }

    pub fn export(&self, format: ExportFormat) -> Result<CmdResult> {
        commands::export::run(&self.store, &self.renderer, format)
    }

    pub fn save(&self) -> Result<CmdResult> {
        commands::session::save(&self.store)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::session::load(&mut self.store)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::session::reset(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn parse_selector(input: &str) -> Result<Selector> {
    input.parse::<Selector>().map_err(VitaeError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, EntryChange, ListedEntry, MessageLevel};
