use super::backend::StorageBackend;
use crate::error::{Result, VitaeError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const SLOT_FILENAME: &str = "resume.json";

/// Filesystem slot: one JSON file inside the data directory.
pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: SLOT_FILENAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(VitaeError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path()) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VitaeError::Io(e)),
        }
    }

    fn write_slot(&self, contents: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".resume-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, contents).map_err(VitaeError::Io)?;
        fs::rename(&tmp_path, self.slot_path()).map_err(VitaeError::Io)?;

        Ok(())
    }

    fn remove_slot(&self) -> Result<()> {
        match fs::remove_file(self.slot_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VitaeError::Io(e)),
        }
    }

    fn slot_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }
}
