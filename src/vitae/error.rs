use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitaeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The in-memory document changed but the durable copy could not be written.
    #[error("Could not save resume: {0}")]
    Persist(#[source] Box<VitaeError>),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Nothing to export: add your name, education or experience first")]
    EmptyResume,

    #[error("Api Error: {0}")]
    Api(String),
}

impl VitaeError {
    /// Wraps a storage failure that happened after an in-memory mutation was applied.
    pub fn persist(source: VitaeError) -> Self {
        VitaeError::Persist(Box::new(source))
    }

    pub fn is_persist(&self) -> bool {
        matches!(self, VitaeError::Persist(_))
    }
}

pub type Result<T> = std::result::Result<T, VitaeError>;
