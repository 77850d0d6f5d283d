use thiserror::Error;

#[derive(Error, Debug)]
pub enum RendezvousError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("No unused {kind} id found after {attempts} attempts; increase store.id_length")]
    IdSpaceExhausted { kind: &'static str, attempts: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file already exists at {0}")]
    AlreadyInitialized(String),

    #[error("Duplicate {kind} id in seed data: {id}")]
    DuplicateSeedId { kind: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RendezvousError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RendezvousError>;
