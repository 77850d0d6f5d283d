use crate::error::{RendezvousError, Result};
use crate::store::{DEFAULT_ID_LENGTH, MIN_ID_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".rendezvous.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RendezvousConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Seed file, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            id_length: default_id_length(),
            seed: None,
        }
    }
}

impl RendezvousConfig {
    /// Load the config file found upward from `start_path`.
    ///
    /// Returns the defaults and `start_path` as root when there is none.
    pub fn discover(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok((Self::default(), start_path.to_path_buf()))
            }
        }
    }

    /// Load a config file, returning it with the directory it lives in.
    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: RendezvousConfig = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, root))
    }

    pub fn validate(&self) -> Result<()> {
        if self.store.id_length < MIN_ID_LENGTH {
            return Err(RendezvousError::Config(format!(
                "store.id_length must be at least {}, got {}",
                MIN_ID_LENGTH, self.store.id_length
            )));
        }
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Seed file path resolved against `root`.
    pub fn seed_path(&self, root: &Path) -> Option<PathBuf> {
        self.store.seed.as_ref().map(|seed| root.join(seed))
    }

    /// Write a config file to `dir`, refusing to overwrite an existing one.
    pub fn init(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Err(RendezvousError::AlreadyInitialized(
                path.display().to_string(),
            ));
        }
        self.validate()?;
        self.save(&path)?;
        tracing::info!(path = %path.display(), "Wrote config");
        Ok(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
