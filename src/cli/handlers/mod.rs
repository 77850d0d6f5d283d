mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::RendezvousConfig;
use crate::graphql::RendezvousSchema;
use crate::store::{SeedData, Store, StoreHandle};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RendezvousConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: RendezvousConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Load the config from `config_path`, or search upward from `cwd`.
    pub fn load(config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => RendezvousConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RendezvousConfig::discover(cwd).context("Failed to load config")?,
        };
        Ok(Self::new(config, root))
    }

    /// Build a store, seeded from `seed` if given, else from the config's
    /// seed file, else empty.
    pub fn open_store(&self, seed: Option<PathBuf>) -> Result<StoreHandle> {
        let id_length = self.config.store.id_length;
        let seed_path = seed.or_else(|| self.config.seed_path(&self.root));

        let store = match seed_path {
            Some(path) => {
                let data = SeedData::load(&path)
                    .with_context(|| format!("Failed to read seed file {}", path.display()))?;
                let store = Store::from_seed(data, id_length)
                    .with_context(|| format!("Invalid seed file {}", path.display()))?;
                tracing::info!(path = %path.display(), "Loaded seed data");
                store
            }
            None => Store::new(id_length),
        };
        Ok(StoreHandle::new(store))
    }
}

/// Execute one request and print the JSON response.
fn execute_and_print(
    schema: &RendezvousSchema,
    query: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Variables must be a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
