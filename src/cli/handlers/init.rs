use crate::config::RendezvousConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

pub fn handle_init(cwd: &Path, port: Option<u16>, seed: Option<PathBuf>) -> Result<()> {
    let mut config = RendezvousConfig::default();
    if let Some(port) = port {
        config.server.port = port;
    }
    config.store.seed = seed;

    let path = config.init(cwd).context("Failed to write config")?;
    println!("{} {}", "Initialized".green(), path.display());
    Ok(())
}
