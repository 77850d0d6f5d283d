use crate::error::Result;
use crate::model::{Event, Location, Participant, User};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial records loaded into a fresh store.
///
/// Read from YAML; since YAML is a superset of JSON, JSON seed files work
/// too. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub locations: Vec<Location>,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl SeedData {
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
