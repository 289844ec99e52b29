use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use tracing::info;

/// normalized channel name -> poster url
///
/// loaded once on startup and never touched again, there is no way to mutate it after `load` so
/// it can be shared behind an Arc without any locking
#[derive(Debug, Clone, Default)]
pub struct LogoTable {
    logos: HashMap<String, String>,
}

impl LogoTable {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read logo table at {}", path.display()))?;

        let table = Self::from_json(&raw)
            .with_context(|| format!("Failed to parse logo table at {}", path.display()))?;

        info!("loaded {} channel logos from {}", table.len(), path.display());

        Ok(table)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let logos: HashMap<String, String> =
            serde_json::from_str(raw).context("Logo table must be a JSON object of strings")?;

        Ok(Self { logos })
    }

    /// expects an already normalized key, see `name_utils::normalize_name`
    pub fn poster_for(&self, normalized_name: &str) -> &str {
        self.logos
            .get(normalized_name)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}

impl FromIterator<(String, String)> for LogoTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            logos: iter.into_iter().collect(),
        }
    }
}
