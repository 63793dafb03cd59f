use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Database namespace under `data_dir`; tables live in `data_dir` itself when unset.
    #[serde(default)]
    pub database: Option<String>,

    #[serde(default)]
    pub strict_insert_arity: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database: None,
            strict_insert_arity: false,
        }
    }
}

impl EngineConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn table_dir(&self) -> PathBuf {
        match &self.database {
            Some(database) => self.data_dir.join(database),
            None => self.data_dir.clone(),
        }
    }

    // Missing fields take their defaults.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&contents).map_err(|e| {
            EngineError::Unknown(format!("invalid config {}: {}", path.display(), e))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
