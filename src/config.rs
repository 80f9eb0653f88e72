//! Configuration loaded from `fluentsql.toml`.
//!
//! ```toml
//! [compiler]
//! dialect = "sqlserver"
//! warn_on_binding_mismatch = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::transpiler::Dialect;

pub const CONFIG_FILE: &str = "fluentsql.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompilerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default)]
    pub dialect: Dialect,
    /// Log a warning when placeholder and binding counts differ
    #[serde(default = "default_true")]
    pub warn_on_binding_mismatch: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            warn_on_binding_mismatch: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> QueryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| QueryError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `./fluentsql.toml`, then `<config dir>/fluentsql/config.toml`,
    /// falling back to defaults when neither exists.
    pub fn discover() -> QueryResult<Self> {
        match Self::candidates().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("fluentsql").join("config.toml"));
        }
        paths
    }
}
