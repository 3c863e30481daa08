use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;

/// All settings of a wrap run. Defaults reproduce the stock behavior:
/// `.ts`/`.tsx` files under `src`, `console.log`/`warn`/`debug` calls,
/// guarded by `if (process.env.DEBUG)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WrapConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File-name suffixes that make a file a candidate.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Call names to wrap, without the opening parenthesis.
    #[serde(default = "default_calls")]
    pub calls: Vec<String>,

    /// Condition text inserted in front of each matched call.
    #[serde(default = "default_guard")]
    pub guard: String,

    /// Glob patterns, relative to `root`, of candidates to leave alone.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub strict_guard: bool,

    #[serde(default)]
    pub atomic_writes: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            calls: default_calls(),
            guard: default_guard(),
            exclude: Vec::new(),
            strict_guard: false,
            atomic_writes: false,
        }
    }
}

// =============================================================================
// Default value functions (match the stock script's hardcoded behavior)
// =============================================================================

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_extensions() -> Vec<String> {
    vec![".ts".to_string(), ".tsx".to_string()]
}

fn default_calls() -> Vec<String> {
    vec![
        "console.log".to_string(),
        "console.warn".to_string(),
        "console.debug".to_string(),
    ]
}

fn default_guard() -> String {
    "if (process.env.DEBUG)".to_string()
}

impl WrapConfig {
    /// Load a config file. Keys that are absent fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_file(path, "read config")
            .map_err(|e| e.with_hint("Check the --config path"))?;
        let config: WrapConfig = serde_json::from_str(&content)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::config_invalid_value(
                "extensions",
                None,
                "at least one file suffix is required",
            ));
        }

        if let Some(ext) = self.extensions.iter().find(|e| e.is_empty()) {
            return Err(Error::config_invalid_value(
                "extensions",
                Some(ext.clone()),
                "file suffixes must not be empty",
            ));
        }

        if self.calls.is_empty() {
            return Err(Error::config_invalid_value(
                "calls",
                None,
                "at least one call name is required",
            ));
        }

        if let Some(call) = self.calls.iter().find(|c| c.trim().is_empty()) {
            return Err(Error::config_invalid_value(
                "calls",
                Some(call.clone()),
                "call names must not be blank",
            ));
        }

        if self.guard.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "guard",
                Some(self.guard.clone()),
                "guard must not be blank",
            )
            .with_hint("Remove the key to use the default guard"));
        }

        Ok(())
    }
}
