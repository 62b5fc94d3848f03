use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tsglotrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for catalogs, relative to the project root.
    #[serde(default = "default_catalogs_root", alias = "translationsDir")]
    pub catalogs_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Contexts skipped by every message rule (e.g. "QPlatformTheme").
    #[serde(default)]
    pub ignore_contexts: Vec<String>,
    /// Texts allowed to stay identical to their source (brand names, ...).
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_check_accelerators")]
    pub check_accelerators: bool,
}

fn default_catalogs_root() -> String {
    ".".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["**/*.ts".to_string()]
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/target/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

fn default_check_accelerators() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogs_root: default_catalogs_root(),
            includes: default_includes(),
            ignores: default_ignores(),
            ignore_contexts: Vec::new(),
            ignore_texts: Vec::new(),
            check_accelerators: default_check_accelerators(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `includes` or `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded configuration");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
