use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_COMMENT_STORE_URL: &str = "http://localhost:5001";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub directory_url: String,
    pub comment_store_url: String,
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            comment_store_url: DEFAULT_COMMENT_STORE_URL.to_string(),
            theme: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir at {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    base_dir("XDG_CONFIG_HOME", ".config")
        .join("roster")
        .join("config.toml")
}

pub fn log_path() -> PathBuf {
    base_dir("XDG_STATE_HOME", ".local/state")
        .join("roster")
        .join("roster.log")
}

fn base_dir(xdg_var: &str, home_fallback: &str) -> PathBuf {
    if let Ok(dir) = env::var(xdg_var) {
        return Path::new(&dir).to_path_buf();
    }

    if let Ok(home) = env::var("HOME") {
        return Path::new(&home).join(home_fallback);
    }

    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
