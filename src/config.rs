use crate::storage::{LocalStorage, STORAGE_FILE};
use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// Directory holding the task file. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    fn path() -> Option<PathBuf> {
        ProjectDirs::from("com", "trakr", "trakr").map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Read config.toml if present; a missing file is not an error.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::path()
            && path.exists()
        {
            let raw = fs::read_to_string(&path)?;
            return Ok(toml::from_str(&raw)?);
        }
        Ok(Self::default())
    }

    /// Where the task list lives. Precedence: TRAKR_DATA_DIR env var,
    /// then the config `data_dir`, then the platform data directory.
    pub fn data_file(&self) -> Option<PathBuf> {
        if let Ok(dir) = env::var("TRAKR_DATA_DIR") {
            return Some(PathBuf::from(dir).join(STORAGE_FILE));
        }
        if let Some(dir) = &self.data_dir {
            return Some(dir.join(STORAGE_FILE));
        }
        LocalStorage::default_path()
    }
}
