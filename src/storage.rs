use crate::model::Task;
use anyhow::Result;
use directories::ProjectDirs;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the persisted task list, fixed across versions.
pub const STORAGE_FILE: &str = "tasks.json";

pub struct LocalStorage;

impl LocalStorage {
    /// Task file in the platform data directory, created on first use.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(proj) = ProjectDirs::from("com", "trakr", "trakr") {
            let data_dir = proj.data_dir();
            if !data_dir.exists() {
                let _ = fs::create_dir_all(data_dir);
            }
            return Some(data_dir.join(STORAGE_FILE));
        }
        None
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Run `f` while holding an exclusive lock file next to `path`.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = FileExt::unlock(&lock_file);
        result
    }

    pub fn save(path: &Path, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(tasks)?;
        Self::with_lock(path, || Self::atomic_write(path, &json))?;
        debug!("saved {} task(s) to {}", tasks.len(), path.display());
        Ok(())
    }

    /// Load the task list. A missing file, unreadable file, or contents
    /// that do not decode as a task list all yield an empty list; the
    /// corrupt case is logged but never surfaced as an error.
    pub fn load(path: &Path) -> Vec<Task> {
        if !path.exists() {
            return vec![];
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Vec<Task>>(&json) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!("ignoring malformed task data in {}: {}", path.display(), e);
                    vec![]
                }
            },
            Err(e) => {
                warn!("could not read {}: {}", path.display(), e);
                vec![]
            }
        }
    }
}
