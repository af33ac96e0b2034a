use crate::idgen::{ClockIds, IdGenerator};
use crate::model::Task;
use crate::storage::LocalStorage;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// Owns the ordered task list and mirrors it to disk after every
/// mutation. The list is append-only: tasks are never removed or
/// reordered, and ids are never reused.
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: Box<dyn IdGenerator>,
    path: Option<PathBuf>,
}

impl TaskStore {
    /// Load persisted state from `path`, or start empty when there is
    /// none. `None` keeps the store in memory only (no home directory).
    pub fn open(path: Option<PathBuf>) -> Self {
        Self::with_generator(path, Box::new(ClockIds::new()))
    }

    pub fn with_generator(path: Option<PathBuf>, mut ids: Box<dyn IdGenerator>) -> Self {
        let tasks = match &path {
            Some(p) => LocalStorage::load(p),
            None => vec![],
        };
        if let Some(max) = tasks.iter().map(|t| t.id).max() {
            ids.reserve_up_to(max);
        }
        Self { tasks, ids, path }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Append a new pending task and save. Input that trims to nothing
    /// is a no-op (no task, no write); the stored title keeps the
    /// original, untrimmed text.
    pub fn add_task(&mut self, text: &str) -> Result<Option<u64>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text));
        self.persist()?;
        Ok(Some(id))
    }

    /// Flip the completed flag of the task with `id` and save. An
    /// unknown id is ignored: nothing changes and nothing is written.
    pub fn toggle_task(&mut self, id: u64) -> Result<bool> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()?;
                Ok(true)
            }
            None => {
                debug!("toggle ignored, no task with id {}", id);
                Ok(false)
            }
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(path) = &self.path {
            LocalStorage::save(path, &self.tasks)?;
        }
        Ok(())
    }
}
