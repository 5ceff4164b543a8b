use log::{debug, error};

use crate::{
  error::Error,
  storage::{self, ListFile},
  task::Task,
  Config,
};

const MIN_PRIORITY: u8 = 1;
const MAX_PRIORITY: u8 = 10;

/// Task store bound to one list name. The in-memory collection is the source
/// of truth while the store is live; the backing file is rewritten in full on
/// `close` (or on drop, as a fallback).
pub struct TodoList {
  list_name: String,
  storage: ListFile,
  tasks: Vec<Task>,
  flushed: bool,
}

impl TodoList {
  pub fn open(list_name: &str) -> Result<Self, Error> {
    let config = Config::new();

    debug!("todolist store folder: {}", config.storage_dir_path);
    std::fs::create_dir_all(&config.storage_dir_path)?;

    Self::open_in(std::path::Path::new(&config.storage_dir_path), list_name)
  }

  pub fn open_in(storage_dir: &std::path::Path, list_name: &str) -> Result<Self, Error> {
    let filepath = storage::resolve_path(storage_dir, list_name);
    let mut storage = ListFile::open(&filepath)?;
    let tasks = storage.restore()?;

    Ok(Self {
      list_name: list_name.to_owned(),
      storage,
      tasks,
      flushed: false,
    })
  }

  pub fn list_name(&self) -> &str {
    self.list_name.as_str()
  }

  pub fn add_task(&mut self, name: &str, priority: u8) -> Result<(), Error> {
    let name = name.trim();
    if name.is_empty() {
      return Err(Error::EmptyTaskName);
    }
    if name.contains(storage::FIELD_DELIMITER) {
      return Err(Error::NameContainsDelimiter);
    }
    if priority < MIN_PRIORITY || priority > MAX_PRIORITY {
      return Err(Error::PriorityOutOfRange(priority));
    }

    self.tasks.push(Task::new(name, priority));
    Ok(())
  }

  pub fn complete_task(&mut self, task_id: uuid::Uuid) -> Result<(), Error> {
    let position = self
      .position_by_id(task_id)
      .ok_or(Error::TaskNotFound(task_id))?;

    self.tasks[position].complete();
    Ok(())
  }

  pub fn delete_task(&mut self, task_id: uuid::Uuid) -> Result<(), Error> {
    let position = self
      .position_by_id(task_id)
      .ok_or(Error::TaskNotFound(task_id))?;

    self.tasks.remove(position);
    Ok(())
  }

  /// All tasks sorted by priority, most urgent first. The sort is stable, so
  /// tasks sharing a priority keep their relative insertion order.
  pub fn tasks(&self) -> Vec<Task> {
    let mut tasks = self.tasks.clone();
    tasks.sort_by(|a, b| b.priority().cmp(&a.priority()));
    return tasks;
  }

  pub fn task_by_id(&self, task_id: uuid::Uuid) -> Option<Task> {
    self
      .position_by_id(task_id)
      .map(|position| self.tasks[position].clone())
  }

  pub fn shorten_id(&self, id: uuid::Uuid) -> String {
    let id_string = id.as_simple().to_string();
    format!(
      "{}..{}",
      &id_string[0..4],
      &id_string[id_string.len() - 4..id_string.len()]
    )
  }

  pub fn resolve_id(&self, short_id: &str) -> Option<uuid::Uuid> {
    if let Ok(id) = uuid::Uuid::parse_str(short_id) {
      return Some(id);
    }
    self
      .tasks
      .iter()
      .map(|task| task.id())
      .find(|&id| self.shorten_id(id) == short_id)
  }

  /// Explicit release: rewrites the backing file from the current collection.
  pub fn close(mut self) -> Result<(), Error> {
    self.flush()
  }

  fn flush(&mut self) -> Result<(), Error> {
    self.storage.flush(&self.tasks)?;
    self.flushed = true;
    Ok(())
  }

  fn position_by_id(&self, task_id: uuid::Uuid) -> Option<usize> {
    self.tasks.iter().position(|task| task.id() == task_id)
  }
}

impl Drop for TodoList {
  fn drop(&mut self) {
    if self.flushed {
      return;
    }
    if let Err(err) = self.flush() {
      error!("flush on drop failed for list {:?}: {}", self.list_name, err);
    }
  }
}
