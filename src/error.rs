use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("task name can't be empty")]
  EmptyTaskName,

  #[error("priority must be in range from 1 to 10, got {0}")]
  PriorityOutOfRange(u8),

  #[error("task name can't contain the '|' separator")]
  NameContainsDelimiter,

  #[error("there is no task with id: {0}")]
  TaskNotFound(uuid::Uuid),

  #[error("malformed record at line {line}: {reason}")]
  MalformedRecord { line: usize, reason: String },

  #[error("storage error: {0}")]
  Io(#[from] std::io::Error),
}
