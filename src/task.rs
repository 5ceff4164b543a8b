/// Task completion state. The only transition is `NotDone -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  NotDone,
  Done,
}

impl Status {
  pub fn as_str(&self) -> &'static str {
    match self {
      Status::NotDone => "not_done",
      Status::Done => "done",
    }
  }

  pub fn parse(token: &str) -> Option<Status> {
    match token {
      "not_done" => Some(Status::NotDone),
      "done" => Some(Status::Done),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
  id: uuid::Uuid,
  name: String,
  priority: u8,
  status: Status,
}

impl Task {
  pub fn new(name: &str, priority: u8) -> Self {
    Self {
      id: uuid::Uuid::new_v4(),
      name: name.to_owned(),
      priority,
      status: Status::NotDone,
    }
  }

  /// Rebuilds a task from its persisted fields, keeping the stored id.
  pub(crate) fn restored(id: uuid::Uuid, name: &str, priority: u8, status: Status) -> Self {
    Self {
      id,
      name: name.to_owned(),
      priority,
      status,
    }
  }

  pub fn id(&self) -> uuid::Uuid {
    self.id
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  pub fn priority(&self) -> u8 {
    self.priority
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn is_done(&self) -> bool {
    self.status == Status::Done
  }

  pub fn complete(&mut self) {
    if self.status == Status::NotDone {
      self.status = Status::Done;
    }
  }
}
