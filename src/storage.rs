use std::io::{BufRead, Seek, Write};

use log::debug;

use crate::error::Error;
use crate::task::{Status, Task};

pub const FIELD_DELIMITER: char = '|';
const LIST_FILE_EXTENSION: &str = "txt";

pub fn resolve_path(storage_dir: &std::path::Path, list_name: &str) -> std::path::PathBuf {
  storage_dir.join(format!("{}.{}", list_name, LIST_FILE_EXTENSION))
}

/// Backing file of one list. The handle is kept open for the whole store
/// lifetime; `restore` reads it back, `flush` truncates and rewrites it.
pub struct ListFile {
  filepath: std::path::PathBuf,
  file: std::fs::File,
}

impl ListFile {
  pub fn open(filepath: &std::path::Path) -> Result<Self, Error> {
    let file = std::fs::OpenOptions::new()
      .create(true)
      .read(true)
      .write(true)
      .open(filepath)?;

    Ok(Self {
      filepath: filepath.to_owned(),
      file,
    })
  }

  pub fn filepath(&self) -> &std::path::Path {
    self.filepath.as_path()
  }

  pub fn restore(&mut self) -> Result<Vec<Task>, Error> {
    self.file.rewind()?;

    let mut tasks = Vec::new();
    let reader = std::io::BufReader::new(&self.file);
    for (line_index, line) in reader.lines().enumerate() {
      let line = line?;
      let record = line.trim();
      if record.is_empty() {
        continue;
      }
      tasks.push(parse_record(record, line_index + 1)?);
    }

    debug!(
      "restored {} tasks from: {}",
      tasks.len(),
      self.filepath.display()
    );

    return Ok(tasks);
  }

  pub fn flush(&mut self, tasks: &[Task]) -> Result<(), Error> {
    self.file.set_len(0)?;
    self.file.rewind()?;

    let mut writer = std::io::BufWriter::new(&self.file);
    for task in tasks.iter() {
      writeln!(writer, "{}", format_record(task))?;
    }
    writer.flush()?;

    debug!(
      "flushed {} tasks to: {}",
      tasks.len(),
      self.filepath.display()
    );

    Ok(())
  }
}

fn format_record(task: &Task) -> String {
  format!(
    "{}{sep}{}{sep}{}{sep}{}",
    task.id(),
    task.name(),
    task.priority(),
    task.status().as_str(),
    sep = FIELD_DELIMITER
  )
}

fn parse_record(record: &str, line: usize) -> Result<Task, Error> {
  let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();
  if fields.len() != 4 {
    return Err(Error::MalformedRecord {
      line,
      reason: format!("expected 4 fields, got {}", fields.len()),
    });
  }

  let id = uuid::Uuid::parse_str(fields[0]).map_err(|err| Error::MalformedRecord {
    line,
    reason: format!("bad task id: {}", err),
  })?;
  let priority = fields[2].parse::<u8>().map_err(|err| Error::MalformedRecord {
    line,
    reason: format!("bad priority: {}", err),
  })?;
  let status = Status::parse(fields[3]).ok_or_else(|| Error::MalformedRecord {
    line,
    reason: format!("unknown status: {}", fields[3]),
  })?;

  Ok(Task::restored(id, fields[1], priority, status))
}

#[cfg(test)]
mod test {
  use super::{format_record, parse_record, resolve_path, ListFile};
  use crate::error::Error;
  use crate::task::{Status, Task};

  fn get_new_list_file() -> (tempfile::TempPath, ListFile) {
    let tmp_file = tempfile::Builder::new()
      .prefix("todolist")
      .suffix(".txt")
      .tempfile()
      .unwrap();

    let tmp_path = tmp_file.into_temp_path();
    let list_file = ListFile::open(tmp_path.as_ref()).unwrap();
    (tmp_path, list_file)
  }

  #[test]
  fn resolve_path_joins_list_name_and_extension() {
    let path = resolve_path(std::path::Path::new("/tmp/store"), "today");
    assert_eq!(path, std::path::PathBuf::from("/tmp/store/today.txt"));
  }

  #[test]
  fn open_fails_without_parent_directory() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let filepath = tmp_dir.path().join("missing").join("today.txt");
    match ListFile::open(&filepath) {
      Err(Error::Io(_)) => {}
      other => panic!("expected io error, got: {:?}", other.map(|_| ())),
    };
  }

  #[test]
  fn restore_from_empty_file() {
    let (_tmp_path, mut list_file) = get_new_list_file();
    let tasks = list_file.restore().unwrap();
    assert_eq!(tasks.is_empty(), true);
  }

  #[test]
  fn flush_then_restore_round_trip() {
    let (_tmp_path, mut list_file) = get_new_list_file();

    let mut tasks = vec![Task::new("buy milk", 10), Task::new("phone Dave", 8)];
    tasks[1].complete();

    list_file.flush(&tasks).unwrap();
    let restored = list_file.restore().unwrap();

    assert_eq!(restored, tasks);
  }

  #[test]
  fn flush_overwrites_previous_contents() {
    let (_tmp_path, mut list_file) = get_new_list_file();

    list_file
      .flush(&[Task::new("buy milk", 10), Task::new("phone Dave", 8)])
      .unwrap();
    let kept = vec![Task::new("set alarm", 5)];
    list_file.flush(&kept).unwrap();

    assert_eq!(list_file.restore().unwrap(), kept);
  }

  #[test]
  fn restore_skips_blank_lines() {
    let (tmp_path, mut list_file) = get_new_list_file();

    let task = Task::new("buy milk", 10);
    let contents = format!("\n  \n{}\n\n", format_record(&task));
    std::fs::write(&tmp_path, contents).unwrap();

    let restored = list_file.restore().unwrap();
    assert_eq!(restored, vec![task]);
  }

  #[test]
  fn restore_fails_on_wrong_field_count() {
    let (tmp_path, mut list_file) = get_new_list_file();
    std::fs::write(&tmp_path, "deadbeef|buy milk|10\n").unwrap();

    match list_file.restore() {
      Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 1),
      other => panic!("expected malformed record, got: {:?}", other),
    };
  }

  #[test]
  fn restore_fails_on_unknown_status() {
    let (tmp_path, mut list_file) = get_new_list_file();
    let record = format_record(&Task::new("buy milk", 10)).replace("not_done", "pending");
    std::fs::write(&tmp_path, format!("{}\n", record)).unwrap();

    match list_file.restore() {
      Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 1),
      other => panic!("expected malformed record, got: {:?}", other),
    };
  }

  #[test]
  fn restore_fails_on_bad_priority() {
    let (tmp_path, mut list_file) = get_new_list_file();
    let record = format_record(&Task::new("buy milk", 10)).replace("|10|", "|ten|");
    std::fs::write(&tmp_path, format!("{}\n", record)).unwrap();

    list_file
      .restore()
      .expect_err("shouldn't restore a record with a non-numeric priority");
  }

  #[test]
  fn record_line_keeps_field_order() {
    let task = Task::new("buy milk", 10);
    let record = format_record(&task);

    assert_eq!(record, format!("{}|buy milk|10|not_done", task.id()));
    assert_eq!(parse_record(&record, 1).unwrap(), task);
  }

  #[test]
  fn parse_record_restores_done_status() {
    let mut task = Task::new("phone Dave", 8);
    task.complete();

    let restored = parse_record(&format_record(&task), 1).unwrap();
    assert_eq!(restored.status(), Status::Done);
  }
}
