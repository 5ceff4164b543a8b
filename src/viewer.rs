use std::{cell::RefCell, rc::Rc};

use colored::Colorize;

use crate::{task::Task, TodoList};

pub struct Viewer {
  todolist: Rc<RefCell<TodoList>>,
}

impl Viewer {
  pub fn new(todolist: Rc<RefCell<TodoList>>) -> Self {
    Self { todolist }
  }

  pub fn print_tasks(&self) {
    let list = self.todolist.borrow();
    let tasks = list.tasks();
    if tasks.is_empty() {
      println!("no tasks to show");
      return;
    }

    println!("{}", format!("list: {}", list.list_name()).bold().cyan());
    for task in tasks.iter() {
      self.log_task(task);
    }
  }

  pub fn log_task(&self, task: &Task) {
    let status_mark = match task.is_done() {
      true => "done".green(),
      false => "todo".yellow(),
    };

    let priority = format!("p{:02}", task.priority());
    let colored_priority = match task.priority() {
      8..=10 => priority.red(),
      4..=7 => priority.yellow(),
      _ => priority.normal(),
    };

    println!(
      "{}",
      format!(
        "{padding}{task_id}  {status}  {priority}  {name}",
        padding = " ".repeat(2),
        task_id = self.todolist.borrow().shorten_id(task.id()).dimmed(),
        status = status_mark,
        priority = colored_priority,
        name = match task.is_done() {
          true => task.name().dimmed().strikethrough(),
          false => task.name().normal(),
        }
      )
    );
  }
}
