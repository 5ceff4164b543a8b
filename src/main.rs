use std::{cell::RefCell, rc::Rc};

use todolist::{viewer::Viewer, TodoList};

fn main() {
  env_logger::init();

  let matches = clap::Command::new("Todolist")
    .arg_required_else_help(true)
    .arg(
      clap::Arg::new("list")
        .long("list")
        .takes_value(true)
        .default_value("today"),
    )
    .subcommand(clap::Command::new("add").args(&[
      clap::Arg::new("task_name").required(true).index(1),
      clap::Arg::new("priority").required(true).index(2),
    ]))
    .subcommand(clap::Command::new("done").arg(clap::Arg::new("task_id").required(true).index(1)))
    .subcommand(clap::Command::new("rm").arg(clap::Arg::new("task_id").required(true).index(1)))
    .subcommand(clap::Command::new("show"))
    .get_matches();

  let list_name = matches.value_of("list").unwrap();
  let todolist = match TodoList::open(list_name) {
    Ok(list) => Rc::new(RefCell::new(list)),
    Err(err) => {
      println!("can't open list {}: {}", list_name, err);
      return;
    }
  };
  let viewer = Viewer::new(Rc::clone(&todolist));

  match matches.subcommand_name() {
    Some("add") => {
      let command_matches = matches.subcommand_matches("add").unwrap();
      let task_name = command_matches.value_of("task_name").unwrap();
      let priority: u8 = match command_matches.value_of_t("priority") {
        Ok(priority) => priority,
        Err(err) => {
          println!("bad priority: {}", err);
          return;
        }
      };

      let add_res = {
        let mut list = todolist.borrow_mut();
        list.add_task(task_name, priority)
      };
      match add_res {
        Ok(()) => viewer.print_tasks(),
        Err(err) => println!("add task err: {}", err),
      };
    }

    Some("done") => {
      let command_matches = matches.subcommand_matches("done").unwrap();
      let task_id_arg = command_matches.value_of("task_id").unwrap();

      let complete_res = {
        let mut list = todolist.borrow_mut();
        match list.resolve_id(task_id_arg) {
          Some(task_id) => list.complete_task(task_id),
          None => {
            println!("unknown task id: {}", task_id_arg);
            return;
          }
        }
      };
      match complete_res {
        Ok(()) => viewer.print_tasks(),
        Err(err) => println!("complete task err: {}", err),
      };
    }

    Some("rm") => {
      let command_matches = matches.subcommand_matches("rm").unwrap();
      let task_id_arg = command_matches.value_of("task_id").unwrap();

      let delete_res = {
        let mut list = todolist.borrow_mut();
        match list.resolve_id(task_id_arg) {
          Some(task_id) => list.delete_task(task_id),
          None => {
            println!("unknown task id: {}", task_id_arg);
            return;
          }
        }
      };
      match delete_res {
        Ok(()) => viewer.print_tasks(),
        Err(err) => println!("delete task err: {}", err),
      };
    }

    Some("show") => viewer.print_tasks(),

    Some(subcmd) => println!("unknown subcommand {}", subcmd),
    None => println!("subcommand not found"),
  };

  drop(viewer);
  if let Ok(cell) = Rc::try_unwrap(todolist) {
    if let Err(err) = cell.into_inner().close() {
      println!("can't save list {}: {}", list_name, err);
    }
  }
}
