extern crate colored;
extern crate serde;
extern crate serde_json;
extern crate uuid;

mod config;
mod todolist;

pub mod error;
pub mod storage;
pub mod task;
pub mod viewer;

pub use config::Config;
pub use todolist::*;
