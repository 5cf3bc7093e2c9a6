pub mod config;
pub mod controller;
pub mod datastore;
pub mod filter;
pub mod notice;
pub mod render;
pub mod store;
pub mod task;
pub mod theme;

pub use config::Config;
pub use controller::{
  Action,
  AppState,
  Controller,
  Effect,
  Prompt
};
pub use datastore::{
  KeyValueStore,
  MemoryStore
};
pub use filter::Filter;
pub use notice::{
  Notice,
  NoticeKind,
  TimerId
};
pub use render::{
  FilterButton,
  ListView,
  TaskRow,
  render
};
pub use store::{
  AddOutcome,
  TaskStore
};
pub use task::{
  Task,
  TaskId
};
pub use theme::{
  DARK_MODE_CLASS,
  Theme
};
