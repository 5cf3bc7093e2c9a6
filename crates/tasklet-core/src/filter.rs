use std::fmt;

use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Filter {
  #[default]
  All,
  Pending,
  Completed
}

impl Filter {
  pub fn all() -> [Self; 3] {
    [
      Self::All,
      Self::Pending,
      Self::Completed
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Pending => "pending",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Pending => "Pending",
      | Self::Completed => "Completed"
    }
  }

  pub fn from_key(
    value: &str
  ) -> Option<Self> {
    match value.trim() {
      | "all" => Some(Self::All),
      | "pending" => Some(Self::Pending),
      | "completed" => {
        Some(Self::Completed)
      }
      | _ => None
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Pending => !task.completed,
      | Self::Completed => task.completed
    }
  }

  pub fn apply<'a>(
    self,
    tasks: &'a [Task]
  ) -> impl Iterator<Item = &'a Task> + 'a
  {
    tasks
      .iter()
      .filter(move |task| self.matches(task))
  }

  pub fn announcement(self) -> String {
    format!("Showing {} tasks", self.as_key())
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}
