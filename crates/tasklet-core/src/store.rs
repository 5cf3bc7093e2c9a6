use std::collections::BTreeSet;

use anyhow::Context;
use tracing::{
  debug,
  info,
  warn
};

use crate::datastore::{
  KeyValueStore,
  load_json,
  save_json
};
use crate::task::{
  Task,
  TaskId,
  normalize_text
};

pub const TASKS_KEY: &str = "tasks";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum AddOutcome {
  Added(TaskId),
  Empty,
  Duplicate,
  IdsExhausted
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
  tasks:   Vec<Task>,
  // None once the counter has passed u64::MAX;
  // ids then come from the lowest free value.
  next_id: Option<u64>
}

impl TaskStore {
  pub fn new() -> Self {
    Self {
      tasks:   Vec::new(),
      next_id: Some(1)
    }
  }

  pub fn from_tasks(
    tasks: Vec<Task>
  ) -> Self {
    let mut seen = BTreeSet::new();
    let before = tasks.len();
    let kept: Vec<Task> = tasks
      .into_iter()
      .filter_map(|mut task| {
        let text =
          normalize_text(&task.text)?;
        if !seen.insert(task.id) {
          return None;
        }
        task.text = text;
        Some(task)
      })
      .collect();

    if kept.len() != before {
      warn!(
        before,
        after = kept.len(),
        "dropped invalid stored tasks"
      );
    }

    let next_id = kept
      .iter()
      .map(|task| task.id.0)
      .max()
      .map_or(Some(1), |max| {
        max.checked_add(1)
      });

    Self {
      tasks: kept,
      next_id
    }
  }

  #[tracing::instrument(skip(storage))]
  pub fn load<S>(
    storage: &S,
    key: &str
  ) -> Self
  where
    S: KeyValueStore + ?Sized
  {
    match load_json::<Vec<Task>, S>(
      storage, key
    ) {
      | Ok(Some(tasks)) => {
        let store = Self::from_tasks(tasks);
        info!(
          count = store.len(),
          "loaded tasks"
        );
        store
      }
      | Ok(None) => Self::new(),
      | Err(error) => {
        tracing::error!(
          error = %format!("{error:#}"),
          "failed loading tasks; starting \
           empty"
        );
        Self::new()
      }
    }
  }

  #[tracing::instrument(skip(self, storage), fields(count = self.tasks.len()))]
  pub fn save<S>(
    &self,
    storage: &mut S,
    key: &str
  ) -> anyhow::Result<()>
  where
    S: KeyValueStore + ?Sized
  {
    save_json(storage, key, &self.tasks)
      .context("failed to save tasks")
  }

  #[tracing::instrument(skip(storage))]
  pub fn forget<S>(
    storage: &mut S,
    key: &str
  ) -> anyhow::Result<()>
  where
    S: KeyValueStore + ?Sized
  {
    storage.remove_item(key).with_context(
      || format!("failed removing {key}")
    )
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn contains_text(
    &self,
    text: &str
  ) -> bool {
    self
      .tasks
      .iter()
      .any(|task| task.same_text(text))
  }

  #[tracing::instrument(skip(self))]
  pub fn add(
    &mut self,
    raw: &str
  ) -> AddOutcome {
    let Some(text) = normalize_text(raw)
    else {
      debug!("rejected empty task text");
      return AddOutcome::Empty;
    };
    if self.contains_text(&text) {
      debug!(%text, "rejected duplicate task");
      return AddOutcome::Duplicate;
    }

    let Some(id) = self.allocate_id() else {
      warn!(
        count = self.tasks.len(),
        "no task id left to allocate"
      );
      return AddOutcome::IdsExhausted;
    };
    self
      .tasks
      .push(Task::new_pending(id, text));
    info!(task_id = %id, "added task");
    AddOutcome::Added(id)
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle(
    &mut self,
    id: TaskId
  ) -> Option<bool> {
    let task = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)?;
    task.completed = !task.completed;
    debug!(
      task_id = %id,
      completed = task.completed,
      "toggled task"
    );
    Some(task.completed)
  }

  #[tracing::instrument(skip(self))]
  pub fn delete(
    &mut self,
    id: TaskId
  ) -> Option<Task> {
    let idx = self
      .tasks
      .iter()
      .position(|task| task.id == id)?;
    let removed = self.tasks.remove(idx);
    info!(task_id = %id, "deleted task");
    Some(removed)
  }

  pub fn clear(&mut self) {
    info!(
      count = self.tasks.len(),
      "cleared tasks"
    );
    self.tasks.clear();
  }

  fn allocate_id(
    &mut self
  ) -> Option<TaskId> {
    if let Some(next) = self.next_id {
      self.next_id = next.checked_add(1);
      return Some(TaskId(next));
    }

    let used: BTreeSet<u64> = self
      .tasks
      .iter()
      .map(|task| task.id.0)
      .collect();
    (1..=u64::MAX)
      .find(|candidate| {
        !used.contains(candidate)
      })
      .map(TaskId)
  }
}
