use crate::filter::Filter;
use crate::store::TaskStore;
use crate::task::{
  Task,
  TaskId
};

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskRow {
  pub id:             TaskId,
  pub text:           String,
  pub completed:      bool,
  pub checkbox_label: String,
  pub delete_label:   String
}

impl TaskRow {
  fn from_task(task: &Task) -> Self {
    Self {
      id:             task.id,
      text:           task.text.clone(),
      completed:      task.completed,
      checkbox_label: format!(
        "Mark {} as complete",
        task.text
      ),
      delete_label:   format!(
        "Delete {}",
        task.text
      )
    }
  }

  pub fn class(&self) -> &'static str {
    if self.completed {
      "completed"
    } else {
      ""
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct FilterButton {
  pub filter: Filter,
  pub label:  &'static str,
  pub active: bool
}

impl FilterButton {
  pub fn class(&self) -> &'static str {
    if self.active {
      "filter active"
    } else {
      "filter"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ListView {
  pub rows:               Vec<TaskRow>,
  pub filters:            Vec<FilterButton>,
  pub clear_all_disabled: bool
}

pub fn render(
  store: &TaskStore,
  filter: Filter
) -> ListView {
  let rows = filter
    .apply(store.tasks())
    .map(TaskRow::from_task)
    .collect();

  let filters = Filter::all()
    .into_iter()
    .map(|candidate| FilterButton {
      filter: candidate,
      label:  candidate.label(),
      active: candidate == filter
    })
    .collect();

  ListView {
    rows,
    filters,
    clear_all_disabled: store.is_empty()
  }
}
