use proptest::prelude::*;
use tasklet_core::{
  Action,
  Config,
  Controller,
  Filter,
  MemoryStore,
  TaskStore
};

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
    )
    .with_test_writer()
    .try_init();
}

fn visible(
  app: &Controller<MemoryStore, impl Fn(&str) -> bool>
) -> Vec<String> {
  app
    .view()
    .rows
    .into_iter()
    .map(|row| row.text)
    .collect()
}

#[test]
fn add_toggle_filter_and_clear_scenario() {
  init_tracing();
  let mut app = Controller::load(
    MemoryStore::new(),
    |_: &str| true,
    Config::default(),
    false
  );

  app.dispatch(Action::Submit("Buy milk".to_string()));
  app.dispatch(Action::Submit("buy milk".to_string()));
  app.dispatch(Action::Submit("Walk dog".to_string()));
  assert_eq!(visible(&app), vec!["Buy milk", "Walk dog"]);

  let milk = app.view().rows[0].id;
  app.dispatch(Action::ToggleTask(milk));

  app.dispatch(Action::SelectFilter(Filter::Pending));
  assert_eq!(visible(&app), vec!["Walk dog"]);

  app.dispatch(Action::SelectFilter(Filter::Completed));
  assert_eq!(visible(&app), vec!["Buy milk"]);

  app.dispatch(Action::ClearAll);
  assert!(visible(&app).is_empty());
  app.dispatch(Action::SelectFilter(Filter::Pending));
  assert!(visible(&app).is_empty());
  assert!(app.view().clear_all_disabled);
  assert!(!app.storage().contains_key("tasks"));
}

#[test]
fn reload_reproduces_saved_sequence() {
  init_tracing();
  let mut app = Controller::load(
    MemoryStore::new(),
    |_: &str| true,
    Config::default(),
    false
  );
  for text in ["one", "two", "three"] {
    app.dispatch(Action::Submit(text.to_string()));
  }
  let two = app.view().rows[1].id;
  app.dispatch(Action::ToggleTask(two));
  app.dispatch(Action::ToggleTheme);

  let raw_tasks = app
    .storage()
    .raw("tasks")
    .expect("tasks persisted")
    .to_string();
  let storage = MemoryStore::new()
    .with_entry("tasks", &raw_tasks)
    .with_entry("theme", "dark");

  let reloaded = Controller::load(
    storage,
    |_: &str| true,
    Config::default(),
    false
  );
  assert_eq!(
    reloaded.state().store().tasks(),
    app.state().store().tasks()
  );
  assert_eq!(
    reloaded.state().theme(),
    app.state().theme()
  );
  assert_eq!(reloaded.state().filter(), Filter::All);
}

#[test]
fn wrong_shape_storage_starts_empty_and_recovers() {
  init_tracing();
  let storage = MemoryStore::new()
    .with_entry("tasks", r#"{"tasks":[]}"#);
  let mut app = Controller::load(
    storage,
    |_: &str| true,
    Config::default(),
    false
  );
  assert!(app.state().store().is_empty());

  app.dispatch(Action::Submit("fresh".to_string()));
  let reloaded = TaskStore::load(app.storage(), "tasks");
  assert_eq!(reloaded.len(), 1);
}

proptest! {
  #[test]
  fn store_operations_keep_invariants(
    ops in proptest::collection::vec((0_u8..4, "[a-cA-C ]{0,3}", 1_u64..6), 0..60)
  ) {
    let mut store = TaskStore::new();
    for (op, text, id) in ops {
      let before = store.len();
      match op {
        | 0 => {
          store.add(&text);
        }
        | 1 => {
          store.toggle(tasklet_core::TaskId(id));
          prop_assert_eq!(store.len(), before);
        }
        | 2 => {
          let removed = store.delete(tasklet_core::TaskId(id));
          prop_assert_eq!(store.len(), before - usize::from(removed.is_some()));
        }
        | _ => {
          let id = tasklet_core::TaskId(id);
          let original = store.get(id).map(|task| task.completed);
          store.toggle(id);
          store.toggle(id);
          prop_assert_eq!(store.get(id).map(|task| task.completed), original);
        }
      }

      let mut lowered: Vec<String> = store
        .tasks()
        .iter()
        .map(|task| task.text.to_lowercase())
        .collect();
      prop_assert!(store.tasks().iter().all(|task| !task.text.trim().is_empty()));
      lowered.sort();
      lowered.dedup();
      prop_assert_eq!(lowered.len(), store.len());
    }
  }
}
