use std::time::Duration;

use tracing::{
  debug,
  info,
  instrument,
  warn
};

use crate::config::Config;
use crate::datastore::KeyValueStore;
use crate::filter::Filter;
use crate::notice::{
  NoticeBoard,
  NoticeKind,
  TimerId,
  TimerIds
};
use crate::render::{
  ListView,
  render
};
use crate::store::{
  AddOutcome,
  TASKS_KEY,
  TaskStore
};
use crate::task::TaskId;
use crate::theme::{
  THEME_KEY,
  Theme,
  load_theme,
  save_theme
};

pub trait Prompt {
  fn confirm(
    &self,
    message: &str
  ) -> bool;
}

impl<F> Prompt for F
where
  F: Fn(&str) -> bool
{
  fn confirm(
    &self,
    message: &str
  ) -> bool {
    self(message)
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum Action {
  Submit(String),
  ToggleTask(TaskId),
  DeleteTask(TaskId),
  ClearAll,
  SelectFilter(Filter),
  ToggleTheme,
  Expire(TimerId)
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum Effect {
  ClearInput,
  FocusInput,
  ApplyTheme(Theme),
  Schedule {
    timer: TimerId,
    after: Duration
  },
  Cancel(TimerId)
}

#[derive(Debug, Default)]
pub struct AppState {
  store:       TaskStore,
  filter:      Filter,
  theme:       Theme,
  notices:     NoticeBoard,
  input_error: Option<TimerId>,
  timers:      TimerIds
}

impl AppState {
  pub fn store(&self) -> &TaskStore {
    &self.store
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  pub fn theme(&self) -> Theme {
    self.theme
  }

  pub fn notices(&self) -> &NoticeBoard {
    &self.notices
  }

  pub fn input_error(&self) -> bool {
    self.input_error.is_some()
  }

  pub fn view(&self) -> ListView {
    render(&self.store, self.filter)
  }
}

pub struct Controller<S, P> {
  storage: S,
  prompt:  P,
  config:  Config,
  state:   AppState
}

impl<S, P> Controller<S, P>
where
  S: KeyValueStore,
  P: Prompt
{
  #[instrument(skip(storage, prompt, config))]
  pub fn load(
    storage: S,
    prompt: P,
    config: Config,
    system_prefers_dark: bool
  ) -> Self {
    let store =
      TaskStore::load(&storage, TASKS_KEY);
    let theme = load_theme(
      &storage,
      THEME_KEY,
      system_prefers_dark
    );
    info!(
      tasks = store.len(),
      %theme,
      "controller ready"
    );

    Self {
      storage,
      prompt,
      config,
      state: AppState {
        store,
        theme,
        ..AppState::default()
      }
    }
  }

  pub fn startup_effects(
    &self
  ) -> Vec<Effect> {
    vec![Effect::ApplyTheme(
      self.state.theme
    )]
  }

  pub fn state(&self) -> &AppState {
    &self.state
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn view(&self) -> ListView {
    self.state.view()
  }

  #[instrument(skip(self))]
  pub fn dispatch(
    &mut self,
    action: Action
  ) -> Vec<Effect> {
    debug!(?action, "dispatching action");
    match action {
      | Action::Submit(raw) => {
        self.submit(&raw)
      }
      | Action::ToggleTask(id) => {
        self.toggle_task(id)
      }
      | Action::DeleteTask(id) => {
        self.delete_task(id)
      }
      | Action::ClearAll => self.clear_all(),
      | Action::SelectFilter(filter) => {
        self.select_filter(filter)
      }
      | Action::ToggleTheme => {
        self.toggle_theme()
      }
      | Action::Expire(timer) => {
        self.expire(timer)
      }
    }
  }

  fn submit(
    &mut self,
    raw: &str
  ) -> Vec<Effect> {
    let mut effects = Vec::new();

    if raw.trim().is_empty() {
      if let Some(previous) =
        self.state.input_error.take()
      {
        effects.push(Effect::Cancel(previous));
      }
      let timer =
        self.state.timers.allocate();
      self.state.input_error = Some(timer);
      effects.push(Effect::Schedule {
        timer,
        after: self.config.input_error_delay()
      });
      debug!(%timer, "rejected empty submit");
      return effects;
    }

    match self.state.store.add(raw) {
      | AddOutcome::Added(_) => {
        self.persist_tasks();
      }
      | outcome => {
        debug!(?outcome, "task not added");
      }
    }

    effects.push(Effect::ClearInput);
    effects.push(Effect::FocusInput);
    effects
  }

  fn toggle_task(
    &mut self,
    id: TaskId
  ) -> Vec<Effect> {
    if self.state.store.toggle(id).is_some()
    {
      self.persist_tasks();
    } else {
      debug!(task_id = %id, "toggle ignored for unknown task");
    }
    Vec::new()
  }

  fn delete_task(
    &mut self,
    id: TaskId
  ) -> Vec<Effect> {
    if self.state.store.delete(id).is_none()
    {
      debug!(task_id = %id, "delete ignored for unknown task");
    }
    self.persist_tasks();
    Vec::new()
  }

  fn clear_all(&mut self) -> Vec<Effect> {
    if self.state.store.is_empty() {
      debug!("clear all ignored; no tasks");
      return Vec::new();
    }
    if !self
      .prompt
      .confirm(&self.config.text.clear_all_confirm)
    {
      debug!("clear all declined");
      return Vec::new();
    }

    self.state.store.clear();
    if let Err(error) = TaskStore::forget(
      &mut self.storage,
      TASKS_KEY
    ) {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed clearing stored tasks"
      );
    }
    Vec::new()
  }

  fn select_filter(
    &mut self,
    filter: Filter
  ) -> Vec<Effect> {
    self.state.filter = filter;
    info!(%filter, "filter selected");
    self.announce(
      NoticeKind::Filter,
      filter.announcement()
    )
  }

  fn toggle_theme(&mut self) -> Vec<Effect> {
    let theme = self.state.theme.next();
    self.state.theme = theme;

    let mut effects =
      vec![Effect::ApplyTheme(theme)];
    effects.extend(self.announce(
      NoticeKind::Theme,
      theme.announcement()
    ));

    if let Err(error) = save_theme(
      &mut self.storage,
      THEME_KEY,
      theme
    ) {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed to save theme to storage"
      );
    }
    effects
  }

  fn expire(
    &mut self,
    timer: TimerId
  ) -> Vec<Effect> {
    if self.state.input_error == Some(timer)
    {
      self.state.input_error = None;
    } else if self
      .state
      .notices
      .expire(timer)
      .is_none()
    {
      debug!(%timer, "expired unknown timer");
    }
    Vec::new()
  }

  fn announce(
    &mut self,
    kind: NoticeKind,
    text: String
  ) -> Vec<Effect> {
    let timer = self.state.timers.allocate();
    self.state.notices.push(timer, kind, text);
    vec![Effect::Schedule {
      timer,
      after: self.config.notice_delay()
    }]
  }

  fn persist_tasks(&mut self) {
    if let Err(error) = self.state.store.save(
      &mut self.storage,
      TASKS_KEY
    ) {
      warn!(
        error = %format!("{error:#}"),
        "task changes were not persisted"
      );
    }
  }
}
