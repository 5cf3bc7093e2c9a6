mod browser;
mod dispatch;
mod storage;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use gloo::console::log;
use tasklet_core::{
  Action,
  Config,
  Controller,
  Filter,
  TaskId,
  TimerId
};
use yew::{
  Callback,
  Html,
  NodeRef,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_mut_ref,
  use_node_ref
};

use self::browser::{
  BrowserPrompt,
  system_prefers_dark
};
use self::dispatch::{
  Dispatcher,
  UiController
};
use self::storage::LocalStorage;
use crate::components::{
  FilterBar,
  GlobalActions,
  StatusMessages,
  TaskForm,
  TaskList
};

const CONFIG_TOML: &str =
  include_str!("../assets/tasklet.toml");

fn load_controller() -> UiController {
  let config =
    Config::load_or_default(CONFIG_TOML);
  Controller::load(
    LocalStorage::open(),
    BrowserPrompt,
    config,
    system_prefers_dark()
  )
}

#[function_component(App)]
pub fn app() -> Html {
  let controller: Rc<RefCell<UiController>> =
    use_mut_ref(load_controller);
  let pending: Rc<
    RefCell<BTreeSet<TimerId>>
  > = use_mut_ref(BTreeSet::new);
  let input_ref: NodeRef = use_node_ref();
  let redraw = use_force_update();

  let dispatcher = Dispatcher::new(
    controller.clone(),
    pending,
    input_ref.clone(),
    redraw
  );

  {
    let dispatcher = dispatcher.clone();
    let controller = controller.clone();
    use_effect_with((), move |_| {
      let effects =
        controller.borrow().startup_effects();
      dispatcher.run_effects(effects);
      ui_debug(
        "app.mounted",
        "frontend mounted and theme applied"
      );
      || ()
    });
  }

  let on_submit = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |raw: String| {
      dispatcher.dispatch(Action::Submit(raw));
    })
  };

  let on_toggle = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |id: TaskId| {
      ui_debug("action.toggle", &id.to_string());
      dispatcher.dispatch(Action::ToggleTask(id));
    })
  };

  let on_delete = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |id: TaskId| {
      ui_debug("action.delete", &id.to_string());
      dispatcher.dispatch(Action::DeleteTask(id));
    })
  };

  let on_clear_all = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_| {
      dispatcher.dispatch(Action::ClearAll);
    })
  };

  let on_toggle_theme = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_| {
      dispatcher.dispatch(Action::ToggleTheme);
    })
  };

  let on_select_filter = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |filter: Filter| {
      ui_debug("action.filter", filter.as_key());
      dispatcher
        .dispatch(Action::SelectFilter(filter));
    })
  };

  let snapshot = controller.borrow();
  let state = snapshot.state();
  let view = state.view();
  let notices =
    state.notices().notices().to_vec();
  let theme = state.theme();
  let input_error = state.input_error();
  drop(snapshot);

  html! {
      <main class="app">
          <div class="header">
              <h1>{ "Tasks" }</h1>
              <div class="actions">
                  <GlobalActions
                      clear_all_disabled={view.clear_all_disabled}
                      theme={theme}
                      on_clear_all={on_clear_all}
                      on_toggle_theme={on_toggle_theme}
                  />
              </div>
          </div>
          <TaskForm input_ref={input_ref} error={input_error} on_submit={on_submit} />
          <FilterBar buttons={view.filters.clone()} on_select={on_select_filter} />
          <StatusMessages notices={notices} />
          <TaskList rows={view.rows.clone()} on_toggle={on_toggle} on_delete={on_delete} />
      </main>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
