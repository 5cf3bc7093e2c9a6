use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use tasklet_core::{
  Action,
  Controller,
  Effect,
  TimerId
};
use web_sys::HtmlInputElement;
use yew::{
  NodeRef,
  functional::UseForceUpdateHandle
};

use super::browser::{
  BrowserPrompt,
  apply_theme
};
use super::storage::LocalStorage;

pub type UiController =
  Controller<LocalStorage, BrowserPrompt>;

#[derive(Clone)]
pub struct Dispatcher {
  controller: Rc<RefCell<UiController>>,
  pending:    Rc<RefCell<BTreeSet<TimerId>>>,
  input:      NodeRef,
  redraw:     UseForceUpdateHandle
}

impl Dispatcher {
  pub fn new(
    controller: Rc<RefCell<UiController>>,
    pending: Rc<RefCell<BTreeSet<TimerId>>>,
    input: NodeRef,
    redraw: UseForceUpdateHandle
  ) -> Self {
    Self {
      controller,
      pending,
      input,
      redraw
    }
  }

  pub fn dispatch(
    &self,
    action: Action
  ) {
    let effects = match self
      .controller
      .try_borrow_mut()
    {
      | Ok(mut controller) => {
        controller.dispatch(action)
      }
      | Err(error) => {
        tracing::error!(
          %error,
          ?action,
          "controller busy; dropping \
           action"
        );
        return;
      }
    };

    self.run_effects(effects);
    self.redraw.force_update();
  }

  pub fn run_effects(
    &self,
    effects: Vec<Effect>
  ) {
    for effect in effects {
      tracing::trace!(?effect, "running effect");
      match effect {
        | Effect::ClearInput => {
          if let Some(input) = self
            .input
            .cast::<HtmlInputElement>()
          {
            input.set_value("");
          }
        }
        | Effect::FocusInput => {
          if let Some(input) = self
            .input
            .cast::<HtmlInputElement>()
            && let Err(error) = input.focus()
          {
            tracing::warn!(
              error = ?error,
              "failed focusing task input"
            );
          }
        }
        | Effect::ApplyTheme(theme) => {
          apply_theme(theme);
        }
        | Effect::Schedule {
          timer,
          after
        } => self.schedule(timer, after),
        | Effect::Cancel(timer) => {
          self
            .pending
            .borrow_mut()
            .remove(&timer);
        }
      }
    }
  }

  fn schedule(
    &self,
    timer: TimerId,
    after: std::time::Duration
  ) {
    self.pending.borrow_mut().insert(timer);
    let millis = u32::try_from(
      after.as_millis()
    )
    .unwrap_or(u32::MAX);
    let this = self.clone();
    wasm_bindgen_futures::spawn_local(
      async move {
        TimeoutFuture::new(millis).await;
        let live = this
          .pending
          .borrow_mut()
          .remove(&timer);
        if live {
          this.dispatch(Action::Expire(timer));
        }
      }
    );
  }
}
