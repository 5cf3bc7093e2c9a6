use tasklet_core::Theme;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct GlobalActionsProps {
  pub clear_all_disabled: bool,
  pub theme:              Theme,
  pub on_clear_all:
    Callback<MouseEvent>,
  pub on_toggle_theme:
    Callback<MouseEvent>
}

#[function_component(GlobalActions)]
pub fn global_actions(
  props: &GlobalActionsProps
) -> Html {
  let theme_icon = if props.theme.is_dark()
  {
    "☀️"
  } else {
    "🌙"
  };

  html! {
      <>
          <button
              id="clear-all"
              class="btn"
              disabled={props.clear_all_disabled}
              onclick={props.on_clear_all.clone()}
          >
              { "Clear all" }
          </button>
          <button
              id="theme-toggle"
              class="btn"
              aria-label={props.theme.toggle_label()}
              onclick={props.on_toggle_theme.clone()}
          >
              { theme_icon }
          </button>
      </>
  }
}
