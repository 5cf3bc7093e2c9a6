use tasklet_core::{
  Filter,
  FilterButton
};
use web_sys::Element;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub buttons:   Vec<FilterButton>,
  pub on_select: Callback<Filter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let onclick = {
    let on_select = props.on_select.clone();
    Callback::from(move |e: MouseEvent| {
      let Some(target) =
        e.target_dyn_into::<Element>()
      else {
        return;
      };
      let Some(button) = target
        .closest(".filter")
        .ok()
        .flatten()
      else {
        return;
      };
      let key = button
        .get_attribute("data-filter")
        .unwrap_or_default();
      match Filter::from_key(&key) {
        | Some(filter) => {
          on_select.emit(filter)
        }
        | None => {
          tracing::warn!(
            key = %key,
            "ignoring unknown filter"
          );
        }
      }
    })
  };

  html! {
      <div id="filter-buttons" class="filters" role="group" aria-label="Filter tasks" {onclick}>
          {
              for props.buttons.iter().map(|button| html! {
                  <button
                      type="button"
                      class={button.class()}
                      data-filter={button.filter.as_key()}
                      aria-pressed={if button.active { "true" } else { "false" }}
                  >
                      { button.label }
                  </button>
              })
          }
      </div>
  }
}
