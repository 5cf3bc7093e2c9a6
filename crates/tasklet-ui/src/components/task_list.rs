use tasklet_core::{
  TaskId,
  TaskRow
};
use web_sys::Element;
use yew::{
  Callback,
  Event,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:      Vec<TaskRow>,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

fn owning_task_id(
  target: &Element
) -> Option<TaskId> {
  let item = target
    .closest("li[data-id]")
    .ok()
    .flatten()?;
  let raw = item.get_attribute("data-id")?;
  match raw.parse::<TaskId>() {
    | Ok(id) => Some(id),
    | Err(error) => {
      tracing::warn!(
        %error,
        raw = %raw,
        "unparseable task id"
      );
      None
    }
  }
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let onchange = {
    let on_toggle = props.on_toggle.clone();
    Callback::from(move |e: Event| {
      let Some(target) =
        e.target_dyn_into::<Element>()
      else {
        return;
      };
      if !target
        .matches("input[type=\"checkbox\"]")
        .unwrap_or(false)
      {
        return;
      }
      if let Some(id) =
        owning_task_id(&target)
      {
        on_toggle.emit(id);
      }
    })
  };

  let onclick = {
    let on_delete = props.on_delete.clone();
    Callback::from(move |e: MouseEvent| {
      let Some(target) =
        e.target_dyn_into::<Element>()
      else {
        return;
      };
      let Some(button) = target
        .closest(".delete-btn")
        .ok()
        .flatten()
      else {
        return;
      };
      if let Some(id) =
        owning_task_id(&button)
      {
        on_delete.emit(id);
      }
    })
  };

  html! {
      <ul id="task-list" role="list" {onchange} {onclick}>
          {
              for props.rows.iter().cloned().map(|row| html! {
                  <TaskListRow key={row.id.0} row={row.clone()} />
              })
          }
      </ul>
  }
}
