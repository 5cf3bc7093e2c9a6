use tasklet_core::TaskRow;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row: TaskRow
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;
  let aria_checked = if row.completed {
    "true"
  } else {
    "false"
  };

  html! {
      <li data-id={row.id.to_string()} role="listitem" class={row.class()}>
          <input
              type="checkbox"
              checked={row.completed}
              aria-checked={aria_checked}
              aria-label={row.checkbox_label.clone()}
          />
          <span class="task-text">{ &row.text }</span>
          <button type="button" class="delete-btn" aria-label={row.delete_label.clone()}>
              { "🗑️" }
          </button>
      </li>
  }
}
