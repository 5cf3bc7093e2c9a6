use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  SubmitEvent,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub input_ref: NodeRef,
  pub error:     bool,
  pub on_submit: Callback<String>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let onsubmit = {
    let input_ref = props.input_ref.clone();
    let on_submit = props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        let value = input_ref
          .cast::<HtmlInputElement>()
          .map(|input| input.value())
          .unwrap_or_default();
        on_submit.emit(value);
      }
    )
  };

  html! {
      <form id="task-form" {onsubmit}>
          <input
              id="task-input"
              type="text"
              class={classes!(props.error.then_some("error"))}
              placeholder="Add a new task"
              aria-label="New task"
              aria-invalid={if props.error { "true" } else { "false" }}
              ref={props.input_ref.clone()}
          />
          <button type="submit" class="btn">{ "Add" }</button>
      </form>
  }
}
