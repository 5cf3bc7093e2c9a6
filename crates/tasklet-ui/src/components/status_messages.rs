use tasklet_core::Notice;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusMessagesProps {
  pub notices: Vec<Notice>
}

#[function_component(StatusMessages)]
pub fn status_messages(
  props: &StatusMessagesProps
) -> Html {
  html! {
      <>
          {
              for props.notices.iter().map(|notice| html! {
                  <p key={notice.timer.0} class={notice.kind.as_class()} aria-live="polite">
                      { &notice.text }
                  </p>
              })
          }
      </>
  }
}
