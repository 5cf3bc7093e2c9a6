use tasklet_core::{
  DARK_MODE_CLASS,
  Prompt,
  Theme
};

const DARK_SCHEME_QUERY: &str =
  "(prefers-color-scheme: dark)";

pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
  fn confirm(
    &self,
    message: &str
  ) -> bool {
    gloo::dialogs::confirm(message)
  }
}

pub fn system_prefers_dark() -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
    })
    .is_some_and(|query| query.matches())
}

pub fn apply_theme(theme: Theme) {
  let Some(root) = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.document_element()
    })
  else {
    tracing::warn!(
      "no document element; theme not \
       applied"
    );
    return;
  };

  let class_list = root.class_list();
  let result = if theme.is_dark() {
    class_list.add_1(DARK_MODE_CLASS)
  } else {
    class_list.remove_1(DARK_MODE_CLASS)
  };
  if let Err(error) = result {
    tracing::error!(
      error = ?error,
      %theme,
      "failed applying theme class"
    );
  }
}
