mod app;
mod components;

const MOUNT_ID: &str = "app";

fn mount_point() -> Option<web_sys::Element> {
  let document = web_sys::window()?.document()?;
  document.get_element_by_id(MOUNT_ID)
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let Some(root) = mount_point() else {
    tracing::error!(
      mount_id = MOUNT_ID,
      "no mount element; tasklet not started"
    );
    return;
  };

  tracing::info!(
    version = env!("CARGO_PKG_VERSION"),
    mount_id = MOUNT_ID,
    "mounting tasklet"
  );
  yew::Renderer::<app::App>::with_root(root)
    .render();
}
