use anyhow::anyhow;
use tasklet_core::KeyValueStore;

// A browser that refuses storage access
// leaves `inner` empty; every call then fails.
pub struct LocalStorage {
  inner: Option<web_sys::Storage>
}

impl LocalStorage {
  pub fn open() -> Self {
    let inner = web_sys::window()
      .and_then(|window| {
        match window.local_storage() {
          | Ok(storage) => storage,
          | Err(error) => {
            tracing::error!(
              error = ?error,
              "local storage unavailable"
            );
            None
          }
        }
      });
    Self { inner }
  }

  fn storage(
    &self
  ) -> anyhow::Result<&web_sys::Storage> {
    self.inner.as_ref().ok_or_else(|| {
      anyhow!("local storage unavailable")
    })
  }
}

impl KeyValueStore for LocalStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self.storage()?.get_item(key).map_err(
      |error| {
        anyhow!(
          "localStorage.getItem({key}) \
           failed: {error:?}"
        )
      }
    )
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(key, value)
      .map_err(|error| {
        anyhow!(
          "localStorage.setItem({key}) \
           failed: {error:?}"
        )
      })
  }

  fn remove_item(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .remove_item(key)
      .map_err(|error| {
        anyhow!(
          "localStorage.removeItem({key}) \
           failed: {error:?}"
        )
      })
  }
}
