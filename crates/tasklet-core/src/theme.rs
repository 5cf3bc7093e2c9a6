use std::fmt;

use anyhow::Context;
use tracing::{
  debug,
  info
};

use crate::datastore::KeyValueStore;

pub const DARK_MODE_CLASS: &str =
  "dark-mode";
pub const THEME_KEY: &str = "theme";

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum Theme {
  #[default]
  Light,
  Dark
}

impl Theme {
  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn is_dark(self) -> bool {
    self == Self::Dark
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  pub fn from_storage_value(
    value: &str
  ) -> Option<Self> {
    match value {
      | "light" => Some(Self::Light),
      | "dark" => Some(Self::Dark),
      | _ => None
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => {
        "Switch to dark mode"
      }
      | Self::Dark => {
        "Switch to light mode"
      }
    }
  }

  pub fn announcement(self) -> String {
    format!(
      "Switched to {} mode",
      self.storage_value()
    )
  }

  pub fn resolve(
    stored: Option<&str>,
    system_prefers_dark: bool
  ) -> Self {
    match stored
      .and_then(Self::from_storage_value)
    {
      | Some(theme) => theme,
      | None if system_prefers_dark => {
        Self::Dark
      }
      | None => Self::Light
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.storage_value())
  }
}

#[tracing::instrument(skip(storage))]
pub fn load_theme<S>(
  storage: &S,
  key: &str,
  system_prefers_dark: bool
) -> Theme
where
  S: KeyValueStore + ?Sized
{
  let stored = match storage.get_item(key)
  {
    | Ok(value) => value,
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed to access storage for \
         theme"
      );
      None
    }
  };

  let theme = Theme::resolve(
    stored.as_deref(),
    system_prefers_dark
  );
  debug!(
    stored = ?stored,
    system_prefers_dark,
    %theme,
    "resolved theme"
  );
  theme
}

#[tracing::instrument(skip(storage))]
pub fn save_theme<S>(
  storage: &mut S,
  key: &str,
  theme: Theme
) -> anyhow::Result<()>
where
  S: KeyValueStore + ?Sized
{
  storage
    .set_item(key, theme.storage_value())
    .context("failed to save theme")?;
  info!(%theme, "saved theme");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::{
    Theme,
    load_theme,
    save_theme
  };
  use crate::datastore::MemoryStore;

  #[test]
  fn stored_value_beats_system_preference()
  {
    assert_eq!(
      Theme::resolve(Some("light"), true),
      Theme::Light
    );
    assert_eq!(
      Theme::resolve(Some("dark"), false),
      Theme::Dark
    );
  }

  #[test]
  fn missing_or_unknown_value_uses_system()
  {
    assert_eq!(
      Theme::resolve(None, true),
      Theme::Dark
    );
    assert_eq!(
      Theme::resolve(None, false),
      Theme::Light
    );
    assert_eq!(
      Theme::resolve(Some("night"), true),
      Theme::Dark
    );
  }

  #[test]
  fn labels_describe_next_action() {
    assert_eq!(
      Theme::Dark.toggle_label(),
      "Switch to light mode"
    );
    assert_eq!(
      Theme::Light.toggle_label(),
      "Switch to dark mode"
    );
    assert_eq!(
      Theme::Dark.announcement(),
      "Switched to dark mode"
    );
  }

  #[test]
  fn unreadable_storage_falls_back_to_system()
  {
    let mut storage = MemoryStore::new()
      .with_entry("theme", "light");
    storage.set_fail_reads(true);
    assert_eq!(
      load_theme(&storage, "theme", true),
      Theme::Dark
    );
  }

  #[test]
  fn save_then_load_roundtrip() {
    let mut storage = MemoryStore::new();
    save_theme(&mut storage, "theme", Theme::Dark)
      .expect("save");
    assert_eq!(storage.raw("theme"), Some("dark"));
    assert_eq!(
      load_theme(&storage, "theme", false),
      Theme::Dark
    );
  }
}
