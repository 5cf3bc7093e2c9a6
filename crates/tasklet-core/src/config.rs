use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_NOTICE_MS: u32 = 2_000;
pub const DEFAULT_CLEAR_ALL_CONFIRM:
  &str =
  "Are you sure you want to clear all \
   tasks?";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Config {
  pub version: u32,
  pub timing:  TimingConfig,
  pub text:    TextConfig
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct TimingConfig {
  pub notice_ms:      u32,
  pub input_error_ms: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct TextConfig {
  pub clear_all_confirm: String
}

impl Default for Config {
  fn default() -> Self {
    Self {
      version: 1,
      timing:  TimingConfig::default(),
      text:    TextConfig::default()
    }
  }
}

impl Default for TimingConfig {
  fn default() -> Self {
    Self {
      notice_ms:      DEFAULT_NOTICE_MS,
      input_error_ms: DEFAULT_NOTICE_MS
    }
  }
}

impl Default for TextConfig {
  fn default() -> Self {
    Self {
      clear_all_confirm:
        DEFAULT_CLEAR_ALL_CONFIRM
          .to_string()
    }
  }
}

impl Config {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: Config =
      toml::from_str(text).context(
        "failed parsing tasklet config"
      )?;
    cfg.sanitize();
    info!(
      version = cfg.version,
      notice_ms = cfg.timing.notice_ms,
      "loaded config"
    );
    Ok(cfg)
  }

  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        tracing::error!(
          error = %format!("{error:#}"),
          "failed parsing config; using \
           defaults"
        );
        Self::default()
      }
    }
  }

  pub fn notice_delay(&self) -> Duration {
    Duration::from_millis(u64::from(
      self.timing.notice_ms
    ))
  }

  pub fn input_error_delay(
    &self
  ) -> Duration {
    Duration::from_millis(u64::from(
      self.timing.input_error_ms
    ))
  }

  fn sanitize(&mut self) {
    if self.timing.notice_ms == 0 {
      self.timing.notice_ms =
        DEFAULT_NOTICE_MS;
    }
    if self.timing.input_error_ms == 0 {
      self.timing.input_error_ms =
        DEFAULT_NOTICE_MS;
    }
    if self
      .text
      .clear_all_confirm
      .trim()
      .is_empty()
    {
      self.text.clear_all_confirm =
        DEFAULT_CLEAR_ALL_CONFIRM
          .to_string();
    }
  }
}
