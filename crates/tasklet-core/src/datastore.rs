use std::collections::BTreeMap;

use anyhow::{
  Context,
  anyhow
};
use serde::{
  Serialize,
  de::DeserializeOwned
};
use tracing::debug;

pub trait KeyValueStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;

  fn remove_item(
    &mut self,
    key: &str
  ) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
  entries:     BTreeMap<String, String>,
  fail_reads:  bool,
  fail_writes: bool,
  writes:      usize
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(
    mut self,
    key: &str,
    value: &str
  ) -> Self {
    self
      .entries
      .insert(key.to_string(), value.to_string());
    self
  }

  pub fn set_fail_reads(
    &mut self,
    fail: bool
  ) {
    self.fail_reads = fail;
  }

  pub fn set_fail_writes(
    &mut self,
    fail: bool
  ) {
    self.fail_writes = fail;
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  pub fn contains_key(
    &self,
    key: &str
  ) -> bool {
    self.entries.contains_key(key)
  }

  pub fn write_count(&self) -> usize {
    self.writes
  }
}

impl KeyValueStore for MemoryStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    if self.fail_reads {
      return Err(anyhow!(
        "storage read denied for {key}"
      ));
    }
    Ok(self.entries.get(key).cloned())
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    if self.fail_writes {
      return Err(anyhow!(
        "storage write denied for {key}"
      ));
    }
    self
      .entries
      .insert(key.to_string(), value.to_string());
    self.writes += 1;
    Ok(())
  }

  fn remove_item(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    if self.fail_writes {
      return Err(anyhow!(
        "storage write denied for {key}"
      ));
    }
    self.entries.remove(key);
    self.writes += 1;
    Ok(())
  }
}

#[tracing::instrument(skip(storage))]
pub fn load_json<T, S>(
  storage: &S,
  key: &str
) -> anyhow::Result<Option<T>>
where
  T: DeserializeOwned,
  S: KeyValueStore + ?Sized
{
  let Some(raw) = storage
    .get_item(key)
    .with_context(|| {
      format!("failed reading {key}")
    })?
  else {
    debug!(key, "no stored value");
    return Ok(None);
  };

  let value = serde_json::from_str(&raw)
    .with_context(|| {
      format!("failed parsing {key}")
    })?;
  Ok(Some(value))
}

#[tracing::instrument(skip(storage, value))]
pub fn save_json<T, S>(
  storage: &mut S,
  key: &str,
  value: &T
) -> anyhow::Result<()>
where
  T: Serialize + ?Sized,
  S: KeyValueStore + ?Sized
{
  let serialized =
    serde_json::to_string(value)
      .with_context(|| {
        format!("failed encoding {key}")
      })?;
  debug!(
    key,
    bytes = serialized.len(),
    "saving json"
  );
  storage
    .set_item(key, &serialized)
    .with_context(|| {
      format!("failed writing {key}")
    })
}

#[cfg(test)]
mod tests {
  use super::{
    KeyValueStore,
    MemoryStore,
    load_json,
    save_json
  };

  #[test]
  fn json_roundtrip_through_memory_store() {
    let mut store = MemoryStore::new();
    save_json(
      &mut store,
      "numbers",
      &vec![3_u32, 1, 2]
    )
    .expect("save");
    assert_eq!(
      store.raw("numbers"),
      Some("[3,1,2]")
    );

    let loaded: Option<Vec<u32>> =
      load_json(&store, "numbers")
        .expect("load");
    assert_eq!(loaded, Some(vec![3, 1, 2]));
  }

  #[test]
  fn absent_key_loads_as_none() {
    let store = MemoryStore::new();
    let loaded: Option<Vec<u32>> =
      load_json(&store, "missing")
        .expect("load");
    assert!(loaded.is_none());
  }

  #[test]
  fn garbage_payload_is_an_error() {
    let store = MemoryStore::new()
      .with_entry("numbers", "{not json");
    let loaded = load_json::<Vec<u32>, _>(
      &store, "numbers"
    );
    assert!(loaded.is_err());
  }

  #[test]
  fn failing_backend_surfaces_errors() {
    let mut store = MemoryStore::new()
      .with_entry("theme", "dark");
    store.set_fail_reads(true);
    assert!(store.get_item("theme").is_err());

    store.set_fail_writes(true);
    assert!(
      store.set_item("theme", "light").is_err()
    );
    assert!(store.remove_item("theme").is_err());
    assert_eq!(store.write_count(), 0);
    assert_eq!(store.raw("theme"), Some("dark"));
  }
}
