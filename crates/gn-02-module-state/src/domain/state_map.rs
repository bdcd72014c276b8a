//! Module name to state blob mapping.

use super::errors::{ModuleStateError, ModuleStateResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Genesis state of one application module.
///
/// `Default` is the zero value returned when the module was never written.
pub trait ModuleGenesis: Serialize + DeserializeOwned + Default {
    /// Key of this module under `app_state`.
    const MODULE_NAME: &'static str;
}

/// Serialized module states keyed by module name.
///
/// Keys iterate in byte order, so serializing the map is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModuleStateMap(BTreeMap<String, Value>);

impl ModuleStateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed state of `M`, or its zero value if never written.
    pub fn get<M: ModuleGenesis>(&self) -> ModuleStateResult<M> {
        match self.0.get(M::MODULE_NAME) {
            Some(blob) => {
                serde_json::from_value(blob.clone()).map_err(|source| ModuleStateError::Malformed {
                    module: M::MODULE_NAME,
                    source,
                })
            }
            None => Ok(M::default()),
        }
    }

    /// Overwrite the state of `M`.
    pub fn set<M: ModuleGenesis>(&mut self, state: &M) -> ModuleStateResult<()> {
        let blob = serde_json::to_value(state).map_err(|source| ModuleStateError::Encode {
            module: M::MODULE_NAME,
            source,
        })?;
        debug!(module = M::MODULE_NAME, "module state written");
        self.0.insert(M::MODULE_NAME.to_string(), blob);
        Ok(())
    }

    /// Consuming form of [`set`](Self::set).
    pub fn with<M: ModuleGenesis>(mut self, state: &M) -> ModuleStateResult<Self> {
        self.set(state)?;
        Ok(self)
    }

    /// Raw blob of a module, if written.
    pub fn get_raw(&self, module: &str) -> Option<&Value> {
        self.0.get(module)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.0.contains_key(module)
    }

    /// Module names in key order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(module, blob)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
