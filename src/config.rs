// src/config.rs

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};
use tracing::{debug, error};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Untyped settings, kept exactly as they appear in the JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config(Map<String, Value>);

impl Config {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Config {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Load [`DEFAULT_CONFIG_PATH`].
pub fn load_config() -> Result<Option<Config>> {
    load_config_from(DEFAULT_CONFIG_PATH)
}

/// Parse the JSON object at `path`.
///
/// A missing file is logged and yields `Ok(None)`.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Option<Config>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("config.json not found");
            return Ok(None);
        }
        Err(e) => return Err(e).with_context(|| format!("opening config {:?}", path)),
    };

    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {:?}", path))?;
    let Value::Object(map) = value else {
        bail!("config {:?} must be a JSON object at the top level", path);
    };

    debug!(keys = map.len(), "loaded config");
    Ok(Some(Config(map)))
}
