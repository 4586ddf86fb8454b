//! JSON documents on disk

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::debug;

/// Directory under the platform config directory
const APP_DIR: &str = "vmagent";

/// Reads JSON documents from one directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `<config dir>/vmagent/`
    pub fn global() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("no platform config directory".to_string()))?;
        Ok(Self::new(config_dir.join(APP_DIR)))
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read and decode `name`
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.file_path(name);
        debug!("Reading {}", path.display());

        let raw = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Like [`JsonStore::load`], but a missing file is `Ok(None)`
    pub fn load_optional<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        if !self.file_path(name).is_file() {
            debug!("{} not present in {}", name, self.dir.display());
            return Ok(None);
        }
        self.load(name).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Doc {
        name: String,
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.json"), r#"{"name":"agent"}"#).unwrap();
        let store = JsonStore::new(dir.path());

        let doc: Doc = store.load("doc.json").unwrap();
        assert_eq!(doc.name, "agent");
    }

    #[test]
    fn test_load_optional_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let doc: Option<Doc> = store.load_optional("missing.json").unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_load_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let err = store.load::<Doc>("missing.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let store = JsonStore::new(dir.path());

        let err = store.load::<Doc>("bad.json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
