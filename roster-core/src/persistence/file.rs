use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{KeyValueStore, PersistenceError, PersistenceResult};

/// One `<key>.json` file per key under a directory.
///
/// Writes go through a temp file in the same directory and are renamed into
/// place, so a reader never observes a partial value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path backing `key`
    pub fn path_for(&self, key: &str) -> PersistenceResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> PersistenceResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidKey(key.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::ReadFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        let write_failed = |source: io::Error| PersistenceError::WriteFailed {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_failed)?;
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_failed)?;
        tmp.write_all(value.as_bytes()).map_err(write_failed)?;
        tmp.as_file().sync_all().map_err(write_failed)?;
        tmp.persist(&path).map_err(|err| write_failed(err.error))?;

        debug!(path = %path.display(), "persisted {key}");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistenceError::WriteFailed {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_a_new_handle() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("state");

        let mut store = FileStore::new(&dir);
        assert_eq!(store.get("clientTableSorts").unwrap(), None);
        store.set("clientTableSorts", r#"[{"field":"name","direction":"asc"}]"#).unwrap();

        let reopened = FileStore::new(&dir);
        assert_eq!(
            reopened.get("clientTableSorts").unwrap().as_deref(),
            Some(r#"[{"field":"name","direction":"asc"}]"#)
        );
        assert!(dir.join("clientTableSorts.json").is_file());
    }

    #[test]
    fn overwrite_and_remove() {
        let temp = tempdir().unwrap();
        let mut store = FileStore::new(temp.path());

        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let temp = tempdir().unwrap();
        let mut store = FileStore::new(temp.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(PersistenceError::InvalidKey(_))
            ));
        }
    }
}
