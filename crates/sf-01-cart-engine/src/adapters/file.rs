use crate::domain::StoreError;
use crate::ports::CartStore;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed slot store.
///
/// Each slot lives in its own `<dir>/<key>.json` file. Writes go to a
/// temporary file that is synced and then renamed over the slot, so a crash
/// never leaves a half-written ledger behind.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    dir: PathBuf,
}

impl FileCartStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Keys are category storage keys and may carry any punctuation a
    /// display name has. Only keys that could leave `dir` are refused.
    fn slot_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let path_like = key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\', '\0']);
        if path_like {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl CartStore for FileCartStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Non-UTF-8 bytes are slot corruption, not an unavailable store.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Ok(Some(String::from_utf8_lossy(&fs::read(&path)?).into_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        debug!("[sf-01] wrote slot {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("[sf-01] erased slot {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
