//! Directory-backed store used by the host binary.
//!
//! Each record lives in `<dir>/<key-name>.bin` with exactly the bytes the
//! device would hold, so a data directory can be inspected with `xxd`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{PersistKey, PersistentStore, StorageError};

/// One file per record under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        info!("Using data directory: {}", dir.display());
        Ok(Self { dir })
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: PersistKey) -> PathBuf {
        self.dir.join(format!("{}.bin", key.name()))
    }
}

impl PersistentStore for FileStore {
    fn read(&self, key: PersistKey) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key, source }),
        }
    }

    fn write_bytes(&mut self, key: PersistKey, data: &[u8]) -> Result<usize, StorageError> {
        std::fs::write(self.path_for(key), data).map_err(|source| StorageError::Io { key, source })?;
        Ok(data.len())
    }
}
