//! Directory-backed storage: one `<key>.json` file per key.

use crate::{KeyValueStorage, StorageError, StorageResult};

use std::io::{ErrorKind, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use tempfile::NamedTempFile;

const FILE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed
    #[track_caller]
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();

        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| StorageError::Io {
                key: dir.display().to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;
            log::info!("Created storage directory {}", dir.display());
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[track_caller]
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');

        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io {
                key: key.to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let io_error = |source: std::io::Error| StorageError::Io {
            key: key.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        };

        // Write beside the target and rename so readers never see a partial value
        let mut file = NamedTempFile::new_in(&self.dir).map_err(io_error)?;
        file.write_all(value.as_bytes()).map_err(io_error)?;
        file.as_file().sync_all().map_err(io_error)?;
        file.persist(&path).map_err(|e| io_error(e.error))?;

        Ok(())
    }
}
