//! Shared JSON file helpers.

use crate::storage::{StorageError, StorageResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads and decodes `path`; returns `Ok(None)` when the file does not exist.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(
                "event=storage_read module=storage status=missing path={}",
                path.display()
            );
            return Ok(None);
        }
        Err(err) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    serde_json::from_str(&raw).map(Some).map_err(|err| {
        warn!(
            "event=storage_read module=storage status=error error_code=data_conversion path={}",
            path.display()
        );
        StorageError::DataConversion {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })
}

/// Encodes `value` as pretty JSON and writes it, creating parent directories.
///
/// Content is written to a sibling `.tmp` file and then renamed over `path`;
/// an interrupted write leaves the previous file intact.
pub(crate) fn save_json_file<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let io_error = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let encoded = serde_json::to_string_pretty(value).map_err(|err| StorageError::DataConversion {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let tmp_path = temp_path_for(path);
    std::fs::write(&tmp_path, encoded).map_err(|source| StorageError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    std::fs::rename(&tmp_path, path).map_err(io_error)?;
    debug!(
        "event=storage_write module=storage status=ok path={}",
        path.display()
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(".tmp");
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::{read_json_file, save_json_file, temp_path_for};
    use std::path::Path;

    #[test]
    fn temp_path_is_a_sibling_with_tmp_suffix() {
        assert_eq!(
            temp_path_for(Path::new("data/book.json")),
            Path::new("data/book.json.tmp")
        );
    }

    #[test]
    fn save_replaces_previous_content_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");

        save_json_file(&path, &vec![1, 2, 3]).unwrap();
        save_json_file(&path, &vec![4]).unwrap();

        assert_eq!(read_json_file::<Vec<u32>>(&path).unwrap(), Some(vec![4]));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn stale_temp_file_from_interrupted_write_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        save_json_file(&path, &vec![1]).unwrap();
        std::fs::write(temp_path_for(&path), "[7, 8").unwrap();

        assert_eq!(read_json_file::<Vec<u32>>(&path).unwrap(), Some(vec![1]));
        save_json_file(&path, &vec![2]).unwrap();
        assert_eq!(read_json_file::<Vec<u32>>(&path).unwrap(), Some(vec![2]));
        assert!(!temp_path_for(&path).exists());
    }
}
