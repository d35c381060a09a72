//! JSON file adapter for user preferences.

use crate::model::prefs::UserPrefs;
use crate::storage::json_file::{read_json_file, save_json_file};
use crate::storage::{StorageResult, UserPrefsStorage};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonUserPrefsStorage {
    file_path: PathBuf,
}

impl JsonUserPrefsStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl UserPrefsStorage for JsonUserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        read_json_file(&self.file_path)
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()> {
        save_json_file(&self.file_path, user_prefs)
    }
}
