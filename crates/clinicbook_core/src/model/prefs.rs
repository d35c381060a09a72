//! User preferences persisted between sessions.
//!
//! Preferences are not load-bearing for model correctness; they only carry
//! window geometry and the address book file location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_WIDTH: u32 = 740;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_ADDRESS_BOOK_FILE: &str = "data/clinicbook.json";

/// Window geometry remembered from the last session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiSettings {
    pub window_width: u32,
    pub window_height: u32,
    /// Top-left corner; `None` lets the shell pick a position.
    pub window_position: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_position: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    pub gui_settings: GuiSettings,
    pub address_book_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE),
        }
    }
}

impl UserPrefs {
    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }
}
