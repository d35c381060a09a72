//! Persistence ports and JSON file adapters.
//!
//! # Responsibility
//! - Define read/write contracts for the address book and user preferences.
//! - Keep file format details out of the model and command layers.
//!
//! # Invariants
//! - A missing file reads as `Ok(None)`, never as an error.
//! - Data that does not convert into valid model values is reported as
//!   `StorageError::DataConversion`, not repaired.
//! - Writes always persist the full snapshot.

mod json_address_book;
mod json_file;
mod json_user_prefs;
mod manager;

pub use json_address_book::JsonAddressBookStorage;
pub use json_user_prefs::JsonUserPrefsStorage;
pub use manager::StorageManager;

use crate::model::address_book::AddressBook;
use crate::model::prefs::UserPrefs;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    /// Read or write fault on the underlying file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content does not match the expected schema or model rules.
    DataConversion { path: PathBuf, message: String },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to access `{}`: {source}", path.display())
            }
            Self::DataConversion { path, message } => {
                write!(f, "data in `{}` is not in the expected format: {message}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::DataConversion { .. } => None,
        }
    }
}

/// Port for reading and writing the address book snapshot.
pub trait AddressBookStorage {
    fn address_book_file_path(&self) -> &Path;
    fn read_address_book(&self) -> StorageResult<Option<AddressBook>>;
    fn save_address_book(&self, address_book: &AddressBook) -> StorageResult<()>;
}

/// Port for reading and writing user preferences.
pub trait UserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path;
    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>>;
    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()>;
}
