//! Session start-up from persisted state.
//!
//! # Invariants
//! - Start-up never fails because of bad data files; it degrades to sample
//!   data (no file) or an empty book (unreadable file) and logs why.

use crate::model::address_book::AddressBook;
use crate::model::model_manager::ModelManager;
use crate::model::prefs::UserPrefs;
use crate::model::sample::sample_address_book;
use crate::storage::{AddressBookStorage, StorageError, UserPrefsStorage};
use log::{info, warn};

/// Reads preferences, falling back to defaults on a missing or bad file.
pub fn init_prefs(storage: &impl UserPrefsStorage) -> UserPrefs {
    match storage.read_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            info!(
                "event=prefs_load module=bootstrap status=missing path={}",
                storage.user_prefs_file_path().display()
            );
            UserPrefs::default()
        }
        Err(err) => {
            warn!(
                "event=prefs_load module=bootstrap status=error error={} fallback=defaults",
                err
            );
            UserPrefs::default()
        }
    }
}

/// Builds the session model from storage.
pub fn init_model(storage: &impl AddressBookStorage, prefs: UserPrefs) -> ModelManager {
    let address_book = match storage.read_address_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!(
                "event=address_book_load module=bootstrap status=missing path={} fallback=sample",
                storage.address_book_file_path().display()
            );
            sample_address_book()
        }
        Err(err @ StorageError::DataConversion { .. }) => {
            warn!(
                "event=address_book_load module=bootstrap status=error error_code=data_conversion error={} fallback=empty",
                err
            );
            AddressBook::new()
        }
        Err(err @ StorageError::Io { .. }) => {
            warn!(
                "event=address_book_load module=bootstrap status=error error_code=io error={} fallback=empty",
                err
            );
            AddressBook::new()
        }
    };
    ModelManager::new(address_book, prefs)
}
