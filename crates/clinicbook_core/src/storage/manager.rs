//! Storage facade combining address book and preference adapters.

use crate::model::address_book::AddressBook;
use crate::model::prefs::UserPrefs;
use crate::storage::{AddressBookStorage, StorageResult, UserPrefsStorage};
use log::debug;
use std::path::Path;

/// Delegates each port to its own adapter.
#[derive(Debug, Clone)]
pub struct StorageManager<A, U> {
    address_book_storage: A,
    user_prefs_storage: U,
}

impl<A: AddressBookStorage, U: UserPrefsStorage> StorageManager<A, U> {
    pub fn new(address_book_storage: A, user_prefs_storage: U) -> Self {
        Self {
            address_book_storage,
            user_prefs_storage,
        }
    }
}

impl<A: AddressBookStorage, U: UserPrefsStorage> AddressBookStorage for StorageManager<A, U> {
    fn address_book_file_path(&self) -> &Path {
        self.address_book_storage.address_book_file_path()
    }

    fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        debug!(
            "event=address_book_read module=storage status=start path={}",
            self.address_book_file_path().display()
        );
        self.address_book_storage.read_address_book()
    }

    fn save_address_book(&self, address_book: &AddressBook) -> StorageResult<()> {
        debug!(
            "event=address_book_save module=storage status=start path={}",
            self.address_book_file_path().display()
        );
        self.address_book_storage.save_address_book(address_book)
    }
}

impl<A: AddressBookStorage, U: UserPrefsStorage> UserPrefsStorage for StorageManager<A, U> {
    fn user_prefs_file_path(&self) -> &Path {
        self.user_prefs_storage.user_prefs_file_path()
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        self.user_prefs_storage.read_user_prefs()
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()> {
        self.user_prefs_storage.save_user_prefs(user_prefs)
    }
}
