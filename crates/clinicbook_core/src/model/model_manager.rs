//! Session model: address book, filtered views and user preferences.
//!
//! # Responsibility
//! - Act as the single mutation gateway for commands.
//! - Keep one filtered view per person kind in sync with the address book.
//!
//! # Invariants
//! - After any mutating call or predicate change returns, every filtered view
//!   equals `persons(kind).filter(predicate)` in address book order.
//! - The model holds no knowledge of storage; callers persist afterwards.

use crate::model::address_book::{AddressBook, ModelResult};
use crate::model::person::{Person, PersonKind};
use crate::model::predicate::PersonPredicate;
use crate::model::prefs::{GuiSettings, UserPrefs};
use log::debug;
use std::path::{Path, PathBuf};

/// Cached projection of one person list under a predicate.
#[derive(Debug, Clone, Default)]
struct FilteredList {
    predicate: PersonPredicate,
    items: Vec<Person>,
}

impl FilteredList {
    fn refresh(&mut self, source: &[Person]) {
        self.items = source
            .iter()
            .filter(|person| self.predicate.test(person))
            .cloned()
            .collect();
    }
}

// The cached items are derived from the book and predicate.
impl PartialEq for FilteredList {
    fn eq(&self, other: &Self) -> bool {
        self.predicate == other.predicate
    }
}

/// In-memory session state passed explicitly to every command.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,
    filtered_patients: FilteredList,
    filtered_doctors: FilteredList,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new(), UserPrefs::default())
    }
}

impl ModelManager {
    /// Creates a model showing every person of both kinds.
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        debug!(
            "event=model_init module=model status=ok patients={} doctors={}",
            address_book.patients().len(),
            address_book.doctors().len()
        );
        let mut model = Self {
            address_book,
            user_prefs,
            filtered_patients: FilteredList::default(),
            filtered_doctors: FilteredList::default(),
        };
        model.refresh_all();
        model
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.user_prefs.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.gui_settings = gui_settings;
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.user_prefs.address_book_file_path = path.into();
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replaces the whole address book.
    pub fn set_address_book(&mut self, address_book: &AddressBook) {
        self.address_book.reset_data(address_book);
        self.refresh_all();
    }

    pub fn clear_persons(&mut self, kind: PersonKind) {
        self.address_book.clear(kind);
        self.refresh(kind);
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        let kind = person.kind();
        self.address_book.add_person(person)?;
        self.refresh(kind);
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> ModelResult<()> {
        self.address_book.remove_person(target)?;
        self.refresh(target.kind());
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.address_book.set_person(target, edited)?;
        self.refresh(target.kind());
        Ok(())
    }

    /// Persons of `kind` matching the active predicate, in book order.
    pub fn filtered_person_list(&self, kind: PersonKind) -> &[Person] {
        &self.filtered(kind).items
    }

    pub fn filtered_predicate(&self, kind: PersonKind) -> &PersonPredicate {
        &self.filtered(kind).predicate
    }

    /// Swaps the predicate of `kind`'s view and recomputes it.
    pub fn update_filtered_person_list(&mut self, kind: PersonKind, predicate: PersonPredicate) {
        self.filtered_mut(kind).predicate = predicate;
        self.refresh(kind);
    }

    fn refresh_all(&mut self) {
        for kind in PersonKind::ALL {
            self.refresh(kind);
        }
    }

    fn refresh(&mut self, kind: PersonKind) {
        let source = self.address_book.persons(kind);
        let view = match kind {
            PersonKind::Patient => &mut self.filtered_patients,
            PersonKind::Doctor => &mut self.filtered_doctors,
        };
        view.refresh(source);
    }

    fn filtered(&self, kind: PersonKind) -> &FilteredList {
        match kind {
            PersonKind::Patient => &self.filtered_patients,
            PersonKind::Doctor => &self.filtered_doctors,
        }
    }

    fn filtered_mut(&mut self, kind: PersonKind) -> &mut FilteredList {
        match kind {
            PersonKind::Patient => &mut self.filtered_patients,
            PersonKind::Doctor => &mut self.filtered_doctors,
        }
    }
}
