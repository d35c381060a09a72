//! JSON file adapter for the address book snapshot.
//!
//! # Invariants
//! - Serialized order equals address book order for both kinds.
//! - Reading rejects invalid fields and duplicate entries as a whole; no
//!   partially loaded book is ever returned.

use crate::model::address_book::AddressBook;
use crate::model::person::{AppointmentId, Name, Person, PersonKind, Phone, Role, Tag};
use crate::storage::json_file::{read_json_file, save_json_file};
use crate::storage::{AddressBookStorage, StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Address book storage backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    file_path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Reads a snapshot from an explicit path instead of the configured one.
    pub fn read_address_book_from(&self, path: &Path) -> StorageResult<Option<AddressBook>> {
        let Some(document) = read_json_file::<JsonAddressBook>(path)? else {
            return Ok(None);
        };
        document
            .into_model()
            .map(Some)
            .map_err(|message| StorageError::DataConversion {
                path: path.to_path_buf(),
                message,
            })
    }

    /// Writes a snapshot to an explicit path instead of the configured one.
    pub fn save_address_book_to(&self, address_book: &AddressBook, path: &Path) -> StorageResult<()> {
        save_json_file(path, &JsonAddressBook::from_model(address_book))
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn address_book_file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        self.read_address_book_from(&self.file_path)
    }

    fn save_address_book(&self, address_book: &AddressBook) -> StorageResult<()> {
        self.save_address_book_to(address_book, &self.file_path)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonAddressBook {
    #[serde(default)]
    patients: Vec<JsonPatient>,
    #[serde(default)]
    doctors: Vec<JsonDoctor>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonPatient {
    name: Name,
    phone: Phone,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    appointments: Vec<AppointmentId>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonDoctor {
    name: Name,
    phone: Phone,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl JsonAddressBook {
    fn from_model(book: &AddressBook) -> Self {
        Self {
            patients: book
                .patients()
                .iter()
                .map(|person| JsonPatient {
                    name: person.name().clone(),
                    phone: person.phone().clone(),
                    tags: person.tags().clone(),
                    appointments: person.appointments().to_vec(),
                })
                .collect(),
            doctors: book
                .doctors()
                .iter()
                .map(|person| JsonDoctor {
                    name: person.name().clone(),
                    phone: person.phone().clone(),
                    tags: person.tags().clone(),
                })
                .collect(),
        }
    }

    fn into_model(self) -> Result<AddressBook, String> {
        let patients = self
            .patients
            .into_iter()
            .map(|patient| {
                Person::new(
                    patient.name,
                    patient.phone,
                    patient.tags,
                    Role::Patient {
                        appointments: patient.appointments,
                    },
                )
            })
            .collect();
        let doctors = self
            .doctors
            .into_iter()
            .map(|doctor| Person::doctor(doctor.name, doctor.phone, doctor.tags))
            .collect();

        let mut book = AddressBook::new();
        book.set_persons(PersonKind::Patient, patients)
            .map_err(|_| "patients list contains duplicate patient(s)".to_string())?;
        book.set_persons(PersonKind::Doctor, doctors)
            .map_err(|_| "doctors list contains duplicate doctor(s)".to_string())?;
        Ok(book)
    }
}
