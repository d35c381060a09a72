//! Address book aggregate root.
//!
//! # Responsibility
//! - Own one unique list per person kind.
//! - Route person mutations to the list matching the person's role.
//!
//! # Invariants
//! - Every stored person lives in the list of its own kind.
//! - Each list keeps its no-duplicate invariant after every call.
//! - Contents are only exposed as read-only slices.

use crate::model::person::{Person, PersonKind};
use crate::model::unique_list::{EntityError, UniqueList};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Failure raised by address book and model mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    Entity(EntityError),
    /// A person was routed to a list of another kind.
    KindMismatch {
        expected: PersonKind,
        actual: PersonKind,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity(err) => write!(f, "{err}"),
            Self::KindMismatch { expected, actual } => {
                write!(f, "expected a {expected} record but got a {actual} record")
            }
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Entity(err) => Some(err),
            Self::KindMismatch { .. } => None,
        }
    }
}

impl From<EntityError> for ModelError {
    fn from(value: EntityError) -> Self {
        Self::Entity(value)
    }
}

/// Patients and doctors, each in their own unique list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    patients: UniqueList<Person>,
    doctors: UniqueList<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all contents with a copy of `new_data`.
    pub fn reset_data(&mut self, new_data: &AddressBook) {
        self.patients = new_data.patients.clone();
        self.doctors = new_data.doctors.clone();
    }

    /// Replaces one kind's list atomically.
    ///
    /// Fails without touching the book when `persons` contains a record of
    /// another kind or two same-entity records.
    pub fn set_persons(&mut self, kind: PersonKind, persons: Vec<Person>) -> ModelResult<()> {
        if let Some(stray) = persons.iter().find(|person| person.kind() != kind) {
            return Err(ModelError::KindMismatch {
                expected: kind,
                actual: stray.kind(),
            });
        }
        self.list_mut(kind).set_all(persons)?;
        Ok(())
    }

    /// Returns true when a same-entity person of the same kind exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.list(person.kind()).contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.list_mut(person.kind()).add(person)?;
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        if target.kind() != edited.kind() {
            return Err(ModelError::KindMismatch {
                expected: target.kind(),
                actual: edited.kind(),
            });
        }
        self.list_mut(target.kind()).set_item(target, edited)?;
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> ModelResult<()> {
        self.list_mut(target.kind()).remove(target)?;
        Ok(())
    }

    /// Removes every person of `kind`.
    pub fn clear(&mut self, kind: PersonKind) {
        self.list_mut(kind).clear();
    }

    pub fn persons(&self, kind: PersonKind) -> &[Person] {
        self.list(kind).as_slice()
    }

    pub fn patients(&self) -> &[Person] {
        self.persons(PersonKind::Patient)
    }

    pub fn doctors(&self) -> &[Person] {
        self.persons(PersonKind::Doctor)
    }

    pub fn len(&self) -> usize {
        self.patients.len() + self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty() && self.doctors.is_empty()
    }

    fn list(&self, kind: PersonKind) -> &UniqueList<Person> {
        match kind {
            PersonKind::Patient => &self.patients,
            PersonKind::Doctor => &self.doctors,
        }
    }

    fn list_mut(&mut self, kind: PersonKind) -> &mut UniqueList<Person> {
        match kind {
            PersonKind::Patient => &mut self.patients,
            PersonKind::Doctor => &mut self.doctors,
        }
    }
}
