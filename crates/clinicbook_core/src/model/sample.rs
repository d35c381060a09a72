//! Sample records used to seed a first-run address book.

use crate::model::address_book::AddressBook;
use crate::model::person::{parse_tags, Name, Person, PersonKind, PersonValidationError, Phone};
use log::warn;

const SAMPLE_PATIENTS: &[SampleEntry] = &[
    ("Alex Yeoh", "87438807", &["friends"]),
    ("Bernice Yu", "99272758", &["colleagues", "friends"]),
    ("Charlotte Oliveiro", "93210283", &["neighbours"]),
];

const SAMPLE_DOCTORS: &[SampleEntry] = &[
    ("David Li", "91031282", &["cardiology"]),
    ("Irfan Ibrahim", "92492021", &["paediatrics"]),
];

/// Builds the address book shown when no data file exists yet.
///
/// An entry that fails validation is skipped and logged; the rest still load.
pub fn sample_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    load_kind(&mut book, PersonKind::Patient, SAMPLE_PATIENTS);
    load_kind(&mut book, PersonKind::Doctor, SAMPLE_DOCTORS);
    book
}

type SampleEntry = (&'static str, &'static str, &'static [&'static str]);

fn load_kind(book: &mut AddressBook, kind: PersonKind, entries: &[SampleEntry]) {
    let mut persons = Vec::with_capacity(entries.len());
    for (name, phone, tags) in entries {
        match build(kind, name, phone, tags) {
            Ok(person) => persons.push(person),
            Err(err) => warn!(
                "event=sample_load module=model status=error kind={} error={}",
                kind, err
            ),
        }
    }
    if let Err(err) = book.set_persons(kind, persons) {
        warn!(
            "event=sample_load module=model status=error kind={} error={}",
            kind, err
        );
    }
}

fn build(
    kind: PersonKind,
    name: &str,
    phone: &str,
    tags: &[&str],
) -> Result<Person, PersonValidationError> {
    let (name, phone, tags) = (Name::new(name)?, Phone::new(phone)?, parse_tags(tags)?);
    Ok(match kind {
        PersonKind::Patient => Person::patient(name, phone, tags),
        PersonKind::Doctor => Person::doctor(name, phone, tags),
    })
}
