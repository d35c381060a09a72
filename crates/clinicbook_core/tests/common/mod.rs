#![allow(dead_code)]

use clinicbook_core::{
    parse_tags, AddressBook, Index, ModelManager, Name, Person, PersonKind, PersonPredicate,
    Phone, Role, Tag, UserPrefs,
};
use std::collections::BTreeSet;
use uuid::Uuid;

pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_TAG_HUSBAND: &str = "husband";

/// Builder for test persons with sensible defaults.
#[derive(Clone)]
pub struct PersonBuilder {
    name: Name,
    phone: Phone,
    tags: BTreeSet<Tag>,
    role: Role,
}

impl PersonBuilder {
    pub fn patient() -> Self {
        Self {
            name: Name::new("Amy Bee").unwrap(),
            phone: Phone::new("85355255").unwrap(),
            tags: BTreeSet::new(),
            role: Role::Patient {
                appointments: Vec::new(),
            },
        }
    }

    pub fn doctor() -> Self {
        Self {
            name: Name::new("Dr Amy").unwrap(),
            role: Role::Doctor,
            ..Self::patient()
        }
    }

    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name().clone(),
            phone: person.phone().clone(),
            tags: person.tags().clone(),
            role: person.role().clone(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Name::new(name).unwrap();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = Phone::new(phone).unwrap();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = parse_tags(tags).unwrap();
        self
    }

    /// Deterministic appointment ids so that fixtures compare equal.
    pub fn appointments(mut self, count: u128) -> Self {
        self.role = Role::Patient {
            appointments: (1..=count).map(Uuid::from_u128).collect(),
        };
        self
    }

    pub fn build(self) -> Person {
        Person::new(self.name, self.phone, self.tags, self.role)
    }
}

pub fn alice() -> Person {
    PersonBuilder::patient()
        .name("Alice Pauline")
        .phone("94351253")
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::patient()
        .name("Benson Meier")
        .phone("98765432")
        .tags(&["owesMoney", "friends"])
        .appointments(2)
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::patient()
        .name("Carl Kurz")
        .phone("95352563")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::patient()
        .name("Daniel Meier")
        .phone("87652533")
        .tags(&["friends"])
        .build()
}

pub fn dr_grey() -> Person {
    PersonBuilder::doctor()
        .name("Meredith Grey")
        .phone("91234567")
        .tags(&["surgery"])
        .build()
}

pub fn dr_house() -> Person {
    PersonBuilder::doctor()
        .name("Gregory House")
        .phone("93456789")
        .build()
}

pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in [alice(), benson(), carl(), daniel(), dr_grey(), dr_house()] {
        book.add_person(person).unwrap();
    }
    book
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book(), UserPrefs::default())
}

pub fn first() -> Index {
    Index::from_one_based(1).unwrap()
}

pub fn second() -> Index {
    Index::from_one_based(2).unwrap()
}

/// Narrows `kind`'s view to the single person shown at `index`.
pub fn show_person_at_index(model: &mut ModelManager, kind: PersonKind, index: Index) {
    let person = model.filtered_person_list(kind)[index.zero_based()].clone();
    model.update_filtered_person_list(kind, PersonPredicate::NameIs(person.name().clone()));
    assert_eq!(model.filtered_person_list(kind).len(), 1);
}
