//! Person domain model shared by patient and doctor records.
//!
//! # Responsibility
//! - Define validated field value objects (`Name`, `Phone`, `Tag`).
//! - Define the `Person` record as one identity core plus a role payload.
//! - Keep the weak (same-entity) and strong (full equality) relations apart.
//!
//! # Invariants
//! - A constructed field value always satisfies its format rule.
//! - `Person` values are never mutated in place; edits build a new value.
//! - `a == b` implies `a.is_same_person(&b)`.

use crate::model::unique_list::SameEntity;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N} ]*$").expect("valid name regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,15}$").expect("valid phone regex"));
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,30}$").expect("valid tag regex"));

/// Opaque reference to an appointment owned by a patient.
pub type AppointmentId = Uuid;

/// Field-level validation failure raised while building a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidTag(String),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names should only contain alphanumeric characters and spaces, and it should not be blank"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers should only contain digits, and be 3 to 15 digits long"
            ),
            Self::InvalidTag(value) => write!(
                f,
                "invalid tag `{value}`: tags should be 1 to 30 alphanumeric characters"
            ),
        }
    }
}

impl Error for PersonValidationError {}

/// Person name.
///
/// Stored trimmed; inner spacing is kept as typed so that full equality stays
/// exact while identity comparison uses [`Name::identity_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PersonValidationError> {
        let trimmed = value.as_ref().trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(PersonValidationError::InvalidName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded, whitespace-collapsed form used for same-entity checks.
    pub fn identity_key(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

impl TryFrom<String> for Name {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PersonValidationError> {
        let trimmed = value.as_ref().trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(PersonValidationError::InvalidPhone(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short label attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PersonValidationError> {
        let trimmed = value.as_ref().trim();
        if !TAG_RE.is_match(trimmed) {
            return Err(PersonValidationError::InvalidTag(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Parses raw tag strings into a tag set, failing on the first invalid one.
pub fn parse_tags<I, S>(values: I) -> Result<BTreeSet<Tag>, PersonValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(Tag::new).collect()
}

/// Payload-free role discriminant used to address per-role lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonKind {
    Patient,
    Doctor,
}

impl PersonKind {
    pub const ALL: [PersonKind; 2] = [PersonKind::Patient, PersonKind::Doctor];

    /// Lowercase noun used in user-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
        }
    }
}

impl Display for PersonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

/// Role-specific payload carried by a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Patient owning opaque appointment references.
    Patient { appointments: Vec<AppointmentId> },
    Doctor,
}

impl Role {
    pub fn kind(&self) -> PersonKind {
        match self {
            Self::Patient { .. } => PersonKind::Patient,
            Self::Doctor => PersonKind::Doctor,
        }
    }
}

/// Immutable person record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: Name,
    phone: Phone,
    tags: BTreeSet<Tag>,
    role: Role,
}

impl Person {
    pub fn new(name: Name, phone: Phone, tags: BTreeSet<Tag>, role: Role) -> Self {
        Self {
            name,
            phone,
            tags,
            role,
        }
    }

    /// Builds a patient with no appointments.
    pub fn patient(name: Name, phone: Phone, tags: BTreeSet<Tag>) -> Self {
        Self::new(
            name,
            phone,
            tags,
            Role::Patient {
                appointments: Vec::new(),
            },
        )
    }

    pub fn doctor(name: Name, phone: Phone, tags: BTreeSet<Tag>) -> Self {
        Self::new(name, phone, tags, Role::Doctor)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn kind(&self) -> PersonKind {
        self.role.kind()
    }

    /// Appointment references; always empty for doctors.
    pub fn appointments(&self) -> &[AppointmentId] {
        match &self.role {
            Role::Patient { appointments } => appointments,
            Role::Doctor => &[],
        }
    }

    /// Weak identity: same role and same normalized name.
    ///
    /// Used for duplicate detection. Phone, tags and role payload are ignored.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.kind() == other.kind() && self.name.identity_key() == other.name.identity_key()
    }

    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_phone(&self, phone: Phone) -> Self {
        Self {
            phone,
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }
}

impl SameEntity for Person {
    fn is_same_entity(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; Phone: {}; Tags: ", self.name, self.phone)?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
