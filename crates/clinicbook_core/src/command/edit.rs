//! Edits the person shown at a filtered-view index.
//!
//! # Invariants
//! - Fields absent from the descriptor keep their current values.
//! - The role payload (e.g. appointment references) is carried over as is.
//! - A descriptor with no fields is a successful no-op.
//! - A successful edit resets the kind's view to show every person.

use crate::command::{person_at, CommandError, CommandOutcome, CommandResult, Index};
use crate::model::model_manager::ModelManager;
use crate::model::person::{Name, Person, PersonKind, Phone, Tag};
use crate::model::predicate::PersonPredicate;
use std::collections::BTreeSet;

/// Replacement values for an edit; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    /// Descriptor that rewrites every field to `person`'s values.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: Some(person.name().clone()),
            phone: Some(person.phone().clone()),
            tags: Some(person.tags().clone()),
        }
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.tags.is_some()
    }

    /// Builds the edited copy of `person`.
    pub fn apply(&self, person: &Person) -> Person {
        let mut edited = person.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.clone());
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    kind: PersonKind,
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn new(kind: PersonKind, index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self {
            kind,
            index,
            descriptor,
        }
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let target = person_at(model, self.kind, self.index)?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::Duplicate(self.kind));
        }

        model.set_person(&target, edited.clone())?;
        model.update_filtered_person_list(self.kind, PersonPredicate::All);
        Ok(CommandResult::with_person(
            format!("Edited {}: {edited}", capitalize(self.kind.noun())),
            edited,
        ))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
