//! Commands that reset or re-filter a person list view.

use crate::command::{CommandOutcome, CommandResult};
use crate::model::model_manager::ModelManager;
use crate::model::person::PersonKind;
use crate::model::predicate::PersonPredicate;

/// Removes every person of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand {
    kind: PersonKind,
}

impl ClearCommand {
    pub fn new(kind: PersonKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.clear_persons(self.kind);
        Ok(CommandResult::new(format!(
            "All {} records have been cleared!",
            self.kind
        )))
    }
}

/// Filters one kind's view with a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    kind: PersonKind,
    predicate: PersonPredicate,
}

impl FindCommand {
    pub fn new(kind: PersonKind, predicate: PersonPredicate) -> Self {
        Self { kind, predicate }
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filtered_person_list(self.kind, self.predicate.clone());
        let shown = model.filtered_person_list(self.kind).len();
        Ok(CommandResult::new(format!(
            "{shown} {}s listed!",
            self.kind
        )))
    }
}

/// Shows every person of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    kind: PersonKind,
}

impl ListCommand {
    pub fn new(kind: PersonKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filtered_person_list(self.kind, PersonPredicate::All);
        Ok(CommandResult::new(format!("Listed all {}s", self.kind)))
    }
}
