//! Deletes the person shown at a filtered-view index.

use crate::command::{person_at, CommandOutcome, CommandResult, Index};
use crate::model::model_manager::ModelManager;
use crate::model::person::PersonKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    kind: PersonKind,
    index: Index,
}

impl DeleteCommand {
    pub fn new(kind: PersonKind, index: Index) -> Self {
        Self { kind, index }
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let target = person_at(model, self.kind, self.index)?;
        model.delete_person(&target)?;
        Ok(CommandResult::with_person(
            format!("Deleted {}: {target}", self.kind),
            target,
        ))
    }
}
