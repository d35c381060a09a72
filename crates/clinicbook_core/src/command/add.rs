//! Adds one person to the address book.

use crate::command::{CommandError, CommandOutcome, CommandResult};
use crate::model::model_manager::ModelManager;
use crate::model::person::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let kind = self.person.kind();
        if model.has_person(&self.person) {
            return Err(CommandError::Duplicate(kind));
        }
        model.add_person(self.person.clone())?;
        Ok(CommandResult::with_person(
            format!("New {kind} added: {}", self.person),
            self.person.clone(),
        ))
    }
}
