//! Command execution contract.
//!
//! # Responsibility
//! - Define validated, single-shot commands against `ModelManager`.
//! - Translate model failures into user-facing command failures.
//!
//! # Invariants
//! - Commands are built from already-validated arguments.
//! - `execute` either fully applies or fails with the model untouched.
//! - Index-addressed commands resolve against the current filtered view.

pub mod add;
pub mod delete;
pub mod edit;
pub mod index;
pub mod view;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use index::{Index, IndexError};
pub use view::{ClearCommand, FindCommand, ListCommand};

use crate::model::address_book::ModelError;
use crate::model::model_manager::ModelManager;
use crate::model::person::{Person, PersonKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP_MESSAGE: &str = "Commands: add-patient, add-doctor, edit-patient, edit-doctor, \
delete-patient, delete-doctor, find-patient, find-doctor, list-patient, list-doctor, \
clear-patient, clear-doctor, help, exit";
pub const EXIT_MESSAGE: &str = "Exiting ClinicBook as requested ...";

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// Success payload returned to the caller of `execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable feedback.
    pub feedback: String,
    /// Record produced or affected by the command, when there is one.
    pub person: Option<Person>,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            person: None,
            show_help: false,
            exit: false,
        }
    }

    pub fn with_person(feedback: impl Into<String>, person: Person) -> Self {
        Self {
            person: Some(person),
            ..Self::new(feedback)
        }
    }
}

/// Command-level failure surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Index lies beyond the current filtered view of that kind.
    InvalidIndex(PersonKind),
    /// Record collides by same-entity identity with another record.
    Duplicate(PersonKind),
    /// Unexpected model failure, e.g. a stale target reference.
    Model(ModelError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex(kind) => write!(f, "The {kind} index provided is invalid"),
            Self::Duplicate(kind) => write!(f, "This {kind} already exists in the address book"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Every command understood by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Clear(ClearCommand),
    Find(FindCommand),
    List(ListCommand),
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        match self {
            Self::Add(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Delete(command) => command.execute(model),
            Self::Clear(command) => command.execute(model),
            Self::Find(command) => command.execute(model),
            Self::List(command) => command.execute(model),
            Self::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(HELP_MESSAGE)
            }),
            Self::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new(EXIT_MESSAGE)
            }),
        }
    }

    /// Whether a successful run changes the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Edit(_) | Self::Delete(_) | Self::Clear(_)
        )
    }

    /// Person kind whose view the command reads or changes.
    pub fn kind(&self) -> Option<PersonKind> {
        match self {
            Self::Add(command) => Some(command.person().kind()),
            Self::Edit(command) => Some(command.kind()),
            Self::Delete(command) => Some(command.kind()),
            Self::Clear(command) => Some(command.kind()),
            Self::Find(command) => Some(command.kind()),
            Self::List(command) => Some(command.kind()),
            Self::Help | Self::Exit => None,
        }
    }

    /// Stable short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
            Self::Clear(_) => "clear",
            Self::Find(_) => "find",
            Self::List(_) => "list",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }
}

/// Looks up the person shown at `index` in `kind`'s filtered view.
fn person_at(model: &ModelManager, kind: PersonKind, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person_list(kind)
        .get(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidIndex(kind))
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandError, ListCommand};
    use crate::model::model_manager::ModelManager;
    use crate::model::person::PersonKind;

    #[test]
    fn help_and_exit_set_their_flags() {
        let mut model = ModelManager::default();
        assert!(Command::Help.execute(&mut model).unwrap().show_help);
        assert!(Command::Exit.execute(&mut model).unwrap().exit);
        assert!(!Command::Help.is_mutating());
    }

    #[test]
    fn commands_of_different_types_are_not_equal() {
        assert_ne!(
            Command::List(ListCommand::new(PersonKind::Doctor)),
            Command::Help
        );
    }

    #[test]
    fn error_messages_name_the_kind() {
        assert_eq!(
            CommandError::InvalidIndex(PersonKind::Patient).to_string(),
            "The patient index provided is invalid"
        );
        assert_eq!(
            CommandError::Duplicate(PersonKind::Doctor).to_string(),
            "This doctor already exists in the address book"
        );
    }
}
