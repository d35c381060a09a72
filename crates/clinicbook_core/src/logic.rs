//! Command execution facade with write-through persistence.
//!
//! # Responsibility
//! - Run one command at a time against the session model.
//! - Persist the full address book after every successful mutating command.
//!
//! # Invariants
//! - Non-mutating commands never touch storage.
//! - A failed save does not roll back the in-memory mutation; the caller is
//!   told through `LogicError::Storage`.

use crate::command::{Command, CommandError, CommandResult};
use crate::model::model_manager::ModelManager;
use crate::model::person::{Person, PersonKind};
use crate::storage::{AddressBookStorage, StorageError, UserPrefsStorage};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

#[derive(Debug)]
pub enum LogicError {
    Command(CommandError),
    Storage(StorageError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "could not save data to file: {err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<StorageError> for LogicError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Owns the session model and the storage it writes through to.
pub struct LogicManager<S> {
    model: ModelManager,
    storage: S,
}

impl<S: AddressBookStorage + UserPrefsStorage> LogicManager<S> {
    pub fn new(model: ModelManager, storage: S) -> Self {
        Self { model, storage }
    }

    /// Executes `command`, then saves the book if the command mutated it.
    pub fn execute(&mut self, command: &Command) -> Result<CommandResult, LogicError> {
        let started_at = Instant::now();
        let result = match command.execute(&mut self.model) {
            Ok(result) => result,
            Err(err) => {
                info!(
                    "event=command_execute module=logic status=rejected command={} duration_ms={} reason={}",
                    command.name(),
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        if command.is_mutating() {
            if let Err(err) = self.storage.save_address_book(self.model.address_book()) {
                warn!(
                    "event=command_execute module=logic status=error command={} error_code=save_failed error={}",
                    command.name(),
                    err
                );
                return Err(err.into());
            }
        }

        info!(
            "event=command_execute module=logic status=ok command={} duration_ms={}",
            command.name(),
            started_at.elapsed().as_millis()
        );
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn filtered_person_list(&self, kind: PersonKind) -> &[Person] {
        self.model.filtered_person_list(kind)
    }

    /// Persists current preferences; called once when the session ends.
    pub fn shutdown(self) -> Result<ModelManager, LogicError> {
        self.storage.save_user_prefs(self.model.user_prefs())?;
        info!("event=app_stop module=logic status=ok");
        Ok(self.model)
    }
}
