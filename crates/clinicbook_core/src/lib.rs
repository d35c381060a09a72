//! Core domain logic for ClinicBook.
//! This crate is the single source of truth for patient/doctor invariants.

pub mod bootstrap;
pub mod command;
pub mod config;
pub mod logging;
pub mod logic;
pub mod model;
pub mod storage;

pub use bootstrap::{init_model, init_prefs};
pub use command::{
    AddCommand, ClearCommand, Command, CommandError, CommandOutcome, CommandResult,
    DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand, Index, IndexError,
    ListCommand,
};
pub use config::{Config, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use logic::{LogicError, LogicManager};
pub use model::address_book::{AddressBook, ModelError, ModelResult};
pub use model::model_manager::ModelManager;
pub use model::person::{
    parse_tags, AppointmentId, Name, Person, PersonKind, PersonValidationError, Phone, Role, Tag,
};
pub use model::predicate::PersonPredicate;
pub use model::prefs::{GuiSettings, UserPrefs};
pub use model::sample::sample_address_book;
pub use model::unique_list::{EntityError, SameEntity, UniqueList};
pub use storage::{
    AddressBookStorage, JsonAddressBookStorage, JsonUserPrefsStorage, StorageError,
    StorageManager, StorageResult, UserPrefsStorage,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
