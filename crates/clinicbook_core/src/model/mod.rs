//! Domain model for patient and doctor records.
//!
//! # Responsibility
//! - Define validated person records and their role payloads.
//! - Own uniqueness enforcement and filtered list views.
//!
//! # Invariants
//! - Duplicate detection uses the weak same-entity relation only.
//! - All mutations flow through `ModelManager`.

pub mod address_book;
pub mod model_manager;
pub mod person;
pub mod predicate;
pub mod prefs;
pub mod sample;
pub mod unique_list;
