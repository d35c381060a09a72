mod common;

use clinicbook_core::{
    AddCommand, ClearCommand, Command, CommandError, DeleteCommand, FindCommand, Index,
    ListCommand, ModelManager, PersonKind, PersonPredicate,
};
use common::{
    alice, benson, dr_grey, first, second, show_person_at_index, typical_model, PersonBuilder,
};

#[test]
fn add_to_empty_book_then_duplicate_add_fails() {
    let mut model = ModelManager::default();
    let add_alice = AddCommand::new(alice());

    let result = add_alice.execute(&mut model).unwrap();
    assert_eq!(result.feedback, format!("New patient added: {}", alice()));
    assert_eq!(model.filtered_person_list(PersonKind::Patient), &[alice()]);

    let same_name = PersonBuilder::from_person(&alice()).phone("12341234").build();
    let err = AddCommand::new(same_name).execute(&mut model).unwrap_err();
    assert_eq!(err, CommandError::Duplicate(PersonKind::Patient));
    assert_eq!(model.filtered_person_list(PersonKind::Patient), &[alice()]);
}

#[test]
fn add_doctor_named_like_patient_succeeds() {
    let mut model = typical_model();
    let doctor = PersonBuilder::doctor().name(alice().name().as_str()).build();
    AddCommand::new(doctor.clone()).execute(&mut model).unwrap();
    assert_eq!(model.filtered_person_list(PersonKind::Doctor).last(), Some(&doctor));
}

#[test]
fn delete_valid_index_unfiltered_list_removes_person() {
    let mut model = typical_model();
    let result = DeleteCommand::new(PersonKind::Patient, first())
        .execute(&mut model)
        .unwrap();
    assert_eq!(result.feedback, format!("Deleted patient: {}", alice()));
    assert!(!model.has_person(&alice()));
    assert_eq!(model.filtered_person_list(PersonKind::Patient)[0], benson());
}

#[test]
fn delete_invalid_index_fails_without_change() {
    let mut model = typical_model();
    let before = model.clone();
    let out_of_bound = Index::from_one_based(3).unwrap();

    let err = DeleteCommand::new(PersonKind::Doctor, out_of_bound)
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidIndex(PersonKind::Doctor));
    assert_eq!(model, before);
}

#[test]
fn delete_resolves_against_filtered_view() {
    let mut model = typical_model();
    show_person_at_index(&mut model, PersonKind::Patient, second());

    let err = DeleteCommand::new(PersonKind::Patient, second())
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidIndex(PersonKind::Patient));

    DeleteCommand::new(PersonKind::Patient, first())
        .execute(&mut model)
        .unwrap();
    assert!(!model.has_person(&benson()));
    assert!(model.has_person(&alice()));
    assert!(model.filtered_person_list(PersonKind::Patient).is_empty());
}

#[test]
fn find_filters_and_list_restores_view() {
    let mut model = typical_model();
    let find = FindCommand::new(
        PersonKind::Patient,
        PersonPredicate::NameContainsKeywords(vec!["Meier".to_string()]),
    );
    let result = find.execute(&mut model).unwrap();
    assert_eq!(result.feedback, "2 patients listed!");
    assert_eq!(model.filtered_person_list(PersonKind::Patient).len(), 2);

    let result = ListCommand::new(PersonKind::Patient)
        .execute(&mut model)
        .unwrap();
    assert_eq!(result.feedback, "Listed all patients");
    assert_eq!(model.filtered_person_list(PersonKind::Patient).len(), 4);
}

#[test]
fn clear_only_affects_its_kind() {
    let mut model = typical_model();
    ClearCommand::new(PersonKind::Patient)
        .execute(&mut model)
        .unwrap();
    assert!(model.address_book().patients().is_empty());
    assert_eq!(model.filtered_person_list(PersonKind::Doctor)[0], dr_grey());
}

#[test]
fn only_book_changing_commands_are_mutating() {
    assert!(Command::Add(AddCommand::new(alice())).is_mutating());
    assert!(Command::Delete(DeleteCommand::new(PersonKind::Patient, first())).is_mutating());
    assert!(Command::Clear(ClearCommand::new(PersonKind::Doctor)).is_mutating());
    assert!(!Command::List(ListCommand::new(PersonKind::Doctor)).is_mutating());
    assert!(!Command::Find(FindCommand::new(PersonKind::Doctor, PersonPredicate::All)).is_mutating());
    assert!(!Command::Exit.is_mutating());
}

#[test]
fn delete_commands_compare_by_kind_and_index() {
    let delete_first = DeleteCommand::new(PersonKind::Patient, first());
    assert_eq!(delete_first, DeleteCommand::new(PersonKind::Patient, first()));
    assert_ne!(delete_first, DeleteCommand::new(PersonKind::Patient, second()));
    assert_ne!(delete_first, DeleteCommand::new(PersonKind::Doctor, first()));
}
