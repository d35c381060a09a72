mod common;

use clinicbook_core::{
    AddressBook, AddressBookStorage, GuiSettings, JsonAddressBookStorage, JsonUserPrefsStorage,
    PersonKind, StorageError, StorageManager, UserPrefs, UserPrefsStorage,
};
use common::{alice, benson, dr_grey, typical_address_book};
use tempfile::tempdir;

#[test]
fn missing_file_reads_as_none() {
    let dir = tempdir().unwrap();
    let storage = JsonAddressBookStorage::new(dir.path().join("missing.json"));
    assert!(storage.read_address_book().unwrap().is_none());
}

#[test]
fn save_then_read_preserves_contents_and_order() {
    let dir = tempdir().unwrap();
    let storage = JsonAddressBookStorage::new(dir.path().join("data").join("book.json"));
    let original = typical_address_book();

    storage.save_address_book(&original).unwrap();
    let loaded = storage.read_address_book().unwrap().unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.patients()[1].appointments(), benson().appointments());

    let mut modified = original;
    modified.remove_person(&alice()).unwrap();
    storage.save_address_book(&modified).unwrap();
    assert_eq!(storage.read_address_book().unwrap().unwrap(), modified);
}

#[test]
fn snapshot_uses_expected_wire_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    let mut book = AddressBook::new();
    book.add_person(benson()).unwrap();
    book.add_person(dr_grey()).unwrap();
    JsonAddressBookStorage::new(&path).save_address_book(&book).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["patients"][0]["name"], "Benson Meier");
    assert_eq!(json["patients"][0]["phone"], "98765432");
    assert_eq!(json["patients"][0]["tags"], serde_json::json!(["friends", "owesMoney"]));
    assert_eq!(
        json["patients"][0]["appointments"][0],
        "00000000-0000-0000-0000-000000000001"
    );
    assert_eq!(json["doctors"][0]["name"], "Meredith Grey");
    assert!(json["doctors"][0].get("appointments").is_none());
}

#[test]
fn invalid_field_is_a_data_conversion_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(
        &path,
        r#"{"patients":[{"name":"R@chel","phone":"94351253","tags":[]}],"doctors":[]}"#,
    )
    .unwrap();

    let err = JsonAddressBookStorage::new(&path)
        .read_address_book()
        .unwrap_err();
    assert!(matches!(err, StorageError::DataConversion { .. }), "{err}");
}

#[test]
fn duplicate_entries_are_a_data_conversion_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(
        &path,
        r#"{"patients":[
            {"name":"Alice Pauline","phone":"94351253"},
            {"name":"alice  pauline","phone":"11111111"}
        ]}"#,
    )
    .unwrap();

    let err = JsonAddressBookStorage::new(&path)
        .read_address_book()
        .unwrap_err();
    match err {
        StorageError::DataConversion { message, .. } => assert!(message.contains("duplicate")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_a_data_conversion_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert!(matches!(
        JsonAddressBookStorage::new(&path).read_address_book(),
        Err(StorageError::DataConversion { .. })
    ));
}

#[test]
fn reading_a_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = JsonAddressBookStorage::new(dir.path())
        .read_address_book()
        .unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }), "{err}");
}

#[test]
fn storage_manager_delegates_both_ports() {
    let dir = tempdir().unwrap();
    let manager = StorageManager::new(
        JsonAddressBookStorage::new(dir.path().join("book.json")),
        JsonUserPrefsStorage::new(dir.path().join("prefs.json")),
    );

    let prefs = UserPrefs {
        gui_settings: GuiSettings {
            window_width: 300,
            window_height: 600,
            window_position: Some((4, 6)),
        },
        address_book_file_path: "data/other.json".into(),
    };
    manager.save_user_prefs(&prefs).unwrap();
    assert_eq!(manager.read_user_prefs().unwrap(), Some(prefs));

    let book = typical_address_book();
    manager.save_address_book(&book).unwrap();
    let loaded = manager.read_address_book().unwrap().unwrap();
    assert_eq!(loaded.persons(PersonKind::Doctor), book.doctors());
    assert_eq!(manager.address_book_file_path(), dir.path().join("book.json"));
}
