// Integration tests for the dish repository session operations

use dishmenu_core::model::{NewDish, Price};
use dishmenu_store::{ConnectionTarget, Database};
use std::collections::HashSet;
use tempfile::TempDir;

fn price(text: &str) -> Price {
    text.parse().unwrap()
}

fn ready_database() -> Database {
    let db = Database::in_memory().unwrap();
    db.initialize_schema().unwrap();
    db
}

fn menu() -> Vec<NewDish> {
    vec![
        NewDish::new("Суп томатный", "Гаспаччо", price("85.00")),
        NewDish::new("Суп грибной", "Грибной суп с лисичками", price("56.99")),
        NewDish::new("Борщ", "Традиционный украинский борщ", price("64.55")),
    ]
}

#[test]
fn test_insert_returns_fresh_positive_id() {
    let db = ready_database();

    let mut seen = HashSet::new();
    for _ in 0..3 {
        let id = db
            .with_session(|s| s.insert(&NewDish::new("Test", "D", price("10.00"))))
            .unwrap();
        assert!(id > 0, "id should be positive, got {}", id);
        assert!(seen.insert(id), "id {} was handed out twice", id);
    }

    let stored = db.with_session(|s| s.list()).unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored
        .iter()
        .all(|d| d.name.as_deref() == Some("Test") && d.price == price("10")));
}

#[test]
fn test_insert_many_adds_two_to_count() {
    let db = ready_database();
    db.with_session(|s| s.insert(&menu()[0])).unwrap();
    let before = db.with_session(|s| s.count()).unwrap();

    let ids = db.with_session(|s| s.insert_many(&menu()[1..])).unwrap();

    assert_eq!(ids.len(), 2);
    assert!(ids[0] < ids[1], "ids follow input order");
    assert_eq!(db.with_session(|s| s.count()).unwrap(), before + 2);

    let second = db.with_session(|s| s.find(ids[1])).unwrap().unwrap();
    assert_eq!(second.name.as_deref(), Some("Борщ"));
    assert_eq!(second.price, price("64.55"));
}

#[test]
fn test_substring_query_returns_both_soups() {
    let db = ready_database();
    db.with_session(|s| s.insert_many(&menu())).unwrap();

    let soups = db.with_session(|s| s.find_by_name_containing("Суп")).unwrap();

    let names: HashSet<_> = soups.iter().filter_map(|d| d.name.clone()).collect();
    let expected: HashSet<_> = ["Суп томатный", "Суп грибной"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_substring_query_without_match_is_empty() {
    let db = ready_database();
    db.with_session(|s| s.insert_many(&menu())).unwrap();

    assert!(db
        .with_session(|s| s.find_by_name_containing("Пицца"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_find_unknown_id_is_none() {
    let db = ready_database();
    db.with_session(|s| s.insert_many(&menu())).unwrap();

    assert_eq!(db.with_session(|s| s.find(999)).unwrap(), None);
    assert_eq!(db.with_session(|s| s.find(0)).unwrap(), None);
    assert_eq!(db.with_session(|s| s.find(-1)).unwrap(), None);
}

#[test]
fn test_find_first_dish_by_id() {
    let db = ready_database();
    let id = db.with_session(|s| s.insert(&menu()[0])).unwrap();

    let dish = db.with_session(|s| s.find(id)).unwrap().unwrap();
    assert_eq!(id, 1);
    assert_eq!(dish.to_string(), "1: Суп томатный - 85.00 UAH");
    assert_eq!(dish.description.as_deref(), Some("Гаспаччо"));
}

#[test]
fn test_latest_is_highest_id() {
    let db = ready_database();
    assert_eq!(db.with_session(|s| s.latest()).unwrap(), None);

    let ids = db.with_session(|s| s.insert_many(&menu())).unwrap();
    let latest = db.with_session(|s| s.latest()).unwrap().unwrap();

    assert_eq!(Some(&latest.id), ids.iter().max());
    assert_eq!(latest.name.as_deref(), Some("Борщ"));
}

#[test]
fn test_optional_fields_round_trip_as_none() {
    let db = ready_database();
    let id = db
        .with_session(|s| s.insert(&NewDish::default().with_name(None).with_description(None)))
        .unwrap();

    let dish = db.with_session(|s| s.find(id)).unwrap().unwrap();
    assert_eq!(dish.name, None);
    assert_eq!(dish.description, None);
    assert!(db
        .with_session(|s| s.find_by_name_containing(""))
        .unwrap()
        .is_empty());
}

#[test]
fn test_data_persists_across_handles_for_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dishmenu.db");

    {
        let db = Database::new(ConnectionTarget::File(path.clone())).unwrap();
        db.initialize_schema().unwrap();
        db.with_session(|s| s.insert_many(&menu())).unwrap();
    }

    let reopened = Database::from_connection_string(&format!("Data Source={}", path.display()))
        .unwrap();
    assert_eq!(reopened.with_session(|s| s.count()).unwrap(), 3);
}

#[test]
fn test_session_survives_error_and_closes() {
    let db = ready_database();

    // An error inside the scope still releases the session
    let result: dishmenu_store::Result<()> = db.with_session(|s| {
        s.insert(&menu()[0])?;
        Err(dishmenu_core::DmError::new(dishmenu_core::DmErrorKind::InvalidInput))
    });
    assert!(result.is_err());

    // The insert was its own statement and is committed
    assert_eq!(db.with_session(|s| s.count()).unwrap(), 1);
}
