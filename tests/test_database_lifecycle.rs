use chrono::NaiveDate;
use flatdb::{create_database, open_database, Column, Error, QueryRow, TypeTag, Value};
use tempfile::TempDir;

fn users_columns() -> Vec<Column> {
    vec![
        Column::new("id", TypeTag::Int),
        Column::new("name", TypeTag::Text),
        Column::new("birthday", TypeTag::Date),
    ]
}

fn date(y: i32, m: u32, d: u32) -> Value {
    Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn test_end_to_end_scenario() {
    let base = TempDir::new().unwrap();
    let db = create_database(base.path(), "crm").unwrap();
    let users = db.create_table("users", users_columns()).unwrap();

    users
        .insert(vec![
            Value::Int(1),
            Value::Text("Ann".to_string()),
            date(2000, 1, 1),
        ])
        .unwrap();
    assert_eq!(users.count().unwrap(), 1);

    let rows: Vec<QueryRow> = users.all().unwrap().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("id"), Some(&Value::Int(1)));
    assert_eq!(rows[0].get("name"), Some(&Value::Text("Ann".to_string())));
    assert_eq!(
        rows[0].get("birthday"),
        Some(&Value::Text("2000-01-01".to_string()))
    );

    // Same identifier: the second insert replaces the row entirely
    users
        .insert(vec![
            Value::Int(1),
            Value::Text("Annie".to_string()),
            date(2001, 2, 2),
        ])
        .unwrap();
    assert_eq!(users.count().unwrap(), 1);

    let rows: Vec<QueryRow> = users.all().unwrap().collect();
    assert_eq!(rows[0].get("name"), Some(&Value::Text("Annie".to_string())));
    assert_eq!(
        rows[0].get("birthday"),
        Some(&Value::Text("2001-02-02".to_string()))
    );
}

#[test]
fn test_state_survives_reopening() {
    let base = TempDir::new().unwrap();

    {
        let db = create_database(base.path(), "crm").unwrap();
        let users = db.create_table("users", users_columns()).unwrap();
        users
            .insert(vec![
                Value::Int(7),
                Value::Text("Greta".to_string()),
                date(1995, 5, 5),
            ])
            .unwrap();
    }

    let db = open_database(base.path(), "crm").unwrap();
    assert_eq!(db.show_tables().unwrap(), vec!["users"]);

    let users = db.table("users").unwrap();
    assert_eq!(users.count().unwrap(), 1);

    let schema = users.describe().unwrap();
    assert_eq!(schema.column_names(), vec!["id", "name", "birthday"]);
    assert_eq!(schema.get_column("birthday").unwrap().type_tag, TypeTag::Date);

    let rows: Vec<QueryRow> = users.all().unwrap().collect();
    assert_eq!(rows[0].get("name"), Some(&Value::Text("Greta".to_string())));
}

#[test]
fn test_handles_see_latest_persisted_state() {
    let base = TempDir::new().unwrap();
    let db = create_database(base.path(), "crm").unwrap();
    db.create_table("users", users_columns()).unwrap();

    // Two independent handles to the same table file
    let writer = db.table("users").unwrap();
    let reader = db.table("users").unwrap();

    assert_eq!(reader.count().unwrap(), 0);
    writer
        .insert(vec![
            Value::Int(1),
            Value::Text("Ann".to_string()),
            date(2000, 1, 1),
        ])
        .unwrap();
    // No caching: the other handle observes the write on its next call
    assert_eq!(reader.count().unwrap(), 1);
}

#[test]
fn test_query_filters_match_all_subset() {
    let base = TempDir::new().unwrap();
    let db = create_database(base.path(), "crm").unwrap();
    let users = db.create_table("users", users_columns()).unwrap();

    for (id, name, day) in [(1, "Ann", 1), (2, "Bob", 2), (3, "Ann", 3)] {
        users
            .insert(vec![
                Value::Int(id),
                Value::Text(name.to_string()),
                date(2000, 1, day),
            ])
            .unwrap();
    }

    let anns: Vec<QueryRow> = users
        .query(&[("name", Value::Text("Ann".to_string()))])
        .unwrap()
        .collect();
    assert_eq!(anns.len(), 2);
    assert_eq!(anns[0].get("id"), Some(&Value::Int(1)));
    assert_eq!(anns[1].get("id"), Some(&Value::Int(3)));

    // Date predicates match against the stored ISO-8601 text form
    let by_birthday: Vec<QueryRow> = users
        .query(&[("birthday", Value::Text("2000-01-02".to_string()))])
        .unwrap()
        .collect();
    assert_eq!(by_birthday.len(), 1);
    assert_eq!(by_birthday[0].get("name"), Some(&Value::Text("Bob".to_string())));
}

#[test]
fn test_failed_insert_is_not_persisted() {
    let base = TempDir::new().unwrap();
    let db = create_database(base.path(), "crm").unwrap();
    let users = db.create_table("users", users_columns()).unwrap();

    let err = users
        .insert(vec![
            Value::Int(1),
            Value::Bool(true),
            date(2000, 1, 1),
        ])
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));

    // Reopen from disk: nothing was written
    let users = db.table("users").unwrap();
    assert_eq!(users.count().unwrap(), 0);
    assert_eq!(users.all().unwrap().count(), 0);
}
