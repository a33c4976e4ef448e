use directory_backend::model::user::User;
use directory_backend::repository::repository_error::RepositoryError;
use directory_backend::repository::user_repo::{FileUserRepository, UserRepository};
use tempfile::NamedTempFile;

fn seed_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    std::fs::write(file.path(), contents).expect("seed data");
    file
}

#[tokio::test]
async fn test_load_normalizes_legacy_records() {
    let file = seed_file(
        r#"[
            {"id": "2", "name": "Grace Brewster Hopper", "username": "grace", "email": "grace@example.com"},
            {"id": 7, "firstName": "Ada", "lastName": "Lovelace", "username": "ada", "email": "ada@example.com"}
        ]"#,
    );
    let repo = FileUserRepository::with_path(file.path());

    let users = repo.load().await.expect("load");
    assert_eq!(users.len(), 2);

    // String id parsed, legacy name split on the first space
    assert_eq!(users[0].id, 2);
    assert_eq!(users[0].first_name, "Grace");
    assert_eq!(users[0].last_name, "Brewster Hopper");
    assert_eq!(users[0].username, "grace");

    // Already-normalized record passes through untouched
    assert_eq!(users[1].id, 7);
    assert_eq!(users[1].first_name, "Ada");
    assert_eq!(users[1].last_name, "Lovelace");
}

#[tokio::test]
async fn test_load_defaults_absent_and_malformed_fields() {
    let file = seed_file(r#"[{}, {"id": "oops", "username": "ghost"}]"#);
    let repo = FileUserRepository::with_path(file.path());

    let users = repo.load().await.expect("load");
    assert_eq!(users.len(), 2);

    assert_eq!(users[0].id, 0);
    assert_eq!(users[0].first_name, "");
    assert_eq!(users[0].last_name, "");
    assert_eq!(users[0].username, "");
    assert_eq!(users[0].email, "");

    // Unparseable string id defaults to 0
    assert_eq!(users[1].id, 0);
    assert_eq!(users[1].username, "ghost");
}

#[tokio::test]
async fn test_load_missing_file_fails() {
    let repo = FileUserRepository::with_path("/nonexistent/users.json");
    let err = repo.load().await.expect_err("missing file");
    assert!(matches!(err, RepositoryError::ReadError(_)));
}

#[tokio::test]
async fn test_load_invalid_json_fails() {
    let file = seed_file("not json at all");
    let repo = FileUserRepository::with_path(file.path());
    let err = repo.load().await.expect_err("invalid json");
    assert!(matches!(err, RepositoryError::SerializationError(_)));
}

#[tokio::test]
async fn test_load_save_load_round_trip_is_identity() {
    let file = seed_file(
        r#"[
            {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "username": "ada", "email": "ada@example.com"},
            {"id": 2, "firstName": "Grace", "lastName": "Hopper", "username": "grace", "email": "grace@example.com"}
        ]"#,
    );
    let repo = FileUserRepository::with_path(file.path());

    let first = repo.load().await.expect("first load");
    repo.save(&first).await.expect("save");
    let second = repo.load().await.expect("second load");
    assert_eq!(first, second);
}

// Two writers loading the same state and saving independently: the later
// save silently discards the earlier one. Last-writer-wins is the expected
// contract of the store, not a regression.
#[tokio::test]
async fn test_concurrent_writers_last_save_wins() {
    let file = seed_file(r#"[{"id": 1, "username": "ada", "email": "ada@example.com"}]"#);
    let repo = FileUserRepository::with_path(file.path());

    let mut copy_a = repo.load().await.expect("load a");
    let mut copy_b = repo.load().await.expect("load b");

    copy_a.push(User {
        id: 2,
        first_name: String::new(),
        last_name: String::new(),
        username: "alice".to_string(),
        email: String::new(),
    });
    copy_b.push(User {
        id: 3,
        first_name: String::new(),
        last_name: String::new(),
        username: "bob".to_string(),
        email: String::new(),
    });

    repo.save(&copy_a).await.expect("save a");
    repo.save(&copy_b).await.expect("save b");

    let stored = repo.load().await.expect("final load");
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().any(|user| user.username == "bob"));
    assert!(!stored.iter().any(|user| user.username == "alice"));
}
