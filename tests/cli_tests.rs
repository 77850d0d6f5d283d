use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rendezvous_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rendezvous"))
}

const SEED: &str = r#"
users:
  - { id: u1, username: ann, email: a@x.com }
events:
  - { id: e1, title: Meetup, desc: d, date: "2024-01-01", from: "10:00", to: "12:00", location_id: l1, user_id: u1 }
"#;

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    rendezvous_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    rendezvous_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rendezvous"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    rendezvous_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type Event"))
        .stdout(predicate::str::contains("addParticipant"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    rendezvous_cmd()
        .arg("init")
        .arg("--port")
        .arg("4100")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let content = fs::read_to_string(temp_dir.path().join(".rendezvous.yml")).unwrap();
    assert!(content.contains("port: 4100"));

    rendezvous_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_short_id_length_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".rendezvous.yml"),
        "store:\n  id_length: 1\n",
    )
    .unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("{ users { id } }")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("store.id_length must be at least 8"));
}

// =============================================================================
// Query / Mutate
// =============================================================================

#[test]
fn test_query_empty_store() {
    let temp_dir = TempDir::new().unwrap();

    let output = rendezvous_cmd()
        .arg("query")
        .arg("{ users { id } events { id } }")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["users"], serde_json::json!([]));
    assert_eq!(json["data"]["events"], serde_json::json!([]));
}

#[test]
fn test_mutate_wraps_body() {
    let temp_dir = TempDir::new().unwrap();

    rendezvous_cmd()
        .arg("mutate")
        .arg(r#"addUser(data: { username: "ann", email: "a@x.com" }) { username email }"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"ann\""))
        .stdout(predicate::str::contains("\"email\": \"a@x.com\""));
}

#[test]
fn test_mutate_unknown_id_reports_error() {
    let temp_dir = TempDir::new().unwrap();

    rendezvous_cmd()
        .arg("mutate")
        .arg(r#"deleteEvent(id: "nope") { id }"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Event not found: nope"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    let seed = temp_dir.path().join("seed.yml");
    fs::write(&seed, SEED).unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("query($id: ID!) { user(id: $id) { username } }")
        .arg("--variables")
        .arg(r#"{"id": "u1"}"#)
        .arg("--seed")
        .arg(&seed)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"ann\""));
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("{ users { id } }")
        .arg("--variables")
        .arg("not json")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

// =============================================================================
// Seed data and config
// =============================================================================

#[test]
fn test_query_seed_relations() {
    let temp_dir = TempDir::new().unwrap();
    let seed = temp_dir.path().join("seed.yml");
    fs::write(&seed, SEED).unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("{ events { title user { username } location { name } } }")
        .arg("--seed")
        .arg(&seed)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Meetup\""))
        .stdout(predicate::str::contains("\"username\": \"ann\""))
        .stdout(predicate::str::contains("\"location\": null"));
}

#[test]
fn test_seed_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("fixtures.yml"), SEED).unwrap();
    fs::write(
        temp_dir.path().join(".rendezvous.yml"),
        "store:\n  seed: fixtures.yml\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("sub");
    fs::create_dir_all(&nested).unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("{ users { username } }")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"ann\""));
}

#[test]
fn test_missing_seed_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("{ users { id } }")
        .arg("--seed")
        .arg("does-not-exist.yml")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read seed file"));
}

#[test]
fn test_duplicate_seed_ids_fail() {
    let temp_dir = TempDir::new().unwrap();
    let seed = temp_dir.path().join("seed.yml");
    fs::write(
        &seed,
        "users:\n  - { id: u1, username: a, email: a }\n  - { id: u1, username: b, email: b }\n",
    )
    .unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("{ users { id } }")
        .arg("--seed")
        .arg(&seed)
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid seed file"));
}

#[test]
fn test_broken_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".rendezvous.yml"),
        "server: [1, 2]\n",
    )
    .unwrap();

    rendezvous_cmd()
        .arg("query")
        .arg("{ users { id } }")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
