//! End-to-end menu sessions driven through the binary with piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn seed(dir: &TempDir, file: &str, contents: &str) {
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join(file), contents).unwrap();
}

fn seed_settings(dir: &TempDir, mode: &str) {
    let settings = format!(
        r#"{{"schema_version": 1, "library_mode": "{}", "display": {{"show_genre": true, "show_year": true}}}}"#,
        mode
    );
    std::fs::write(dir.path().join("settings.json"), settings).unwrap();
}

const ALBUMS: &str = r#"[
  {"Title": "A", "Artist": "Z", "Year": 2000, "Genres": ["Rock"]},
  {"Title": "B", "Artist": "Y", "Year": 1990, "Genres": ["Jazz"]},
  {"Title": "C", "Artist": "Y", "Year": 1990, "Genres": ["Pop", "Rock"]}
]"#;

fn shelf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("albumshelf").unwrap();
    cmd.env("ALBUMSHELF_DATA_DIR", dir.path());
    cmd
}

#[test]
fn single_user_genre_filter_persists_promotion() {
    let dir = TempDir::new().unwrap();
    seed_settings(&dir, "singleuser");
    seed(&dir, "albums.json", ALBUMS);
    seed(&dir, "favourites.json", "[]");

    shelf(&dir)
        .write_stdin("2\n4\nrock\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Albums with Genres matching rock:"))
        .stdout(predicate::str::contains("2: Y - C (1990) [Rock, Pop]"));

    // The in-place genre promotion survived the save
    let saved = std::fs::read_to_string(dir.path().join("data/albums.json")).unwrap();
    let albums: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(albums[2]["Genres"][0], "Rock");
    assert_eq!(albums[2]["Genres"][1], "Pop");
}

#[test]
fn single_user_sort_and_favourites_round_trip() {
    let dir = TempDir::new().unwrap();
    seed_settings(&dir, "singleuser");
    seed(&dir, "albums.json", ALBUMS);
    seed(&dir, "favourites.json", "[]");

    // Sort by year, favourite the now-first album, exit
    shelf(&dir)
        .write_stdin("3\n3\n4\n0\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by Year ("));

    let albums: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("data/albums.json")).unwrap())
            .unwrap();
    assert_eq!(albums[0]["Year"], 1990);
    assert_eq!(albums[2]["Year"], 2000);

    let favourites: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("data/favourites.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(favourites[0]["Title"], "B");
}

#[test]
fn multi_user_signup_login_and_curation() {
    let dir = TempDir::new().unwrap();
    seed_settings(&dir, "multiuser");
    seed(&dir, "albums.json", ALBUMS);
    seed(&dir, "users.json", "[]");

    let script = "2\nalice\npw1\n1\nalice\nwrong\n1\nalice\npw1\n4\n2\n6\n8\n";
    shelf(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created. Please log in."))
        .stdout(predicate::str::contains("Authentication failed"))
        .stdout(predicate::str::contains("Logged in as alice"))
        .stdout(predicate::str::contains("FAVOURITE ALBUMS"));

    let users: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("data/users.json")).unwrap())
            .unwrap();
    assert_eq!(users[0]["Username"], "alice");
    assert_eq!(users[0]["Password"], "pw1");
    assert_eq!(users[0]["Favourites"][0]["Title"], "C");
}

#[test]
fn padded_fixture_is_normalized_on_load_and_save() {
    let dir = TempDir::new().unwrap();
    seed_settings(&dir, "singleuser");
    seed(
        &dir,
        "albums.json",
        r#"[{"Title": "  Padded  ", "Artist": " Spacey ", "Year": 1999, "Genres": ["Pop"]}]"#,
    );
    seed(&dir, "favourites.json", "[]");

    shelf(&dir)
        .write_stdin("1\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Spacey - Padded (1999) [Pop]"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("data/albums.json")).unwrap())
            .unwrap();
    assert_eq!(saved[0]["Title"], "Padded");
    assert_eq!(saved[0]["Artist"], "Spacey");
}

#[test]
fn corrupt_album_collection_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    seed_settings(&dir, "singleuser");
    seed(&dir, "albums.json", "this is not json");
    seed(&dir, "favourites.json", "[]");

    shelf(&dir)
        .write_stdin("8\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));
}

#[test]
fn init_creates_collection_files() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["init", "--mode", "multi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete."));

    assert!(dir.path().join("data/albums.json").exists());
    assert!(dir.path().join("data/users.json").exists());
    assert!(dir.path().join("settings.json").exists());
}

#[test]
fn config_reports_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library mode: MultiUser"))
        .stdout(predicate::str::contains("Show genres:  true"));
}

#[test]
fn configured_display_options_persist_across_runs() {
    let dir = TempDir::new().unwrap();
    seed_settings(&dir, "singleuser");
    seed(&dir, "albums.json", ALBUMS);
    seed(&dir, "favourites.json", "[]");

    // Turn genres off, keep year on, exit
    shelf(&dir).write_stdin("7\nn\ny\n8\n").assert().success();

    shelf(&dir)
        .write_stdin("1\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Z - A (2000)\n"))
        .stdout(predicate::str::contains("[Rock]").not());
}
