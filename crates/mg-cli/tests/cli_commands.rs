//! Integration tests for the `mg` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mg() -> Command {
    Command::cargo_bin("mg").unwrap()
}

fn play(script: &str) -> assert_cmd::assert::Assert {
    mg().args(["play", "--seed", "7", "--instant"])
        .write_stdin(script)
        .assert()
}

// ---------------------------------------------------------------------------
// games
// ---------------------------------------------------------------------------

#[test]
fn games_lists_all_five() {
    mg().arg("games")
        .assert()
        .success()
        .stdout(predicate::str::contains("hangman"))
        .stdout(predicate::str::contains("tug-of-war"))
        .stdout(predicate::str::contains("Glass Bridge"))
        .stdout(predicate::str::contains("guessing"))
        .stdout(predicate::str::contains("rps"));
}

// ---------------------------------------------------------------------------
// words
// ---------------------------------------------------------------------------

#[test]
fn words_builtin() {
    mg().arg("words")
        .assert()
        .success()
        .stdout(predicate::str::contains("cores"))
        .stdout(predicate::str::contains("animais"));
}

#[test]
fn words_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, r#"{"planetas": ["Marte", "Vênus", "Terra"]}"#).unwrap();

    mg().args(["words", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("planetas"))
        .stdout(predicate::str::contains("1 categories"));
}

#[test]
fn words_missing_file_fails() {
    mg().args(["words", "--file", "/nonexistent/words.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("word bank unavailable"));
}

// ---------------------------------------------------------------------------
// champions
// ---------------------------------------------------------------------------

#[test]
fn champions_builtin() {
    mg().arg("champions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garen"))
        .stdout(predicate::str::contains("12 champions"));
}

#[test]
fn champions_search() {
    mg().args(["champions", "--search", "bra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand"))
        .stdout(predicate::str::contains("Braum"))
        .stdout(predicate::str::contains("Garen").not());
}

#[test]
fn champions_from_data_dragon_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("champion.json");
    fs::write(
        &path,
        r#"{
  "type": "champion",
  "version": "14.1.1",
  "data": {
    "Teemo": {
      "id": "Teemo",
      "name": "Teemo",
      "info": { "attack": 5, "defense": 3, "magic": 7, "difficulty": 6 },
      "image": { "full": "Teemo.png" }
    }
  }
}"#,
    )
    .unwrap();

    mg().args(["champions", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Teemo"))
        .stdout(predicate::str::contains("15"));
}

#[test]
fn champions_bad_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("champion.json");
    fs::write(&path, "not json").unwrap();

    mg().args(["champions", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("champion catalog unavailable"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_cleanly() {
    play("help\nquit\n")
        .success()
        .stdout(predicate::str::contains("Arcade Commands"))
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("Final score: "));
}

#[test]
fn play_ends_on_eof() {
    play("games\n")
        .success()
        .stdout(predicate::str::contains("Rock Paper Scissors"));
}

#[test]
fn play_rps_round() {
    play("open rps\nrock\nscore\nquit\n")
        .success()
        .stdout(predicate::str::contains("You: rock"))
        .stdout(predicate::str::contains("decided rounds"));
}

#[test]
fn play_reports_errors_and_continues() {
    play("open chess\nleft\nopen guessing\nhard\nbanana\nquit\n")
        .success()
        .stdout(predicate::str::contains("unknown game: chess"))
        .stdout(predicate::str::contains("no game open"))
        .stdout(predicate::str::contains("Secret Number (1-100)"))
        .stdout(predicate::str::contains("invalid input"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_bridge_start() {
    play("open bridge\ndifficulty 3\nstart\nquit\n")
        .success()
        .stdout(predicate::str::contains("Step 1 of 3. Lives: 3."));
}

#[test]
fn play_tug_battle_resolves() {
    play("open tug\npick Ahri\npick Annie\npick Brand\nbattle\nquit\n")
        .success()
        .stdout(predicate::str::contains("Your team (3/3)"))
        .stdout(predicate::str::contains("Battle! The enemy fields"))
        .stdout(predicate::str::contains("43 vs "));
}

#[test]
fn play_hangman_missing_words() {
    mg().args(["play", "--instant", "--words", "/nonexistent/words.json"])
        .write_stdin("open hangman\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("word bank unavailable"))
        .stdout(predicate::str::contains("Loading the word bank"));
}

#[test]
fn play_reset_zeroes_score() {
    play("reset\nscore\nquit\n")
        .success()
        .stdout(predicate::str::contains("Session reset. Score: 0 W / 0 L"));
}
