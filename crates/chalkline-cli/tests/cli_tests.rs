//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn chalkline() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("chalkline").unwrap()
}

const RAW_REPORT: &str = r#"{
    "output": "ran 5 tests",
    "test": {
        "passed": 3,
        "results": {
            "TestBasics": {
                "test_add": "+",
                "test_sub": "+",
                "test_mul": "-"
            },
            "TestEdges": {
                "test_empty": "+",
                "test_overflow": "-"
            }
        }
    }
}"#;

#[test]
fn format_overwrites_report_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    std::fs::write(&path, RAW_REPORT).unwrap();

    chalkline()
        .arg("format")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("TestBasics"))
        .stdout(predicate::str::contains("\"max_score\": 3"));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["score"], 3);
    assert_eq!(written["tests"][0]["name"], "TestBasics");
    assert_eq!(written["tests"][0]["score"], 2);
    assert_eq!(written["tests"][1]["max_score"], 2);
    assert_eq!(written["tests"][0].get("visibility"), None);
}

#[test]
fn format_with_visible_tests_flags_every_suite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    let list = dir.path().join("visible.txt");
    std::fs::write(&path, RAW_REPORT).unwrap();
    std::fs::write(&list, "TestBasics\n").unwrap();

    chalkline()
        .arg("format")
        .arg(&path)
        .arg(&list)
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["tests"][0]["visibility"], "visible");
    assert_eq!(written["tests"][1]["visibility"], "after_published");
}

#[test]
fn format_without_arguments_fails() {
    chalkline()
        .arg("format")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn format_with_surplus_arguments_fails() {
    chalkline()
        .arg("format")
        .arg("a.json")
        .arg("visible.txt")
        .arg("extra.txt")
        .assert()
        .failure();
}

#[test]
fn format_nonexistent_report_fails() {
    chalkline()
        .arg("format")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn format_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    std::fs::write(&path, "not json {").unwrap();

    chalkline()
        .arg("format")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn play_quits_from_action_prompt() {
    chalkline()
        .arg("play")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome"));
}

#[test]
fn play_rejects_invalid_mode_flag() {
    chalkline()
        .arg("play")
        .arg("--mode")
        .arg("SIDEWAYS")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIXED or ARBITRARY"));
}

#[test]
fn play_full_game_with_custom_words() {
    let dir = TempDir::new().unwrap();
    let fixed = dir.path().join("fixed.txt");
    let arbitrary = dir.path().join("arbitrary.txt");
    std::fs::write(&fixed, "garden\n").unwrap();
    std::fs::write(&arbitrary, "holiday\n").unwrap();

    // Round lengths for a 6-letter word are 2, 2, 3, 3, 2.
    chalkline()
        .arg("play")
        .arg("--mode")
        .arg("FIXED")
        .arg("--fixed-words")
        .arg(&fixed)
        .arg("--arbitrary-words")
        .arg(&arbitrary)
        .write_stdin("s\nga\nar\nrde\nden\nen\ngarden\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations"));
}

#[test]
fn play_word_list_flags_must_come_in_pairs() {
    chalkline()
        .arg("play")
        .arg("--fixed-words")
        .arg("fixed.txt")
        .assert()
        .failure();
}
