//! CLI integration tests.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn zy() -> Command {
    Command::cargo_bin("zy").unwrap()
}

#[test]
fn cast_with_numbers_is_deterministic() {
    zy().args([
        "cast",
        "Is the work complete?",
        "--method",
        "numbers",
        "--numbers",
        "1,2,3,4,5,6",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Ji Ji"))
    .stdout(predicate::str::contains("changing lines: 6"))
    .stdout(predicate::str::contains("Jia Ren"));
}

#[test]
fn cast_with_seed_is_reproducible() {
    let run = |seed: &str| {
        let output = zy()
            .args(["cast", "Will it rain?", "--seed", seed])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run("7"), run("7"));
}

#[test]
fn cast_json_emits_the_reading() {
    zy().args([
        "cast",
        "Is the work complete?",
        "--method",
        "numbers",
        "--numbers",
        "1,2,3,4,5,6",
        "--json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"number\": 63"))
    .stdout(predicate::str::contains("\"confidence\""));
}

#[test]
fn cast_rejects_unknown_method() {
    zy().args(["cast", "Hm?", "--method", "tea-leaves"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown method"));
}

#[test]
fn cast_reports_bad_numbers() {
    zy().args(["cast", "Hm?", "--method", "numbers", "--numbers", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 6"));
}

#[test]
fn cast_reports_empty_question() {
    zy().args(["cast", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question"));
}

#[test]
fn cast_collects_all_field_issues() {
    zy().args(["cast", "", "--method", "numbers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question"))
        .stderr(predicate::str::contains("numbers"));
}

#[test]
fn daily_for_new_years_day_is_the_creative() {
    zy().args(["daily", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Creative"));
}

#[test]
fn daily_json_includes_the_advice_list() {
    zy().args(["daily", "--date", "2024-01-01", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"advice\""))
        .stdout(predicate::str::contains("\"number\": 1"));
}

#[test]
fn daily_rejects_malformed_dates() {
    zy().args(["daily", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn show_prints_the_catalog_entry() {
    zy().args(["show", "63"])
        .assert()
        .success()
        .stdout(predicate::str::contains("After Completion"))
        .stdout(predicate::str::contains("Judgment"))
        .stdout(predicate::str::contains("Changing lines"));
}

#[test]
fn show_rejects_out_of_range_numbers() {
    zy().args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn list_shows_all_sixty_four() {
    zy().arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("64 hexagrams"))
        .stdout(predicate::str::contains("Wei Ji"));
}

#[test]
fn trigrams_shows_all_eight() {
    zy().arg("trigrams")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kan"))
        .stdout(predicate::str::contains("Metal"));
}
