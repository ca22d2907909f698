use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn passport(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("passport").unwrap();
    cmd.env("PASSPORT_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn first_run_lists_sample_coffees() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunsera Blend"))
        .stdout(predicate::str::contains("French Roast"));

    assert!(temp_dir.path().join("SavedCoffees.json").exists());
}

#[test]
fn added_coffee_shows_up_in_its_category() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .args(["add", "Nitro Cold Brew", "-d", "Smooth", "-c", "Dark Roast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee added (6): Nitro Cold Brew"));

    passport(temp_dir.path())
        .args(["list", "--category", "Dark Roast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nitro Cold Brew"))
        .stdout(predicate::str::contains("French Roast"))
        .stdout(predicate::str::contains("Pike Place").not());
}

#[test]
fn empty_name_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name cannot be empty"));
}

#[test]
fn check_in_updates_progress_and_view() {
    let temp_dir = tempfile::tempdir().unwrap();
    let photo = temp_dir.path().join("cup.jpg");
    std::fs::write(&photo, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

    passport(temp_dir.path())
        .args(["check-in", "1", "Tastes nutty", "--image"])
        .arg(&photo)
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked in (1): Sunsera Blend"));

    passport(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("You've tasted 1 of 5 coffees."))
        .stdout(predicate::str::contains("No badges earned yet."));

    passport(temp_dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tastes nutty"))
        .stdout(predicate::str::contains("[photo, 4 bytes]"));

    passport(temp_dir.path())
        .arg("gallery")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunsera Blend"));
}

#[test]
fn five_tasted_coffees_earn_first_badge() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .args(["tasted", "1", "2", "3", "4", "5"])
        .assert()
        .success();

    passport(temp_dir.path())
        .arg("badges")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee Explorer"))
        .stdout(predicate::str::contains("Caffeine Connoisseur").not());
}

#[test]
fn favorites_toggle() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .args(["favorite", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee favorited (4): Pike Place Roast"));

    passport(temp_dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pike Place Roast"))
        .stdout(predicate::str::contains("Veranda").not());
}

#[test]
fn delete_out_of_range_fails_and_keeps_collection() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .args(["delete", "2", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    passport(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Veranda Blend"));

    passport(temp_dir.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee deleted: Veranda Blend"));
}

#[test]
fn corrupt_data_is_replaced_by_samples() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("SavedCoffees.json"), "{broken").unwrap();

    passport(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blonde Espresso Roast"));
}

#[test]
fn values_lists_sorted_origins() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .args(["values", "origin"])
        .assert()
        .success()
        .stdout("Brazil & Colombia\nLatin America\nMulti-region blend\n");

    passport(temp_dir.path())
        .args(["values", "roast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field"));
}

#[test]
fn config_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();

    passport(temp_dir.path())
        .args(["config", "reseed-when-empty", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reseed-when-empty = true"));

    passport(temp_dir.path())
        .args(["config", "reseed-when-empty"])
        .assert()
        .success()
        .stdout("reseed-when-empty = true\n");
}
