//! Integration tests for the pr-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn palladium() -> Command {
    let mut cmd = Command::cargo_bin("palladium").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("PALLADIUM_SEED")
        .env_remove("PALLADIUM_STAT_MODE")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_every_section() {
    palladium()
        .args(["roll", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Attributes** (3d6)"))
        .stdout(predicate::str::contains("IQ: "))
        .stdout(predicate::str::contains("SPD: "))
        .stdout(predicate::str::contains("**Animal Type**: "))
        .stdout(predicate::str::contains("**Mutant Background**: "))
        .stdout(predicate::str::contains("**Finances**: $"))
        .stdout(predicate::str::contains("Vehicle budget: "));
}

#[test]
fn roll_with_seed_is_reproducible() {
    let first = stdout_of(palladium().args(["roll", "--seed", "1234"]));
    let second = stdout_of(palladium().args(["roll", "--seed", "1234"]));
    assert_eq!(first, second);
}

#[test]
fn roll_seed_from_env() {
    let flag = stdout_of(palladium().args(["roll", "--seed", "77"]));
    let env = stdout_of(palladium().env("PALLADIUM_SEED", "77").arg("roll"));
    assert_eq!(flag, env);
}

#[test]
fn roll_includes_name() {
    palladium()
        .args(["roll", "--seed", "5", "--name", "Rusty"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("**Rusty**\n"));
}

#[test]
fn roll_json() {
    let out = stdout_of(palladium().args([
        "roll", "--seed", "9", "--mode", "4d6", "--format", "json",
    ]));
    let sheet: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(sheet["stat_mode"], "four_d6_drop_lowest");
    assert_eq!(sheet["attributes"].as_array().unwrap().len(), 8);
    assert_eq!(sheet["attributes"][0]["attribute"], "IQ");
    assert!(sheet["attributes"][0]["roll"]["dropped"].is_u64());
    assert!(sheet["animal"]["category_roll"].is_u64());
    assert!(sheet["background"]["background"].is_string());
}

#[test]
fn roll_mode_from_env() {
    let out = stdout_of(
        palladium()
            .env("PALLADIUM_STAT_MODE", "4d6")
            .args(["roll", "--seed", "3"]),
    );
    assert!(out.contains("**Attributes** (4d6 drop lowest)"));
}

#[test]
fn roll_dice_detail_and_art_prompt() {
    palladium()
        .args(["roll", "--seed", "8", "--dice", "--art-prompt"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"IQ: \d+.* \[\d, \d, \d").unwrap())
        .stdout(predicate::str::contains("**Art Prompt**: Comic-book illustration"));
}

#[test]
fn roll_rejects_bad_mode() {
    palladium()
        .args(["roll", "--mode", "2d10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid stat mode"));
}

// ---------------------------------------------------------------------------
// chart
// ---------------------------------------------------------------------------

#[test]
fn chart_shows_all_rows() {
    palladium()
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("IQ Skills"))
        .stdout(predicate::str::contains("PB Charm/Impress"))
        .stdout(predicate::str::contains("+16%"))
        .stdout(predicate::str::contains("97%"))
        .stdout(predicate::str::contains("+13"));
}

#[test]
fn chart_single_attribute() {
    palladium()
        .args(["chart", "ma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MA Trust/Intimidate"))
        .stdout(predicate::str::contains("84%"))
        .stdout(predicate::str::contains("Damage").not());
}

#[test]
fn chart_speed_has_no_bonuses() {
    palladium()
        .args(["chart", "SPD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Speed (SPD) has no chart bonuses"));
}

#[test]
fn chart_unknown_attribute() {
    palladium()
        .args(["chart", "LUCK"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attribute: LUCK"));
}

// ---------------------------------------------------------------------------
// tables
// ---------------------------------------------------------------------------

#[test]
fn tables_lists_everything() {
    palladium()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("desert-plains"))
        .stdout(predicate::str::contains("backgrounds"))
        .stdout(predicate::str::contains("9 tables"));
}

#[test]
fn tables_resolve_category_rolls() {
    palladium()
        .args(["tables", "categories", "--roll", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Urban"));
    palladium()
        .args(["tables", "categories", "--roll", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Desert/Plains"));
}

#[test]
fn tables_resolve_background_roll() {
    palladium()
        .args(["tables", "backgrounds", "-r", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trooper"));
}

#[test]
fn tables_print_one_table() {
    palladium()
        .args(["tables", "zoo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zoo Animals"))
        .stdout(predicate::str::contains("96-100"))
        .stdout(predicate::str::contains("Buffalo"));
}

#[test]
fn tables_roll_out_of_range_is_a_usage_error() {
    for roll in ["0", "101", "4000000000"] {
        palladium()
            .args(["tables", "urban", "--roll", roll])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("invalid value"))
            .stderr(predicate::str::contains("matches no entry").not())
            .stderr(predicate::str::contains("ERROR").not());
    }
}

#[test]
fn tables_roll_bounds_resolve() {
    palladium()
        .args(["tables", "urban", "--roll", "1"])
        .assert()
        .success();
    palladium()
        .args(["tables", "urban", "--roll", "100"])
        .assert()
        .success();
}

#[test]
fn tables_check_passes() {
    palladium()
        .args(["tables", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok wild-birds"))
        .stdout(predicate::str::contains("All tables cover 1-100 exactly once."));
}

#[test]
fn tables_unknown_name() {
    palladium()
        .args(["tables", "dragons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table: dragons"));
}

#[test]
fn tables_roll_needs_name() {
    palladium()
        .args(["tables", "--roll", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--roll needs a table name"));
}

// ---------------------------------------------------------------------------
// finances
// ---------------------------------------------------------------------------

#[test]
fn finances_trooper() {
    palladium()
        .args(["finances", "Trooper", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule: 1d6 × 300"))
        .stdout(predicate::str::contains("Vehicle budget: $10,000"));
}

#[test]
fn finances_feral_has_no_vehicle() {
    palladium()
        .args(["finances", "Feral Mutant Animal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle budget: none"));
}

#[test]
fn finances_fixed_amount() {
    palladium()
        .args(["finances", "Ninja"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Money: $500 (fixed 500)"));
}

#[test]
fn finances_background_ignores_case() {
    palladium()
        .args(["finances", "trooper", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Background: Trooper"));
}

#[test]
fn finances_unknown_background() {
    palladium()
        .args(["finances", "Astronaut"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no finance rule configured for background 'Astronaut'",
        ));
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_logs_to_stderr() {
    palladium()
        .args(["-v", "roll", "--seed", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("rolled attribute"))
        .stdout(predicate::str::contains("rolled attribute").not());
}
