mod common;
use common::{missing_config, sc, temp_path, write_fixtures};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn read_csv(path: &str) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("open csv");
    rdr.records()
        .map(|r| r.expect("record").iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_update_csv_from_saved_responses() {
    let (events, members) = write_fixtures("cli_csv");
    let out = temp_path("cli_csv_out.csv");
    let cfg = missing_config("cli_csv");

    sc()
        .args([
            "--config",
            &cfg,
            "update",
            "--format",
            "csv",
            "--file",
            &out,
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .assert()
        .success();

    let grid = read_csv(&out);
    assert!(grid[0][0].starts_with("更新日時："));

    // roster order: Alice(1), Bob(2), Carol(no rank); Dave is a former member
    assert_eq!(grid[3][4..7], ["Alice", "Bob", "Carol"]);
    assert_eq!(grid[5][3], "Alice");
    assert_eq!(grid[6][3], "Bob");
    assert_eq!(grid[7][3], "Carol");
    assert_eq!(grid.len(), 8);

    // Alice→Bob done, Bob→Carol scheduled
    assert_eq!(grid[5][4..7], ["-", "◎", ""]);
    assert_eq!(grid[6][4..7], ["", "-", "予"]);
    assert_eq!(grid[7][4..7], ["", "", "-"]);

    // given counts in B, received counts on row 2
    assert_eq!(grid[5][1], "1");
    assert_eq!(grid[6][1], "0");
    assert_eq!(grid[1][5], "1");
    assert_eq!(grid[1][6], "0");
}

#[test]
fn test_update_json_report() {
    let (events, members) = write_fixtures("cli_json");
    let out = temp_path("cli_json_out.json");
    let cfg = missing_config("cli_json");

    sc()
        .args([
            "--config",
            &cfg,
            "update",
            "--format",
            "json",
            "--file",
            &out,
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .assert()
        .success();

    let report: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read json")).expect("parse json");
    assert_eq!(report["sheet"], "星取表");
    assert_eq!(report["chart"]["roster"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["chart"]["cells"][0][1], "done");
    assert_eq!(report["chart"]["cells"][1][2], "scheduled");
    assert_eq!(report["chart"]["counts"][0]["interviewer_count"], 1);
    assert_eq!(report["chart"]["counts"][1]["interviewee_count"], 1);
}

#[test]
fn test_update_xlsx_writes_workbook() {
    let (events, members) = write_fixtures("cli_xlsx");
    let out = temp_path("cli_xlsx_out.xlsx");
    let cfg = missing_config("cli_xlsx");

    sc()
        .args([
            "--config",
            &cfg,
            "update",
            "--file",
            &out,
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 members charted"));

    let bytes = fs::read(&out).expect("read xlsx");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_wrong_sheet_aborts_before_writing() {
    let (events, members) = write_fixtures("cli_wrong_sheet");
    let out = temp_path("cli_wrong_sheet_out.csv");
    let cfg = missing_config("cli_wrong_sheet");

    sc()
        .args([
            "--config",
            &cfg,
            "update",
            "--format",
            "csv",
            "--sheet",
            "Sheet1",
            "--file",
            &out,
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("シート「星取表」で実行してください"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_existing_file_is_kept_when_declined() {
    let (events, members) = write_fixtures("cli_decline");
    let out = temp_path("cli_decline_out.csv");
    let cfg = missing_config("cli_decline");
    fs::write(&out, "keep me").expect("seed");

    sc()
        .args([
            "--config",
            &cfg,
            "update",
            "--format",
            "csv",
            "--file",
            &out,
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    sc()
        .args([
            "--config",
            &cfg,
            "update",
            "--format",
            "csv",
            "--force",
            "--file",
            &out,
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_relative_output_path_is_rejected() {
    let (events, members) = write_fixtures("cli_relative");
    let cfg = missing_config("cli_relative");

    sc()
        .args([
            "--config",
            &cfg,
            "update",
            "--file",
            "chart.xlsx",
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_missing_token_is_a_config_error() {
    let out = temp_path("cli_no_token.xlsx");
    let cfg = missing_config("cli_no_token");

    sc()
        .args(["--config", &cfg, "update", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API token"));
}

#[test]
fn test_blank_token_env_falls_back_to_config() {
    let out = temp_path("cli_blank_env.xlsx");
    let cfg = temp_path("cli_blank_env.conf");
    fs::write(&cfg, "api:\n  token: from-file\n").expect("write config");

    // token resolves from the file, so the run gets as far as the database ids
    sc()
        .env("STAMPCHART_TOKEN", "")
        .args(["--config", &cfg, "update", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.events_database is not set"))
        .stderr(predicate::str::contains("no API token").not());
}

#[test]
fn test_invalid_database_id_is_rejected() {
    let out = temp_path("cli_bad_db.xlsx");
    let cfg = temp_path("cli_bad_db.conf");
    fs::write(
        &cfg,
        "api:\n  token: t\n  events_database: not-an-id\n  members_database: 0123456789abcdef0123456789abcdef\n",
    )
    .expect("write config");

    sc()
        .args(["--config", &cfg, "update", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.events_database"));
}

#[test]
fn test_show_prints_grid() {
    let (events, members) = write_fixtures("cli_show");
    let cfg = missing_config("cli_show");

    sc()
        .args([
            "--config",
            &cfg,
            "show",
            "--events-json",
            &events,
            "--members-json",
            &members,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("◎"))
        .stdout(predicate::str::contains("予"))
        .stdout(predicate::str::contains("Dave").not());
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_path("cli_init.conf");

    sc().args(["--config", &cfg, "init"]).assert().success();
    assert!(Path::new(&cfg).exists());

    sc()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("星取表"))
        .stdout(predicate::str::contains("2022-06-28"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = temp_path("cli_init_test.conf");

    sc().args(["--config", &cfg, "--test", "init"]).assert().success();
    assert!(!Path::new(&cfg).exists());
}
