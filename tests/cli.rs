//! CLI smoke tests for the asset-matrix binary

use assert_cmd::Command;
use predicates::prelude::*;

fn config_json() -> &'static str {
    r#"{
        "year": 2025,
        "client_code": "RHE",
        "product_code": "IGN",
        "delimiter": "_",
        "start_date": "2025-06-27",
        "end_date": "2025-08-27",
        "funnels": ["COS"],
        "regions": ["ATL"],
        "languages": ["EN"],
        "durations": ["15s"],
        "sizes": ["1x1", "9x16"],
        "messages": ["Internet Offer V1"]
    }"#
}

#[test]
fn help_prints_usage() {
    Command::cargo_bin("asset-matrix")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("--brief"));
}

#[test]
fn no_arguments_prints_help() {
    Command::cargo_bin("asset-matrix")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}

#[test]
fn unknown_flag_fails_with_hint() {
    Command::cargo_bin("asset-matrix")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown flag"));
}

#[test]
fn generates_csvs_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("campaign.json");
    std::fs::write(&config_path, config_json()).unwrap();
    let out_dir = dir.path().join("exports");

    Command::cargo_bin("asset-matrix")
        .unwrap()
        .arg(&config_path)
        .arg("--out")
        .arg(&out_dir)
        .arg("--copy-list")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 creative names"));

    let entries: Vec<String> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(entries.iter().any(|n| n.contains("_flat_")));
    assert!(entries.iter().any(|n| n.contains("_pivot_")));
    assert!(entries.iter().any(|n| n.ends_with(".txt")));
}

#[test]
fn campaign_title_is_sanitized_in_export_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("campaign.json");
    // Delimiters and padding in the title must not leak into the filename
    std::fs::write(
        &config_path,
        config_json().replace(
            r#""year": 2025,"#,
            r#""year": 2025, "campaign_title": "_Summer Launch_","#,
        ),
    )
    .unwrap();
    let out_dir = dir.path().join("exports");

    Command::cargo_bin("asset-matrix")
        .unwrap()
        .arg(&config_path)
        .arg("--out")
        .arg(&out_dir)
        .arg("--yes")
        .assert()
        .success();

    let entries: Vec<String> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(entries
        .iter()
        .any(|n| n.starts_with("Asset_Matrix_Summer_Launch_flat_")));
    assert!(entries.iter().all(|n| !n.contains("__")));
}

#[test]
fn empty_axis_reports_nothing_to_generate() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("campaign.json");
    std::fs::write(
        &config_path,
        config_json().replace(r#""sizes": ["1x1", "9x16"]"#, r#""sizes": []"#),
    )
    .unwrap();

    Command::cargo_bin("asset-matrix")
        .unwrap()
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to generate"));
}
