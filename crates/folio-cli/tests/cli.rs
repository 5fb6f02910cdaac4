//! Binary-level tests for the `folio` command.

use std::process::{Command, Output};

fn folio(args: &[&str]) -> Output {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_list_prints_catalog_in_order() {
    let output = folio(&["list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(ids, ["hive", "tiya", "freedom"]);
}

#[test]
fn test_show_detail_json() {
    let output = folio(&["show", "tiya", "ignored-segment", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["view"], "detail");
    assert_eq!(json["study"]["id"], "tiya");
}

#[test]
fn test_show_unknown_fails() {
    let output = folio(&["show", "unknown-id"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("case study not found: unknown-id"));
}

#[test]
fn test_config_init_then_get() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    let bin = env!("CARGO_BIN_EXE_folio");
    let init = Command::new(bin)
        .args(["config", "init", "--file", path_str])
        .output()
        .unwrap();
    assert!(init.status.success());

    let get = Command::new(bin)
        .args(["--config", path_str, "config", "get", "server.port"])
        .env_remove("FOLIO_SERVER_PORT")
        .output()
        .unwrap();
    assert!(get.status.success());
    assert_eq!(String::from_utf8(get.stdout).unwrap().trim(), "3000");
}
