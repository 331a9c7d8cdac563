use clap::Parser;
use serde_json::json;
use std::fs;

use tilereform::commands::show::ShowCommand;

#[test]
fn show_walks_a_cleaned_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("property_data_cleaned.json");
  let cleaned = json!([
    {"type": "property", "cost": "60", "position": 1, "mortgage": 30.0, "color": "PURPLE"},
    {"type": "railroad", "cost": "200", "position": 5, "mortgage": 30.0},
    {"type": "utility", "cost": "150", "position": 12, "mortgage": 30.0}
  ]);
  fs::write(&path, cleaned.to_string()).unwrap();

  let cmd = ShowCommand::try_parse_from(["show", path.to_str().unwrap()]).unwrap();
  cmd.execute().unwrap();
}

#[test]
fn show_fails_on_a_missing_file() {
  let dir = tempfile::tempdir().unwrap();
  let cmd = ShowCommand::try_parse_from([
    "show",
    dir.path().join("nope.json").to_str().unwrap(),
  ])
  .unwrap();
  assert!(cmd.execute().is_err());
}

#[test]
fn show_fails_on_a_file_that_is_not_a_tile_array() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("property_data_cleaned.json");
  fs::write(&path, "{\"not\": \"an array\"}").unwrap();
  let cmd = ShowCommand::try_parse_from(["show", path.to_str().unwrap()]).unwrap();
  assert!(cmd.execute().is_err());
}
