#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  reason = "Panics are fine inside tests."
)]
use std::{fs, path::PathBuf};

use stanza::{
  cli::{Cli, Commands},
  config::Config,
};
use tempfile::TempDir;

#[test]
fn generated_default_config_parses_back() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("stanza.toml");

  Config::generate_default_config(&path).unwrap();
  let config = Config::from_file(&path).unwrap();

  assert_eq!(config.content_dir, PathBuf::from("content"));
  assert_eq!(config.static_dir, PathBuf::from("static"));
  assert_eq!(config.output_dir, PathBuf::from("public"));
  assert!(config.template_path.is_none());
  assert!(config.jobs.is_none());
}

#[test]
fn toml_config_overrides_defaults() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("site.toml");
  fs::write(&path, "output_dir = \"dist\"\njobs = 2\n").unwrap();

  let config = Config::from_file(&path).unwrap();
  assert_eq!(config.output_dir, PathBuf::from("dist"));
  assert_eq!(config.jobs, Some(2));
  // Unset fields keep their defaults
  assert_eq!(config.content_dir, PathBuf::from("content"));
}

#[test]
fn json_config_is_supported() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("site.json");
  fs::write(&path, "{\"content_dir\": \"docs\"}").unwrap();

  let config = Config::from_file(&path).unwrap();
  assert_eq!(config.content_dir, PathBuf::from("docs"));
}

#[test]
fn unknown_config_extension_is_rejected() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("site.yaml");
  fs::write(&path, "content_dir: docs").unwrap();

  assert!(Config::from_file(&path).is_err());
}

#[test]
fn cli_build_flags_override_file_values() {
  let mut config = Config::default();
  let cli = Cli {
    command:     Some(Commands::Build {
      content_dir: Some(PathBuf::from("docs")),
      output_dir:  None,
      static_dir:  None,
      template:    None,
      jobs:        Some(2),
    }),
    verbose:     false,
    config_file: None,
  };

  config.merge_with_cli(&cli);

  assert_eq!(config.content_dir, PathBuf::from("docs"));
  assert_eq!(config.jobs, Some(2));
  // Flags that were not passed leave the config untouched
  assert_eq!(config.output_dir, PathBuf::from("public"));
}

#[test]
fn validate_paths_requires_content_dir() {
  let dir = TempDir::new().unwrap();
  let config = Config {
    content_dir: dir.path().join("missing"),
    ..Config::default()
  };
  assert!(config.validate_paths().is_err());

  let present = Config {
    content_dir: dir.path().to_path_buf(),
    ..Config::default()
  };
  assert!(present.validate_paths().is_ok());
}
