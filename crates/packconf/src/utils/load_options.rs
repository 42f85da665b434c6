use std::path::Path;

use anyhow::Context;
use packconf_common::BundlerOptions;
use packconf_error::BuildResult;
use packconf_utils::path_ext::PathExt;

/// Reads options from a JSON file.
///
/// Relative paths in the file are relative to the file itself, so `cwd`
/// defaults to the directory containing it.
pub fn load_options(path: &Path) -> BuildResult<BundlerOptions> {
  tracing::debug!(path = %path.to_slash_string(), "Loading options file");

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read options file {}", path.display()))?;
  let mut options: BundlerOptions = serde_json::from_str(&content)
    .with_context(|| format!("Failed to parse options file {}", path.display()))?;

  let dir = path.parent().unwrap_or_else(|| Path::new(""));
  options.cwd = Some(options.cwd.map_or_else(|| dir.to_path_buf(), |cwd| dir.join(cwd)));

  Ok(options)
}

#[test]
fn test_load_options() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("packconf.json");
  std::fs::write(
    &path,
    r#"{
      "entry": { "main": ["./src/main.js", "./src/polyfills.js"] },
      "output": { "filename": "[name].js" },
      "resolve": { "alias": { "@": "src" } },
      "module": { "rules": [{ "test": "\\.ts$", "use": "ts-loader" }] },
      "plugins": [{ "plugin": "clean" }]
    }"#,
  )
  .unwrap();

  let options = load_options(&path).unwrap();
  assert_eq!(options.cwd.as_deref(), Some(dir.path()));
  assert_eq!(options.entry.as_ref().unwrap()["main"], ["./src/main.js", "./src/polyfills.js"]);
  assert_eq!(options.output.as_ref().unwrap().filename.as_deref(), Some("[name].js"));
  assert_eq!(options.module.as_ref().unwrap().rules[0].uses[0].loader, "ts-loader");

  let normalized = crate::normalize_options(options).unwrap();
  assert_eq!(normalized.resolve.alias["@"], dir.path().join("src"));
  assert_eq!(normalized.output.path, dir.path().join("dist"));
}

#[test]
fn test_load_options_with_cwd() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("packconf.json");
  std::fs::write(&path, r#"{ "cwd": "web" }"#).unwrap();

  let options = load_options(&path).unwrap();
  assert_eq!(options.cwd, Some(dir.path().join("web")));
}

#[test]
fn test_load_options_errors() {
  let dir = tempfile::tempdir().unwrap();

  let missing = dir.path().join("missing.json");
  let err = load_options(&missing).unwrap_err();
  assert!(err[0].to_string().starts_with("Failed to read options file"));

  let path = dir.path().join("packconf.json");
  std::fs::write(&path, r#"{ "entries": {} }"#).unwrap();
  let err = load_options(&path).unwrap_err();
  assert!(err[0].to_string().starts_with("Failed to parse options file"));
  assert!(format!("{:#}", err[0]).contains("unknown field `entries`"));
}
