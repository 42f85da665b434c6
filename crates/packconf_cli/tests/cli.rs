use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn packconf() -> Command {
  let mut cmd = Command::cargo_bin("packconf").unwrap();
  cmd.env_remove("NODE_ENV").env_remove("RUST_LOG");
  cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
  let output = cmd.output().unwrap();
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
  serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_production_flag() {
  let dir = tempfile::tempdir().unwrap();
  let json = stdout_json(packconf().arg("--cwd").arg(dir.path()).args(["--mode", "production"]));

  assert_eq!(json["mode"], "production");
  assert!(json.get("devtool").is_none());
  assert!(json.get("devServer").is_none());
  assert_eq!(json["output"]["filename"], "bundle.js");
}

#[test]
fn test_default_is_development() {
  let dir = tempfile::tempdir().unwrap();
  let json = stdout_json(packconf().arg("--cwd").arg(dir.path()));

  assert_eq!(json["mode"], "development");
  assert_eq!(json["devtool"], "eval-source-map");
  assert_eq!(json["devServer"]["historyApiFallback"], true);
  assert_eq!(json["devServer"]["open"], true);
}

#[test]
fn test_flag_from_environment() {
  let dir = tempfile::tempdir().unwrap();
  let json = stdout_json(
    packconf().arg("--cwd").arg(dir.path()).arg("--compact").env("NODE_ENV", "production"),
  );
  assert_eq!(json["mode"], "production");

  let json = stdout_json(packconf().arg("--cwd").arg(dir.path()).env("NODE_ENV", "staging"));
  assert_eq!(json["mode"], "development");
}

#[test]
fn test_config_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("packconf.json");
  std::fs::write(&path, r#"{ "entry": { "admin": ["./src/admin.js"] }, "plugins": [] }"#).unwrap();

  let json = stdout_json(packconf().arg("--config").arg(&path).args(["-m", "production"]));
  assert_eq!(json["entry"], serde_json::json!({ "admin": ["./src/admin.js"] }));
  assert_eq!(json["plugins"], serde_json::json!([]));
  assert_eq!(json["module"]["rules"].as_array().unwrap().len(), 4);
}

#[test]
fn test_invalid_config_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("packconf.json");
  std::fs::write(&path, r#"{ "output": { "filename": "" }, "entry": { "app": [] } }"#).unwrap();

  packconf()
    .arg("--config")
    .arg(&path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("`output.filename` must not be empty"))
    .stderr(predicate::str::contains("Entry `app` does not list any module"));
}

#[test]
fn test_rust_log_sets_the_level() {
  let dir = tempfile::tempdir().unwrap();
  packconf()
    .arg("--cwd")
    .arg(dir.path())
    .args(["--mode", "production"])
    .env("RUST_LOG", "debug")
    .assert()
    .success()
    .stderr(predicate::str::contains("Resolved configuration mode"));

  // RUST_LOG also wins over --verbose.
  packconf()
    .arg("--cwd")
    .arg(dir.path())
    .args(["--mode", "production", "--verbose"])
    .env("RUST_LOG", "error")
    .assert()
    .success()
    .stderr(predicate::str::is_empty());

  packconf()
    .arg("--cwd")
    .arg(dir.path())
    .args(["--mode", "production", "--verbose"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Resolved configuration mode"));
}

#[test]
fn test_unrecognized_flag_warns() {
  let dir = tempfile::tempdir().unwrap();
  let output = packconf().arg("--cwd").arg(dir.path()).env("NODE_ENV", "prod").output().unwrap();

  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("Unrecognized environment flag"));
  let json: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["mode"], "development");
}

#[test]
fn test_common_flags_stay_quiet() {
  let dir = tempfile::tempdir().unwrap();
  for flag in ["", "development", "test", "production"] {
    packconf()
      .arg("--cwd")
      .arg(dir.path())
      .env("NODE_ENV", flag)
      .assert()
      .success()
      .stderr(predicate::str::is_empty());
  }
}
