use packconf_common::{Devtool, Mode, ModeOverrides, NormalizedBundlerOptions, ResolvedConfig};

/// Non-production flags that are common enough to fall back without a warning.
const QUIET_FLAGS: [&str; 3] = ["", "development", "test"];

/// Selects the mode from `env_flag` and layers its overrides over `base`.
///
/// Only the exact value `"production"` selects production. Any other value,
/// including no value at all, resolves to development. Unfamiliar values are
/// accepted with a warning.
pub fn resolve_config(base: &NormalizedBundlerOptions, env_flag: Option<&str>) -> ResolvedConfig {
  let mode = Mode::from_env_flag(env_flag);

  if let Some(flag) =
    env_flag.filter(|flag| !mode.is_production() && !QUIET_FLAGS.contains(flag))
  {
    tracing::warn!(flag, "Unrecognized environment flag, falling back to {mode} mode");
  }

  let overrides = ModeOverrides::for_mode(mode);
  tracing::debug!(
    %mode,
    devtool = overrides.devtool.map(Devtool::as_str),
    dev_server = overrides.dev_server.is_some(),
    "Resolved configuration mode"
  );

  base.clone().merge(overrides)
}

#[cfg(test)]
fn base() -> NormalizedBundlerOptions {
  super::normalize_options::normalize_options(packconf_common::BundlerOptions {
    cwd: Some(std::env::temp_dir().join("packconf")),
    ..Default::default()
  })
  .unwrap()
}

#[test]
fn test_production() {
  let config = resolve_config(&base(), Some("production"));
  assert_eq!(config.mode, Mode::Production);
  assert!(config.devtool.is_none());
  assert!(config.dev_server.is_none());

  let json = serde_json::to_value(&config).unwrap();
  assert_eq!(json["mode"], "production");
  assert!(json.get("devtool").is_none());
  assert!(json.get("devServer").is_none());
}

#[test]
fn test_development() {
  let config = resolve_config(&base(), Some("development"));
  assert_eq!(config.mode, Mode::Development);

  let json = serde_json::to_value(&config).unwrap();
  assert_eq!(json["mode"], "development");
  assert_eq!(json["devtool"], "eval-source-map");
  assert_eq!(json["devServer"], serde_json::json!({ "historyApiFallback": true, "open": true }));
}

#[test]
fn test_anything_else_is_development() {
  let base = base();
  let development = resolve_config(&base, Some("development"));
  for flag in [None, Some(""), Some("test"), Some("PRODUCTION"), Some("production ")] {
    assert_eq!(resolve_config(&base, flag), development, "flag: {flag:?}");
  }
}

#[test]
fn test_idempotent() {
  let base = base();
  for flag in [Some("production"), Some("development"), None] {
    assert_eq!(resolve_config(&base, flag), resolve_config(&base, flag));
  }
}

#[test]
fn test_base_fields_are_shared_across_modes() {
  let base = base();
  let production = resolve_config(&base, Some("production"));
  let development = resolve_config(&base, None);

  for config in [&production, &development] {
    assert_eq!(config.cwd, base.cwd);
    assert_eq!(config.entry, base.entry);
    assert_eq!(config.output, base.output);
    assert_eq!(config.resolve, base.resolve);
    assert_eq!(config.module, base.module);
    assert_eq!(config.plugins, base.plugins);
  }
}

#[test]
fn test_json_shape() {
  let config = resolve_config(&base(), Some("production"));
  let json = serde_json::to_value(&config).unwrap();
  let keys = json.as_object().unwrap().keys().map(String::as_str).collect::<Vec<_>>();
  assert_eq!(keys, ["entry", "output", "resolve", "module", "plugins", "mode"]);

  assert_eq!(json["entry"], serde_json::json!({ "app": ["./src/index.js"] }));
  assert_eq!(json["output"]["publicPath"], "/");
  assert_eq!(json["output"]["filename"], "bundle.js");
  assert_eq!(json["module"]["rules"][0]["test"], r"\.js$");
  assert_eq!(json["module"]["rules"][0]["use"][0]["loader"], "babel-loader");
  assert_eq!(json["module"]["rules"][1]["use"][0]["options"]["name"], "[name].[ext]");
  assert_eq!(json["module"]["rules"][3]["include"], "node_modules");
  assert_eq!(json["plugins"][1], serde_json::json!({ "plugin": "CleanWebpackPlugin" }));
}
