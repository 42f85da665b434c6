use std::path::PathBuf;

use crate::{
  EntryOptions, ModeOverrides, ModuleOptions, NormalizedOutputOptions, NormalizedResolveOptions,
  PluginInvocation, ResolvedConfig,
};

/// The base configuration shared by every mode: defaults filled, paths
/// absolute, invariants checked.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub cwd: PathBuf,
  pub entry: EntryOptions,

  // --- Output
  pub output: NormalizedOutputOptions,

  // --- Resolve
  pub resolve: NormalizedResolveOptions,

  // --- Transform
  pub module: ModuleOptions,
  pub plugins: Vec<PluginInvocation>,
}

impl NormalizedBundlerOptions {
  /// Shallow merge. Base fields pass through untouched and every field of
  /// `overrides` lands on the result, so the override wins wherever both
  /// sides could carry a value.
  pub fn merge(self, overrides: ModeOverrides) -> ResolvedConfig {
    let Self { cwd, entry, output, resolve, module, plugins } = self;
    let ModeOverrides { mode, devtool, dev_server } = overrides;
    ResolvedConfig { cwd, entry, output, resolve, module, plugins, mode, devtool, dev_server }
  }
}

#[test]
fn test_merge_keeps_base_fields() {
  use crate::{DevServerOptions, Devtool, Mode};

  let base = NormalizedBundlerOptions {
    cwd: PathBuf::from("/project"),
    entry: EntryOptions::from_iter([("app".to_string(), vec!["./src/index.js".to_string()])]),
    output: NormalizedOutputOptions {
      path: PathBuf::from("/project/dist"),
      public_path: "/".to_string(),
      filename: "bundle.js".to_string(),
    },
    resolve: NormalizedResolveOptions { alias: Default::default() },
    module: ModuleOptions::default(),
    plugins: vec![],
  };

  let overrides = ModeOverrides {
    mode: Mode::Development,
    devtool: Some(Devtool::SourceMap),
    dev_server: Some(DevServerOptions { history_api_fallback: false, open: true }),
  };
  let resolved = base.clone().merge(overrides);

  assert_eq!(resolved.cwd, base.cwd);
  assert_eq!(resolved.entry, base.entry);
  assert_eq!(resolved.output, base.output);
  assert_eq!(resolved.resolve, base.resolve);
  assert_eq!(resolved.module, base.module);
  assert_eq!(resolved.plugins, base.plugins);
  assert_eq!(resolved.mode, Mode::Development);
  assert_eq!(resolved.devtool, Some(Devtool::SourceMap));
  assert_eq!(resolved.dev_server, overrides.dev_server);
}
