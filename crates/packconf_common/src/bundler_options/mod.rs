pub mod dev_server;
pub mod devtool;
pub mod mode;
pub mod mode_overrides;
pub mod module_rule;
pub mod normalized_bundler_options;
pub mod output_options;
pub mod plugin;
pub mod resolve_options;
pub mod resolved_config;

use std::path::PathBuf;

use packconf_utils::indexmap::FxIndexMap;
use serde::Deserialize;

use crate::{ModuleOptions, OutputOptions, PluginInvocation, ResolveOptions};

/// Entry name to the ordered list of modules bundled under it.
pub type EntryOptions = FxIndexMap<String, Vec<String>>;

/// Options as written by the user. Every field is optional; missing ones are
/// filled in by `normalize_options`.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundlerOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub entry: Option<EntryOptions>,

  // --- Output
  pub output: Option<OutputOptions>,

  // --- Resolve
  pub resolve: Option<ResolveOptions>,

  // --- Transform
  pub module: Option<ModuleOptions>,
  pub plugins: Option<Vec<PluginInvocation>>,
}
