use std::path::PathBuf;

use serde::Serialize;

use crate::{
  DevServerOptions, Devtool, EntryOptions, Mode, ModuleOptions, NormalizedOutputOptions,
  NormalizedResolveOptions, PluginInvocation,
};

/// The configuration handed to the bundler: base options plus exactly one
/// mode's overrides. Serializes to the bundler's configuration schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
  #[serde(skip)]
  pub cwd: PathBuf,
  pub entry: EntryOptions,
  pub output: NormalizedOutputOptions,
  pub resolve: NormalizedResolveOptions,
  pub module: ModuleOptions,
  pub plugins: Vec<PluginInvocation>,

  pub mode: Mode,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub devtool: Option<Devtool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dev_server: Option<DevServerOptions>,
}

impl ResolvedConfig {
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }

  pub fn to_json_pretty(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}
