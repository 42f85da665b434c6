use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputOptions {
  /// Output directory. Relative paths are resolved against `cwd`.
  pub path: Option<PathBuf>,
  /// Base URL the bundle is served from.
  pub public_path: Option<String>,
  /// File name, either a literal or a pattern such as `[name].js`.
  pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOutputOptions {
  /// Always absolute.
  pub path: PathBuf,
  pub public_path: String,
  pub filename: String,
}
