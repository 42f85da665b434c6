use std::fmt::Display;

use serde::Serialize;

/// How much source-map detail the bundler emits for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
  Eval,
  /// Full source maps inlined into each evaluated module.
  EvalSourceMap,
  CheapModuleSourceMap,
  SourceMap,
  InlineSourceMap,
  HiddenSourceMap,
}

impl Devtool {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Eval => "eval",
      Self::EvalSourceMap => "eval-source-map",
      Self::CheapModuleSourceMap => "cheap-module-source-map",
      Self::SourceMap => "source-map",
      Self::InlineSourceMap => "inline-source-map",
      Self::HiddenSourceMap => "hidden-source-map",
    }
  }
}

impl Display for Devtool {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[test]
fn test_serialized_literal_matches_display() {
  for devtool in [
    Devtool::Eval,
    Devtool::EvalSourceMap,
    Devtool::CheapModuleSourceMap,
    Devtool::SourceMap,
    Devtool::InlineSourceMap,
    Devtool::HiddenSourceMap,
  ] {
    assert_eq!(serde_json::to_value(devtool).unwrap(), devtool.as_str());
  }
}
