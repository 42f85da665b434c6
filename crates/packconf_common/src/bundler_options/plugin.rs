use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginKind {
  /// Generates the HTML entry page that loads the bundle.
  #[serde(rename = "HtmlWebpackPlugin", alias = "html")]
  Html,
  /// Empties the output directory before each build.
  #[serde(rename = "CleanWebpackPlugin", alias = "clean")]
  Clean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginInvocation {
  #[serde(rename = "plugin")]
  pub kind: PluginKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
}

impl PluginInvocation {
  pub fn new(kind: PluginKind) -> Self {
    Self { kind, options: None }
  }

  #[must_use]
  pub fn with_options(mut self, options: Value) -> Self {
    self.options = Some(options);
    self
  }
}

#[test]
fn test_plugin_names() {
  let plugins: Vec<PluginInvocation> = serde_json::from_str(
    r#"[
      { "plugin": "html", "options": { "template": "./public/index.html" } },
      { "plugin": "CleanWebpackPlugin" }
    ]"#,
  )
  .unwrap();
  assert_eq!(plugins[0].kind, PluginKind::Html);
  assert_eq!(plugins[1], PluginInvocation::new(PluginKind::Clean));
  assert_eq!(
    serde_json::to_value(&plugins).unwrap(),
    serde_json::json!([
      { "plugin": "HtmlWebpackPlugin", "options": { "template": "./public/index.html" } },
      { "plugin": "CleanWebpackPlugin" }
    ])
  );
}
