use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A compiled regular expression that keeps its source around for output.
///
/// Two patterns are equal when their sources are equal.
#[derive(Debug, Clone)]
pub struct RulePattern(Regex);

impl RulePattern {
  pub fn new(source: &str) -> Result<Self, regex::Error> {
    Regex::new(source).map(Self)
  }

  #[inline]
  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }

  #[inline]
  pub fn is_match(&self, haystack: &str) -> bool {
    self.0.is_match(haystack)
  }
}

impl PartialEq for RulePattern {
  fn eq(&self, other: &Self) -> bool {
    self.as_str() == other.as_str()
  }
}

impl Eq for RulePattern {}

impl Serialize for RulePattern {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for RulePattern {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let source = String::deserialize(deserializer)?;
    Self::new(&source).map_err(serde::de::Error::custom)
  }
}

/// One step of a rule's loader chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderUse {
  pub loader: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
}

impl LoaderUse {
  pub fn new(loader: impl Into<String>) -> Self {
    Self { loader: loader.into(), options: None }
  }

  #[must_use]
  pub fn with_options(mut self, options: Value) -> Self {
    self.options = Some(options);
    self
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleRule {
  pub test: RulePattern,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub include: Option<RulePattern>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exclude: Option<RulePattern>,
  /// Loaders listed in declaration order. The bundler applies them last to first.
  #[serde(rename = "use", deserialize_with = "one_or_many")]
  pub uses: Vec<LoaderUse>,
}

impl ModuleRule {
  /// Whether a module at `path` is handled by this rule.
  pub fn matches(&self, path: &str) -> bool {
    self.test.is_match(path)
      && self.include.as_ref().is_none_or(|include| include.is_match(path))
      && !self.exclude.as_ref().is_some_and(|exclude| exclude.is_match(path))
  }
}

/// `use` may be a single loader or a list, and each loader may be just its name.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<LoaderUse>, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum LoaderItem {
    Name(String),
    Full(LoaderUse),
  }

  impl From<LoaderItem> for LoaderUse {
    fn from(item: LoaderItem) -> Self {
      match item {
        LoaderItem::Name(loader) => LoaderUse::new(loader),
        LoaderItem::Full(loader) => loader,
      }
    }
  }

  // `Many` goes first: a derived struct also accepts a sequence, so a list
  // would otherwise be read as a single loader.
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum OneOrMany {
    Many(Vec<LoaderItem>),
    One(LoaderItem),
  }

  Ok(match OneOrMany::deserialize(deserializer)? {
    OneOrMany::Many(items) => items.into_iter().map(Into::into).collect(),
    OneOrMany::One(item) => vec![item.into()],
  })
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleOptions {
  #[serde(default)]
  pub rules: Vec<ModuleRule>,
}

#[test]
fn test_rule_matches() {
  let rule = ModuleRule {
    test: RulePattern::new(r"\.(css|less)$").unwrap(),
    include: None,
    exclude: Some(RulePattern::new("node_modules").unwrap()),
    uses: vec![LoaderUse::new("style-loader")],
  };
  assert!(rule.matches("/project/src/app.less"));
  assert!(!rule.matches("/project/node_modules/antd/dist/antd.css"));
  assert!(!rule.matches("/project/src/app.js"));

  let rule = ModuleRule { include: rule.exclude.clone(), exclude: None, ..rule };
  assert!(rule.matches("/project/node_modules/antd/dist/antd.css"));
  assert!(!rule.matches("/project/src/app.less"));
}

#[test]
fn test_deserialize_rule() {
  let rule: ModuleRule = serde_json::from_str(
    r#"{
      "test": "\\.js$",
      "exclude": "node_modules",
      "use": { "loader": "babel-loader", "options": { "cacheDirectory": true } }
    }"#,
  )
  .unwrap();
  assert_eq!(rule.test.as_str(), r"\.js$");
  assert_eq!(rule.uses.len(), 1);
  assert_eq!(rule.uses[0].loader, "babel-loader");
  assert_eq!(rule.uses[0].options, Some(serde_json::json!({ "cacheDirectory": true })));

  let rule: ModuleRule = serde_json::from_str(
    r#"{ "test": "\\.css$", "use": ["style-loader", { "loader": "css-loader" }] }"#,
  )
  .unwrap();
  assert_eq!(rule.uses, vec![LoaderUse::new("style-loader"), LoaderUse::new("css-loader")]);

  let err = serde_json::from_str::<ModuleRule>(r#"{ "test": "(", "use": [] }"#).unwrap_err();
  assert!(err.to_string().contains("regex parse error"));
}
