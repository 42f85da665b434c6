use std::{path::Path, sync::LazyLock};

use packconf_common::{
  EntryOptions, LoaderUse, ModuleRule, PluginInvocation, PluginKind, RulePattern,
};
use packconf_utils::indexmap::FxIndexMap;
use serde_json::json;

pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_PUBLIC_PATH: &str = "/";
pub const DEFAULT_FILENAME: &str = "bundle.js";
pub const DEFAULT_HTML_TEMPLATE: &str = "./public/index.html";

static SCRIPT_TEST: LazyLock<RulePattern> = LazyLock::new(|| RulePattern::new(r"\.js$").unwrap());
static VENDOR_DIRS: LazyLock<RulePattern> =
  LazyLock::new(|| RulePattern::new("(node_modules|bower_components)").unwrap());
static ASSET_TEST: LazyLock<RulePattern> = LazyLock::new(|| {
  RulePattern::new(r"\.(png|jpg|gif|svg|eot|ttf|woff|woff2)$").unwrap()
});
static STYLE_TEST: LazyLock<RulePattern> =
  LazyLock::new(|| RulePattern::new(r"\.(css|less)$").unwrap());
static NODE_MODULES: LazyLock<RulePattern> =
  LazyLock::new(|| RulePattern::new("node_modules").unwrap());

pub fn default_entry() -> EntryOptions {
  EntryOptions::from_iter([("app".to_string(), vec!["./src/index.js".to_string()])])
}

pub fn default_alias(cwd: &Path) -> FxIndexMap<String, std::path::PathBuf> {
  [
    ("@", "src"),
    ("public", "public"),
    ("img", "src/assets/img"),
    ("pro", "src/pro-components"),
    ("comp", "src/components"),
  ]
  .into_iter()
  .map(|(key, dir)| (key.to_string(), cwd.join(dir)))
  .collect()
}

pub fn default_rules(cwd: &Path) -> Vec<ModuleRule> {
  vec![script_rule(), asset_rule(), app_style_rule(cwd), vendor_style_rule()]
}

pub fn default_plugins() -> Vec<PluginInvocation> {
  vec![
    PluginInvocation::new(PluginKind::Html)
      .with_options(json!({ "template": DEFAULT_HTML_TEMPLATE })),
    PluginInvocation::new(PluginKind::Clean),
  ]
}

/// ES2015+ and JSX through babel. The decorators plugin has to stay ahead of
/// class-properties.
fn script_rule() -> ModuleRule {
  ModuleRule {
    test: SCRIPT_TEST.clone(),
    include: None,
    exclude: Some(VENDOR_DIRS.clone()),
    uses: vec![LoaderUse::new("babel-loader").with_options(json!({
      "presets": ["@babel/preset-env", "@babel/preset-react"],
      "plugins": [
        ["@babel/plugin-proposal-decorators", { "legacy": true }],
        "@babel/plugin-proposal-class-properties",
        "@babel/plugin-syntax-dynamic-import",
        ["babel-plugin-import", { "libraryName": "antd", "libraryDirectory": "es", "style": "css" }]
      ]
    }))],
  }
}

/// Images and fonts are copied to the output directory under their own name.
fn asset_rule() -> ModuleRule {
  ModuleRule {
    test: ASSET_TEST.clone(),
    include: None,
    exclude: None,
    uses: vec![LoaderUse::new("file-loader").with_options(json!({ "name": "[name].[ext]" }))],
  }
}

/// Project stylesheets use CSS modules, with `url()` resolved from `src/assets`.
fn app_style_rule(cwd: &Path) -> ModuleRule {
  ModuleRule {
    test: STYLE_TEST.clone(),
    include: None,
    exclude: Some(NODE_MODULES.clone()),
    uses: vec![
      LoaderUse::new("style-loader"),
      LoaderUse::new("css-loader").with_options(json!({
        "root": cwd.join("src/assets").to_string_lossy(),
        "modules": true
      })),
      less_loader(),
    ],
  }
}

/// Third-party stylesheets are global, so no CSS modules here.
fn vendor_style_rule() -> ModuleRule {
  ModuleRule {
    test: STYLE_TEST.clone(),
    include: Some(NODE_MODULES.clone()),
    exclude: None,
    uses: vec![LoaderUse::new("style-loader"), LoaderUse::new("css-loader"), less_loader()],
  }
}

fn less_loader() -> LoaderUse {
  LoaderUse::new("less-loader").with_options(json!({ "javascriptEnabled": true }))
}

#[test]
fn test_default_rules_route_files() {
  let rules = default_rules(Path::new("/project"));
  let matching = |path: &str| {
    rules
      .iter()
      .enumerate()
      .filter(|(_, rule)| rule.matches(path))
      .map(|(idx, _)| idx)
      .collect::<Vec<_>>()
  };

  assert_eq!(matching("/project/src/index.js"), [0]);
  assert!(matching("/project/node_modules/react/index.js").is_empty());
  assert!(matching("/project/bower_components/jquery/jquery.js").is_empty());
  assert_eq!(matching("/project/src/assets/img/logo.png"), [1]);
  assert_eq!(matching("/project/src/assets/fonts/icon.woff2"), [1]);
  assert_eq!(matching("/project/src/app.less"), [2]);
  assert_eq!(matching("/project/node_modules/antd/dist/antd.css"), [3]);
}

#[test]
fn test_default_alias_order() {
  let alias = default_alias(Path::new("/project"));
  assert_eq!(alias.keys().collect::<Vec<_>>(), ["@", "public", "img", "pro", "comp"]);
  assert_eq!(alias["img"], Path::new("/project/src/assets/img"));
}
