use std::path::Path;

use anyhow::{Context, anyhow};
use itertools::Itertools;
use packconf_common::{
  BundlerOptions, ModuleOptions, NormalizedBundlerOptions, NormalizedOutputOptions,
  NormalizedResolveOptions,
};
use packconf_error::{BuildError, BuildResult};
use packconf_utils::path_ext::PathExt;
use serde_json::Value;
use sugar_path::SugarPath;

use super::default_options::{
  DEFAULT_FILENAME, DEFAULT_OUTPUT_DIR, DEFAULT_PUBLIC_PATH, default_alias, default_entry,
  default_plugins, default_rules,
};

/// Fills every missing option with the project's defaults, makes paths
/// absolute and checks the invariants the bundler relies on. All violations
/// are reported together.
pub fn normalize_options(raw_options: BundlerOptions) -> BuildResult<NormalizedBundlerOptions> {
  let cwd = match raw_options.cwd {
    Some(cwd) if cwd.is_absolute() => cwd.normalize(),
    cwd => {
      let current_dir = std::env::current_dir().context("Failed to get current dir")?;
      cwd.map_or(current_dir.clone(), |cwd| cwd.resolve_from(&current_dir))
    }
  };

  let raw_output = raw_options.output.unwrap_or_default();
  let output = NormalizedOutputOptions {
    path: raw_output
      .path
      .map_or_else(|| cwd.join(DEFAULT_OUTPUT_DIR), |path| path.resolve_from(&cwd)),
    public_path: raw_output.public_path.unwrap_or_else(|| DEFAULT_PUBLIC_PATH.to_string()),
    filename: raw_output.filename.unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
  };

  let alias = raw_options.resolve.and_then(|resolve| resolve.alias).map_or_else(
    || default_alias(&cwd),
    |alias| alias.into_iter().map(|(key, target)| (key, target.resolve_from(&cwd))).collect(),
  );

  let mut module =
    raw_options.module.unwrap_or_else(|| ModuleOptions { rules: default_rules(&cwd) });
  resolve_loader_roots(&mut module, &cwd);

  let normalized = NormalizedBundlerOptions {
    entry: raw_options.entry.unwrap_or_else(default_entry),
    output,
    resolve: NormalizedResolveOptions { alias },
    module,
    plugins: raw_options.plugins.unwrap_or_else(default_plugins),
    cwd,
  };

  tracing::debug!(
    cwd = %normalized.cwd.to_slash_string(),
    entries = normalized.entry.len(),
    rules = normalized.module.rules.len(),
    plugins = normalized.plugins.len(),
    "Normalized bundler options"
  );

  validate(&normalized).into_result(normalized)
}

const CSS_LOADER: &str = "css-loader";

/// `css-loader` resolves `url()` from its `root` option, which has to point
/// into the project rather than wherever the bundler happens to run.
fn resolve_loader_roots(module: &mut ModuleOptions, cwd: &Path) {
  for loader in module.rules.iter_mut().flat_map(|rule| rule.uses.iter_mut()) {
    if loader.loader != CSS_LOADER {
      continue;
    }
    let Some(root) = loader.options.as_mut().and_then(|options| options.get_mut("root")) else {
      continue;
    };
    if let Some(resolved) =
      root.as_str().map(|path| Path::new(path).resolve_from(cwd).to_string_lossy().into_owned())
    {
      *root = Value::String(resolved);
    }
  }
}

fn validate(options: &NormalizedBundlerOptions) -> BuildError {
  let mut errors = BuildError::default();

  if options.entry.is_empty() {
    errors.push(anyhow!("`entry` must declare at least one entry point"));
  }
  for (name, imports) in &options.entry {
    if name.trim().is_empty() {
      errors.push(anyhow!("Entry names must not be empty"));
    }
    if imports.is_empty() {
      errors.push(anyhow!("Entry `{name}` does not list any module"));
    }
  }

  if options.output.filename.trim().is_empty() {
    errors.push(anyhow!("`output.filename` must not be empty"));
  }

  let empty_aliases = options.resolve.alias.keys().filter(|key| key.trim().is_empty()).count();
  if empty_aliases > 0 {
    errors.push(anyhow!("`resolve.alias` has {empty_aliases} empty key(s)"));
  }

  for (idx, rule) in options.module.rules.iter().enumerate() {
    if rule.uses.is_empty() {
      errors.push(anyhow!("Rule #{idx} (`{}`) has no loader", rule.test.as_str()));
    }
    let unnamed = rule.uses.iter().positions(|loader| loader.loader.trim().is_empty()).join(", ");
    if !unnamed.is_empty() {
      errors.push(anyhow!(
        "Rule #{idx} (`{}`) has unnamed loader(s) at position {unnamed}",
        rule.test.as_str()
      ));
    }
  }

  errors
}

#[cfg(unix)]
#[test]
fn test_defaults() {
  use std::path::Path;

  let options = normalize_options(BundlerOptions {
    cwd: Some("/project".into()),
    ..Default::default()
  })
  .unwrap();

  assert_eq!(options.cwd, Path::new("/project"));
  assert_eq!(options.entry, default_entry());
  assert_eq!(options.output.path, Path::new("/project/dist"));
  assert_eq!(options.output.public_path, "/");
  assert_eq!(options.output.filename, "bundle.js");
  assert_eq!(options.resolve.alias, default_alias(Path::new("/project")));
  assert_eq!(options.module.rules, default_rules(Path::new("/project")));
  assert_eq!(options.plugins, default_plugins());
}

#[cfg(unix)]
#[test]
fn test_user_options_win_over_defaults() {
  use std::path::Path;

  use packconf_common::{OutputOptions, ResolveOptions};
  use packconf_utils::indexmap::FxIndexMap;

  let options = normalize_options(BundlerOptions {
    cwd: Some("/project/./web/".into()),
    output: Some(OutputOptions {
      path: Some("../build".into()),
      public_path: None,
      filename: Some("[name].[contenthash].js".to_string()),
    }),
    resolve: Some(ResolveOptions {
      alias: Some(FxIndexMap::from_iter([("~".to_string(), "src".into())])),
    }),
    plugins: Some(vec![]),
    ..Default::default()
  })
  .unwrap();

  assert_eq!(options.cwd, Path::new("/project/web"));
  assert_eq!(options.output.path, Path::new("/project/build"));
  assert_eq!(options.output.public_path, "/");
  assert_eq!(options.output.filename, "[name].[contenthash].js");
  assert_eq!(options.resolve.alias.len(), 1);
  assert_eq!(options.resolve.alias["~"], Path::new("/project/web/src"));
  assert!(options.plugins.is_empty());
}

#[cfg(unix)]
#[test]
fn test_css_loader_root_is_resolved() {
  let options: BundlerOptions = serde_json::from_str(
    r#"{
      "cwd": "/project",
      "module": { "rules": [
        { "test": "\\.css$", "use": [
          "style-loader",
          { "loader": "css-loader", "options": { "root": "src/assets", "modules": true } },
          { "loader": "less-loader", "options": { "root": "untouched" } }
        ] },
        { "test": "\\.scss$", "use": {
          "loader": "css-loader", "options": { "root": "/abs/./styles" }
        } }
      ] }
    }"#,
  )
  .unwrap();
  let rules = normalize_options(options).unwrap().module.rules;

  let css_options = rules[0].uses[1].options.as_ref().unwrap();
  assert_eq!(css_options["root"], "/project/src/assets");
  assert_eq!(css_options["modules"], true);
  assert_eq!(rules[0].uses[2].options.as_ref().unwrap()["root"], "untouched");
  assert_eq!(rules[1].uses[0].options.as_ref().unwrap()["root"], "/abs/styles");
}

#[test]
fn test_relative_cwd_is_made_absolute() {
  let options = normalize_options(BundlerOptions {
    cwd: Some("fixture".into()),
    ..Default::default()
  })
  .unwrap();
  assert!(options.cwd.is_absolute());
  assert!(options.cwd.ends_with("fixture"));
}

#[test]
fn test_validation_reports_every_violation() {
  use packconf_common::{
    EntryOptions, LoaderUse, ModuleRule, OutputOptions, ResolveOptions, RulePattern,
  };
  use packconf_utils::indexmap::FxIndexMap;

  let errors = normalize_options(BundlerOptions {
    cwd: Some(std::env::temp_dir()),
    entry: Some(EntryOptions::from_iter([("app".to_string(), vec![])])),
    output: Some(OutputOptions { filename: Some("  ".to_string()), ..Default::default() }),
    resolve: Some(ResolveOptions {
      alias: Some(FxIndexMap::from_iter([(String::new(), "src".into())])),
    }),
    module: Some(ModuleOptions {
      rules: vec![
        ModuleRule {
          test: RulePattern::new(r"\.ts$").unwrap(),
          include: None,
          exclude: None,
          uses: vec![],
        },
        ModuleRule {
          test: RulePattern::new(r"\.css$").unwrap(),
          include: None,
          exclude: None,
          uses: vec![LoaderUse::new("style-loader"), LoaderUse::new("")],
        },
      ],
    }),
    plugins: None,
  })
  .unwrap_err();

  let messages = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
  assert_eq!(
    messages,
    [
      "Entry `app` does not list any module",
      "`output.filename` must not be empty",
      "`resolve.alias` has 1 empty key(s)",
      r"Rule #0 (`\.ts$`) has no loader",
      r"Rule #1 (`\.css$`) has unnamed loader(s) at position 1",
    ]
  );
}
