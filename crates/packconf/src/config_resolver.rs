use packconf_common::{BundlerOptions, NormalizedBundlerOptions, ResolvedConfig};
use packconf_error::BuildResult;

use crate::utils::{normalize_options::normalize_options, resolve_config::resolve_config};

/// Holds the normalized base options and hands out one resolved configuration
/// per build.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
  options: NormalizedBundlerOptions,
}

impl ConfigResolver {
  /// Name of the process environment variable `resolve_from_env` reads.
  pub const ENV_FLAG: &'static str = "NODE_ENV";

  pub fn new(options: BundlerOptions) -> BuildResult<Self> {
    Ok(Self { options: normalize_options(options)? })
  }

  pub fn options(&self) -> &NormalizedBundlerOptions {
    &self.options
  }

  pub fn resolve(&self, env_flag: Option<&str>) -> ResolvedConfig {
    resolve_config(&self.options, env_flag)
  }

  /// Like `resolve`, with the flag taken from `NODE_ENV`. A missing or
  /// non-unicode variable counts as absent.
  pub fn resolve_from_env(&self) -> ResolvedConfig {
    let flag = std::env::var(Self::ENV_FLAG).ok();
    self.resolve(flag.as_deref())
  }
}

#[test]
fn test_resolver() {
  use packconf_common::Mode;

  let resolver = ConfigResolver::new(BundlerOptions {
    cwd: Some(std::env::temp_dir()),
    ..Default::default()
  })
  .unwrap();

  let production = resolver.resolve(Some("production"));
  assert_eq!(production.mode, Mode::Production);
  assert_eq!(&production.output, &resolver.options().output);

  let development = resolver.resolve(Some(""));
  assert_eq!(development.mode, Mode::Development);
  assert_eq!(development.entry, production.entry);
}

#[test]
fn test_invalid_options_are_rejected() {
  use packconf_common::OutputOptions;

  let errors = ConfigResolver::new(BundlerOptions {
    cwd: Some(std::env::temp_dir()),
    output: Some(OutputOptions { filename: Some(String::new()), ..Default::default() }),
    ..Default::default()
  })
  .unwrap_err();
  assert_eq!(errors.len(), 1);
}
