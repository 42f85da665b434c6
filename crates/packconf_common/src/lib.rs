mod bundler_options;

pub use bundler_options::{
  BundlerOptions, EntryOptions,
  dev_server::DevServerOptions,
  devtool::Devtool,
  mode::Mode,
  mode_overrides::ModeOverrides,
  module_rule::{LoaderUse, ModuleOptions, ModuleRule, RulePattern},
  normalized_bundler_options::NormalizedBundlerOptions,
  output_options::{NormalizedOutputOptions, OutputOptions},
  plugin::{PluginInvocation, PluginKind},
  resolve_options::{NormalizedResolveOptions, ResolveOptions},
  resolved_config::ResolvedConfig,
};
