mod config_resolver;
mod utils;

pub use crate::{
  config_resolver::ConfigResolver,
  utils::{
    load_options::load_options, normalize_options::normalize_options,
    resolve_config::resolve_config,
  },
};
pub use packconf_common::*;
pub use packconf_error::{BuildError, BuildResult};
