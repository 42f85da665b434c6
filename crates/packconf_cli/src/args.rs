use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// Project root. Relative paths in the options are resolved against it.
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// JSON options file. Its directory is the default project root.
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ModeArgs {
  /// Environment flag. `production` selects production, anything else
  /// development. Read from `NODE_ENV` when omitted.
  #[clap(long, short = 'm')]
  pub mode: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Print the configuration on a single line.
  #[clap(long)]
  pub compact: bool,

  /// Enable debug logging. `RUST_LOG` takes precedence.
  #[clap(long, short = 'v')]
  pub verbose: bool,
}
