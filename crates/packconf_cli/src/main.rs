mod args;

use std::process::ExitCode;

use ansi_term::Colour;
use anyhow::Context;
use args::{InputArgs, ModeArgs, OutputArgs};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use packconf::{BuildResult, BundlerOptions, ConfigResolver, load_options};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  mode: ModeArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

/// `RUST_LOG` wins when set; otherwise `--verbose` picks DEBUG over WARN.
fn init_tracing(verbose: bool) {
  let level = if verbose { Level::DEBUG } else { Level::WARN };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
  // Only fails when a global subscriber is already installed; keep that one.
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .try_init()
    .ok();
}

fn run(args: Commands) -> BuildResult<String> {
  let InputArgs { cwd, config } = args.input;

  let mut options = match config {
    Some(path) => load_options(&path)?,
    None => BundlerOptions::default(),
  };
  if cwd.is_some() {
    options.cwd = cwd;
  }

  let resolver = ConfigResolver::new(options)?;
  let config = match args.mode.mode.as_deref() {
    Some(flag) => resolver.resolve(Some(flag)),
    None => resolver.resolve_from_env(),
  };

  let json = if args.output.compact { config.to_json() } else { config.to_json_pretty() };
  Ok(json.context("Failed to serialize the resolved configuration")?)
}

fn main() -> ExitCode {
  let args = Commands::parse();
  init_tracing(args.output.verbose);

  match run(args) {
    Ok(json) => {
      println!("{json}");
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
