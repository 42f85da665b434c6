#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use sugar_path::SugarPath;

use packconf::{BundlerOptions, ConfigResolver};

fn main() {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let resolver = match ConfigResolver::new(BundlerOptions {
    cwd: Some(root.normalize()),
    ..Default::default()
  }) {
    Ok(resolver) => resolver,
    Err(errors) => {
      eprintln!("{errors}");
      return;
    }
  };

  for flag in ["production", "development"] {
    match resolver.resolve(Some(flag)).to_json_pretty() {
      Ok(json) => println!("// {flag}\n{json}"),
      Err(err) => eprintln!("{err}"),
    }
  }
}
