use std::path::PathBuf;

use clap::Parser;

/// Where the transit feed export lands, relative to the directory of the executable.
const DEFAULT_RELATIVE : &str = "../data/stoptimes.json";

#[derive(Parser, Debug)]
#[command(
  name = "jarray-check",
  version,
  about = "Check that a json file is an array of objects, without loading it into memory"
)]
pub struct Cli {
  /// File to validate. Defaults to data/stoptimes.json next to the installation.
  #[arg(env = "JARRAY_CHECK_FILE")]
  pub path : Option<PathBuf>,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = Format::Text)]
  pub format : Format,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
  /// Status lines with glyphs
  #[default]
  Text,
  /// A single json object
  Json,
}

/// `../data/stoptimes.json` from the directory holding the running executable.
pub fn default_path() -> anyhow::Result<PathBuf> {
  use anyhow::Context;
  let exe = std::env::current_exe().context("cannot locate the running executable")?;
  let dir = exe.parent().context("executable has no parent directory")?;
  Ok(dir.join(DEFAULT_RELATIVE))
}
