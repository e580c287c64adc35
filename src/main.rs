use std::process::ExitCode;

use clap::Parser;

use jarray_check::Report;

mod cli;

use cli::{Cli, Format};

/// Pre-flight check for large json exports: is it an array, and is every element an object.
/// Prints one result line (or one json object) and exits non-zero on any failure.
fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let cli = Cli::parse();

  let path = match cli.path {
    Some(path) => path,
    None => match cli::default_path() {
      Ok(path) => {
        if cli.format == Format::Text {
          println!("ℹ️ No path provided, using default: {}", path.display());
        }
        path
      }
      Err(err) => {
        eprintln!("{err:#}");
        return ExitCode::from(2)
      }
    },
  };

  let file = jarray_check::absolute(&path);
  if cli.format == Format::Text {
    println!("🔍 Validating file: {}", file.display());
  }

  let result = jarray_check::validate(&file);
  if let Err(err) = &result {
    log::debug!("{file:?} failed with {err:?}");
  }
  let report = Report::new(file, &result);

  match cli.format {
    Format::Text => println!("{}", report.line()),
    Format::Json => match report.to_json() {
      Ok(json) => println!("{json}"),
      Err(err) => {
        eprintln!("cannot serialize report: {err}");
        return ExitCode::from(2)
      }
    },
  }
  ExitCode::from(report.exit_code())
}
