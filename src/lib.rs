//! Checks that a json file is an array of objects, without loading it into memory.
//!
//! [`validate`] makes two passes over the file: a byte-level look at the first and last
//! significant bytes, then a streaming walk over the elements of the array that stops at
//! the first one that is not an object.

// parser and traits
pub mod errors;
pub mod parser;
pub mod jsonpath;
pub mod handler;

// checks and output
pub mod boundary;
pub mod report;

use std::path::{Path, PathBuf};

pub use errors::{ErrorKind, Result, ValidationError};
pub use report::Report;

use handler::Handler;

/// Open a file for the streaming pass.
pub fn make_readable<P : AsRef<Path>>(path : P) -> Result<std::io::BufReader<std::fs::File>> {
  let file = std::fs::File::open(path)?;
  Ok(std::io::BufReader::new(file))
}

/// Absolute form of `path`, for display. Falls back to `path` as given if the working directory is unreadable.
pub fn absolute<P : AsRef<Path>>(path : P) -> PathBuf {
  let path = path.as_ref();
  std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Validate the file at `path`, returning the number of objects in its top-level array.
///
/// Never panics on bad input: every failure, including io errors, comes back as a [`ValidationError`].
pub fn validate<P : AsRef<Path>>(path : P) -> Result<u64> {
  let path = &absolute(path);
  log::info!("validating {}", path.display());
  if !path.is_file() {
    log::info!("{} does not exist", path.display());
    return Err(ValidationError::NotFound(path.to_path_buf()))
  }

  // first pass, the handle is closed before the second pass opens its own
  {
    let mut file = std::fs::File::open(path)?;
    boundary::check(&mut file)?;
    log::debug!("{} starts with '[' and ends with ']'", path.display());
  }

  let mut jevs = parser::JsonEvents::new(make_readable(path)?);
  let mut objects = handler::ObjectsOnly::default();
  let count = objects.array(&mut jevs)?;
  log::info!("{count} objects in {}", path.display());
  Ok(count)
}
