/*!
Everything that can stop a validation.

Every failure is returned, never raised, so callers can branch on
[`ValidationError::kind`] and the cli can print exactly one line for it.
*/
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::handler::ValueKind;

pub type Result<T> = std::result::Result<T, ValidationError>;

#[derive(Error, Debug)]
pub enum ValidationError {
  #[error("file does not exist: {}", .0.display())]
  NotFound(PathBuf),
  #[error("file does not start with '[' (expected JSON array)")]
  MissingOpenBracket,
  #[error("file does not end with ']' (expected end of JSON array)")]
  MissingCloseBracket,
  #[error("element {index} is not a valid JSON object (found {found})")]
  NotAnObject { index : u64, found : ValueKind },
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("{message} at {at}")]
  Parse { at : String, message : String },
}

/// The coarse classification, which is what scripts usually care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  NotFound,
  StructuralBoundary,
  ElementTypeViolation,
  ParseOrIo,
}

impl ValidationError {
  pub fn kind(&self) -> ErrorKind {
    use ValidationError::*;
    match self {
      NotFound(_) => ErrorKind::NotFound,
      MissingOpenBracket | MissingCloseBracket => ErrorKind::StructuralBoundary,
      NotAnObject{..} => ErrorKind::ElementTypeViolation,
      Io(_) | Parse{..} => ErrorKind::ParseOrIo,
    }
  }

  /// Index of the offending top-level element, when there is one.
  pub fn index(&self) -> Option<u64> {
    match self {
      ValidationError::NotAnObject{index, ..} => Some(*index),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::rstest;

  #[rstest]
  #[case(ValidationError::NotFound("nope.json".into()), ErrorKind::NotFound, None)]
  #[case(ValidationError::MissingOpenBracket, ErrorKind::StructuralBoundary, None)]
  #[case(ValidationError::MissingCloseBracket, ErrorKind::StructuralBoundary, None)]
  #[case(ValidationError::NotAnObject{index: 4, found: ValueKind::Null}, ErrorKind::ElementTypeViolation, Some(4))]
  #[case(ValidationError::Parse{at: "$[0]".into(), message: "bad".into()}, ErrorKind::ParseOrIo, None)]
  fn kind_and_index(#[case] err : ValidationError, #[case] kind : ErrorKind, #[case] index : Option<u64>) {
    assert_eq!(err.kind(), kind);
    assert_eq!(err.index(), index);
  }

  #[test]
  fn io_errors_convert() {
    let err : ValidationError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
    assert_eq!(err.kind(), ErrorKind::ParseOrIo);
    assert_eq!(err.to_string(), "IO error: denied");
  }

  #[test]
  fn not_an_object_message() {
    let err = ValidationError::NotAnObject{index: 1, found: ValueKind::String};
    assert_eq!(err.to_string(), "element 1 is not a valid JSON object (found string)");
  }
}
