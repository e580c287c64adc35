/*!
Turns the result of [`crate::validate`] into what the cli prints.

The text form is one line per outcome with a status glyph, the json form is
a single object for scripts.
*/
use std::path::PathBuf;

use serde::Serialize;

use crate::errors::{ErrorKind, Result, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
  pub file : PathBuf,
  pub valid : bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub count : Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub kind : Option<ErrorKind>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub detail : Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub index : Option<u64>,
  // the terminal line for the text form
  #[serde(skip)]
  line : String,
}

impl Report {
  pub fn new(file : PathBuf, result : &Result<u64>) -> Self {
    match result {
      Ok(count) => Self {
        file,
        valid: true,
        count: Some(*count),
        kind: None,
        detail: None,
        index: None,
        line: format!("✅ Valid JSON file. {count} objects read successfully."),
      },
      Err(err) => Self {
        file,
        valid: false,
        count: None,
        kind: Some(err.kind()),
        detail: Some(err.to_string()),
        index: err.index(),
        line: failure_line(err),
      },
    }
  }

  /// The single line that ends a text run.
  pub fn line(&self) -> &str {
    &self.line
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }

  /// 0 when valid, 1 for any failure.
  pub fn exit_code(&self) -> u8 {
    if self.valid { 0 } else { 1 }
  }
}

fn failure_line(err : &ValidationError) -> String {
  use ValidationError::*;
  match err {
    NotFound(_) => "❌ File does not exist.".to_string(),
    MissingOpenBracket => "❌ File does not start with '[' (expected JSON array).".to_string(),
    MissingCloseBracket => "❌ File does not end with ']' (expected end of JSON array).".to_string(),
    NotAnObject{index, ..} => format!("❌ Element {index} is not a valid JSON object."),
    Io(_) | Parse{..} => format!("❌ Error while reading or parsing: {err}"),
  }
}
