/*!
Source of Json parse events, ie the json parser.

Wraps the pull reader from `json_event_parser` so the rest of the crate
sees one event at a time, with failures already turned into [`ValidationError`]s
that say where in the document they happened.
*/
use std::io::Read;

pub use json_event_parser::JsonEvent;

use crate::errors::{Result, ValidationError};
use crate::jsonpath::{JsonPath, Location};

pub struct JsonEvents<R : Read> {
  reader : json_event_parser::FromReadJsonReader<R>,
}

impl<R : Read> JsonEvents<R> {
  pub fn new(istream : R) -> Self {
    let reader = json_event_parser::FromReadJsonReader::new(istream);
    Self{reader}
  }

  /// Next event, or the reason there isn't one.
  ///
  /// `at` is only used for error context. Eof is returned as an event, like the parser does,
  /// so that callers can tell a clean end from a truncated one.
  pub fn next_event(&mut self, at : &JsonPath) -> Result<JsonEvent<'_>> {
    self.reader.read_next_event().map_err(|err| {
      let at = Location(at).to_string();
      log::debug!("parser stopped at {at}: {err}");
      ValidationError::Parse{at, message: err.to_string()}
    })
  }
}
