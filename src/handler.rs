/*!
This walks the direct children of the top-level array.

Each child is announced to a [`Handler`] by its first event only,
so a handler can reject it before any of its contents are read.
Accepted children are then skipped, which still runs every byte of them
through the parser, so syntax errors inside an element are not missed.
*/
use std::io::Read;

use serde::Serialize;

use crate::errors::{Result, ValidationError};
use crate::jsonpath::{self, JsonPath, Location, Step};
use crate::parser::{JsonEvent, JsonEvents};

/// What kind of json value an event starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
  Object,
  Array,
  String,
  Number,
  Boolean,
  Null,
}

impl ValueKind {
  /// None for events that don't start a value, ie keys and closers.
  pub fn of(ev : &JsonEvent<'_>) -> Option<Self> {
    use JsonEvent::*;
    match ev {
      StartObject => Some(Self::Object),
      StartArray => Some(Self::Array),
      String(_) => Some(Self::String),
      Number(_) => Some(Self::Number),
      Boolean(_) => Some(Self::Boolean),
      Null => Some(Self::Null),
      EndObject | EndArray | ObjectKey(_) | Eof => None,
    }
  }
}

impl std::fmt::Display for ValueKind {
  fn fmt(&self, f : &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      ValueKind::Object => "object",
      ValueKind::Array => "array",
      ValueKind::String => "string",
      ValueKind::Number => "number",
      ValueKind::Boolean => "boolean",
      ValueKind::Null => "null",
    };
    write!(f, "{name}")
  }
}

fn unexpected(path : &JsonPath, what : &str) -> ValidationError {
  ValidationError::Parse{at: Location(path).to_string(), message: what.to_string()}
}

/**
The Handler trait.

`item` is the only thing a handler has to decide. `array` and `skip`
do the event traversal and are the same for every handler.
*/
pub trait Handler {
  /// Called for each direct child of the top-level array, before its contents are consumed.
  /// `path` is `[index]`. Returning an error stops the walk.
  fn item(&mut self, path : &JsonPath, kind : ValueKind) -> Result<()>;

  /// Walk the top-level array, returning how many children were accepted.
  ///
  /// Expects the array to be the whole document: anything after the closing `]` is an error.
  fn array<R : Read>(&mut self, jevs : &mut JsonEvents<R>) -> Result<u64> {
    let root = JsonPath::new();
    match jevs.next_event(&root)? {
      JsonEvent::StartArray => (),
      _ => return Err(unexpected(&root, "top-level value is not an array")),
    }

    let mut index = 0;
    loop {
      let path = root.push_back(Step::Index(index));
      let kind = match jevs.next_event(&path)? {
        JsonEvent::EndArray => break,
        ev => ValueKind::of(&ev).ok_or_else(|| unexpected(&path, "expected a value"))?,
      };
      self.item(&path, kind)?;
      self.skip(jevs, kind, path)?;
      log::trace!("accepted element {index} ({kind})");
      index += 1;
    }

    match jevs.next_event(&root)? {
      JsonEvent::Eof => Ok(index),
      _ => Err(unexpected(&root, "trailing data after the top-level array")),
    }
  }

  /// Consume the rest of a value whose first event has already been read.
  ///
  /// Iterative rather than recursive, so deep nesting can't overflow the stack.
  /// Memory is the path, ie proportional to depth.
  fn skip<R : Read>(&self, jevs : &mut JsonEvents<R>, kind : ValueKind, mut path : JsonPath) -> Result<()> {
    let depth = path.len();
    match kind {
      ValueKind::Object => path.push_back_mut(Step::Key(String::new())),
      ValueKind::Array => path.push_back_mut(Step::Index(0)),
      // scalars are a single event
      _ => return Ok(()),
    }

    loop {
      let key = match jevs.next_event(&path)? {
        JsonEvent::StartObject => { path.push_back_mut(Step::Key(String::new())); continue }
        JsonEvent::StartArray => { path.push_back_mut(Step::Index(0)); continue }
        JsonEvent::ObjectKey(key) => Some(key.to_string()),
        JsonEvent::EndObject | JsonEvent::EndArray => {
          path.drop_last_mut();
          if path.len() == depth {
            return Ok(())
          }
          None
        }
        JsonEvent::String(_) | JsonEvent::Number(_) | JsonEvent::Boolean(_) | JsonEvent::Null => None,
        JsonEvent::Eof => return Err(unexpected(&path, "unexpected end of input")),
      };
      match key {
        Some(key) => jsonpath::replace_last(&mut path, key.into()),
        None => jsonpath::advance(&mut path),
      }
    }
  }
}

/// Accepts objects, rejects every other kind of element and counts what it accepted.
#[derive(Debug, Default)]
pub struct ObjectsOnly {
  pub count : u64,
}

impl Handler for ObjectsOnly {
  fn item(&mut self, path : &JsonPath, kind : ValueKind) -> Result<()> {
    let index = match path.last() {
      Some(Step::Index(i)) => *i,
      _ => self.count,
    };
    if kind != ValueKind::Object {
      return Err(ValidationError::NotAnObject{index, found: kind})
    }
    self.count += 1;
    Ok(())
  }
}
