/*!
Byte-level checks on the first and the last significant byte of a file.

These run before any parsing, so a file that is obviously not an array
(an object, a scalar, a truncated export) is rejected without reading it all.
*/
use std::io::{Read, Seek, SeekFrom};

use crate::errors::{Result, ValidationError};

/// Trailing bytes that are skipped when looking for the closing `]`.
const TRAILING_WHITESPACE : &[u8] = b"\n\r \t";

/// Checks that `src` starts with `[` and that its last non-whitespace byte is `]`.
pub fn check<R : Read + Seek>(src : &mut R) -> Result<()> {
  if first_byte(src)? != Some(b'[') {
    return Err(ValidationError::MissingOpenBracket)
  }
  if last_significant_byte(src)? != b']' {
    return Err(ValidationError::MissingCloseBracket)
  }
  Ok(())
}

fn first_byte<R : Read + Seek>(src : &mut R) -> Result<Option<u8>> {
  src.seek(SeekFrom::Start(0))?;
  let mut buf = [0u8; 1];
  match src.read(&mut buf)? {
    0 => Ok(None),
    _ => Ok(Some(buf[0])),
  }
}

/// Walks a cursor backwards from the end, one byte at a time, past trailing whitespace.
///
/// The cursor stops at offset 0. Running out of bytes is an error rather than a boundary failure,
/// there is no byte to compare against `]`.
pub fn last_significant_byte<R : Read + Seek>(src : &mut R) -> Result<u8> {
  let len = src.seek(SeekFrom::End(0))?;
  let mut buf = [0u8; 1];
  let mut cursor = len;
  while cursor > 0 {
    cursor -= 1;
    src.seek(SeekFrom::Start(cursor))?;
    src.read_exact(&mut buf)?;
    if !TRAILING_WHITESPACE.contains(&buf[0]) {
      log::trace!("last significant byte {:?} at offset {cursor} of {len}", char::from(buf[0]));
      return Ok(buf[0])
    }
  }
  Err(std::io::Error::new(
    std::io::ErrorKind::UnexpectedEof,
    "reached start of file while looking for the last significant byte",
  ).into())
}
