/*!
This is a json path, ie an ordered set of steps,
where each step is either a key name or an index.
It must be cheap to add/remove/replace the last element,
since it follows the parser through every nested value.

`rpds::Vector` meets those requirements.
*/

/// The type for Index elements of a json path.
///
/// Highly unlikely the number of elements in a json array will exceed
/// 2^64 ie 18,446,744,073,709,551,616
pub type IndexInteger = u64;

/// One step in the path, which is either a key name, or an integer index.
#[derive(Debug,Clone,Ord,PartialEq,Eq,PartialOrd)]
pub enum Step {
  Key(String),
  Index(IndexInteger),
}

impl std::fmt::Display for Step {
  fn fmt(&self, f : &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match &self {
      Step::Key(v) => write!(f, "{v}"),
      Step::Index(v) => write!(f, "{v}"),
    }
  }
}

impl From<IndexInteger> for Step {
  fn from(s: IndexInteger) -> Self { Self::Index(s) }
}

impl From<&str> for Step {
  fn from(s: &str) -> Self { Self::Key(s.into()) }
}

impl From<String> for Step {
  fn from(s: String) -> Self { Self::Key(s) }
}

// https://docs.rs/rpds/latest/rpds/vector/struct.Vector.html
pub type JsonPath = rpds::Vector<Step>;

/// Replace the last step, eg the next key of an object.
/// An empty path stays empty.
pub fn replace_last(path : &mut JsonPath, step : Step) {
  if let Some(last) = path.len().checked_sub(1) {
    path.set_mut(last, step);
  }
}

/// Move past one value. Only indexes move, a key step is replaced when the next key arrives.
pub fn advance(path : &mut JsonPath) {
  if let Some(Step::Index(i)) = path.last() {
    let next = Step::Index(i + 1);
    replace_last(path, next);
  }
}

/// Displays a path in the `$[3].stop_id` notation.
pub struct Location<'a>(pub &'a JsonPath);

impl std::fmt::Display for Location<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "$")?;
    for step in self.0.iter() {
      match step {
        Step::Index(i) => write!(f, "[{i}]")?,
        // empty key is the placeholder before the first key of an object is read
        Step::Key(k) if k.is_empty() => (),
        Step::Key(k) => write!(f, ".{k}")?,
      }
    }
    Ok(())
  }
}
