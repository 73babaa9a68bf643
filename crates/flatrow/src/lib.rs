#![doc = include_str!("../README.md")]

pub mod error;
pub mod expand;
pub mod flatten;
pub mod options;
pub mod value;

mod number;

pub use crate::error::{Error, Result};
pub use crate::expand::expand;
pub use crate::flatten::{Row, flatten};
pub use crate::options::{ArrayPaths, Options};
pub use crate::value::{Number, Value};

#[cfg(feature = "json")]
use std::io::Read;

/// Parse a JSON document and flatten it in one step.
#[cfg(feature = "json")]
pub fn flatten_str(s: &str, options: &Options) -> Result<Vec<Row>> {
    let parsed: serde_json::Value = serde_json::from_str(s)?;
    flatten(&Value::from(parsed), options)
}

#[cfg(feature = "json")]
pub fn flatten_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Vec<Row>> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    flatten_str(&s, options)
}
