//! Decoder for a relaxed, JSON-like configuration grammar.
//!
//! Strings may use single or double quotes, commas between elements are
//! optional, and every number is an `f64`. Comments, exponents, hexadecimal
//! numbers and bare keys are not part of the grammar. Encoding goes through
//! `serde_json`.

pub mod batch;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

use std::io::{Read, Write};

use serde::de::DeserializeOwned;

pub use crate::batch::parse_batch;
pub use crate::error::{DecodeError, DecodeErrorKind, Error, Location};
pub use crate::options::{DecodeOptions, EncodeOptions, Indent, DEFAULT_MAX_DEPTH};
pub use crate::value::{Map, Value};
pub use encode::stringify;

pub type Result<T> = std::result::Result<T, Error>;

/// Parse the leading value of `input`.
///
/// Anything after that value is ignored; use [`parse_strict`] or
/// [`DecodeOptions::with_strict`] to reject it.
///
/// # Examples
/// ```
/// use relaxed_json::parse;
///
/// let value = parse(r#"{"a": 1, "b": [1, 2, 3]}"#)?;
/// assert_eq!(value["a"].as_f64(), Some(1.0));
/// assert_eq!(value["b"][2].as_f64(), Some(3.0));
/// # Ok::<(), relaxed_json::DecodeError>(())
/// ```
pub fn parse(input: &str) -> std::result::Result<Value, DecodeError> {
    parse_with_options(input, &DecodeOptions::default())
}

pub fn parse_strict(input: &str) -> std::result::Result<Value, DecodeError> {
    parse_with_options(input, &DecodeOptions::default().with_strict(true))
}

pub fn parse_with_options(
    input: &str,
    options: &DecodeOptions,
) -> std::result::Result<Value, DecodeError> {
    decode::parse(input, options)
}

pub fn validate_str(input: &str) -> std::result::Result<(), DecodeError> {
    validate_str_with_options(input, &DecodeOptions::default())
}

pub fn validate_str_with_options(
    input: &str,
    options: &DecodeOptions,
) -> std::result::Result<(), DecodeError> {
    decode::validate_str(input, options)
}

/// Parse `input` and deserialize the result into `T`.
///
/// # Examples
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let server: Server = relaxed_json::from_str("{'host': 'localhost', 'port': 8080}")?;
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 8080);
/// # Ok::<(), relaxed_json::Error>(())
/// ```
pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(
    input: &str,
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_str(input, options)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_slice(input, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    from_reader_with_options(reader, &DecodeOptions::default())
}

pub fn from_reader_with_options<T: DeserializeOwned, R: Read>(
    reader: R,
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_reader(reader, options)
}

pub fn stringify_with_options(value: &Value, options: &EncodeOptions) -> Result<String> {
    encode::to_string(value, options)
}

pub fn to_writer<W: Write>(writer: W, value: &Value) -> Result<()> {
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

pub fn to_writer_with_options<W: Write>(
    writer: W,
    value: &Value,
    options: &EncodeOptions,
) -> Result<()> {
    encode::to_writer(writer, value, options)
}
