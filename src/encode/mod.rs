use std::io::Write;

use serde::Serialize;

use crate::options::{EncodeOptions, Indent};
use crate::value::Value;
use crate::{Error, Result};

/// Encode a value as compact JSON text.
///
/// Encoding is handed to `serde_json`; non-finite numbers come out as `null`.
///
/// # Examples
/// ```
/// use relaxed_json::{parse, stringify};
///
/// let value = parse("{'name': 'Ada', 'tags': [1, 2.5]}")?;
/// assert_eq!(stringify(&value), r#"{"name":"Ada","tags":[1,2.5]}"#);
/// # Ok::<(), relaxed_json::DecodeError>(())
/// ```
pub fn stringify(value: &Value) -> String {
    value.to_string()
}

pub fn to_string(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, value, options)?;
    String::from_utf8(buf).map_err(|err| Error::Utf8(err.utf8_error()))
}

pub fn to_writer<W: Write>(writer: W, value: &Value, options: &EncodeOptions) -> Result<()> {
    match options.indent {
        Indent::None => serde_json::to_writer(writer, value).map_err(Error::Serialize),
        Indent::Spaces(width) => {
            let indent_bytes = vec![b' '; width];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
            let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
            value.serialize(&mut serializer).map_err(Error::Serialize)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{stringify, to_string};
    use crate::options::{EncodeOptions, Indent};
    use crate::value::Value;

    #[rstest::rstest]
    fn test_stringify_whole_numbers_without_fraction() {
        let value = Value::Array(vec![Value::Number(42.0), Value::Number(-0.5)]);
        assert_eq!(stringify(&value), "[42,-0.5]");
    }

    #[rstest::rstest]
    fn test_stringify_non_finite_as_null() {
        let value = Value::Array(vec![Value::Number(f64::INFINITY), Value::Number(f64::NAN)]);
        assert_eq!(stringify(&value), "[null,null]");
    }

    #[rstest::rstest]
    fn test_stringify_escapes_control_characters() {
        let value = Value::from("tab\there \"quoted\" \\ line\n");
        assert_eq!(stringify(&value), r#""tab\there \"quoted\" \\ line\n""#);
    }

    #[rstest::rstest]
    fn test_pretty_output_uses_requested_indent() {
        let value = Value::from(json!({"a": [1, 2]}));
        let options = EncodeOptions::new().with_indent(Indent::Spaces(4));
        let text = to_string(&value, &options).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1,\n        2\n    ]\n}");
    }

    #[rstest::rstest]
    fn test_compact_options_match_stringify() {
        let value = Value::from(json!({"b": null, "a": true}));
        let text = to_string(&value, &EncodeOptions::default()).unwrap();
        assert_eq!(text, stringify(&value));
    }
}
