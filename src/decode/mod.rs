mod cursor;

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::{DecodeError, DecodeErrorKind};
use crate::value::{Map, Value};
use crate::{DecodeOptions, Error, Result};

use self::cursor::Cursor;

type ParseResult<T> = std::result::Result<T, DecodeError>;

pub fn parse(input: &str, options: &DecodeOptions) -> ParseResult<Value> {
    tracing::debug!(len = input.len(), strict = options.strict, "parsing");
    let mut parser = Parser::new(input, options);
    let value = parser.parse_value()?;
    if options.strict {
        parser.expect_end()?;
    }
    tracing::debug!(kind = value.type_name(), "parsed");
    Ok(value)
}

pub fn validate_str(input: &str, options: &DecodeOptions) -> ParseResult<()> {
    parse(input, options).map(|_| ())
}

pub fn from_str<T: DeserializeOwned>(input: &str, options: &DecodeOptions) -> Result<T> {
    let value = parse(input, options)?;
    serde_json::from_value(value.into()).map_err(Error::Deserialize)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &DecodeOptions) -> Result<T> {
    let text = std::str::from_utf8(input)?;
    from_str(text, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(
    mut reader: R,
    options: &DecodeOptions,
) -> Result<T> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    from_str(&buf, options)
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: &DecodeOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        let location = self.cursor.location();
        tracing::trace!(%kind, line = location.line, column = location.column, "decode error");
        DecodeError::new(kind, location)
    }

    fn expect_end(&mut self) -> ParseResult<()> {
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            Ok(())
        } else {
            Err(self.error(DecodeErrorKind::TrailingContent))
        }
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Value::String),
            Some('t') => self.parse_literal("true").map(|()| Value::Bool(true)),
            Some('f') => self.parse_literal("false").map(|()| Value::Bool(false)),
            Some('n') => self.parse_literal("null").map(|()| Value::Null),
            Some('-' | '0'..='9') => self.parse_number().map(Value::Number),
            Some(ch) => Err(self.error(DecodeErrorKind::UnexpectedCharacter(ch))),
            None => Err(self.error(DecodeErrorKind::UnexpectedEnd)),
        }
    }

    fn enter_nested(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(self.error(DecodeErrorKind::DepthLimitExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self) -> ParseResult<Value> {
        self.enter_nested()?;
        self.cursor.advance();
        let mut map = Map::new();

        loop {
            self.cursor.skip_whitespace();
            let quote = match self.cursor.peek() {
                Some('}') | None => break,
                Some(quote @ ('"' | '\'')) => quote,
                Some(_) => return Err(self.error(DecodeErrorKind::ExpectedStringKey)),
            };
            let key = self.parse_string(quote)?;

            self.cursor.skip_whitespace();
            if self.cursor.advance() != Some(':') {
                return Err(self.error(DecodeErrorKind::ExpectedColon));
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            self.cursor.skip_whitespace();
            self.cursor.eat(',');
        }

        if self.cursor.advance() != Some('}') {
            return Err(self.error(DecodeErrorKind::ExpectedCloseBrace));
        }
        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> ParseResult<Value> {
        self.enter_nested()?;
        self.cursor.advance();
        let mut items = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if matches!(self.cursor.peek(), Some(']') | None) {
                break;
            }
            items.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            self.cursor.eat(',');
        }

        if self.cursor.advance() != Some(']') {
            return Err(self.error(DecodeErrorKind::ExpectedCloseBracket));
        }
        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// `quote` is the opening delimiter under the cursor; only the same char closes.
    fn parse_string(&mut self, quote: char) -> ParseResult<String> {
        debug_assert!(quote == '"' || quote == '\'');
        self.cursor.advance();
        let mut out = String::new();

        loop {
            out.push_str(self.cursor.take_until2(quote as u8, b'\\'));
            match self.cursor.advance() {
                Some('\\') => match self.cursor.advance() {
                    Some(ch @ ('"' | '\'' | '\\')) => out.push(ch),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => return Err(self.error(DecodeErrorKind::UnterminatedString)),
                },
                Some(_) => return Ok(out),
                None => return Err(self.error(DecodeErrorKind::UnterminatedString)),
            }
        }
    }

    fn parse_number(&mut self) -> ParseResult<f64> {
        let start = self.cursor.byte_position();
        self.cursor.eat('-');
        if self.cursor.skip_digits() == 0 {
            return Err(self.error(DecodeErrorKind::InvalidNumber));
        }
        if self.cursor.eat('.') && self.cursor.skip_digits() == 0 {
            return Err(self.error(DecodeErrorKind::InvalidNumber));
        }

        let text = self.cursor.consumed_since(start);
        text.parse::<f64>()
            .map_err(|_| self.error(DecodeErrorKind::InvalidNumber))
    }

    /// Consumes as many chars as the literal has, then compares. The error
    /// position is wherever consumption stopped.
    fn parse_literal(&mut self, literal: &'static str) -> ParseResult<()> {
        let start = self.cursor.byte_position();
        for _ in 0..literal.len() {
            self.cursor.advance();
        }
        if self.cursor.consumed_since(start) == literal {
            Ok(())
        } else {
            Err(self.error(DecodeErrorKind::ExpectedLiteral(literal)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::error::DecodeErrorKind;
    use crate::value::Value;
    use crate::DecodeOptions;

    fn lenient(input: &str) -> Result<Value, crate::DecodeError> {
        parse(input, &DecodeOptions::default())
    }

    #[rstest::rstest]
    fn test_nested_depth_is_restored_after_each_container() {
        let options = DecodeOptions::default().with_max_depth(2);
        let value = parse("[[1], [2], {\"a\": 3}, [4]]", &options).expect("within limit");
        assert_eq!(value[2]["a"].as_f64(), Some(3.0));
        assert_eq!(value[3][0].as_f64(), Some(4.0));
    }

    #[rstest::rstest]
    fn test_depth_limit_reports_opening_delimiter() {
        let options = DecodeOptions::default().with_max_depth(2);
        let err = parse("[[[1]]]", &options).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::DepthLimitExceeded);
        assert_eq!((err.line(), err.column()), (1, 3));
    }

    #[rstest::rstest]
    fn test_deep_nesting_fails_cleanly_at_default_limit() {
        let input = "[".repeat(100_000);
        let err = lenient(&input).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::DepthLimitExceeded);
    }

    #[rstest::rstest]
    fn test_string_bulk_copy_keeps_escape_handling() {
        let value = lenient(r#""plain \"quoted\" and \\ then \q end""#).unwrap();
        assert_eq!(value.as_str(), Some(r#"plain "quoted" and \ then \q end"#));
    }

    #[rstest::rstest]
    fn test_key_must_be_quoted() {
        let err = lenient("{a: 1}").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::ExpectedStringKey);
        assert_eq!(err.column(), 2);
    }
}
