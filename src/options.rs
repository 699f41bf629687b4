pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    None,
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        if count == 0 {
            Indent::None
        } else {
            Indent::Spaces(count)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub indent: Indent,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Reject anything but whitespace after the outermost value.
    pub strict: bool,
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeOptions, Indent, DEFAULT_MAX_DEPTH};

    #[rstest::rstest]
    fn test_decode_options_defaults_are_lenient() {
        let options = DecodeOptions::default();
        assert!(!options.strict);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[rstest::rstest]
    #[case(0, Indent::None)]
    #[case(4, Indent::Spaces(4))]
    fn test_indent_spaces_zero_is_compact(#[case] count: usize, #[case] expected: Indent) {
        assert_eq!(Indent::spaces(count), expected);
    }
}
