/// Cell separator for inline arrays, tabular headers and tabular rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// The symbol written inside bracket segments to self-document the row
    /// separator. Comma is represented by absence.
    pub const fn symbol(self) -> Option<char> {
        match self {
            Delimiter::Comma => None,
            Delimiter::Tab => Some('\t'),
            Delimiter::Pipe => Some('|'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per indentation level (default: 2)
    pub indent: usize,
    pub delimiter: Delimiter,
    /// Emit `[#N]` instead of `[N]` in array headers
    pub length_marker: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: false,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_length_marker(mut self, enabled: bool) -> Self {
        self.length_marker = enabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail on declared-vs-observed count mismatches and malformed
    /// indentation instead of reconciling silently (default: true)
    pub strict: bool,
    pub delimiter: Delimiter,
    /// Spaces per indentation level the document is expected to use
    /// (default: 2)
    pub indent: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: true,
            delimiter: Delimiter::default(),
            indent: 2,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
