//! Phase 2 of decoding: indentation-driven recursive descent over the
//! scanned line records, via a cursor rather than substring slicing, so
//! every parsed subtree owns its children outright.

use crate::decode::scanner::{self, Line};
use crate::error::{Error, Result};
use crate::number::{NumberKind, classify_numeric};
use crate::options::{DecodeOptions, Delimiter};
use crate::value::{Map, Number, Value};

pub(crate) fn parse(input: &str, options: &DecodeOptions) -> Result<Value> {
    let lines = scanner::scan(input, options)?;
    let mut parser = Parser {
        lines,
        idx: 0,
        strict: options.strict,
        delimiter: options.delimiter,
    };
    parser.parse_document()
}

/// Parsed form of a `[N]{fields}` header suffix. `delimiter` is the
/// self-documented separator (comma when no symbol was written), which is
/// what the body of this particular array is split on.
struct Header {
    len: usize,
    delimiter: Delimiter,
    fields: Option<Vec<String>>,
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    idx: usize,
    strict: bool,
    delimiter: Delimiter,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.idx).copied()
    }

    fn advance(&mut self) {
        self.idx += 1;
    }

    fn parse_document(&mut self) -> Result<Value> {
        if self.lines.is_empty() {
            // an empty document reads back as an empty object
            return Ok(Value::Object(Map::new()));
        }
        let value = self.parse_node(0)?;
        if self.strict {
            if let Some(line) = self.peek() {
                return Err(Error::Syntax {
                    line: line.number,
                    message: "unexpected content after document root".to_string(),
                });
            }
        }
        Ok(value)
    }

    /// Dispatch on the line at the cursor: list block, array header, scalar
    /// line or object block.
    fn parse_node(&mut self, depth: usize) -> Result<Value> {
        let Some(line) = self.peek() else {
            return Ok(Value::Null);
        };
        if line.depth != depth {
            return Ok(Value::Null);
        }
        if line.list {
            return self.parse_list(depth);
        }
        match split_key_value(line.content) {
            None => {
                self.advance();
                self.parse_scalar_token(line.content, line.number)
            }
            Some((raw_key, inline)) => {
                let (key, header) = self.parse_key_and_header(raw_key, line.number)?;
                match (key, header) {
                    (None, Some(header)) => {
                        self.advance();
                        self.parse_array_body("", header, inline, depth + 1, line.number)
                    }
                    _ => self.parse_object(depth),
                }
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        let mut map = Map::new();
        while let Some(line) = self.peek() {
            if line.depth != depth || line.list {
                break;
            }
            let number = line.number;
            let (key, value) = self.parse_entry(depth)?;
            if self.strict && map.contains_key(&key) {
                return Err(Error::Syntax {
                    line: number,
                    message: format!("duplicate key '{key}'"),
                });
            }
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }

    /// Consume one `key: ...` line (and whatever body it owns) at the given
    /// depth.
    fn parse_entry(&mut self, depth: usize) -> Result<(String, Value)> {
        let line = self.peek().expect("caller checked for a current line");
        let Some((raw_key, inline)) = split_key_value(line.content) else {
            return Err(Error::Syntax {
                line: line.number,
                message: format!("expected 'key: value', found '{}'", line.content),
            });
        };
        let (key, header) = self.parse_key_and_header(raw_key, line.number)?;
        let Some(key) = key else {
            return Err(Error::Syntax {
                line: line.number,
                message: "array header requires a key inside an object".to_string(),
            });
        };
        self.advance();
        let value = match header {
            Some(header) => self.parse_array_body(&key, header, inline, depth + 1, line.number)?,
            None => match inline {
                Some(text) => self.parse_scalar_token(text, line.number)?,
                None => match self.peek() {
                    Some(next) if next.depth > depth => self.parse_node(next.depth)?,
                    // `key:` with no trailing text and no deeper children
                    _ => Value::Object(Map::new()),
                },
            },
        };
        Ok((key, value))
    }

    /// Consecutive list lines at one depth form an array.
    fn parse_list(&mut self, depth: usize) -> Result<Value> {
        let mut items = Vec::new();
        while let Some(line) = self.peek() {
            if line.depth != depth || !line.list {
                break;
            }
            self.advance();
            items.push(self.parse_list_element(line, depth)?);
        }
        Ok(Value::Array(items))
    }

    fn parse_list_element(&mut self, line: Line<'a>, depth: usize) -> Result<Value> {
        if line.content.is_empty() {
            // bare marker: a nested block when something follows deeper,
            // otherwise an empty object
            return match self.peek() {
                Some(next) if next.depth > depth => self.parse_node(next.depth),
                _ => Ok(Value::Object(Map::new())),
            };
        }
        let Some((raw_key, inline)) = split_key_value(line.content) else {
            return self.parse_scalar_token(line.content, line.number);
        };
        let (key, header) = self.parse_key_and_header(raw_key, line.number)?;
        match (key, header) {
            // `- [N]...`: the element itself is an array
            (None, Some(header)) => {
                self.parse_array_body("", header, inline, depth + 1, line.number)
            }
            (None, None) => Err(Error::Syntax {
                line: line.number,
                message: "malformed list item".to_string(),
            }),
            // `- key: ...`: the element is an object whose first field rides
            // the marker line; its remaining fields sit one level deeper
            (Some(key), header) => {
                let mut map = Map::new();
                let first = match header {
                    Some(header) => {
                        self.parse_array_body(&key, header, inline, depth + 2, line.number)?
                    }
                    None => match inline {
                        Some(text) => self.parse_scalar_token(text, line.number)?,
                        None => match self.peek() {
                            // the first field's own children sit below the
                            // element's field rows
                            Some(next) if next.depth > depth + 1 => self.parse_node(next.depth)?,
                            _ => Value::Object(Map::new()),
                        },
                    },
                };
                map.insert(key, first);
                while let Some(next) = self.peek() {
                    if next.depth != depth + 1 || next.list {
                        break;
                    }
                    let number = next.number;
                    let (k, v) = self.parse_entry(depth + 1)?;
                    if self.strict && map.contains_key(&k) {
                        return Err(Error::Syntax {
                            line: number,
                            message: format!("duplicate key '{k}'"),
                        });
                    }
                    map.insert(k, v);
                }
                Ok(Value::Object(map))
            }
        }
    }

    /// Build the array a header line introduces: tabular rows, inline
    /// scalars, or one list block per element.
    fn parse_array_body(
        &mut self,
        key: &str,
        header: Header,
        inline: Option<&str>,
        child_depth: usize,
        number: usize,
    ) -> Result<Value> {
        let name = if key.is_empty() {
            String::from("array")
        } else {
            format!("array '{key}'")
        };
        let dch = header.delimiter.as_char();

        if let Some(fields) = header.fields {
            if inline.is_some() {
                return Err(Error::Syntax {
                    line: number,
                    message: "unexpected values after tabular header".to_string(),
                });
            }
            if fields.is_empty() && header.len > 0 {
                return Err(Error::Syntax {
                    line: number,
                    message: "tabular header declares no fields".to_string(),
                });
            }
            let mut rows = Vec::new();
            while let Some(line) = self.peek() {
                if line.depth != child_depth || line.list {
                    break;
                }
                self.advance();
                let cells = split_delim_aware(line.content, dch);
                if self.strict && cells.len() != fields.len() {
                    return Err(Error::Mismatch {
                        what: format!("row width in {name}"),
                        line: line.number,
                        expected: fields.len(),
                        actual: cells.len(),
                    });
                }
                let mut row = Map::new();
                for (i, field) in fields.iter().enumerate() {
                    // lenient mode pads short rows with null and drops the
                    // cells beyond the header
                    let cell = match cells.get(i) {
                        Some(cell) => self.parse_scalar_token(cell, line.number)?,
                        None => Value::Null,
                    };
                    row.insert(field.clone(), cell);
                }
                rows.push(Value::Object(row));
            }
            if self.strict && rows.len() != header.len {
                return Err(Error::Mismatch {
                    what: format!("{name} length"),
                    line: number,
                    expected: header.len,
                    actual: rows.len(),
                });
            }
            return Ok(Value::Array(rows));
        }

        if let Some(text) = inline {
            let tokens = split_delim_aware(text, dch);
            if self.strict && tokens.len() != header.len {
                return Err(Error::Mismatch {
                    what: format!("{name} length"),
                    line: number,
                    expected: header.len,
                    actual: tokens.len(),
                });
            }
            let mut items = Vec::with_capacity(tokens.len());
            for token in tokens {
                items.push(self.parse_scalar_token(token, number)?);
            }
            return Ok(Value::Array(items));
        }

        // no field list, nothing inline: empty array or expanded list blocks
        let has_blocks = matches!(self.peek(), Some(l) if l.depth == child_depth && l.list);
        if !has_blocks {
            if self.strict && header.len > 0 {
                return Err(Error::Mismatch {
                    what: format!("{name} length"),
                    line: number,
                    expected: header.len,
                    actual: 0,
                });
            }
            return Ok(Value::Array(Vec::new()));
        }
        let value = self.parse_list(child_depth)?;
        if self.strict {
            if let Value::Array(items) = &value {
                if items.len() != header.len {
                    return Err(Error::Mismatch {
                        what: format!("{name} length"),
                        line: number,
                        expected: header.len,
                        actual: items.len(),
                    });
                }
            }
        }
        Ok(value)
    }

    /// Split the key part of a field line into the key proper and an
    /// optional array-header suffix. Returns `None` for the key when the
    /// header carries no key at all (root arrays and `- [N]` elements).
    fn parse_key_and_header(
        &self,
        raw: &str,
        number: usize,
    ) -> Result<(Option<String>, Option<Header>)> {
        if raw.starts_with('"') {
            let Some(close) = find_closing_quote(raw) else {
                return Err(Error::Syntax {
                    line: number,
                    message: "unterminated quoted key".to_string(),
                });
            };
            let key = unescape_quoted(&raw[..=close]).ok_or_else(|| Error::Syntax {
                line: number,
                message: format!("malformed quoted key: {raw}"),
            })?;
            let rest = &raw[close + 1..];
            if rest.is_empty() {
                Ok((Some(key), None))
            } else if rest.starts_with('[') {
                Ok((Some(key), Some(self.parse_bracket_suffix(rest, number)?)))
            } else {
                Err(Error::Syntax {
                    line: number,
                    message: "unexpected characters after quoted key".to_string(),
                })
            }
        } else if let Some(pos) = raw.find('[') {
            let (key_part, rest) = raw.split_at(pos);
            match self.parse_bracket_suffix(rest, number) {
                Ok(header) => {
                    let key = if key_part.is_empty() {
                        None
                    } else {
                        Some(key_part.to_string())
                    };
                    Ok((key, Some(header)))
                }
                Err(err) if self.strict => Err(err),
                // lenient: a bracket that is not a header is just part of
                // the key
                Err(_) => Ok((Some(raw.to_string()), None)),
            }
        } else {
            Ok((Some(raw.to_string()), None))
        }
    }

    /// Parse `[#?N<sym>?]` plus an optional `{fields}` segment. `rest` must
    /// begin with `[` and reach the end of the key part.
    fn parse_bracket_suffix(&self, rest: &str, number: usize) -> Result<Header> {
        let Some(inner_end) = rest.find(']') else {
            return Err(Error::Syntax {
                line: number,
                message: "unbalanced brackets in array header".to_string(),
            });
        };
        let mut inner = &rest[1..inner_end];
        if let Some(t) = inner.strip_prefix('#') {
            inner = t;
        }
        let mut declared = Delimiter::Comma;
        if let Some(t) = inner.strip_suffix('\t') {
            declared = Delimiter::Tab;
            inner = t;
        } else if let Some(t) = inner.strip_suffix('|') {
            declared = Delimiter::Pipe;
            inner = t;
        } else if let Some(t) = inner.strip_suffix(',') {
            inner = t;
        }
        let len: usize = inner.parse().map_err(|_| Error::Syntax {
            line: number,
            message: format!("invalid array length '{inner}'"),
        })?;
        if self.strict && declared != self.delimiter {
            return Err(Error::Syntax {
                line: number,
                message: format!(
                    "array header declares the {} delimiter but the decoder expects {}",
                    delimiter_name(declared),
                    delimiter_name(self.delimiter)
                ),
            });
        }

        let after = &rest[inner_end + 1..];
        let fields = if let Some(body) = after.strip_prefix('{') {
            let Some(close) = find_unquoted(body, b'}') else {
                return Err(Error::Syntax {
                    line: number,
                    message: "unbalanced braces in array header".to_string(),
                });
            };
            if !body[close + 1..].is_empty() {
                return Err(Error::Syntax {
                    line: number,
                    message: "unexpected text after array header".to_string(),
                });
            }
            let list = &body[..close];
            let fields = if list.is_empty() {
                Vec::new()
            } else {
                let mut fields = Vec::new();
                for token in split_delim_aware(list, declared.as_char()) {
                    fields.push(self.key_token(token, number)?);
                }
                fields
            };
            if self.strict {
                for i in 0..fields.len() {
                    if fields[i + 1..].contains(&fields[i]) {
                        return Err(Error::Syntax {
                            line: number,
                            message: format!("duplicate field '{}' in tabular header", fields[i]),
                        });
                    }
                }
            }
            Some(fields)
        } else if after.is_empty() {
            None
        } else {
            return Err(Error::Syntax {
                line: number,
                message: "unexpected text after array header".to_string(),
            });
        };

        Ok(Header {
            len,
            delimiter: declared,
            fields,
        })
    }

    fn key_token(&self, raw: &str, number: usize) -> Result<String> {
        if raw.starts_with('"') {
            unescape_quoted(raw).ok_or_else(|| Error::Syntax {
                line: number,
                message: format!("malformed quoted key: {raw}"),
            })
        } else {
            Ok(raw.to_string())
        }
    }

    /// Literal match, integer parse, float parse, quoted-string unescape —
    /// in that order; anything left over is the raw string.
    fn parse_scalar_token(&self, token: &str, number: usize) -> Result<Value> {
        if token.starts_with('"') {
            return match unescape_quoted(token) {
                Some(s) => Ok(Value::String(s)),
                None => Err(Error::Syntax {
                    line: number,
                    message: format!("unterminated quoted string: {token}"),
                }),
            };
        }
        match token {
            "null" => return Ok(Value::Null),
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }
        match classify_numeric(token) {
            Some(NumberKind::Int) => {
                if let Ok(i) = token.parse::<i64>() {
                    return Ok(Value::Number(Number::I64(i)));
                }
                if let Ok(u) = token.parse::<u64>() {
                    return Ok(Value::Number(Number::U64(u)));
                }
                if let Ok(f) = token.parse::<f64>() {
                    return Ok(Value::Number(Number::F64(f)));
                }
            }
            Some(NumberKind::Float) => {
                if let Ok(f) = token.parse::<f64>() {
                    return Ok(Value::Number(Number::F64(f)));
                }
            }
            None => {}
        }
        Ok(Value::String(token.to_string()))
    }
}

fn delimiter_name(delimiter: Delimiter) -> &'static str {
    match delimiter {
        Delimiter::Comma => "comma",
        Delimiter::Tab => "tab",
        Delimiter::Pipe => "pipe",
    }
}

/// Split a field line at its first unquoted colon. Returns the raw key text
/// and the trimmed trailing text, if any.
fn split_key_value(content: &str) -> Option<(&str, Option<&str>)> {
    let idx = find_unquoted(content, b':')?;
    let key = content[..idx].trim_end_matches([' ', '\t']);
    let after = content[idx + 1..].trim_matches([' ', '\t']);
    Some((key, if after.is_empty() { None } else { Some(after) }))
}

fn find_unquoted(s: &str, needle: u8) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut in_str = false;
    let mut escape = false;
    for (i, &b) in bytes.iter().enumerate() {
        if in_str {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == b'"' {
                in_str = false;
            }
        } else if b == b'"' {
            in_str = true;
        } else if b == needle {
            return Some(i);
        }
    }
    None
}

/// Index of the quote closing a token that starts with `"`.
fn find_closing_quote(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut escape = false;
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if escape {
            escape = false;
        } else if b == b'\\' {
            escape = true;
        } else if b == b'"' {
            return Some(i);
        }
    }
    None
}

/// Split on the delimiter, ignoring delimiters inside quoted tokens. Empty
/// tokens are kept so declared lengths can be checked faithfully.
fn split_delim_aware<'a>(s: &'a str, delimiter: char) -> Vec<&'a str> {
    let bytes = s.as_bytes();
    let delim = delimiter as u8;
    let mut out = Vec::new();
    let mut in_str = false;
    let mut escape = false;
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        if in_str {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == b'"' {
                in_str = false;
            }
        } else if b == b'"' {
            in_str = true;
        } else if b == delim {
            out.push(s[start..i].trim_matches([' ', '\t']));
            start = i + 1;
        }
    }
    out.push(s[start..].trim_matches([' ', '\t']));
    out
}

/// Undo the quoting applied by the encoder. `None` when the token is not a
/// complete quoted string (unterminated, bad escape, trailing characters).
fn unescape_quoted(token: &str) -> Option<String> {
    let rest = token.strip_prefix('"')?;
    let mut out = String::with_capacity(token.len());
    let mut chars = rest.chars();
    loop {
        let ch = chars.next()?;
        match ch {
            '"' => return chars.next().is_none().then_some(out),
            '\\' => match chars.next()? {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                '/' => out.push('/'),
                'b' => out.push('\u{0008}'),
                'f' => out.push('\u{000C}'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => {
                    let mut code = 0u32;
                    for _ in 0..4 {
                        code = (code << 4) | chars.next()?.to_digit(16)?;
                    }
                    out.push(char::from_u32(code)?);
                }
                _ => return None,
            },
            c => out.push(c),
        }
    }
}
