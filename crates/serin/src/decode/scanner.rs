//! Phase 1 of decoding: split the input into indentation-measured line
//! records. Blank lines are dropped here; the parser never sees them.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    /// 1-based position in the raw input, for diagnostics
    pub number: usize,
    /// Indentation level (leading spaces divided by the indent width)
    pub depth: usize,
    /// Whether the line starts with the `- ` list marker
    pub list: bool,
    /// Line body with the indent and any list marker stripped
    pub content: &'a str,
}

#[inline]
fn leading_spaces(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0usize;
    while i < b.len() && b[i] == b' ' {
        i += 1;
    }
    i
}

pub(crate) fn scan<'a>(input: &'a str, options: &DecodeOptions) -> Result<Vec<Line<'a>>> {
    let width = if options.indent == 0 { 2 } else { options.indent };
    let mut lines = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let number = idx + 1;
        let indent = leading_spaces(raw);
        let body = raw[indent..].trim_end_matches([' ', '\t']);
        if body.trim_matches('\t').is_empty() {
            continue;
        }
        if options.strict && body.starts_with('\t') {
            return Err(Error::Syntax {
                line: number,
                message: "tab character in indentation".to_string(),
            });
        }
        if options.strict && indent % width != 0 {
            return Err(Error::Syntax {
                line: number,
                message: format!("indent of {indent} spaces is not a multiple of {width}"),
            });
        }
        let depth = indent / width;
        let body = body.trim_start_matches('\t');
        let (list, content) = if let Some(rest) = body.strip_prefix("- ") {
            (true, rest.trim_matches([' ', '\t']))
        } else if body == "-" {
            (true, "")
        } else {
            (false, body)
        };
        lines.push(Line {
            number,
            depth,
            list,
            content,
        });
    }

    // Re-anchor documents that are indented as a whole.
    if let Some(base) = lines.first().map(|line| line.depth) {
        if base > 0 {
            for line in &mut lines {
                line.depth = line.depth.saturating_sub(base);
            }
        }
    }

    if options.strict {
        let mut prev = 0usize;
        for line in &lines {
            if line.depth > prev + 1 {
                return Err(Error::Syntax {
                    line: line.number,
                    message: format!("indent jumps from level {prev} to {}", line.depth),
                });
            }
            prev = line.depth;
        }
    }

    Ok(lines)
}
