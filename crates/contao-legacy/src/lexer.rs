//! Splitting of legacy PHP source into top-level statements.
//!
//! Only the lexical structure matters here: open/close tags, comments,
//! string literals and statement terminators. Everything between two
//! terminators is handed to the parser as one raw statement.

use crate::error::{Error, Result};

/// A statement as it appeared in the source, comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatement {
    /// Statement text without its terminator
    pub text: String,
    /// 1-based line of the first significant character
    pub line: usize,
    /// Number of enclosing `{ }` blocks
    pub depth: usize,
}

struct Splitter {
    statements: Vec<RawStatement>,
    buf: String,
    start_line: Option<usize>,
    depth: usize,
}

impl Splitter {
    fn push(&mut self, c: char, line: usize) {
        if self.start_line.is_none() && !c.is_whitespace() {
            self.start_line = Some(line);
        }
        self.buf.push(c);
    }

    fn flush(&mut self) {
        let text = self.buf.trim();
        if let Some(line) = self.start_line
            && !text.is_empty()
        {
            self.statements.push(RawStatement {
                text: text.to_string(),
                line,
                depth: self.depth,
            });
        }
        self.buf.clear();
        self.start_line = None;
    }
}

fn starts_with(chars: &[char], i: usize, token: &str) -> bool {
    token
        .chars()
        .enumerate()
        .all(|(offset, c)| chars.get(i + offset) == Some(&c))
}

/// Split `source` into raw statements.
///
/// Sources without any `<?` open tag are treated as bare PHP code. A
/// closing `?>` tag terminates the current statement.
pub fn split_statements(source: &str) -> Result<Vec<RawStatement>> {
    let chars: Vec<char> = source.chars().collect();
    let mut splitter = Splitter {
        statements: Vec::new(),
        buf: String::new(),
        start_line: None,
        depth: 0,
    };

    let mut in_php = !source.contains("<?");
    let mut paren_depth = 0usize;
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if !in_php {
            if starts_with(&chars, i, "<?php") {
                in_php = true;
                i += 5;
            } else if starts_with(&chars, i, "<?") {
                in_php = true;
                i += 2;
            } else {
                if c == '\n' {
                    line += 1;
                }
                i += 1;
            }
            continue;
        }

        match c {
            '\n' => {
                line += 1;
                splitter.push(c, line);
                i += 1;
            }
            '?' if starts_with(&chars, i, "?>") => {
                splitter.flush();
                paren_depth = 0;
                in_php = false;
                i += 2;
            }
            '\'' | '"' => {
                let open_line = line;
                splitter.push(c, line);
                i += 1;
                loop {
                    let Some(&ch) = chars.get(i) else {
                        return Err(Error::Unterminated {
                            what: "string",
                            line: open_line,
                        });
                    };
                    splitter.push(ch, line);
                    i += 1;
                    if ch == '\n' {
                        line += 1;
                    }
                    if ch == '\\' {
                        if let Some(&escaped) = chars.get(i) {
                            splitter.push(escaped, line);
                            if escaped == '\n' {
                                line += 1;
                            }
                            i += 1;
                        }
                    } else if ch == c {
                        break;
                    }
                }
            }
            '#' => i = skip_line_comment(&chars, i),
            '/' if starts_with(&chars, i, "//") => i = skip_line_comment(&chars, i),
            '/' if starts_with(&chars, i, "/*") => {
                let open_line = line;
                i += 2;
                loop {
                    if i >= chars.len() {
                        return Err(Error::Unterminated {
                            what: "comment",
                            line: open_line,
                        });
                    }
                    if starts_with(&chars, i, "*/") {
                        i += 2;
                        break;
                    }
                    if chars[i] == '\n' {
                        line += 1;
                    }
                    i += 1;
                }
                splitter.push(' ', line);
            }
            ';' if paren_depth == 0 => {
                splitter.flush();
                i += 1;
            }
            '{' if paren_depth == 0 => {
                splitter.flush();
                splitter.depth += 1;
                i += 1;
            }
            '}' if paren_depth == 0 => {
                splitter.flush();
                splitter.depth = splitter.depth.saturating_sub(1);
                i += 1;
            }
            '(' | '[' => {
                paren_depth += 1;
                splitter.push(c, line);
                i += 1;
            }
            ')' | ']' => {
                paren_depth = paren_depth.saturating_sub(1);
                splitter.push(c, line);
                i += 1;
            }
            _ => {
                splitter.push(c, line);
                i += 1;
            }
        }
    }

    splitter.flush();
    Ok(splitter.statements)
}

/// Skip to the end of a line comment, stopping before the newline or a
/// closing tag.
fn skip_line_comment(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] != '\n' && !starts_with(chars, i, "?>") {
        i += 1;
    }
    i
}
