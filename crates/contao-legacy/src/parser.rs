//! Statement recognition and literal decoding.
//!
//! Two statement shapes carry information for the installer:
//!
//! ```text
//! define('VERSION', '3.5');
//! $GLOBALS['TL_CONFIG']['websiteTitle'] = 'Contao Open Source CMS';
//! ```
//!
//! Every other statement is kept as [`StatementKind::Other`] and ignored by
//! the consumers.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexer::RawStatement;
use crate::value::{KeySegment, LegacyValue, next_index};

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:0[xX][0-9a-fA-F]+|(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?)")
        .expect("Invalid number regex")
});

static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_\\][A-Za-z0-9_\\]*").expect("Invalid ident regex"));

static ARRAY_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^array\s*\(").expect("Invalid array regex"));

static DEFINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^define\s*\((.*)\)$").expect("Invalid define regex"));

static CONFIG_TARGET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\$GLOBALS\s*\[\s*(?:'TL_CONFIG'|"TL_CONFIG")\s*\]"#)
        .expect("Invalid config target regex")
});

/// A recognised statement and the line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    /// `define('NAME', value)`
    Define { name: String, value: LegacyValue },
    /// `$GLOBALS['TL_CONFIG'][...] = value`
    Assign {
        keys: Vec<KeySegment>,
        value: LegacyValue,
    },
    /// Anything else, including statements inside `{ }` blocks
    Other { text: String },
}

/// Classify a raw statement.
pub fn parse_statement(raw: &RawStatement) -> Statement {
    let kind = if raw.depth > 0 {
        tracing::debug!(line = raw.line, "Skipping statement inside a block");
        None
    } else {
        parse_define(&raw.text).or_else(|| parse_assignment(&raw.text))
    };

    Statement {
        line: raw.line,
        kind: kind.unwrap_or_else(|| StatementKind::Other {
            text: raw.text.clone(),
        }),
    }
}

fn parse_define(text: &str) -> Option<StatementKind> {
    let caps = DEFINE_REGEX.captures(text)?;
    let args = split_top_level(caps.get(1)?.as_str());
    if args.len() < 2 {
        return None;
    }

    let LegacyValue::Str(name) = parse_value(args[0]) else {
        return None;
    };

    Some(StatementKind::Define {
        name,
        value: parse_value(args[1]),
    })
}

fn parse_assignment(text: &str) -> Option<StatementKind> {
    let target = CONFIG_TARGET_REGEX.find(text)?;
    let mut cursor = Cursor::at(text, target.end());

    let mut keys = Vec::new();
    while cursor.eat("[") {
        if cursor.eat("]") {
            keys.push(KeySegment::Append);
            continue;
        }
        let key = match cursor.value()? {
            LegacyValue::Str(s) => s,
            LegacyValue::Int(i) => i.to_string(),
            _ => return None,
        };
        if !cursor.eat("]") {
            return None;
        }
        keys.push(KeySegment::Key(key));
    }

    if keys.is_empty() {
        return None;
    }

    cursor.skip_ws();
    let rest = cursor.rest();
    if !rest.starts_with('=') || rest.starts_with("==") || rest.starts_with("=>") {
        return None;
    }

    Some(StatementKind::Assign {
        keys,
        value: parse_value(&rest[1..]),
    })
}

/// Decode `text` as a single literal, falling back to
/// [`LegacyValue::Expr`] when it is not one.
pub fn parse_value(text: &str) -> LegacyValue {
    let mut cursor = Cursor::new(text);
    match cursor.value() {
        Some(value) if cursor.at_end() => value,
        _ => LegacyValue::Expr(text.trim().to_string()),
    }
}

/// Split on commas that are not nested in brackets or strings.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn at_end(&mut self) -> bool {
        self.skip_ws();
        self.rest().is_empty()
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Option<LegacyValue> {
        self.skip_ws();
        let rest = self.rest();

        if rest.starts_with('\'') {
            return self.single_quoted().map(LegacyValue::Str);
        }
        if rest.starts_with('"') {
            return self.double_quoted().map(LegacyValue::Str);
        }
        if let Some(m) = ARRAY_OPEN_REGEX.find(rest) {
            self.pos += m.end();
            return self.array(')');
        }
        if rest.starts_with('[') {
            self.pos += 1;
            return self.array(']');
        }
        if let Some(m) = NUMBER_REGEX.find(rest) {
            self.pos += m.end();
            return parse_number(m.as_str());
        }
        if let Some(m) = IDENT_REGEX.find(rest) {
            let value = match m.as_str().to_ascii_lowercase().as_str() {
                "true" => LegacyValue::Bool(true),
                "false" => LegacyValue::Bool(false),
                "null" => LegacyValue::Null,
                _ => return None,
            };
            self.pos += m.end();
            return Some(value);
        }
        None
    }

    fn single_quoted(&mut self) -> Option<String> {
        let mut out = String::new();
        let mut chars = self.rest().char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, e @ ('\\' | '\''))) => out.push(e),
                    Some((_, e)) => {
                        out.push('\\');
                        out.push(e);
                    }
                    None => return None,
                },
                '\'' => {
                    self.pos += i + 1;
                    return Some(out);
                }
                _ => out.push(c),
            }
        }
        None
    }

    fn double_quoted(&mut self) -> Option<String> {
        let mut out = String::new();
        let mut chars = self.rest().char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, 'v')) => out.push('\u{0b}'),
                    Some((_, 'f')) => out.push('\u{0c}'),
                    Some((_, 'e')) => out.push('\u{1b}'),
                    Some((_, '0')) => out.push('\0'),
                    Some((_, e @ ('\\' | '"' | '$'))) => out.push(e),
                    Some((_, e)) => {
                        out.push('\\');
                        out.push(e);
                    }
                    None => return None,
                },
                // Interpolation cannot be evaluated here.
                '$' => return None,
                '"' => {
                    self.pos += i + 1;
                    return Some(out);
                }
                _ => out.push(c),
            }
        }
        None
    }

    fn array(&mut self, close: char) -> Option<LegacyValue> {
        let close_str = close.to_string();
        let mut entries: Vec<(Option<String>, LegacyValue)> = Vec::new();

        loop {
            if self.eat(&close_str) {
                break;
            }
            let first = self.value()?;
            let entry = if self.eat("=>") {
                let key = match first {
                    LegacyValue::Str(s) => s,
                    LegacyValue::Int(i) => i.to_string(),
                    _ => return None,
                };
                (Some(key), self.value()?)
            } else {
                (None, first)
            };
            entries.push(entry);

            if self.eat(",") {
                continue;
            }
            if self.eat(&close_str) {
                break;
            }
            return None;
        }

        if entries.iter().all(|(key, _)| key.is_none()) {
            return Some(LegacyValue::List(
                entries.into_iter().map(|(_, v)| v).collect(),
            ));
        }

        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let key = key.unwrap_or_else(|| next_index(&map).to_string());
            map.insert(key, value);
        }
        Some(LegacyValue::Map(map))
    }
}

fn parse_number(literal: &str) -> Option<LegacyValue> {
    let (negative, digits) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let sign = if negative { -1 } else { 1 };

    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        return i64::from_str_radix(hex, 16)
            .ok()
            .map(|v| LegacyValue::Int(sign * v));
    }

    if digits.contains(['.', 'e', 'E']) {
        return literal.parse::<f64>().ok().map(LegacyValue::Float);
    }

    if digits.len() > 1 && digits.starts_with('0') {
        return i64::from_str_radix(&digits[1..], 8)
            .ok()
            .map(|v| LegacyValue::Int(sign * v));
    }

    digits
        .parse::<i64>()
        .ok()
        .map(|v| LegacyValue::Int(sign * v))
}
