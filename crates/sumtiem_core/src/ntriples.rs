//! Line-based N-Triples reader and writer.
//!
//! # Responsibility
//! - Convert N-Triples text to `Fact`s and back for diagnostics.
//!
//! # Invariants
//! - IRIs are stored without angle brackets; blank nodes keep their `_:` label.
//! - Literal language tags and datatypes are discarded.

use crate::model::fact::{Fact, Term};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TRIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*(<[^>]*>|_:[A-Za-z0-9_.\-]+)\s+(<[^>]*>)\s+(<[^>]*>|_:[A-Za-z0-9_.\-]+|"(?:[^"\\]|\\.)*"(?:@[A-Za-z0-9\-]+|\^\^<[^>]*>)?)\s*\.\s*(?:#.*)?$"#,
    )
    .expect("valid triple regex")
});

pub type ParseResult<T> = Result<T, ParseError>;

/// Syntax error on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MalformedTriple { line: usize, text: String },
    InvalidEscape { line: usize, escape: char },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTriple { line, text } => {
                write!(f, "line {line}: malformed triple `{text}`")
            }
            Self::InvalidEscape { line, escape } => {
                write!(f, "line {line}: invalid escape `\\{escape}` in literal")
            }
        }
    }
}

impl Error for ParseError {}

/// Parses N-Triples text. Blank lines and `#` comments are skipped.
pub fn parse_ntriples(text: &str) -> ParseResult<Vec<Fact>> {
    let mut facts = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let captures = TRIPLE
            .captures(trimmed)
            .ok_or_else(|| ParseError::MalformedTriple {
                line,
                text: trimmed.to_string(),
            })?;
        facts.push(Fact {
            subject: node_value(&captures[1]),
            predicate: node_value(&captures[2]),
            object: object_term(&captures[3], line)?,
        });
    }
    Ok(facts)
}

/// Serializes facts as N-Triples, one per line.
pub fn write_ntriples(facts: &[Fact]) -> String {
    let mut out = String::new();
    for fact in facts {
        let object = match &fact.object {
            Term::Node(value) => write_node(value),
            Term::Literal(value) => format!("\"{}\"", escape_literal(value)),
        };
        out.push_str(&format!(
            "{} {} {} .\n",
            write_node(&fact.subject),
            write_node(&fact.predicate),
            object
        ));
    }
    out
}

fn node_value(token: &str) -> String {
    token
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(token)
        .to_string()
}

fn write_node(value: &str) -> String {
    if value.starts_with("_:") {
        value.to_string()
    } else {
        format!("<{value}>")
    }
}

fn object_term(token: &str, line: usize) -> ParseResult<Term> {
    if !token.starts_with('"') {
        return Ok(Term::Node(node_value(token)));
    }
    // Closing quote is the last quote before any `@lang` / `^^<type>` suffix.
    let body_end = token.rfind('"').unwrap_or(0);
    unescape_literal(&token[1..body_end], line).map(Term::Literal)
}

fn unescape_literal(body: &str, line: usize) -> ParseResult<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('u') => out.push(code_point(&mut chars, 4, 'u', line)?),
            Some('U') => out.push(code_point(&mut chars, 8, 'U', line)?),
            Some(other) => return Err(ParseError::InvalidEscape { line, escape: other }),
            None => return Err(ParseError::InvalidEscape { line, escape: ' ' }),
        }
    }
    Ok(out)
}

/// Reads `digits` hex digits of a `\u`/`\U` escape.
fn code_point(
    chars: &mut std::str::Chars<'_>,
    digits: usize,
    escape: char,
    line: usize,
) -> ParseResult<char> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.chars().count() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidEscape { line, escape });
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(ParseError::InvalidEscape { line, escape })
}

fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}
