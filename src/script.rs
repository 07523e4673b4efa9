// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! A plain text form of a directive stream,
//! one directive per line:
//!
//! ```text
//! # comment
//! keyword SELECT
//! identifier x
//! symbol ,
//! constant 'a b'
//! newline
//! indent
//! ```
//!
//! The value of a content directive is everything after
//! the first space following its name, taken verbatim.

use std::fmt::Write;
use std::str::FromStr;

use crate::directive::Directive;
use crate::error::{Error, RenderResult};
use crate::token::TokenKind;

const COMMENT: char = '#';

fn parse_kind(name: &str) -> Option<TokenKind> {
    Some(match name {
        "keyword" => TokenKind::Keyword,
        "identifier" => TokenKind::Identifier,
        "symbol" => TokenKind::Symbol,
        "constant" => TokenKind::Constant,
        "space" => TokenKind::Space,
        "refuse-space" => TokenKind::RefuseSpace,
        "newline" => TokenKind::NewLine,
        "indent" => TokenKind::Indent,
        "unindent" => TokenKind::Unindent,
        _ => return None,
    })
}

/// Parses a single, non-empty, non-comment script line.
///
/// # Errors
///
/// If the directive name is unknown,
/// a content directive lacks its value,
/// or a control directive has one.
pub fn parse_line(line_num: usize, line: &str) -> RenderResult<Directive> {
    let line = line.trim_start();
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (name, value) = match line.split_once(' ') {
        Some((name, value)) => (name, Some(value)),
        None => (line, None),
    };
    let kind = parse_kind(name).ok_or_else(|| Error::UnknownDirective {
        line: line_num,
        name: name.to_owned(),
    })?;

    match value {
        Some(val) if kind.is_content() && !val.is_empty() => Ok(Directive::new(kind, val)),
        Some(val) if !kind.is_content() && !val.trim().is_empty() => {
            Err(Error::UnexpectedValue {
                line: line_num,
                directive: name.to_owned(),
                value: val.to_owned(),
            })
        }
        _ if kind.is_content() => Err(Error::MissingValue {
            line: line_num,
            directive: name.to_owned(),
        }),
        _ => Ok(Directive::new(kind, "")),
    }
}

/// Parses a whole script,
/// skipping empty lines and comments.
///
/// # Errors
///
/// On the first line that fails [`parse_line`].
pub fn parse(script: &str) -> RenderResult<Vec<Directive>> {
    let mut directives = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
            continue;
        }
        directives.push(parse_line(idx + 1, line)?);
    }
    tracing::debug!("Parsed {} directives", directives.len());
    Ok(directives)
}

/// Whether `value` survives a trip through a script line.
fn is_writable(value: &str) -> bool {
    !value.is_empty() && !value.contains(['\n', '\r'])
}

/// Writes `directives` as a script that [`parse`] reads back.
///
/// # Errors
///
/// If a content directive has an empty value,
/// or one spanning more than a single line;
/// neither can be expressed in a script.
pub fn write(directives: &[Directive]) -> RenderResult<String> {
    let mut script = String::new();
    for directive in directives {
        if let Some(value) = directive.value() {
            if !is_writable(value) {
                return Err(Error::UnwritableValue {
                    directive: directive.kind().to_string(),
                    value: value.to_owned(),
                });
            }
        }
        writeln!(script, "{directive}")?;
    }
    Ok(script)
}

impl FromStr for Directive {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(1, line)
    }
}
