// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! The token model:
//! what kinds of units a renderer receives,
//! and whether two adjacent units need a space between them.

use std::fmt;

/// The closed set of unit kinds a renderer deals with.
///
/// [`Self::Keyword`], [`Self::Identifier`], [`Self::Symbol`] and [`Self::Constant`]
/// carry literal text;
/// all the others are control directives without a value of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Symbol,
    Constant,
    Space,
    RefuseSpace,
    NewLine,
    Indent,
    Unindent,
}

impl TokenKind {
    /// Whether tokens of this kind carry a literal value.
    #[must_use]
    pub const fn is_content(self) -> bool {
        match self {
            Self::Keyword | Self::Identifier | Self::Symbol | Self::Constant => true,
            Self::Space | Self::RefuseSpace | Self::NewLine | Self::Indent | Self::Unindent => {
                false
            }
        }
    }

    /// The name used for this kind in directive scripts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Symbol => "symbol",
            Self::Constant => "constant",
            Self::Space => "space",
            Self::RefuseSpace => "refuse-space",
            Self::NewLine => "newline",
            Self::Indent => "indent",
            Self::Unindent => "unindent",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit as it was last emitted,
/// kept around only to decide the spacing before the next one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderToken {
    pub kind: TokenKind,
    /// The literal text;
    /// empty for control kinds.
    pub value: String,
}

impl RenderToken {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// A token of a control kind, carrying no value.
    #[must_use]
    pub const fn control(kind: TokenKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    /// Decides whether a single space has to be written
    /// between `self` (the previously emitted unit)
    /// and `right` (the unit about to be emitted).
    ///
    /// This only ever looks at the two tokens;
    /// it knows nothing about the grammar around them.
    #[must_use]
    pub fn space_between(&self, right: &Self) -> bool {
        match self.kind {
            TokenKind::RefuseSpace => false,
            TokenKind::Keyword | TokenKind::Identifier | TokenKind::Constant => {
                match right.kind {
                    TokenKind::Keyword | TokenKind::Identifier | TokenKind::Constant => true,
                    TokenKind::Symbol => !hugs_preceding_word(&right.value),
                    TokenKind::Space
                    | TokenKind::RefuseSpace
                    | TokenKind::NewLine
                    | TokenKind::Indent
                    | TokenKind::Unindent => false,
                }
            }
            TokenKind::Symbol => {
                if binds_following(&self.value) || right.kind == TokenKind::NewLine {
                    return false;
                }
                if self.value == "," {
                    return true;
                }
                !(right.kind == TokenKind::Symbol && hugs_preceding_symbol(&right.value))
            }
            TokenKind::Space
            | TokenKind::NewLine
            | TokenKind::Indent
            | TokenKind::Unindent => false,
        }
    }
}

/// Symbols that attach directly to a keyword, identifier or constant before them.
fn hugs_preceding_word(symbol: &str) -> bool {
    matches!(symbol, "[" | "(" | "]" | ")" | "." | "," | "::" | ":")
}

/// Symbols that never get a space after them.
fn binds_following(symbol: &str) -> bool {
    matches!(symbol, "." | "(" | "[" | "::" | ":")
}

/// Symbols that attach directly to a symbol before them.
fn hugs_preceding_symbol(symbol: &str) -> bool {
    matches!(symbol, "." | "(" | "[" | "::" | ")" | "]" | "," | ":")
}

impl fmt::Display for RenderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_content() {
            write!(f, "{} {}", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
