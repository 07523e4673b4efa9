// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::renderer::Renderer;
use crate::token::TokenKind;

/// One call on a [`Renderer`], as a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directive {
    Keyword(String),
    Identifier(String),
    Symbol(String),
    Constant(String),
    Space,
    RefuseSpace,
    NewLine,
    Indent,
    Unindent,
}

impl Directive {
    /// Creates the directive for a token kind,
    /// dropping `value` for control kinds.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        match kind {
            TokenKind::Keyword => Self::Keyword(value.into()),
            TokenKind::Identifier => Self::Identifier(value.into()),
            TokenKind::Symbol => Self::Symbol(value.into()),
            TokenKind::Constant => Self::Constant(value.into()),
            TokenKind::Space => Self::Space,
            TokenKind::RefuseSpace => Self::RefuseSpace,
            TokenKind::NewLine => Self::NewLine,
            TokenKind::Indent => Self::Indent,
            TokenKind::Unindent => Self::Unindent,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Keyword(_) => TokenKind::Keyword,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Symbol(_) => TokenKind::Symbol,
            Self::Constant(_) => TokenKind::Constant,
            Self::Space => TokenKind::Space,
            Self::RefuseSpace => TokenKind::RefuseSpace,
            Self::NewLine => TokenKind::NewLine,
            Self::Indent => TokenKind::Indent,
            Self::Unindent => TokenKind::Unindent,
        }
    }

    /// The literal text, for content directives.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Keyword(val) | Self::Identifier(val) | Self::Symbol(val) | Self::Constant(val) => {
                Some(val)
            }
            Self::Space | Self::RefuseSpace | Self::NewLine | Self::Indent | Self::Unindent => {
                None
            }
        }
    }

    /// Issues the matching call on `renderer`.
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        tracing::trace!("{self}");
        match self {
            Self::Keyword(val) => renderer.keyword(val),
            Self::Identifier(val) => renderer.identifier(val),
            Self::Symbol(val) => renderer.symbol(val),
            Self::Constant(val) => renderer.constant(val),
            Self::Space => renderer.space(),
            Self::RefuseSpace => renderer.refuse_space(),
            Self::NewLine => renderer.new_line(),
            Self::Indent => renderer.indent(),
            Self::Unindent => renderer.unindent(),
        }
    }
}

/// Applies all `directives` to `renderer`, in order.
pub fn replay<'a, I, R>(directives: I, renderer: &mut R)
where
    I: IntoIterator<Item = &'a Directive>,
    R: Renderer + ?Sized,
{
    for directive in directives {
        directive.apply(renderer);
    }
}

/// Records the calls instead of rendering them,
/// so a producer can be inspected or its output replayed later.
impl Renderer for Vec<Directive> {
    fn keyword(&mut self, val: &str) {
        self.push(Directive::Keyword(val.to_owned()));
    }

    fn identifier(&mut self, val: &str) {
        self.push(Directive::Identifier(val.to_owned()));
    }

    fn symbol(&mut self, val: &str) {
        self.push(Directive::Symbol(val.to_owned()));
    }

    fn constant(&mut self, val: &str) {
        self.push(Directive::Constant(val.to_owned()));
    }

    fn space(&mut self) {
        self.push(Directive::Space);
    }

    fn refuse_space(&mut self) {
        self.push(Directive::RefuseSpace);
    }

    fn new_line(&mut self) {
        self.push(Directive::NewLine);
    }

    fn indent(&mut self) {
        self.push(Directive::Indent);
    }

    fn unindent(&mut self) {
        self.push(Directive::Unindent);
    }
}

/// Writes the directive as one line of a script
/// (without the line ending).
impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(val) => write!(f, "{} {val}", self.kind()),
            None => write!(f, "{}", self.kind()),
        }
    }
}
