// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::context::Context;
use crate::error::{Error, RenderResult};
use crate::options::RenderOptions;
use crate::token::{RenderToken, TokenKind};

/// Receives a document as a stream of classified tokens
/// and control directives, in document order.
///
/// None of the operations fail at the call site;
/// implementations that can fail
/// record the failure and expose it in their own way
/// (see [`TextRenderer::fault`]).
pub trait Renderer {
    fn keyword(&mut self, val: &str);
    fn identifier(&mut self, val: &str);
    fn symbol(&mut self, val: &str);
    fn constant(&mut self, val: &str);
    /// Forces a single space,
    /// regardless of what the spacing rules would decide.
    fn space(&mut self);
    /// Suppresses the space before the next token.
    fn refuse_space(&mut self);
    /// Ends the current line;
    /// consecutive calls collapse into one.
    fn new_line(&mut self);
    fn indent(&mut self);
    fn unindent(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn keyword(&mut self, val: &str) {
        (**self).keyword(val);
    }

    fn identifier(&mut self, val: &str) {
        (**self).identifier(val);
    }

    fn symbol(&mut self, val: &str) {
        (**self).symbol(val);
    }

    fn constant(&mut self, val: &str) {
        (**self).constant(val);
    }

    fn space(&mut self) {
        (**self).space();
    }

    fn refuse_space(&mut self) {
        (**self).refuse_space();
    }

    fn new_line(&mut self) {
        (**self).new_line();
    }

    fn indent(&mut self) {
        (**self).indent();
    }

    fn unindent(&mut self) {
        (**self).unindent();
    }
}

/// Renders tokens as plain text into an [`io::Write`] sink.
///
/// The first failing write is kept as the fault of this renderer;
/// from then on, every operation is a no-op.
/// Check [`Self::fault`] or call [`Self::finish`] once done emitting.
pub struct TextRenderer<W: Write> {
    context: Context<W>,
    indentation: String,
    fault: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer indenting with the default indentation unit.
    pub fn new(output: W) -> Self {
        Self::with_options(output, &RenderOptions::default())
    }

    pub fn with_options(output: W, options: &RenderOptions) -> Self {
        tracing::debug!(
            "Creating text renderer with indentation {:?}",
            options.indentation
        );
        Self {
            context: Context::new(output),
            indentation: options.indentation.clone(),
            fault: None,
        }
    }

    /// The first write failure of the sink, if any.
    #[must_use]
    pub const fn fault(&self) -> Option<&io::Error> {
        self.fault.as_ref()
    }

    #[must_use]
    pub const fn indent_level(&self) -> isize {
        self.context.indent_level
    }

    /// Whether anything was written to the sink so far.
    #[must_use]
    pub const fn has_written(&self) -> bool {
        self.context.written
    }

    /// Hands back the sink.
    ///
    /// # Errors
    ///
    /// Fails with the first write failure that occurred while rendering,
    /// if there was one.
    pub fn finish(self) -> RenderResult<W> {
        match self.fault {
            Some(err) => Err(Error::SinkWrite(err)),
            None => {
                tracing::debug!("Finished rendering");
                Ok(self.context.output)
            }
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            tracing::warn!("Output sink failed; all further output is dropped: {err}");
            self.fault = Some(err);
        }
    }

    fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.context.indent_repeats() {
            self.context.write(self.indentation.as_bytes())?;
        }
        Ok(())
    }

    fn try_text(&mut self, kind: TokenKind, val: &str) -> io::Result<()> {
        if !self.context.line_indented {
            self.write_indent()?;
            self.context.line_indented = true;
        }

        let token = RenderToken::new(kind, val);

        if self.context.new_line {
            self.context.new_line = false;
        } else if self
            .context
            .last_token
            .as_ref()
            .is_some_and(|last| last.space_between(&token))
        {
            self.context.write(b" ")?;
        }

        let written = self.context.write(val.as_bytes());
        self.context.last_token = Some(token);
        written
    }

    fn text(&mut self, kind: TokenKind, val: &str) {
        if self.fault.is_some() {
            return;
        }
        let result = self.try_text(kind, val);
        self.record(result);
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn keyword(&mut self, val: &str) {
        self.text(TokenKind::Keyword, val);
    }

    fn identifier(&mut self, val: &str) {
        self.text(TokenKind::Identifier, val);
    }

    fn symbol(&mut self, val: &str) {
        self.text(TokenKind::Symbol, val);
    }

    fn constant(&mut self, val: &str) {
        self.text(TokenKind::Constant, val);
    }

    fn space(&mut self) {
        if self.fault.is_some() {
            return;
        }
        self.context.last_token = Some(RenderToken::control(TokenKind::Space));
        let result = self.context.write(b" ");
        self.record(result);
    }

    fn refuse_space(&mut self) {
        if self.fault.is_some() {
            return;
        }
        self.context.last_token = Some(RenderToken::control(TokenKind::RefuseSpace));
    }

    fn new_line(&mut self) {
        if self.fault.is_some() || self.context.new_line {
            return;
        }
        self.context.new_line = true;
        self.context.last_token = Some(RenderToken::control(TokenKind::NewLine));
        let result = self.context.write(b"\n");
        if result.is_ok() {
            self.context.line_indented = false;
        }
        self.record(result);
    }

    fn indent(&mut self) {
        if self.fault.is_some() {
            return;
        }
        self.context.indent_level += 1;
    }

    fn unindent(&mut self) {
        if self.fault.is_some() {
            return;
        }
        self.context.indent_level -= 1;
        if self.context.indent_level < 0 && !self.context.warned_negative_indent {
            self.context.warned_negative_indent = true;
            tracing::warn!("More unindents than indents; no indentation is written below level 0");
        }
    }
}
