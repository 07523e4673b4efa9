// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::token::RenderToken;

/// Current state of the renderer.
pub struct Context<W: Write> {
    /// The level of indentation
    /// (**not** measured in spaces).
    ///
    /// Unbalanced unindents may take this below zero,
    /// in which case no indentation is written at all.
    pub indent_level: isize,
    /// Whether the indentation of the current line was written already.
    pub line_indented: bool,
    /// Whether the last thing written was a line break.
    pub new_line: bool,
    /// The previously emitted unit;
    /// `None` before the first one.
    pub last_token: Option<RenderToken>,
    /// Whether any bytes made it into `output` yet.
    pub written: bool,
    /// Whether unbalanced unindents were reported already.
    pub warned_negative_indent: bool,
    pub output: W,
}

impl<W: Write> Context<W> {
    pub const fn new(output: W) -> Self {
        Self {
            indent_level: 0,
            line_indented: false,
            new_line: false,
            last_token: None,
            written: false,
            warned_negative_indent: false,
            output,
        }
    }

    /// How many indentation units go in front of the current line.
    #[must_use]
    pub fn indent_repeats(&self) -> usize {
        usize::try_from(self.indent_level).unwrap_or(0)
    }

    pub fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.write_all(bytes)?;
        if !bytes.is_empty() {
            self.written = true;
        }
        Ok(())
    }
}
