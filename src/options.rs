// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::DEFAULT_INDENTATION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Space(s) or tab(s) representing one level of indentation.
    pub indentation: String,
}

impl RenderOptions {
    /// Indents with `width` spaces per level.
    #[must_use]
    pub fn with_indent_width(width: u8) -> Self {
        Self {
            indentation: " ".repeat(width.into()),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION.to_string(),
        }
    }
}
