// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// The text written once per level of indentation,
/// if nothing else is configured.
pub const DEFAULT_INDENTATION: &str = "  ";

/// Script and output file name that stands for stdin or stdout respectively.
pub const STD_STREAM: &str = "-";
