// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The output sink refused a write;
    /// this is the only way rendering itself can fail.
    #[error("Failed to write rendered output: {0}")]
    SinkWrite(#[from] std::io::Error),

    #[error("Line {line}: Unknown directive '{name}'")]
    UnknownDirective { line: usize, name: String },

    #[error("Line {line}: Directive '{directive}' requires a value")]
    MissingValue { line: usize, directive: String },

    #[error("Line {line}: Directive '{directive}' does not take a value, but got '{value}'")]
    UnexpectedValue {
        line: usize,
        directive: String,
        value: String,
    },

    #[error("Directive '{directive}' with value {value:?} can not be written as a script line")]
    UnwritableValue { directive: String, value: String },

    #[error(transparent)]
    Format(#[from] std::fmt::Error),

    #[error("The script to render {0} does not seem to exist")]
    ScriptDoesNotExist(PathBuf),

    #[error("Error while reading {0}: {1}")]
    FailedToReadScript(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse script {0}: {1}")]
    InvalidScript(PathBuf, #[source] Box<Self>),

    #[error("Error while opening {0} for writing: {1}")]
    FailedToOpenOutput(PathBuf, #[source] std::io::Error),
}

pub type RenderResult<T> = std::result::Result<T, Error>;
