// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use cli::InitError;
use thiserror::Error;

mod cli;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to initialize the CLI tool: {0}")]
    Init(#[from] InitError),

    #[error("Failed to render: {0}")]
    Render(#[from] sqlrender::error::Error),
}

fn main() -> Result<(), CliError> {
    let invocation = cli::init()?;
    sqlrender::run(
        &invocation.options,
        &invocation.sources,
        &invocation.output,
    )?;
    Ok(())
}
