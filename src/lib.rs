// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Renders a stream of classified SQL tokens
//! (keywords, identifiers, symbols, constants
//! and whitespace/line/indentation directives)
//! into well-spaced, indented text.
//!
//! The upstream formatter decides which tokens to emit, and in which order;
//! this crate only decides, token by token,
//! whether a space goes in between,
//! and where indentation is written.

pub mod constants;
pub mod context;
pub mod directive;
pub mod error;
pub mod options;
pub mod renderer;
pub mod script;
pub mod token;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use git_version::git_version;

use crate::constants::STD_STREAM;
use crate::directive::{Directive, replay};
use crate::error::{Error, RenderResult};
use crate::options::RenderOptions;
use crate::renderer::{Renderer, TextRenderer};

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// Renders `directives` as one document into `output`.
///
/// # Errors
///
/// If writing to `output` fails.
pub fn render<W: Write>(
    directives: &[Directive],
    options: &RenderOptions,
    output: W,
) -> RenderResult<W> {
    let mut renderer = TextRenderer::with_options(output, options);
    replay(directives, &mut renderer);
    renderer.finish()
}

/// Renders `directives` as one document into a new string.
///
/// # Errors
///
/// Never, in practice;
/// writing to memory only fails if no more memory can be allocated.
pub fn render_to_string(directives: &[Directive], options: &RenderOptions) -> RenderResult<String> {
    let bytes = render(directives, options, Vec::new())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_std_stream(path: &Path) -> bool {
    path == Path::new(STD_STREAM)
}

fn read_script(source: &Path) -> RenderResult<String> {
    let mut script = String::new();
    if is_std_stream(source) {
        io::stdin()
            .read_to_string(&mut script)
            .map_err(|err| Error::FailedToReadScript(source.to_path_buf(), err))?;
    } else if source.is_file() {
        script = std::fs::read_to_string(source)
            .map_err(|err| Error::FailedToReadScript(source.to_path_buf(), err))?;
    } else {
        return Err(Error::ScriptDoesNotExist(source.to_path_buf()));
    }
    Ok(script)
}

fn open_output(output: &Path) -> RenderResult<Box<dyn Write>> {
    if is_std_stream(output) {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file =
        File::create(output).map_err(|err| Error::FailedToOpenOutput(output.to_path_buf(), err))?;
    Ok(Box::new(file))
}

/// Renders each of the `sources` scripts as a separate document,
/// one after the other, into `output`.
///
/// Each document that produced any output ends with a line break.
/// Both sources and output may be [`STD_STREAM`].
///
/// # Errors
///
/// If a script can not be read or parsed,
/// or if writing the output fails.
pub fn run(options: &RenderOptions, sources: &[PathBuf], output: &Path) -> RenderResult<()> {
    let mut sink = BufWriter::new(open_output(output)?);
    for source in sources {
        tracing::info!("Rendering {} ...", source.display());
        let text = read_script(source)?;
        let directives = script::parse(&text)
            .map_err(|err| Error::InvalidScript(source.clone(), Box::new(err)))?;

        let mut renderer = TextRenderer::with_options(&mut sink, options);
        replay(&directives, &mut renderer);
        if renderer.has_written() {
            renderer.new_line();
        }
        renderer.finish()?;
    }
    sink.flush()?;
    Ok(())
}
