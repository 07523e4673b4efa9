// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, sync::LazyLock};

use clap::{Arg, ArgAction, Command, ValueHint, command, crate_name, value_parser};
use cli_utils::logging;
use const_format::formatcp;
use sqlrender::constants::STD_STREAM;
use sqlrender::options::RenderOptions;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const A_L_INDENTATION: &str = "indentation";
pub const A_S_INDENTATION: char = 'i';
pub const A_L_OUTPUT: &str = "output";
pub const A_S_OUTPUT: char = 'O';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_QUIET: char = 'q';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERSION: &str = "version";
pub const A_S_VERSION: char = 'V';
pub const A_L_SRC: &str = "src";

pub const DEFAULT_INDENTATION: u8 = 2;
static DEFAULT_INDENTATION_STR: LazyLock<String> =
    LazyLock::new(|| DEFAULT_INDENTATION.to_string());

fn arg_indentation() -> Arg {
    Arg::new(A_L_INDENTATION)
        .help("Number of spaces per level of indentation")
        .num_args(1)
        .short(A_S_INDENTATION)
        .long(A_L_INDENTATION)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u8).range(1..))
        .default_value(DEFAULT_INDENTATION_STR.as_str())
}

fn arg_output() -> Arg {
    Arg::new(A_L_OUTPUT)
        .help(formatcp!(
            "the file to write the rendered text to; '{STD_STREAM}' for stdout"
        ))
        .num_args(1)
        .short(A_S_OUTPUT)
        .long(A_L_OUTPUT)
        .action(ArgAction::Set)
        .value_hint(ValueHint::FilePath)
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .default_value(STD_STREAM)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stdout")
        .long_help("Minimize or suppress output to stdout, and only shows log output on stderr.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_src() -> Arg {
    Arg::new(A_L_SRC)
        .help(formatcp!(
            "Directive script(s) to render, one document each; '{STD_STREAM}' for stdin"
        ))
        .num_args(1..)
        .value_name("SCRIPT")
        .value_hint(ValueHint::FilePath)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set)
        .default_value(STD_STREAM)
}

fn args_matcher() -> Command {
    command!()
        .about("Renders SQL token directive scripts as text")
        .long_about(
            "Takes scripts of classified SQL tokens \
(one directive per line, e.g. `keyword SELECT`, `symbol ,`, `newline`, `indent`) \
and renders them as well-spaced, indented text. \
 \
The spacing between two tokens is decided by looking at those two tokens only; \
`space` and `refuse-space` directives override that decision.",
        )
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_indentation())
        .arg(arg_output())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_version())
        .arg(arg_src())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", sqlrender::VERSION);
    std::process::exit(0);
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init logging system: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change the logging level: {0}")]
    LogChangeLevel(#[from] tracing_subscriber::reload::Error),
}

/// What the command line asks us to do.
pub struct Invocation {
    pub options: RenderOptions,
    pub sources: Vec<PathBuf>,
    pub output: PathBuf,
}

pub fn init() -> Result<Invocation, InitError> {
    let log_reload_handle = logging::setup(crate_name!())?;
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let log_level = if verbose {
        LevelFilter::TRACE
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let indentation_spaces = args
        .get_one::<u8>(A_L_INDENTATION)
        .copied()
        .unwrap_or(DEFAULT_INDENTATION);
    let output = args
        .get_one::<PathBuf>(A_L_OUTPUT)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(STD_STREAM));
    let sources: Vec<PathBuf> = args
        .get_many::<PathBuf>(A_L_SRC)
        .map(|sources| sources.cloned().collect())
        .unwrap_or_default();

    Ok(Invocation {
        options: RenderOptions::with_indent_width(indentation_spaces),
        sources,
        output,
    })
}
