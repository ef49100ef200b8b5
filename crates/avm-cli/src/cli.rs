//! CLI argument definitions for the AVM subject category tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "avm",
    version,
    about = "Resolve press release subject categories to AVM taxonomy codes",
    long_about = "Resolve informal press release subject categories to AVM subject\n\
                  category numbers and words.\n\n\
                  Without a subcommand, processes subcat_in.dat in the working directory\n\
                  against hs2avm_number.dat and avm_number2avm_word.dat, appends new\n\
                  objects to obj_dict.dat and writes a de-duplicated subcat_out.dat.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the category -> number -> word mappings.
    Categories(CategoriesArgs),

    /// Write the default reference tables and an empty registry.
    Init(InitArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Working directory holding the input and reference files (default: current directory).
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Input batch file (default: subcat_in.dat).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Category -> number table (default: hs2avm_number.dat).
    #[arg(long = "number-table", value_name = "PATH")]
    pub number_table: Option<PathBuf>,

    /// Number -> word table (default: avm_number2avm_word.dat).
    #[arg(long = "word-table", value_name = "PATH")]
    pub word_table: Option<PathBuf>,

    /// Object registry (default: obj_dict.dat).
    #[arg(long = "registry", value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Output table (default: subcat_out.dat).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip records with unresolvable categories instead of aborting.
    ///
    /// By default the first unresolvable category stops the run before
    /// anything is written. With this flag the failing records are left out
    /// of the registry and output and listed in the summary.
    #[arg(long = "skip-unresolved")]
    pub skip_unresolved: bool,

    /// Resolve and report without touching the registry or output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Working directory holding the reference tables (default: current directory).
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// List the built-in default tables even when table files exist.
    #[arg(long = "defaults")]
    pub defaults: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory).
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
