mod completions;
mod convert;
mod init;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;
use init::InitCommand;
use svgjsx_convert::ConversionError;
use svgjsx_core::Extension;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for svgjsx_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Print invalid markup as a source diagnostic and exit; other errors are
/// handed back for eyre to report.
pub(crate) fn exit_on_diagnostic<T>(result: Result<T>) -> Result<T> {
    result.map_err(|e| match e.downcast::<ConversionError>() {
        Ok(diagnostic) => {
            eprintln!("{:?}", miette::Report::new(diagnostic));
            std::process::exit(1);
        }
        Err(e) => e,
    })
}

#[derive(Parser)]
#[command(name = "svgjsx")]
#[command(version)]
#[command(about = "Convert SVG files into React components")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Jsx(cmd) => cmd.run(Extension::Jsx),
            Commands::Tsx(cmd) => cmd.run(Extension::Tsx),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an SVG file into a JavaScript (.jsx) component
    Jsx(ConvertCommand),

    /// Convert an SVG file into a TypeScript (.tsx) component
    Tsx(ConvertCommand),

    /// Write a default svgjsx.toml to the current directory
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
