pub use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::{Bin2HexArgs, Bin2HexError, NewlinesArgs, NewlinesError};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(
    name = "fwt",
    version = "0.1",
    about = "firmware text / binary conversion tools"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Print diagnostics to standard error")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace literal \n sequences with real line breaks
    Newlines(NewlinesArgs),
    /// Dump a binary file as one 32-bit little-endian hex word per line
    Bin2hex(Bin2HexArgs),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Newlines(#[from] NewlinesError),

    #[error(transparent)]
    Bin2Hex(#[from] Bin2HexError),
}
