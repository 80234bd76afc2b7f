pub mod bin2hex;
pub mod cli;
pub mod logging;
pub mod newlines;

pub use bin2hex::{Bin2HexArgs, Bin2HexError, bin2hex};
pub use cli::{CliError, Parser, Result};
pub use newlines::{
    NewlinesArgs, NewlinesError, ReplaceMode, convert, convert_named, convert_newlines,
};
