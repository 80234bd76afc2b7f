use std::path::PathBuf;

use clap::Parser;

use super::encoding::DEFAULT_ENCODING;
use super::mode::ReplaceMode;

#[derive(Debug, Parser)]
pub struct NewlinesArgs {
    #[arg(
        index = 1,
        help = "Files to convert, standard input is converted to standard output when not specified"
    )]
    pub files: Vec<PathBuf>,

    #[arg(short, long, help = "Overwrite each file with its converted content")]
    pub in_place: bool,

    #[arg(
        long,
        help = "Which literal \\n sequences to replace",
        default_value_t = ReplaceMode::All
    )]
    pub mode: ReplaceMode,

    #[arg(
        long,
        help = "Encoding used to read and rewrite files",
        default_value = DEFAULT_ENCODING
    )]
    pub encoding: String,
}
