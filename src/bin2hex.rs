//! Dumps a binary file as one hexadecimal 32-bit little-endian word per line,
//! the layout `$readmemh` expects.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::debug;

pub const WORD_SIZE: usize = 4;

#[derive(Debug, Parser)]
pub struct Bin2HexArgs {
    #[arg(index = 1, help = "Binary file to dump")]
    pub input: PathBuf,

    #[arg(index = 2, help = "Hex file to write, one word per line")]
    pub output: PathBuf,
}

#[derive(Error, Debug)]
pub enum Bin2HexError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Bin2HexError>;

pub fn bin2hex(args: Bin2HexArgs) -> Result<()> {
    let words = dump_file(&args.input, &args.output)?;
    debug!(
        input = %args.input.display(),
        output = %args.output.display(),
        words,
        "dumped words"
    );

    Ok(())
}

/// Reads `input` whole and writes its words to `output`, returning the
/// number of lines written.
pub fn dump_file(input: &Path, output: &Path) -> Result<usize> {
    let data = fs::read(input).map_err(|source| Bin2HexError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let write_error = |source| Bin2HexError::Write {
        path: output.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(output).map_err(write_error)?);
    let count = write_words(&data, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(count)
}

/// Zero-pads `data` at the end up to a whole number of words.
pub fn pad_to_word(data: &[u8]) -> Cow<'_, [u8]> {
    let remainder = data.len() % WORD_SIZE;
    if remainder == 0 {
        return Cow::Borrowed(data);
    }

    let mut padded = Vec::with_capacity(data.len() + WORD_SIZE - remainder);
    padded.extend_from_slice(data);
    padded.resize(data.len() + WORD_SIZE - remainder, 0);
    Cow::Owned(padded)
}

/// Little-endian words of `data`, padded first.
pub fn words(data: &[u8]) -> impl Iterator<Item = u32> {
    let padded = pad_to_word(data);
    let count = padded.len() / WORD_SIZE;

    (0..count).map(move |index| {
        let start = index * WORD_SIZE;
        let mut word = [0; WORD_SIZE];
        word.copy_from_slice(&padded[start..start + WORD_SIZE]);
        u32::from_le_bytes(word)
    })
}

pub fn write_words<W: Write>(data: &[u8], writer: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for word in words(data) {
        writeln!(writer, "{:08x}", word)?;
        count += 1;
    }

    Ok(count)
}
