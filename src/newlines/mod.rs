//! Converts literal `\n` escape sequences into real line breaks.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, info};

mod args;
mod convert;
mod encoding;
mod error;
mod mode;

pub use args::NewlinesArgs;
pub use convert::{LITERAL_NEWLINE, convert, convert_named};
pub use error::{NewlinesError, Result};
pub use mode::ReplaceMode;

const STDIN_NAME: &str = "<stdin>";

pub fn convert_newlines(args: NewlinesArgs) -> Result<()> {
    let encoding = encoding::lookup(&args.encoding)?;
    debug!(mode = %args.mode, encoding = encoding.name(), "converting literal newlines");

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if args.files.is_empty() {
        convert_stdin(&args, encoding, &mut writer)?;
    } else {
        convert_files(&args, encoding, &mut writer)?;
    }
    writer.flush()?;

    Ok(())
}

fn convert_stdin<W: Write>(
    args: &NewlinesArgs,
    encoding: &'static Encoding,
    writer: &mut W,
) -> Result<()> {
    let mut bytes = vec![];
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|source| NewlinesError::Io {
            source_name: STDIN_NAME.to_string(),
            source,
        })?;

    convert_reader_bytes(&bytes, STDIN_NAME, args.mode, encoding, writer)
}

fn convert_reader_bytes<W: Write>(
    bytes: &[u8],
    source_name: &str,
    mode: ReplaceMode,
    encoding: &'static Encoding,
    writer: &mut W,
) -> Result<()> {
    let decoded = encoding::decode(bytes, encoding, source_name)?;
    let converted = convert(&decoded.text, mode);
    writer.write_all(converted.as_bytes())?;

    Ok(())
}

// stops at the first file that fails, later files are left untouched
fn convert_files<W: Write>(
    args: &NewlinesArgs,
    encoding: &'static Encoding,
    writer: &mut W,
) -> Result<()> {
    for file_path in &args.files {
        if args.in_place {
            convert_file_in_place(file_path, args.mode, encoding)?;
        } else {
            let bytes = read_file(file_path)?;
            let source_name = file_path.display().to_string();
            convert_reader_bytes(&bytes, &source_name, args.mode, encoding, writer)?;
        }
    }

    Ok(())
}

/// Rewrites `file_path` with its converted content, keeping its encoding and
/// UTF-16 byte order mark.
pub fn convert_file_in_place(
    file_path: &Path,
    mode: ReplaceMode,
    encoding: &'static Encoding,
) -> Result<()> {
    let source_name = file_path.display().to_string();
    let bytes = read_file(file_path)?;
    let decoded = encoding::decode(&bytes, encoding, &source_name)?;
    let converted = convert(&decoded.text, mode);
    let output = encoding::encode(&converted, decoded.encoding, decoded.bom, &source_name)?;

    fs::write(file_path, &output).map_err(|source| NewlinesError::Io {
        source_name: source_name.clone(),
        source,
    })?;
    info!(file = %source_name, bytes = output.len(), "rewrote file in place");

    Ok(())
}

fn read_file(file_path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(file_path).map_err(|source| NewlinesError::Io {
        source_name: file_path.display().to_string(),
        source,
    })?;
    debug!(file = %file_path.display(), bytes = bytes.len(), "read file");

    Ok(bytes)
}
