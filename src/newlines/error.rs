use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewlinesError {
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    #[error("{source_name}: {source}")]
    Io {
        source_name: String,
        source: io::Error,
    },

    #[error("{source_name}: input is not valid {encoding}")]
    Decode {
        source_name: String,
        encoding: &'static str,
    },

    #[error("{source_name}: converted text cannot be encoded as {encoding}")]
    Encode {
        source_name: String,
        encoding: &'static str,
    },

    #[error("{source_name}: writing {encoding} is not supported")]
    UnsupportedOutputEncoding {
        source_name: String,
        encoding: &'static str,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, NewlinesError>;
