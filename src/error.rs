use crate::FloatWidth;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex input ({0})")]
    InvalidWidth(#[from] InvalidWidth),

    #[error("hex parse failure ({0})")]
    ParseFailure(#[from] ParseFailure),

    #[error("unrecognized directive: {0}")]
    InvalidDirective(String),

    #[error("CBOR error ({0})")]
    Cbor(#[from] dcbor::Error),
}

/// Why a hex string could not be classified as a 32- or 64-bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWidth {
    #[error("no hex digits")]
    Empty,

    #[error("expected at most 16 hex digits, got {0}")]
    Oversized(usize),

    #[error("malformed 0x prefix at index {0}")]
    MalformedPrefix(usize),

    #[error("non-hex character {ch:?} at index {index}")]
    NonHex { ch: char, index: usize },
}

/// Decoder-side consistency failures. Unreachable for input that `classify`
/// accepted and whose width is passed through unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseFailure {
    #[error("{0}")]
    Hex(#[from] hex::FromHexError),

    #[error("{digits} hex digits do not describe a {width} pattern")]
    WidthMismatch { digits: usize, width: FloatWidth },
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self { Self::ParseFailure(err.into()) }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}

impl From<Error> for dcbor::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Cbor(err) => err,
            _ => dcbor::Error::msg(err),
        }
    }
}
