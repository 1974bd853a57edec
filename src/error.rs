//! Error types shared by the LZW and RLE codecs.
//!
//! Two classes of failure exist. A value handed to the bit packer that does
//! not fit its declared width is an internal defect of the encoder, not
//! something user input can trigger. Everything else is a corrupt-stream
//! condition raised by the decoder, which aborts immediately with no partial
//! output.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A codeword was wider than the bit width it was declared with.
    ValueTooWide { value: usize, width: u8 },
    /// The stream ended in the middle of a codeword or record.
    TruncatedStream,
    /// The stream referenced a code the dictionary never assigned.
    UnknownCode(usize),
    /// The stream implied a dictionary entry that already exists.
    DuplicateEntry,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ValueTooWide { value, width } => {
                write!(f, "value {} does not fit in {} bits", value, width)
            }
            Error::TruncatedStream => write!(f, "unexpected end of compressed stream"),
            Error::UnknownCode(code) => write!(f, "stream referenced unknown code {}", code),
            Error::DuplicateEntry => write!(f, "stream implied a duplicate dictionary entry"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
