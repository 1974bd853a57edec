//! The codec module holds the two compression codecs behind one contract.
//!
//! LZW compression happens in the following steps:
//! - Greedy longest-match scan: extend a candidate word until it falls off the
//!   dictionary, then emit the code of the longest known prefix.
//! - Dictionary growth: every miss inserts the full candidate, so repeated
//!   subsequences earn ever-longer entries. The decoder replays the same
//!   insertions from the codes alone, so the table itself is never transmitted.
//! - Variable-width packing: each codeword is written with exactly as many
//!   bits as the current dictionary size needs, finished by the reserved stop
//!   code and right-zero padding to a byte boundary.
//!
//! Decompression follows the inverse: read codewords at the mirrored width,
//! resolve them against the replayed dictionary, and stop at the stop code.
//!
//! RLE is the flat companion codec: maximal byte runs become fixed 5-byte
//! records with no bit-level packing at all.

pub mod dictionary;
pub mod lzw;
pub mod rle;

use crate::error::Error;

/// Contract shared by both codecs. `encode` is total over byte sequences;
/// `decode` fails on streams `encode` could not have produced.
pub trait Codec {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, Error>;
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, Error>;
}
