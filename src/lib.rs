//! Rust version of a classic two-codec stream compressor.
//!
//! Provides lossless compression and decompression of byte streams through
//! two independent codecs sharing one contract: Lempel-Ziv-Welch adaptive
//! dictionary coding (the interesting one, with variable-width codewords and
//! a table that encoder and decoder grow in lock-step) and run-length
//! encoding (a flat 5-byte record transform).
//!
//! Basic usage to compress stdin to stdout:
//!
//! `$> squish -e < notes.txt > notes.sq`
//!
//! and `squish -d < notes.sq` gets the original back. Pass `--rle` to use the
//! run-length codec instead.

pub mod bitstream;
pub mod codec;
pub mod error;
pub mod tools;
