//! The bitstream module forms the bit-level I/O subsystem for the squish codecs.
//!
//! LZW codewords have no fixed width: they start at 9 bits and grow with the
//! dictionary. The BitPacker concatenates such variable-width values MSB-first
//! into a byte buffer, and the BitReader walks a byte buffer as one contiguous
//! bit sequence, handing back values of whatever width the decoder asks for.
//!
//! This subsystem is designed to interface with the codec module. It has not
//! been generalized for wider use.

pub mod bitpacker;
pub mod bitreader;
