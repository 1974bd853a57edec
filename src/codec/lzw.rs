//! Lempel-Ziv-Welch codec over the byte alphabet.
//!
//! One classic variant: codes 1..=256 seed the single bytes, code 0 is the
//! reserved stop code, and codeword width starts at 9 bits and grows with the
//! dictionary. The packed stream is self-delimiting through the stop code
//! alone; there is no header, length prefix or magic.

use log::trace;

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::error::Error;

use super::dictionary::{Dictionary, Resolve, STOP_CODE};
use super::Codec;

pub struct Lzw;

impl Codec for Lzw {
    /// Greedy longest-match encoding. Each miss emits the code of the longest
    /// known prefix at the dictionary's current width, then inserts the full
    /// candidate so the next occurrence matches one byte further.
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        let mut dict = Dictionary::new();
        let mut packer = BitPacker::with_capacity(data.len());

        let mut input = data.iter().copied();
        if let Some(first) = input.next() {
            let mut word = vec![first];
            for c in input {
                word.push(c);
                if !dict.contains(&word) {
                    let prefix = &word[..word.len() - 1];
                    let code = dict
                        .code_of(prefix)
                        .expect("longest-match prefix is always a dictionary entry");
                    trace!("emit {:?} ({}) at {} bits", prefix, code, dict.nbits());
                    packer.push(code, dict.nbits())?;
                    dict.insert(std::mem::replace(&mut word, vec![c]))?;
                }
            }
            // The trailing word is always a known entry.
            let code = dict
                .code_of(&word)
                .expect("trailing word is always a dictionary entry");
            trace!("emit {:?} ({}) at {} bits", word, code, dict.nbits());
            packer.push(code, dict.nbits())?;
        }
        packer.push(STOP_CODE, dict.nbits())?;
        Ok(packer.into_bytes())
    }

    /// Mirrors the encoder's dictionary growth from the codes alone. The one
    /// sanctioned lookup miss is a reference to the entry the encoder created
    /// while emitting this very codeword; it is synthesized as the previous
    /// symbol extended by its own first byte.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        let mut dict = Dictionary::new();
        let mut reader = BitReader::new(data);
        let mut out: Vec<u8> = Vec::with_capacity(data.len() * 2);

        let mut nbits = dict.nbits();
        let mut previous: Option<Vec<u8>> = None;
        loop {
            let code = match reader.read(nbits) {
                Some(code) => code,
                // The encoder never mirrors the decoder's last insert, so its
                // stop code is one bit narrower than nbits whenever that
                // insert lands max_code exactly on a power of two minus one.
                // On a byte-aligned stream no padding absorbs the extra bit
                // and the read runs dry: an all-zero residue is that stop
                // code, anything else is a cut-off codeword.
                None => {
                    let residue = reader.remaining();
                    return match reader.read(residue as u8) {
                        Some(0) => Ok(out),
                        _ => Err(Error::TruncatedStream),
                    };
                }
            };
            if code == STOP_CODE {
                return Ok(out);
            }
            let symbol: Vec<u8> = match dict.resolve(code)? {
                Resolve::Found(symbol) => symbol.to_vec(),
                Resolve::Pending => match &previous {
                    Some(prev) => {
                        let mut symbol = Vec::with_capacity(prev.len() + 1);
                        symbol.extend_from_slice(prev);
                        symbol.push(prev[0]);
                        symbol
                    }
                    // A pending reference needs a previous symbol to build on.
                    None => return Err(Error::UnknownCode(code)),
                },
            };
            trace!("emit {:?} ({}) at {} bits", symbol, code, nbits);
            out.extend_from_slice(&symbol);

            if let Some(mut prev) = previous.take() {
                prev.push(symbol[0]);
                dict.insert(prev)?;
                // The decoder runs one insertion behind the encoder, so the
                // next codeword was sized as if this table were one larger.
                nbits = dict.nbits_next();
            }
            previous = Some(symbol);
        }
    }
}
