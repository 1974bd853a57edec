//! The LZW code table: a bidirectional, monotonically growing map between
//! byte sequences and integer codes.
//!
//! Both directions are kept consistent solely through [`Dictionary::insert`];
//! no other mutator exists. The encoder and decoder each build their own
//! instance from the same seed and grow it in lock-step, which is what lets
//! the stream omit the table entirely.

use rustc_hash::FxHashMap;

use crate::error::Error;

/// The reserved end-of-stream code. Never bound to a symbol.
pub const STOP_CODE: usize = 0;

/// Outcome of resolving a code on the decode path. `Pending` is the one
/// sanctioned miss: the code the encoder assigned on the very insertion this
/// codeword triggered, which the decoder has not mirrored yet.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolve<'a> {
    Found(&'a [u8]),
    Pending,
}

pub struct Dictionary {
    forward: FxHashMap<Vec<u8>, usize>,
    reverse: FxHashMap<usize, Vec<u8>>,
    max_code: usize,
}

impl Dictionary {
    /// Seed with the 256 single-byte symbols at codes 1..=256, in byte-value
    /// order. Code 0 stays reserved for the stop code.
    pub fn new() -> Self {
        let mut forward = FxHashMap::default();
        let mut reverse = FxHashMap::default();
        for byte in 0..=255_u8 {
            let code = byte as usize + 1;
            forward.insert(vec![byte], code);
            reverse.insert(code, vec![byte]);
        }
        Self {
            forward,
            reverse,
            max_code: 256,
        }
    }

    /// Highest assigned code.
    pub fn max_code(&self) -> usize {
        self.max_code
    }

    /// Bits needed to represent `n`, i.e. ceil(log2(n + 1)).
    fn bits_for(n: usize) -> u8 {
        (usize::BITS - n.leading_zeros()) as u8
    }

    /// Width of the next codeword given the current table size. 9 for a
    /// freshly seeded table.
    pub fn nbits(&self) -> u8 {
        Self::bits_for(self.max_code)
    }

    /// Width as if one more entry were already inserted. The decoder runs one
    /// insertion behind the encoder, so this is the width it must read the
    /// next codeword at.
    pub fn nbits_next(&self) -> u8 {
        Self::bits_for(self.max_code + 1)
    }

    /// Assign the next consecutive code to `symbol` in both directions.
    /// Fails if the symbol is already present, which on the decode path means
    /// the stream is corrupt.
    pub fn insert(&mut self, symbol: Vec<u8>) -> Result<usize, Error> {
        if self.forward.contains_key(&symbol) {
            return Err(Error::DuplicateEntry);
        }
        let code = self.max_code + 1;
        self.forward.insert(symbol.clone(), code);
        self.reverse.insert(code, symbol);
        self.max_code = code;
        Ok(code)
    }

    pub fn contains(&self, symbol: &[u8]) -> bool {
        self.forward.contains_key(symbol)
    }

    pub fn code_of(&self, symbol: &[u8]) -> Option<usize> {
        self.forward.get(symbol).copied()
    }

    /// Resolve a code read off the stream. Exactly one miss is legitimate:
    /// `max_code + 1`, the entry the encoder inserted while emitting this
    /// codeword. Anything else unknown is a corrupt stream.
    pub fn resolve(&self, code: usize) -> Result<Resolve<'_>, Error> {
        match self.reverse.get(&code) {
            Some(symbol) => Ok(Resolve::Found(symbol)),
            None if code == self.max_code + 1 => Ok(Resolve::Pending),
            None => Err(Error::UnknownCode(code)),
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{Dictionary, Resolve};
    use crate::error::Error;

    #[test]
    fn seeded_alphabet() {
        let dict = Dictionary::new();
        assert_eq!(dict.max_code(), 256);
        assert_eq!(dict.code_of(&[0]), Some(1));
        assert_eq!(dict.code_of(&[b'a']), Some(98));
        assert_eq!(dict.code_of(&[255]), Some(256));
        assert_eq!(dict.nbits(), 9);
    }

    #[test]
    fn codes_are_consecutive() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.insert(b"aa".to_vec()), Ok(257));
        assert_eq!(dict.insert(b"ab".to_vec()), Ok(258));
        assert_eq!(dict.code_of(b"aa"), Some(257));
        assert_eq!(dict.max_code(), 258);
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut dict = Dictionary::new();
        dict.insert(b"aa".to_vec()).unwrap();
        assert_eq!(dict.insert(b"aa".to_vec()), Err(Error::DuplicateEntry));
        // A failed insert must not burn a code
        assert_eq!(dict.insert(b"ab".to_vec()), Ok(258));
    }

    #[test]
    fn resolve_hits_pending_and_misses() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.resolve(98), Ok(Resolve::Found(&b"a"[..])));
        assert_eq!(dict.resolve(257), Ok(Resolve::Pending));
        assert_eq!(dict.resolve(300), Err(Error::UnknownCode(300)));
        dict.insert(b"aa".to_vec()).unwrap();
        assert_eq!(dict.resolve(257), Ok(Resolve::Found(&b"aa"[..])));
        assert_eq!(dict.resolve(258), Ok(Resolve::Pending));
    }

    #[test]
    fn width_grows_at_power_of_two() {
        let mut dict = Dictionary::new();
        // Fill to 511 entries: still 9 bits, next read needs 10
        for i in 0..255_u16 {
            dict.insert(i.to_be_bytes().to_vec()).unwrap();
        }
        assert_eq!(dict.max_code(), 511);
        assert_eq!(dict.nbits(), 9);
        assert_eq!(dict.nbits_next(), 10);
        dict.insert(b"xx".to_vec()).unwrap();
        assert_eq!(dict.nbits(), 10);
    }

    #[test]
    fn stop_code_is_never_bound() {
        let dict = Dictionary::new();
        assert_eq!(dict.resolve(super::STOP_CODE), Err(Error::UnknownCode(0)));
    }
}
