//! Run-length codec: the flat companion to LZW behind the same contract.
//!
//! Every maximal run of identical bytes becomes one fixed 5-byte record, a
//! 4-byte big-endian run length followed by the run value, concatenated with
//! no separators. Runs longer than a u32 split across records.

use crate::error::Error;

use super::Codec;

const RECORD_SIZE: usize = 5;

pub struct Rle;

fn push_record(out: &mut Vec<u8>, value: u8, length: u32) {
    out.extend_from_slice(&length.to_be_bytes());
    out.push(value);
}

impl Codec for Rle {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        let mut input = data.iter().copied();
        if let Some(first) = input.next() {
            let mut value = first;
            let mut length: u32 = 1;
            for c in input {
                if c == value && length < u32::MAX {
                    length += 1;
                } else {
                    push_record(&mut out, value, length);
                    value = c;
                    length = 1;
                }
            }
            push_record(&mut out, value, length);
        }
        Ok(out)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        if data.len() % RECORD_SIZE != 0 {
            return Err(Error::TruncatedStream);
        }
        let mut out = Vec::new();
        for record in data.chunks_exact(RECORD_SIZE) {
            let length = u32::from_be_bytes(record[..4].try_into().expect("record is 5 bytes"));
            out.resize(out.len() + length as usize, record[4]);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::{Codec, Rle};
    use crate::error::Error;

    #[test]
    fn empty_input_is_empty_stream() {
        assert_eq!(Rle.encode(b"").unwrap(), b"");
        assert_eq!(Rle.decode(b"").unwrap(), b"");
    }

    #[test]
    fn record_format() {
        assert_eq!(Rle.encode(b"aaab").unwrap(), vec![0, 0, 0, 3, b'a', 0, 0, 0, 1, b'b']);
    }

    #[test]
    fn roundtrip() {
        for data in [&b"x"[..], b"aaabccd", b"abcabc", &[0, 0, 255, 255, 255, 0]] {
            let packed = Rle.encode(data).unwrap();
            assert_eq!(Rle.decode(&packed).unwrap(), data);
        }
    }

    #[test]
    fn long_run_roundtrip() {
        let data = vec![b'a'; 100_000];
        let packed = Rle.encode(&data).unwrap();
        assert_eq!(packed.len(), 5);
        assert_eq!(Rle.decode(&packed).unwrap(), data);
    }

    #[test]
    fn ragged_record_fails() {
        assert_eq!(Rle.decode(&[0, 0, 0, 3]), Err(Error::TruncatedStream));
        assert_eq!(Rle.decode(&[0, 0, 0, 3, b'a', 9]), Err(Error::TruncatedStream));
    }
}
