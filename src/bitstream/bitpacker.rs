use log::error;

use crate::error::Error;

/// Maximum width of a single push. The queue holds 64 bits and carries at
/// most 7 bits between pushes.
const MAX_WIDTH: u8 = 56;

/// Packs variable-width codewords into a byte stream, MSB-first.
pub struct BitPacker {
    output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified.
    /// Call into_bytes() to flush the bit queue and take the buffer.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Internal bitstream write function. Empties all full bytes from the queue.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Append `value` as a `width`-bit codeword. Fails with
    /// [`Error::ValueTooWide`] if the value does not fit in `width` bits,
    /// which indicates a defect in the caller rather than bad user data.
    pub fn push(&mut self, value: usize, width: u8) -> Result<(), Error> {
        debug_assert!(width <= MAX_WIDTH);
        if (width as u32) < usize::BITS && value >> width != 0 {
            return Err(Error::ValueTooWide { value, width });
        }
        self.queue <<= width; //shift queue by bit length
        self.queue |= value as u64; //add data portion to queue
        self.q_bits += width; //update depth of queue bits
        self.write_stream();
        Ok(())
    }

    /// Number of bits pushed so far.
    pub fn len(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flush the remaining bits (1-7), padding the final byte with 0s in the
    /// least significant bits, and return the packed stream.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits = 8;
            self.write_stream();
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        self.output
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;
    use crate::error::Error;

    #[test]
    fn pack_two_values() {
        // 01 + 00011 -> 0100011 padded to 01000110
        let mut bp = BitPacker::new();
        bp.push(1, 2).unwrap();
        bp.push(3, 5).unwrap();
        assert_eq!(bp.into_bytes(), vec![0b0100_0110]);
    }

    #[test]
    fn pack_across_byte_boundary() {
        // 01 + 00011 + 111 -> 01000111 11 padded to 11000000
        let mut bp = BitPacker::new();
        bp.push(1, 2).unwrap();
        bp.push(3, 5).unwrap();
        bp.push(7, 3).unwrap();
        assert_eq!(bp.into_bytes(), vec![0b0100_0111, 0b1100_0000]);
    }

    #[test]
    fn pack_whole_bytes() {
        let mut bp = BitPacker::new();
        bp.push(0x21, 8).unwrap();
        bp.push(0x20, 8).unwrap();
        assert_eq!(bp.into_bytes(), "! ".as_bytes());
    }

    #[test]
    fn nine_bit_stop_code_pads_to_two_bytes() {
        let mut bp = BitPacker::new();
        bp.push(0, 9).unwrap();
        assert_eq!(bp.into_bytes(), vec![0, 0]);
    }

    #[test]
    fn value_wider_than_declared_fails() {
        let mut bp = BitPacker::new();
        assert_eq!(
            bp.push(4, 2),
            Err(Error::ValueTooWide { value: 4, width: 2 })
        );
        // A fitting value still goes through afterwards
        assert!(bp.push(3, 2).is_ok());
    }

    #[test]
    fn len_counts_bits() {
        let mut bp = BitPacker::new();
        assert!(bp.is_empty());
        bp.push(1, 9).unwrap();
        bp.push(1, 9).unwrap();
        assert_eq!(bp.len(), 18);
    }
}
