//! BitReader: walks a packed byte buffer as one contiguous bit sequence.
//!
//! The LZW decoder pulls codewords of whatever width its dictionary currently
//! dictates, so the reader takes the width per call rather than fixing it.

/// A bit cursor over a borrowed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Number of unread bits left in the buffer.
    pub fn remaining(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index as usize
    }

    /// Return the next `n` bits as an unsigned integer, MSB-first, or None if
    /// fewer than `n` bits remain. The cursor does not move on underrun.
    pub fn read(&mut self, mut n: u8) -> Option<usize> {
        debug_assert!((n as u32) < usize::BITS);
        if n as usize > self.remaining() {
            return None;
        }
        let mut result = 0_usize;

        // Finish the partial byte first, if there is one.
        if self.bit_index > 0 {
            let avail = 8 - self.bit_index;
            let take = n.min(avail);
            result = ((self.buffer[self.cursor] & (0xff >> self.bit_index))
                >> (avail - take)) as usize;
            self.bit_index += take;
            if self.bit_index == 8 {
                self.cursor += 1;
                self.bit_index = 0;
            }
            n -= take;
            if n == 0 {
                return Some(result);
            }
        }
        // Then whole bytes.
        while n >= 8 {
            result = result << 8 | self.buffer[self.cursor] as usize;
            self.cursor += 1;
            n -= 8;
        }
        // And whatever bits are still needed from the next byte.
        if n > 0 {
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as usize;
            self.bit_index = n;
        }
        Some(result)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn read_within_one_byte() {
        let mut br = BitReader::new(&[0b00011011]);
        assert_eq!(br.read(5), Some(3));
        assert_eq!(br.read(1), Some(0));
        assert_eq!(br.read(2), Some(3));
        assert_eq!(br.read(1), None);
    }

    #[test]
    fn read_across_bytes() {
        let mut br = BitReader::new(&[0b0011_0001, 0b0100_0000]);
        assert_eq!(br.read(9), Some(98));
        assert_eq!(br.read(7), Some(0b100_0000));
        assert_eq!(br.read(1), None);
    }

    #[test]
    fn read_whole_bytes() {
        let mut br = BitReader::new("Hi".as_bytes());
        assert_eq!(br.read(8), Some('H' as usize));
        assert_eq!(br.read(8), Some('i' as usize));
    }

    #[test]
    fn underrun_leaves_cursor_in_place() {
        let mut br = BitReader::new(&[0xff]);
        assert_eq!(br.read(3), Some(7));
        assert_eq!(br.remaining(), 5);
        assert_eq!(br.read(9), None);
        assert_eq!(br.remaining(), 5);
        assert_eq!(br.read(5), Some(31));
        assert_eq!(br.remaining(), 0);
    }

    #[test]
    fn wide_read_spans_three_bytes() {
        let mut br = BitReader::new(&[0b1010_1010, 0b1100_1100, 0b1111_0000]);
        assert_eq!(br.read(4), Some(0b1010));
        assert_eq!(br.read(17), Some(0b1010_1100_1100_1111_0));
        assert_eq!(br.remaining(), 3);
    }
}
