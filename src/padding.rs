//! Final block construction: the `0x80` marker and the bit length.

use crate::compress::BLOCK_LEN;

const LENGTH_LEN: usize = 8;

/// The one or two blocks that terminate a message.
pub(crate) struct Padding {
    blocks: [[u8; BLOCK_LEN]; 2],
    count: usize,
}

impl Padding {
    /// Builds the trailing blocks for a message of `total_len` bytes whose
    /// last `tail.len()` bytes did not fill a whole block.
    pub(crate) fn new(tail: &[u8], total_len: u64) -> Padding {
        debug_assert!(tail.len() < BLOCK_LEN);

        let mut blocks = [[0u8; BLOCK_LEN]; 2];
        let mut count = 1;

        blocks[0][..tail.len()].copy_from_slice(tail);
        blocks[0][tail.len()] = 0x80;
        if tail.len() + 1 > BLOCK_LEN - LENGTH_LEN {
            count = 2;
        }

        let bits = total_len.wrapping_mul(8);
        blocks[count - 1][BLOCK_LEN - LENGTH_LEN..].copy_from_slice(&bits.to_be_bytes());

        Padding { blocks, count }
    }

    /// The blocks to feed to the compression function, in order.
    pub(crate) fn blocks(&self) -> &[[u8; BLOCK_LEN]] {
        &self.blocks[..self.count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tail() {
        let padding = Padding::new(&[], 0);
        let blocks = padding.blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0][0], 0x80);
        assert!(blocks[0][1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_length_is_big_endian_bits() {
        let padding = Padding::new(b"abc", 3);
        let block = &padding.blocks()[0];
        assert_eq!(&block[..4], b"abc\x80");
        assert!(block[4..56].iter().all(|&b| b == 0));
        assert_eq!(&block[56..], &[0, 0, 0, 0, 0, 0, 0, 24]);
    }

    #[test]
    fn test_length_counts_the_whole_message() {
        // 130 bytes total, only the last two are in the tail
        let padding = Padding::new(b"zz", 130);
        let block = &padding.blocks()[0];
        assert_eq!(&block[56..], &1040u64.to_be_bytes());
    }

    #[test]
    fn test_tail_of_55_fits_one_block() {
        let tail = [b'x'; 55];
        let padding = Padding::new(&tail, 55);
        let blocks = padding.blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..55], &tail[..]);
        assert_eq!(blocks[0][55], 0x80);
        assert_eq!(&blocks[0][56..], &440u64.to_be_bytes());
    }

    #[test]
    fn test_tail_of_56_needs_two_blocks() {
        let tail = [b'x'; 56];
        let padding = Padding::new(&tail, 56);
        let blocks = padding.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(&blocks[0][..56], &tail[..]);
        assert_eq!(blocks[0][56], 0x80);
        assert!(blocks[0][57..].iter().all(|&b| b == 0));
        assert!(blocks[1][..56].iter().all(|&b| b == 0));
        assert_eq!(&blocks[1][56..], &448u64.to_be_bytes());
    }

    #[test]
    fn test_tail_of_63_needs_two_blocks() {
        let tail = [0xffu8; 63];
        let padding = Padding::new(&tail, 127);
        let blocks = padding.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][63], 0x80);
        assert_eq!(&blocks[1][56..], &1016u64.to_be_bytes());
    }

    #[test]
    fn test_bit_length_wraps_at_64_bits() {
        let padding = Padding::new(&[], 1 << 61);
        assert_eq!(&padding.blocks()[0][56..], &[0u8; 8]);
    }
}
