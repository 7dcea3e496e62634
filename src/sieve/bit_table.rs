// src/sieve/bit_table.rs

/// Packed boolean array over 64-bit words.
///
/// Bit `b` of word `w` represents the integer `w * 64 + b`. The table always
/// consists of whole words; there is never a partial trailing word. All of the
/// word/bit index arithmetic lives here so the sieve and the extractor never
/// touch raw shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitTable {
    words: Vec<u64>,
}

impl BitTable {
    pub const WORD_BITS: u64 = 64;
    const SHIFT: u64 = 6;
    const MASK: u64 = 0b11_1111;

    /// The zero-word table. No bit is set and no bit can be set.
    pub fn empty() -> Self {
        BitTable { words: Vec::new() }
    }

    /// Allocate a table of `len_bits / 64` words with every bit set.
    /// `len_bits` must be a multiple of the word width.
    pub fn with_all_set(len_bits: u64) -> Self {
        debug_assert_eq!(len_bits % Self::WORD_BITS, 0);
        BitTable {
            words: vec![u64::MAX; (len_bits / Self::WORD_BITS) as usize],
        }
    }

    /// Number of addressable bits, always a multiple of 64.
    pub fn len_bits(&self) -> u64 {
        self.words.len() as u64 * Self::WORD_BITS
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: u64) -> bool {
        self.words[(index >> Self::SHIFT) as usize] & (1 << (index & Self::MASK)) != 0
    }

    pub fn set(&mut self, index: u64) {
        self.words[(index >> Self::SHIFT) as usize] |= 1 << (index & Self::MASK);
    }

    pub fn clear(&mut self, index: u64) {
        self.words[(index >> Self::SHIFT) as usize] &= !(1 << (index & Self::MASK));
    }

    /// Clear every bit strictly above `bound`: mask the tail of the word
    /// containing `bound + 1`, then zero any later words.
    pub fn clear_above(&mut self, bound: u64) {
        let first = bound + 1;
        if first >= self.len_bits() {
            return;
        }
        let word_index = (first >> Self::SHIFT) as usize;
        self.words[word_index] &= (1 << (first & Self::MASK)) - 1;
        for word in &mut self.words[word_index + 1..] {
            *word = 0;
        }
    }

    /// Total number of set bits across all words.
    pub fn count_set(&self) -> u64 {
        self.words.iter().map(|word| u64::from(word.count_ones())).sum()
    }

    /// Read-only view of the underlying words, low indices first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}
