// src/sieve/extract.rs

use crate::sieve::bit_table::BitTable;

/// Iterator over the set bits of a [`BitTable`], decoded to their integer
/// values. Words are scanned in order and bits within each word from least
/// significant to most, so the yielded values are strictly increasing.
pub struct Primes<'a> {
    words: &'a [u64],
    word_index: usize,
    bit_index: u64,
}

impl<'a> Primes<'a> {
    pub fn new(table: &'a BitTable) -> Self {
        Primes {
            words: table.words(),
            word_index: 0,
            bit_index: 0,
        }
    }
}

impl Iterator for Primes<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word = *self.words.get(self.word_index)?;
            let masked = word & (u64::MAX << self.bit_index);
            if masked == 0 {
                self.word_index += 1;
                self.bit_index = 0;
                continue;
            }
            let bit_index = u64::from(masked.trailing_zeros());
            let value = self.word_index as u64 * BitTable::WORD_BITS + bit_index;
            if bit_index + 1 == BitTable::WORD_BITS {
                self.word_index += 1;
                self.bit_index = 0;
            } else {
                self.bit_index = bit_index + 1;
            }
            return Some(value);
        }
    }
}

/// Decode a sieved table into the ordered list of primes it marks.
/// Pure function of the table; the table may be discarded afterwards.
pub fn extract_primes(table: &BitTable) -> Vec<u64> {
    Primes::new(table).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_table() {
        assert_eq!(extract_primes(&BitTable::empty()), Vec::<u64>::new());
    }

    #[test]
    fn test_extract_maps_bit_positions() {
        let mut table = BitTable::with_all_set(128);
        table.clear_above(0);
        table.set(2);
        table.set(63);
        table.set(64);
        table.set(127);
        assert_eq!(extract_primes(&table), vec![0, 2, 63, 64, 127]);
    }

    #[test]
    fn test_iterator_matches_collected() {
        let mut table = BitTable::with_all_set(192);
        for composite in [0, 1, 4, 6, 8, 9, 10, 100, 150] {
            table.clear(composite);
        }
        let streamed: Vec<u64> = Primes::new(&table).collect();
        assert_eq!(streamed, extract_primes(&table));
    }

    #[test]
    fn test_extract_strictly_increasing() {
        let table = crate::sieve::sieve(500);
        let primes = extract_primes(&table);
        assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
