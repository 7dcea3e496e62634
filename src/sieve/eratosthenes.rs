// src/sieve/eratosthenes.rs

use log::debug;
use num::integer::Roots;

use crate::sieve::bit_table::BitTable;

/// Sieve of Eratosthenes over a bit-packed table.
///
/// Returns a table whose set bits are exactly the primes in `[0, n]`. The
/// result is deterministic and depends only on `n`. There is no upper limit on
/// `n` beyond the O(n/64) words of memory the table costs; bounding `n` to
/// available memory is the caller's responsibility.
pub fn sieve(n: u64) -> BitTable {
    // Degenerate bounds are rejected before any allocation happens.
    if n < 2 {
        return BitTable::empty();
    }

    // Whole-word sizing: the table spans bits 0..=limit where limit is the
    // last bit of the word containing n.
    let word_count = n / BitTable::WORD_BITS + 1;
    let limit = word_count * BitTable::WORD_BITS - 1;

    let mut table = BitTable::with_all_set(word_count * BitTable::WORD_BITS);
    table.clear(0);
    table.clear(1);

    // isqrt keeps the outer bound free of i * i overflow probing.
    let candidate_bound = limit.sqrt();
    debug!(
        "sieving to {} ({} words, limit {}, candidates to {})",
        n, word_count, limit, candidate_bound
    );

    for i in 2..=candidate_bound {
        // Already struck out by a smaller prime factor
        if !table.get(i) {
            continue;
        }
        // Multiples below i * i were eliminated by smaller primes.
        let mut j = i * i;
        while j <= limit {
            table.clear(j);
            j += i;
        }
    }

    // The whole table span was sieved, so every bit up to limit is a true
    // primality bit; drop the tail so extraction never reports a value > n.
    table.clear_above(n);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_bounds_allocate_nothing() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
    }

    #[test]
    fn test_zero_and_one_never_prime() {
        let table = sieve(100);
        assert!(!table.get(0));
        assert!(!table.get(1));
    }

    #[test]
    fn test_small_primes_marked() {
        let table = sieve(30);
        for prime in [2, 3, 5, 7, 11, 13, 17, 19, 23, 29] {
            assert!(table.get(prime), "{} should be marked prime", prime);
        }
        for composite in [4, 6, 9, 15, 21, 25, 27, 30] {
            assert!(!table.get(composite), "{} should be struck out", composite);
        }
    }

    #[test]
    fn test_whole_word_sizing() {
        assert_eq!(sieve(2).word_count(), 1);
        assert_eq!(sieve(63).word_count(), 1);
        assert_eq!(sieve(64).word_count(), 2);
        assert_eq!(sieve(128).word_count(), 3);
    }

    #[test]
    fn test_no_bits_above_bound() {
        // 67 is prime but lies above the bound; the tail must be cleared even
        // though the table has a second word.
        let table = sieve(64);
        assert!(!table.get(65));
        assert!(!table.get(67));
        assert!(!table.get(127));
    }
}
