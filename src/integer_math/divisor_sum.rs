// src/integer_math/divisor_sum.rs

use num::integer::Roots;

/// Sum of the proper divisors of `n` (every divisor except `n` itself).
/// Returns 0 for `n <= 1`, which have no proper divisors worth counting.
pub fn sum_of_proper_divisors(n: u64) -> u64 {
    if n <= 1 {
        return 0;
    }
    let mut sum = 1;
    for i in 2..=n.sqrt() {
        if n % i == 0 {
            sum += i;
            let pair = n / i;
            // A square root divisor pairs with itself; count it once.
            if pair != i {
                sum += pair;
            }
        }
    }
    sum
}
