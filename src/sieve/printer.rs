// src/sieve/printer.rs

use crate::sieve::bit_table::BitTable;

/// Render the table as rows of `0`/`1` characters, one row per word,
/// least-significant bit first. Debug aid only.
pub fn render_table(table: &BitTable) -> String {
    let mut out = String::with_capacity(table.word_count() * (BitTable::WORD_BITS as usize + 1));
    for word in table.words() {
        for bit in 0..BitTable::WORD_BITS {
            out.push(if word & (1 << bit) != 0 { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

pub fn print_table(table: &BitTable) {
    print!("{}", render_table(table));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_per_word() {
        let mut table = BitTable::with_all_set(128);
        table.clear_above(0);
        table.set(1);
        table.set(64);

        let rendered = render_table(&table);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 64);

        // LSB first: bit 0 of word 0 is the first character
        assert!(rows[0].starts_with("11"));
        assert!(rows[0][2..].chars().all(|c| c == '0'));
        assert!(rows[1].starts_with("1"));
        assert!(rows[1][1..].chars().all(|c| c == '0'));
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_table(&BitTable::empty()), "");
    }
}
