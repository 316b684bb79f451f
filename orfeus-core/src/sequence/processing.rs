use rayon::prelude::*;

use crate::constants::{
    MAX_BACKGROUND_MER_LENGTH, MAX_MER_LENGTH, MER_COUNT_CHUNK_SIZE, MER_DIGIT_MASK, MER_LETTERS,
};
use crate::sequence::{is_gc, oriented_digit};
use crate::types::{OrfeusError, Strand};

/// Pack `length` consecutive symbols into a base-4 k-mer index.
///
/// The first symbol read lands in the most significant 2-bit slot. Only the
/// low two bits of each digit are kept, so N packs exactly like C; lookup
/// tables indexed this way have `4^length` entries.
///
/// The window starting at `i` must fit on `strand` (see
/// [`crate::sequence::check_window`]).
///
/// # Examples
///
/// ```rust
/// use orfeus_core::sequence::{encode, mer_index};
/// use orfeus_core::types::Strand;
///
/// // A=0, G=1, C=2, T=3
/// let digits = encode(b"AGCT");
/// assert_eq!(mer_index(&digits, 0, 4, Strand::Forward), 0b00_01_10_11);
/// assert_eq!(mer_index(&digits, 0, 2, Strand::Reverse), 0b00_01);
/// ```
#[inline]
#[must_use]
pub fn mer_index(digits: &[u8], i: usize, length: usize, strand: Strand) -> usize {
    debug_assert!(length <= MAX_MER_LENGTH);
    (i..i + length).fold(0usize, |index, position| {
        (index << 2) | usize::from(oriented_digit(digits, position, strand) & MER_DIGIT_MASK)
    })
}

/// Convert k-mer index back to its nucleotide letters
///
/// Decodes a numeric k-mer index for display and debugging purposes.
/// Indices built from windows containing N decode with a C in that slot.
#[must_use]
pub fn mer_text(length: usize, index: usize) -> String {
    (0..length)
        .rev()
        .map(|slot| MER_LETTERS[(index >> (2 * slot)) & usize::from(MER_DIGIT_MASK)])
        .collect()
}

/// Calculate background k-mer frequencies for both strands
///
/// Counts every window of `length` symbols on the forward and reverse
/// strands and returns a table of `4^length` frequencies summing to one.
pub fn background_mer_frequencies(digits: &[u8], length: usize) -> Result<Vec<f64>, OrfeusError> {
    if length == 0 || length > MAX_BACKGROUND_MER_LENGTH {
        return Err(OrfeusError::InvalidMerLength(length));
    }
    if digits.len() < length {
        return Err(OrfeusError::SequenceTooShort {
            length: digits.len(),
            window: length,
        });
    }

    let size = 1usize << (2 * length);
    let windows = digits.len() - length + 1;
    let chunk_size = std::cmp::max(
        MER_COUNT_CHUNK_SIZE,
        windows / rayon::current_num_threads(),
    );

    let counts: Vec<u64> = (0..windows)
        .into_par_iter()
        .chunks(chunk_size)
        .map(|chunk| {
            let mut local_counts = vec![0u64; size];
            for i in chunk {
                local_counts[mer_index(digits, i, length, Strand::Forward)] += 1;
                local_counts[mer_index(digits, i, length, Strand::Reverse)] += 1;
            }
            local_counts
        })
        .reduce(
            || vec![0u64; size],
            |mut acc, local_counts| {
                for (total, count) in acc.iter_mut().zip(local_counts) {
                    *total += count;
                }
                acc
            },
        );

    let total = (windows * 2) as f64;
    Ok(counts.into_iter().map(|count| count as f64 / total).collect())
}

/// Calculate the GC content of a forward-strand region
///
/// Returns the fraction of positions in `start..=end` that count towards GC
/// (unknown symbols included, as in [`is_gc`]).
#[must_use]
pub fn gc_content(digits: &[u8], start: usize, end: usize) -> f64 {
    if start > end {
        return 0.0;
    }

    let gc_count = (start..=end)
        .filter(|&i| is_gc(digits, i, Strand::Forward))
        .count();

    gc_count as f64 / (end - start + 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::encode;

    #[test]
    fn test_mer_index_forward() {
        let digits = encode(b"TTGCA");
        assert_eq!(mer_index(&digits, 0, 1, Strand::Forward), 3);
        assert_eq!(mer_index(&digits, 0, 3, Strand::Forward), 0b11_11_01);
        assert_eq!(mer_index(&digits, 2, 3, Strand::Forward), 0b01_10_00);
    }

    #[test]
    fn test_mer_index_first_symbol_most_significant() {
        // T then A: T lands in the high slot
        let digits = encode(b"TA");
        assert_eq!(mer_index(&digits, 0, 2, Strand::Forward), 0b11_00);
        assert_eq!(mer_text(2, 0b11_00), "TA");
    }

    #[test]
    fn test_mer_index_reverse() {
        // reverse complement of TTGCA is TGCAA
        let digits = encode(b"TTGCA");
        assert_eq!(mer_index(&digits, 0, 3, Strand::Reverse), 0b11_01_10);
        assert_eq!(mer_index(&digits, 2, 3, Strand::Reverse), 0b10_00_00);
    }

    #[test]
    fn test_mer_index_aliases_n_to_c() {
        let with_n = encode(b"ANG");
        assert_eq!(
            mer_index(&with_n, 0, 3, Strand::Forward),
            mer_index(&encode(b"ACG"), 0, 3, Strand::Forward)
        );
        // on the reverse strand the oriented C comes from a forward G
        assert_eq!(
            mer_index(&with_n, 0, 3, Strand::Reverse),
            mer_index(&encode(b"AGG"), 0, 3, Strand::Reverse)
        );
    }

    #[test]
    fn test_mer_text_roundtrip() {
        let digits = encode(b"GATTACA");
        let index = mer_index(&digits, 0, 7, Strand::Forward);
        assert_eq!(mer_text(7, index), "GATTACA");
        assert_eq!(mer_text(0, index), "");
        assert_eq!(mer_text(2, 0b10_10), "CC");
    }

    #[test]
    fn test_mer_text_of_n_window() {
        let digits = encode(b"ANA");
        assert_eq!(mer_text(3, mer_index(&digits, 0, 3, Strand::Forward)), "ACA");
    }

    #[test]
    fn test_background_mer_frequencies_sum() {
        let digits = encode(b"ATGCGATCGATCGGGCTAGCTAGCATCGATCGACGATCGAT");
        let frequencies = background_mer_frequencies(&digits, 3).unwrap();
        assert_eq!(frequencies.len(), 64);
        let sum: f64 = frequencies.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_background_mer_frequencies_strand_symmetric() {
        // every window on one strand has its reverse complement on the other
        let digits = encode(b"AAAA");
        let frequencies = background_mer_frequencies(&digits, 1).unwrap();
        assert_eq!(frequencies, vec![0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_background_mer_frequencies_errors() {
        let digits = encode(b"ACGT");
        assert_eq!(
            background_mer_frequencies(&digits, 0),
            Err(OrfeusError::InvalidMerLength(0))
        );
        assert_eq!(
            background_mer_frequencies(&digits, 13),
            Err(OrfeusError::InvalidMerLength(13))
        );
        assert_eq!(
            background_mer_frequencies(&digits, 5),
            Err(OrfeusError::SequenceTooShort {
                length: 4,
                window: 5
            })
        );
    }

    #[test]
    fn test_gc_content() {
        let digits = encode(b"GGCCAATTNN");
        assert!((gc_content(&digits, 0, 3) - 1.0).abs() < f64::EPSILON);
        assert!((gc_content(&digits, 4, 7)).abs() < f64::EPSILON);
        assert!((gc_content(&digits, 0, 9) - 0.6).abs() < 1e-12);
        assert!((gc_content(&digits, 5, 4)).abs() < f64::EPSILON);
    }
}
