//! Nucleotide encoding and strand-oriented codon classification.
//!
//! Sequences are stored one digit per byte using a 3-bit alphabet:
//! - A (adenine): `000`
//! - G (guanine): `001`
//! - C (cytosine): `010`
//! - T/U (thymine/uracil): `011`
//! - N (anything else): `110`
//!
//! Every positional reader takes the digit slice (its length is the sequence
//! length), a position and a [`Strand`]. On the reverse strand, position `i`
//! is read from `len - 1 - i` through the complement table, which walks the
//! reverse complement without materialising it.
//!
//! ## Preconditions
//!
//! The readers are called once per base across whole genomes and perform no
//! validation: digits must belong to the alphabet and windows must fit in the
//! sequence. Use [`validation`] once per scan to enforce both.
//!
//! ## Modules
//!
//! - [`encoded`]: Owned [`encoded::DigitSequence`] with GC content and N masks
//! - [`processing`]: k-mer indexing, background frequencies, region GC
//! - [`validation`]: Boundary checks run before a scan
//!
//! ## Examples
//!
//! ```rust
//! use orfeus_core::genetic_code::GeneticCode;
//! use orfeus_core::sequence::{encode, is_start, is_stop};
//! use orfeus_core::types::Strand;
//!
//! let digits = encode(b"ATGAAATAA");
//! let code = GeneticCode::BACTERIAL;
//!
//! assert!(is_start(&digits, 0, code, Strand::Forward));
//! assert!(is_stop(&digits, 6, code, Strand::Forward));
//! ```

use crate::constants::{A, C, COMPLEMENT, G, LETTERS, N, T};
use crate::genetic_code::GeneticCode;
use crate::types::{CodonType, Strand};

pub mod encoded;
pub mod processing;
pub mod validation;

pub use processing::*;
pub use validation::*;

/// Converts a nucleotide character to its digit code.
///
/// # Encoding
///
/// - A: `0`
/// - G: `1`
/// - C: `2`
/// - T/U: `3`
/// - Other: `6` (N)
///
/// # Examples
///
/// ```rust
/// use orfeus_core::sequence::char_to_digit;
///
/// assert_eq!(char_to_digit(b'A'), 0);
/// assert_eq!(char_to_digit(b'g'), 1);
/// assert_eq!(char_to_digit(b'C'), 2);
/// assert_eq!(char_to_digit(b'u'), 3);
/// assert_eq!(char_to_digit(b'R'), 6);
/// ```
#[must_use]
pub const fn char_to_digit(c: u8) -> u8 {
    match c.to_ascii_uppercase() {
        b'A' => A,
        b'G' => G,
        b'C' => C,
        b'T' | b'U' => T,
        _ => N,
    }
}

/// Encode raw letters into a new digit buffer
#[must_use]
pub fn encode(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().map(|&c| char_to_digit(c)).collect()
}

/// Complement of a digit code (`A`<->`T`, `G`<->`C`, `N` fixed).
///
/// `code` must be one of the seven table entries.
#[inline(always)]
#[must_use]
pub const fn complement(code: u8) -> u8 {
    COMPLEMENT[code as usize]
}

/// Letter for a digit code
#[inline]
#[must_use]
pub const fn letter(code: u8) -> char {
    LETTERS[code as usize]
}

/// Whether `code` is one of the five symbols of the alphabet
#[inline]
#[must_use]
pub const fn is_valid_digit(code: u8) -> bool {
    matches!(code, A | G | C | T | N)
}

/// Symbol at position `i` as seen from `strand`
#[inline(always)]
#[must_use]
pub fn oriented_digit(digits: &[u8], i: usize, strand: Strand) -> u8 {
    match strand {
        Strand::Forward => digits[i],
        Strand::Reverse => complement(digits[digits.len() - 1 - i]),
    }
}

/// The three symbols of the codon starting at position `i` on `strand`
#[inline(always)]
#[must_use]
pub fn codon_at(digits: &[u8], i: usize, strand: Strand) -> [u8; 3] {
    match strand {
        Strand::Forward => [digits[i], digits[i + 1], digits[i + 2]],
        Strand::Reverse => {
            let last = digits.len() - 1 - i;
            [
                complement(digits[last]),
                complement(digits[last - 1]),
                complement(digits[last - 2]),
            ]
        }
    }
}

/// Test if nucleotide at given position is adenine (A)
#[inline]
#[must_use]
pub fn is_a(digits: &[u8], i: usize, strand: Strand) -> bool {
    oriented_digit(digits, i, strand) == A
}

/// Test if nucleotide at given position is guanine (G)
#[inline]
#[must_use]
pub fn is_g(digits: &[u8], i: usize, strand: Strand) -> bool {
    oriented_digit(digits, i, strand) == G
}

/// Test if nucleotide at given position is cytosine (C)
#[inline]
#[must_use]
pub fn is_c(digits: &[u8], i: usize, strand: Strand) -> bool {
    oriented_digit(digits, i, strand) == C
}

/// Test if nucleotide at given position is thymine (T)
#[inline]
#[must_use]
pub fn is_t(digits: &[u8], i: usize, strand: Strand) -> bool {
    oriented_digit(digits, i, strand) == T
}

/// Test if position contains an unknown nucleotide (N)
#[inline]
#[must_use]
pub fn is_n(digits: &[u8], i: usize, strand: Strand) -> bool {
    oriented_digit(digits, i, strand) == N
}

/// Test if nucleotide at given position counts towards GC content.
///
/// Unknown symbols are counted as GC, matching the GC fractions the
/// downstream statistical models are built from.
///
/// ```rust
/// use orfeus_core::sequence::{encode, is_gc};
/// use orfeus_core::types::Strand;
///
/// let digits = encode(b"N");
/// assert!(is_gc(&digits, 0, Strand::Forward));
/// assert!(is_gc(&digits, 0, Strand::Reverse));
/// ```
#[inline]
#[must_use]
pub fn is_gc(digits: &[u8], i: usize, strand: Strand) -> bool {
    matches!(oriented_digit(digits, i, strand), C | G | N)
}

/// Test if codon at position is ATG (methionine start codon)
#[inline]
#[must_use]
pub fn is_atg(digits: &[u8], i: usize, strand: Strand) -> bool {
    codon_at(digits, i, strand) == [A, T, G]
}

/// Test if codon at position is GTG (valine start codon)
#[inline]
#[must_use]
pub fn is_gtg(digits: &[u8], i: usize, strand: Strand) -> bool {
    codon_at(digits, i, strand) == [G, T, G]
}

/// Test if codon at position is TTG (leucine start codon)
#[inline]
#[must_use]
pub fn is_ttg(digits: &[u8], i: usize, strand: Strand) -> bool {
    codon_at(digits, i, strand) == [T, T, G]
}

/// Test if codon at given position is a valid start codon
///
/// ATG is a start under every genetic code. GTG and TTG are only checked
/// when the code allows alternative starts at all.
#[inline]
#[must_use]
pub fn is_start(digits: &[u8], i: usize, code: GeneticCode, strand: Strand) -> bool {
    match codon_at(digits, i, strand) {
        [A, T, G] => true,
        _ if code.uses_only_atg() => false,
        [G, T, G] => code.gtg_is_start(),
        [T, T, G] => code.ttg_is_start(),
        _ => false,
    }
}

/// Test if codon at given position is a stop codon
///
/// Checks the standard stop codons (TAA, TAG, TGA) first, then the extra
/// stops a few translation tables add (AGA/AGG in 2, TCA in 22, TTA in 23).
#[inline]
#[must_use]
pub fn is_stop(digits: &[u8], i: usize, code: GeneticCode, strand: Strand) -> bool {
    match (codon_at(digits, i, strand), code.table()) {
        ([T, A, G], _) => code.tag_is_stop(),
        ([T, G, A], _) => code.tga_is_stop(),
        ([T, A, A], _) => code.taa_is_stop(),
        ([A, G, A | G], 2) | ([T, C, A], 22) | ([T, T, A], 23) => true,
        _ => false,
    }
}

/// Classify the codon at `i` as a candidate-node type.
///
/// Returns [`CodonType::Stop`] for stop codons, the start type for codons
/// [`is_start`] accepts and `None` for everything else.
#[must_use]
pub fn classify_codon(
    digits: &[u8],
    i: usize,
    code: GeneticCode,
    strand: Strand,
) -> Option<CodonType> {
    if is_stop(digits, i, code, strand) {
        return Some(CodonType::Stop);
    }
    if !is_start(digits, i, code, strand) {
        return None;
    }
    match codon_at(digits, i, strand) {
        [A, T, G] => Some(CodonType::Atg),
        [G, T, G] => Some(CodonType::Gtg),
        [T, T, G] => Some(CodonType::Ttg),
        _ => None,
    }
}
