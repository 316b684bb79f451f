use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::constants::N;
use crate::genetic_code::GeneticCode;
use crate::sequence::{
    char_to_digit, classify_codon, is_a, is_atg, is_c, is_g, is_gc, is_gtg, is_n, is_start,
    is_stop, is_t, is_ttg, letter, mer_index, validate_digits,
};
use crate::types::{CodonType, Mask, OrfeusError, Strand};

/// A sequence encoded in the digit alphabet, with its GC fraction and the
/// regions covered by runs of unknown symbols.
///
/// # Examples
///
/// ```rust
/// use orfeus_core::sequence::encoded::DigitSequence;
///
/// let sequence = DigitSequence::with_masking(b"ATGCNNNNNNNNNNATGCNNNNNNNNTGC");
/// assert_eq!(sequence.len(), 29);
/// assert_eq!(sequence.masks().len(), 2);
/// assert_eq!(sequence.to_string(), "ATGCNNNNNNNNNNATGCNNNNNNNNTGC");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DigitSequence {
    digits: Vec<u8>,
    masks: Vec<Mask>,
    gc_content: f64,
}

impl DigitSequence {
    /// Encode letters, recording every run of unknown symbols as a [`Mask`]
    #[must_use]
    pub fn with_masking(sequence: &[u8]) -> Self {
        Self::encode(sequence, true)
    }

    /// Encode letters without recording masks
    #[must_use]
    pub fn without_masking(sequence: &[u8]) -> Self {
        Self::encode(sequence, false)
    }

    /// Wrap an already-encoded digit buffer, checking every code
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, OrfeusError> {
        validate_digits(&digits)?;
        let gc_content = gc_fraction(&digits);
        Ok(Self {
            digits,
            masks: Vec::new(),
            gc_content,
        })
    }

    fn encode(sequence: &[u8], do_mask: bool) -> Self {
        let mut digits = Vec::with_capacity(sequence.len());
        let mut masks = Vec::new();
        let mut mask_start: Option<usize> = None;

        for (i, &byte) in sequence.iter().enumerate() {
            let digit = char_to_digit(byte);
            digits.push(digit);

            if !do_mask {
                continue;
            }
            match (mask_start, digit == N) {
                (None, true) => mask_start = Some(i),
                (Some(begin), false) => {
                    masks.push(Mask { begin, end: i - 1 });
                    mask_start = None;
                }
                _ => {}
            }
        }

        // Handle final mask if sequence ends with N's
        if let Some(begin) = mask_start {
            masks.push(Mask {
                begin,
                end: sequence.len() - 1,
            });
        }

        let gc_content = gc_fraction(&digits);
        debug!(
            length = digits.len(),
            gc_content,
            masks = masks.len(),
            "encoded sequence"
        );

        Self {
            digits,
            masks,
            gc_content,
        }
    }

    /// The digit buffer handed to the positional readers
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub fn into_digits(self) -> Vec<u8> {
        self.digits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Runs of unknown symbols, in sequence order
    #[must_use]
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    /// Fraction of positions counting towards GC (unknown symbols included)
    #[must_use]
    pub fn gc_content(&self) -> f64 {
        self.gc_content
    }

    #[must_use]
    pub fn is_a(&self, i: usize, strand: Strand) -> bool {
        is_a(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_g(&self, i: usize, strand: Strand) -> bool {
        is_g(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_c(&self, i: usize, strand: Strand) -> bool {
        is_c(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_t(&self, i: usize, strand: Strand) -> bool {
        is_t(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_n(&self, i: usize, strand: Strand) -> bool {
        is_n(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_gc(&self, i: usize, strand: Strand) -> bool {
        is_gc(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_atg(&self, i: usize, strand: Strand) -> bool {
        is_atg(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_gtg(&self, i: usize, strand: Strand) -> bool {
        is_gtg(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_ttg(&self, i: usize, strand: Strand) -> bool {
        is_ttg(&self.digits, i, strand)
    }

    #[must_use]
    pub fn is_start(&self, i: usize, code: GeneticCode, strand: Strand) -> bool {
        is_start(&self.digits, i, code, strand)
    }

    #[must_use]
    pub fn is_stop(&self, i: usize, code: GeneticCode, strand: Strand) -> bool {
        is_stop(&self.digits, i, code, strand)
    }

    #[must_use]
    pub fn classify_codon(&self, i: usize, code: GeneticCode, strand: Strand) -> Option<CodonType> {
        classify_codon(&self.digits, i, code, strand)
    }

    #[must_use]
    pub fn mer_index(&self, i: usize, length: usize, strand: Strand) -> usize {
        mer_index(&self.digits, i, length, strand)
    }
}

fn gc_fraction(digits: &[u8]) -> f64 {
    if digits.is_empty() {
        return 0.0;
    }
    let gc_count = (0..digits.len())
        .filter(|&i| is_gc(digits, i, Strand::Forward))
        .count();
    gc_count as f64 / digits.len() as f64
}

impl AsRef<[u8]> for DigitSequence {
    fn as_ref(&self) -> &[u8] {
        &self.digits
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.digits.iter().map(|&digit| letter(digit)).collect();
        f.write_str(&text)
    }
}

impl FromStr for DigitSequence {
    type Err = OrfeusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::without_masking(s.as_bytes()))
    }
}
