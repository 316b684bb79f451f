#![allow(dead_code)]

use orfeus_core::GeneticCode;
use orfeus_core::sequence::encode;

/// Genetic code for a table number known to be supported
pub fn code(table: u8) -> GeneticCode {
    GeneticCode::try_from(table).unwrap()
}

/// Reverse complement of a letter sequence, anything unknown becoming N
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence
        .iter()
        .rev()
        .map(|&base| match base.to_ascii_uppercase() {
            b'A' => b'T',
            b'T' | b'U' => b'A',
            b'G' => b'C',
            b'C' => b'G',
            _ => b'N',
        })
        .collect()
}

/// Encoded sequence and the encoding of its reverse complement
pub fn both_strands(sequence: &[u8]) -> (Vec<u8>, Vec<u8>) {
    (encode(sequence), encode(&reverse_complement(sequence)))
}
