use std::fmt;

use bio::bio_types::strand::Strand as BioStrand;
use thiserror::Error;

use crate::algorithms::pruning::KernelBackend;
use crate::constants::{NODE_ATG, NODE_GTG, NODE_STOP, NODE_TTG, STRAND_FORWARD, STRAND_REVERSE};

/// Reading direction over a digit sequence.
///
/// The discriminants match the values stored in candidate-node strand
/// buffers, so a `Strand` can be written to one with `as i8`.
///
/// # Examples
///
/// ```rust
/// use orfeus_core::types::Strand;
///
/// assert_eq!(Strand::Forward as i8, 1);
/// assert_eq!(Strand::try_from(-1i8).unwrap(), Strand::Reverse);
/// assert!(Strand::try_from(0i8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Strand {
    /// Positions are read left to right
    Forward = STRAND_FORWARD,
    /// Positions are read right to left through the complement table
    Reverse = STRAND_REVERSE,
}

impl Strand {
    /// The opposite reading direction
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

impl TryFrom<i8> for Strand {
    type Error = OrfeusError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            STRAND_FORWARD => Ok(Self::Forward),
            STRAND_REVERSE => Ok(Self::Reverse),
            other => Err(OrfeusError::InvalidStrand(i64::from(other))),
        }
    }
}

impl TryFrom<i32> for Strand {
    type Error = OrfeusError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        i8::try_from(value)
            .map_err(|_| OrfeusError::InvalidStrand(i64::from(value)))
            .and_then(Self::try_from)
    }
}

impl TryFrom<BioStrand> for Strand {
    type Error = OrfeusError;

    fn try_from(value: BioStrand) -> Result<Self, Self::Error> {
        match value {
            BioStrand::Forward => Ok(Self::Forward),
            BioStrand::Reverse => Ok(Self::Reverse),
            BioStrand::Unknown => Err(OrfeusError::UnknownStrand),
        }
    }
}

impl From<Strand> for BioStrand {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => Self::Forward,
            Strand::Reverse => Self::Reverse,
        }
    }
}

/// Types of codons a candidate node can sit on.
///
/// Prokaryotic genes primarily use three start codons: ATG (most common),
/// GTG, and TTG. Stop codons close open reading frames.
///
/// # Examples
///
/// ```rust
/// use orfeus_core::types::CodonType;
///
/// let atg = CodonType::Atg;
/// assert_eq!(atg.to_index(), 0);
/// assert_eq!(CodonType::from_index(3), Some(CodonType::Stop));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonType {
    /// ATG start codon
    Atg,
    /// GTG start codon
    Gtg,
    /// TTG start codon
    Ttg,
    /// Stop codon (TAA, TAG, TGA or a code-specific variant)
    Stop,
}

impl CodonType {
    /// Convert codon type to the code stored in node type buffers
    #[must_use]
    pub const fn to_index(self) -> usize {
        self.to_code() as usize
    }

    #[must_use]
    pub const fn to_code(self) -> u8 {
        match self {
            Self::Atg => NODE_ATG,
            Self::Gtg => NODE_GTG,
            Self::Ttg => NODE_TTG,
            Self::Stop => NODE_STOP,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Atg),
            1 => Some(Self::Gtg),
            2 => Some(Self::Ttg),
            3 => Some(Self::Stop),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl fmt::Display for CodonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atg => write!(f, "ATG"),
            Self::Gtg => write!(f, "GTG"),
            Self::Ttg => write!(f, "TTG"),
            Self::Stop => write!(f, "Stop"),
        }
    }
}

/// Masked region covering a run of unknown nucleotides (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    /// Start position of the masked region
    pub begin: usize,
    /// End position of the masked region
    pub end: usize,
}

impl Mask {
    /// Number of masked positions; masks built by encoding cover at least one
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.begin + 1
        }
    }

    /// True only for a hand-built mask whose `end` precedes its `begin`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end < self.begin
    }

    /// Whether `position` falls inside the masked region
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.begin <= position && position <= self.end
    }
}

/// Errors reported by the validation layer that guards the hot primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrfeusError {
    /// Translation table outside the supported NCBI set
    #[error("Unsupported genetic code: {0}")]
    UnsupportedGeneticCode(i64),
    /// Strand value other than +1 or -1
    #[error("Invalid strand: {0}")]
    InvalidStrand(i64),
    /// Strand orientation is not known
    #[error("Unknown strand")]
    UnknownStrand,
    /// Raw digit buffer contains a code outside the alphabet
    #[error("Invalid digit {code:#05b} at position {position}")]
    InvalidDigit { position: usize, code: u8 },
    /// Sequence cannot hold a single window of the requested size
    #[error("Sequence too short: {length} bp cannot hold a {window} bp window")]
    SequenceTooShort { length: usize, window: usize },
    /// Window at the requested position runs past the sequence end
    #[error("Invalid position: {position} (window: {window}, sequence length: {length})")]
    PositionOutOfRange {
        position: usize,
        window: usize,
        length: usize,
    },
    /// Candidate-node attribute buffers disagree in length
    #[error("Node attribute length mismatch: {strands} strands, {types} types, {frames} frames")]
    AttributeLengthMismatch {
        strands: usize,
        types: usize,
        frames: usize,
    },
    /// Node type code is not a start or stop code
    #[error("Invalid node type {value} at node {index}")]
    InvalidNodeType { index: usize, value: u8 },
    /// Node frame is not in 0..3
    #[error("Invalid node frame {value} at node {index}")]
    InvalidFrame { index: usize, value: u8 },
    /// Node strand is not +1 or -1
    #[error("Invalid node strand {value} at node {index}")]
    InvalidNodeStrand { index: usize, value: i8 },
    /// k-mer length is zero or too long for an index
    #[error("Invalid k-mer length: {0}")]
    InvalidMerLength(usize),
    /// Input text could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Pruning backend is not available on this CPU
    #[error("Pruning backend {0} is not supported on this CPU")]
    UnsupportedBackend(KernelBackend),
}
