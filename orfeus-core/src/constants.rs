// =============================================================================
// Digit alphabet
// =============================================================================

/// Digit code for adenine
pub const A: u8 = 0b000;

/// Digit code for guanine
pub const G: u8 = 0b001;

/// Digit code for cytosine
pub const C: u8 = 0b010;

/// Digit code for thymine (and uracil)
pub const T: u8 = 0b011;

/// Digit code for any unresolved symbol
pub const N: u8 = 0b110;

/// Number of entries in the digit lookup tables (`N + 1`)
pub const DIGIT_TABLE_SIZE: usize = N as usize + 1;

/// Complement of every digit code.
///
/// The two reserved codes between `T` and `N` map to `N`.
pub const COMPLEMENT: [u8; DIGIT_TABLE_SIZE] = [T, C, G, A, N, N, N];

/// Letter for every digit code, used when decoding.
pub const LETTERS: [char; DIGIT_TABLE_SIZE] = ['A', 'G', 'C', 'T', 'N', 'N', 'N'];

/// Letters in 2-bit order, used to decode k-mer indices
pub const MER_LETTERS: [char; 4] = ['A', 'G', 'C', 'T'];

/// Mask keeping the two low bits of a digit when packing k-mers
pub const MER_DIGIT_MASK: u8 = 0b11;

// =============================================================================
// Codons and k-mers
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Number of reading frames per strand
pub const READING_FRAMES: usize = 3;

/// Longest k-mer whose index fits in a 64-bit `usize`
pub const MAX_MER_LENGTH: usize = 31;

/// Longest k-mer accepted for background frequency tables (4^12 entries)
pub const MAX_BACKGROUND_MER_LENGTH: usize = 12;

/// Minimum number of windows handed to a single rayon task
pub const MER_COUNT_CHUNK_SIZE: usize = 1000;

// =============================================================================
// Genetic codes
// =============================================================================

/// Genetic code used when none is configured (bacteria, archaea and plastids)
pub const DEFAULT_TRANSLATION_TABLE: u8 = 11;

/// Every NCBI translation table the classifier knows about
pub const SUPPORTED_TRANSLATION_TABLES: [u8; 19] = [
    1, 2, 3, 4, 5, 6, 9, 10, 11, 12, 13, 14, 15, 16, 21, 22, 23, 24, 25,
];

// =============================================================================
// Candidate nodes
// =============================================================================

/// Node type code for an ATG start
pub const NODE_ATG: u8 = 0;

/// Node type code for a GTG start
pub const NODE_GTG: u8 = 1;

/// Node type code for a TTG start
pub const NODE_TTG: u8 = 2;

/// Node type code for a stop codon
pub const NODE_STOP: u8 = 3;

/// Strand code stored in node attribute buffers for the forward strand
pub const STRAND_FORWARD: i8 = 1;

/// Strand code stored in node attribute buffers for the reverse strand
pub const STRAND_REVERSE: i8 = -1;

// =============================================================================
// Pruning kernel widths
// =============================================================================

/// Lanes processed per call by the 256-bit kernel
pub const WIDE_LANES: usize = 32;

/// Lanes processed per call by the 128-bit kernels
pub const NARROW_LANES: usize = 16;

/// Lanes processed per call by the scalar fallback
pub const SCALAR_LANES: usize = 1;
