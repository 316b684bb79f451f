//! # Orfeus Core
//!
//! Nucleotide-level primitives for a prokaryotic gene-prediction engine:
//! digit encoding, start/stop classification under the NCBI genetic codes on
//! either strand, k-mer indexing, and a vectorised pruning kernel that flags
//! candidate-node connections the dynamic-programming scorer always rejects.
//!
//! ## Quick Start
//!
//! ```rust
//! use orfeus_core::config::ScanConfig;
//! use orfeus_core::sequence::window_positions;
//! use orfeus_core::types::{CodonType, Strand};
//!
//! let config = ScanConfig::default();
//! let code = config.genetic_code()?;
//! let sequence = config.encode(b"ATGAAATAAATG");
//!
//! let starts: Vec<usize> = window_positions(sequence.len(), 3)?
//!     .filter(|&i| sequence.is_start(i, code, Strand::Forward))
//!     .collect();
//! assert_eq!(starts, vec![0, 9]);
//! assert_eq!(
//!     sequence.classify_codon(6, code, Strand::Forward),
//!     Some(CodonType::Stop)
//! );
//! # Ok::<(), orfeus_core::types::OrfeusError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Scan settings validated once at setup
//! - [`constants`]: Digit alphabet, lookup tables and node codes
//! - [`genetic_code`]: Supported translation tables and their start/stop rules
//! - [`sequence`]: Encoding, positional readers, k-mer indexing, validation
//! - [`node`]: Candidate-node attribute buffers and connection shapes
//! - [`algorithms`]: The pruning kernel and its backends
//! - [`types`]: Strands, codon types and errors
//!
//! ## Error Handling
//!
//! Per-position readers and the pruning kernel never fail; their
//! preconditions are checked once by the boundary functions, which return
//! [`Result<T, OrfeusError>`](types::OrfeusError):
//!
//! - Unsupported genetic codes and strand values
//! - Digits outside the alphabet
//! - Scan windows that do not fit the sequence
//! - Malformed candidate-node buffers
//! - Forcing a pruning backend the CPU lacks

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod genetic_code;
pub mod node;
pub mod sequence;
pub mod types;

pub use algorithms::pruning::{KernelBackend, PruningKernel};
pub use config::ScanConfig;
pub use genetic_code::GeneticCode;
pub use sequence::encoded::DigitSequence;
pub use types::{CodonType, OrfeusError, Strand};
