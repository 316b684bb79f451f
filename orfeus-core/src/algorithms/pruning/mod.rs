//! Skip kernel for candidate-node connections.
//!
//! The predicate is written once, in [`kernel`], against the [`Lanes`]
//! vector policy and instantiated for 32 lanes (`u8x32`, AVX2), 16 lanes
//! (`u8x16`, SSE2 or NEON) and a single [`Scalar`] lane. [`PruningKernel`]
//! binds one instantiation after checking the CPU supports it; [`skippable`]
//! goes through a process-wide kernel probed once on first use.
//!
//! Every instantiation produces the same flags as
//! [`crate::node::is_skippable`] applied node by node.
//!
//! ```rust
//! use orfeus_core::algorithms::pruning::skippable;
//! use orfeus_core::node::NodeBuffers;
//! use orfeus_core::types::{CodonType, Strand};
//!
//! let mut buffers = NodeBuffers::new();
//! buffers.push(Strand::Forward, CodonType::Atg, 0);
//! buffers.push(Strand::Forward, CodonType::Atg, 4);
//! buffers.push(Strand::Forward, CodonType::Stop, 9);
//! let nodes = buffers.as_attributes();
//!
//! let mut skip = [0u8; 2];
//! skippable(&nodes, 0, 2, &mut skip);
//! // the start at 4 is in another frame than the stop at 9
//! assert_eq!(skip, [0, 1]);
//! ```

pub mod dispatch;
pub mod kernel;
pub mod lanes;

pub use dispatch::{KernelBackend, PruningKernel, skippable};
pub use kernel::{compute_skip, skippable_with};
pub use lanes::{Lanes, Scalar};
