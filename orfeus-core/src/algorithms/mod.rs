//! Algorithms run over candidate nodes before the gene scorer sees them.
//!
//! ## Modules
//!
//! - [`pruning`]: Width-generic skip kernel with runtime backend selection
//!
//! For every target node `i`, the scorer would otherwise score a connection
//! from every earlier node `j` in its window. Most of those connections have a
//! shape the scorer always rejects (a start followed by a start on the same
//! strand, a gene changing frame between start and stop, ...). The pruning
//! kernel flags them in one vectorised pass so the scorer only visits the rest:
//!
//! ```text
//! for j in min..i {
//!     if skip[j - min] == 0 {
//!         score_connection(j, i);
//!     }
//! }
//! ```

pub mod pruning;
