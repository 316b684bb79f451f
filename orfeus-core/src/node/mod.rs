//! Candidate-node attributes exchanged with the dynamic-programming scorer.
//!
//! The ORF scanner produces one candidate node per start or stop codon. The
//! pruning kernel only needs three bytes per node, stored as parallel arrays
//! so they can be loaded straight into vector registers:
//!
//! - strand: `1` (forward) or `-1` (reverse)
//! - type: `0` ATG, `1` GTG, `2` TTG, `3` stop
//! - frame: codon position modulo 3
//!
//! ```rust
//! use orfeus_core::node::NodeBuffers;
//! use orfeus_core::types::{CodonType, Strand};
//!
//! let mut buffers = NodeBuffers::with_capacity(2);
//! buffers.push(Strand::Forward, CodonType::Atg, 10);
//! buffers.push(Strand::Forward, CodonType::Stop, 91);
//!
//! let nodes = buffers.as_attributes();
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(nodes.frames(), &[1, 1]);
//! ```

pub mod connection;

pub use connection::{ConnectionType, determine_connection_type, is_skippable};

use crate::constants::{NODE_STOP, READING_FRAMES, STRAND_FORWARD, STRAND_REVERSE};
use crate::types::{CodonType, OrfeusError, Strand};

/// The attributes of one candidate node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateNode {
    pub strand: Strand,
    pub codon_type: CodonType,
    /// Reading frame, `index % 3` of the codon position
    pub frame: u8,
}

impl CandidateNode {
    #[must_use]
    pub const fn new(strand: Strand, codon_type: CodonType, index: usize) -> Self {
        Self {
            strand,
            codon_type,
            frame: (index % READING_FRAMES) as u8,
        }
    }
}

/// Borrowed, validated view over the three parallel attribute arrays
#[derive(Debug, Clone, Copy)]
pub struct NodeAttributes<'a> {
    strands: &'a [i8],
    types: &'a [u8],
    frames: &'a [u8],
}

impl<'a> NodeAttributes<'a> {
    /// Check the buffers once before handing them to the pruning kernel
    pub fn new(strands: &'a [i8], types: &'a [u8], frames: &'a [u8]) -> Result<Self, OrfeusError> {
        if strands.len() != types.len() || strands.len() != frames.len() {
            return Err(OrfeusError::AttributeLengthMismatch {
                strands: strands.len(),
                types: types.len(),
                frames: frames.len(),
            });
        }
        if let Some(index) = strands
            .iter()
            .position(|&s| s != STRAND_FORWARD && s != STRAND_REVERSE)
        {
            return Err(OrfeusError::InvalidNodeStrand {
                index,
                value: strands[index],
            });
        }
        if let Some(index) = types.iter().position(|&t| t > NODE_STOP) {
            return Err(OrfeusError::InvalidNodeType {
                index,
                value: types[index],
            });
        }
        if let Some(index) = frames.iter().position(|&f| usize::from(f) >= READING_FRAMES) {
            return Err(OrfeusError::InvalidFrame {
                index,
                value: frames[index],
            });
        }
        Ok(Self::new_unchecked(strands, types, frames))
    }

    const fn new_unchecked(strands: &'a [i8], types: &'a [u8], frames: &'a [u8]) -> Self {
        Self {
            strands,
            types,
            frames,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.strands.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    #[must_use]
    pub const fn strands(&self) -> &'a [i8] {
        self.strands
    }

    #[must_use]
    pub const fn types(&self) -> &'a [u8] {
        self.types
    }

    #[must_use]
    pub const fn frames(&self) -> &'a [u8] {
        self.frames
    }

    /// Attributes of node `k`
    #[must_use]
    pub fn node(&self, k: usize) -> CandidateNode {
        let strand = if self.strands[k] == STRAND_FORWARD {
            Strand::Forward
        } else {
            Strand::Reverse
        };
        let codon_type = match self.types[k] {
            0 => CodonType::Atg,
            1 => CodonType::Gtg,
            2 => CodonType::Ttg,
            _ => CodonType::Stop,
        };
        CandidateNode {
            strand,
            codon_type,
            frame: self.frames[k],
        }
    }
}

/// Owned attribute buffers, filled node by node by the scanner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeBuffers {
    strands: Vec<i8>,
    types: Vec<u8>,
    frames: Vec<u8>,
}

impl NodeBuffers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            strands: Vec::with_capacity(capacity),
            types: Vec::with_capacity(capacity),
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Append the node for a codon at sequence position `index`
    pub fn push(&mut self, strand: Strand, codon_type: CodonType, index: usize) {
        self.push_node(CandidateNode::new(strand, codon_type, index));
    }

    pub fn push_node(&mut self, node: CandidateNode) {
        self.strands.push(node.strand as i8);
        self.types.push(node.codon_type.to_code());
        self.frames.push(node.frame);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    pub fn clear(&mut self) {
        self.strands.clear();
        self.types.clear();
        self.frames.clear();
    }

    /// View the buffers as kernel input; they are valid by construction
    #[must_use]
    pub fn as_attributes(&self) -> NodeAttributes<'_> {
        NodeAttributes::new_unchecked(&self.strands, &self.types, &self.frames)
    }
}

impl FromIterator<CandidateNode> for NodeBuffers {
    fn from_iter<I: IntoIterator<Item = CandidateNode>>(iter: I) -> Self {
        let mut buffers = Self::new();
        for node in iter {
            buffers.push_node(node);
        }
        buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_node_frame() {
        assert_eq!(CandidateNode::new(Strand::Forward, CodonType::Atg, 0).frame, 0);
        assert_eq!(CandidateNode::new(Strand::Forward, CodonType::Atg, 4).frame, 1);
        assert_eq!(CandidateNode::new(Strand::Reverse, CodonType::Stop, 101).frame, 2);
    }

    #[test]
    fn test_buffers_layout() {
        let mut buffers = NodeBuffers::new();
        buffers.push(Strand::Forward, CodonType::Gtg, 3);
        buffers.push(Strand::Reverse, CodonType::Stop, 8);
        let nodes = buffers.as_attributes();
        assert_eq!(nodes.strands(), &[1, -1]);
        assert_eq!(nodes.types(), &[1, 3]);
        assert_eq!(nodes.frames(), &[0, 2]);
        assert_eq!(
            nodes.node(1),
            CandidateNode {
                strand: Strand::Reverse,
                codon_type: CodonType::Stop,
                frame: 2
            }
        );
    }

    #[test]
    fn test_buffers_clear_and_collect() {
        let mut buffers: NodeBuffers = (0..5)
            .map(|i| CandidateNode::new(Strand::Forward, CodonType::Ttg, i))
            .collect();
        assert_eq!(buffers.len(), 5);
        assert_eq!(buffers.as_attributes().frames(), &[0, 1, 2, 0, 1]);
        buffers.clear();
        assert!(buffers.is_empty());
    }

    #[test]
    fn test_attributes_validation() {
        assert!(NodeAttributes::new(&[1, -1], &[0, 3], &[0, 2]).is_ok());
        assert_eq!(
            NodeAttributes::new(&[1, -1], &[0], &[0, 2]).unwrap_err(),
            OrfeusError::AttributeLengthMismatch {
                strands: 2,
                types: 1,
                frames: 2
            }
        );
        assert_eq!(
            NodeAttributes::new(&[1, 0], &[0, 3], &[0, 2]).unwrap_err(),
            OrfeusError::InvalidNodeStrand { index: 1, value: 0 }
        );
        assert_eq!(
            NodeAttributes::new(&[1, 1], &[4, 3], &[0, 2]).unwrap_err(),
            OrfeusError::InvalidNodeType { index: 0, value: 4 }
        );
        assert_eq!(
            NodeAttributes::new(&[1, 1], &[0, 3], &[0, 3]).unwrap_err(),
            OrfeusError::InvalidFrame { index: 1, value: 3 }
        );
    }
}
