use crate::node::CandidateNode;
use crate::types::Strand;

/// Represents the type of connection between two nodes in the gene prediction graph
///
/// `left` always precedes `right` in sequence order.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ConnectionType {
    /// 5' forward start -> 3' forward stop (normal gene)
    ForwardGene,
    /// 3' reverse stop -> 5' reverse start (reverse gene)
    ReverseGene,
    /// 3' forward stop -> 5' forward start (intergenic region)
    ForwardIntergenic,
    /// 5' reverse start -> 3' reverse stop (reverse intergenic region)
    ReverseIntergenic,
    /// 3' forward stop -> 3' reverse stop (triple overlap case)
    TripleOverlap,
    /// 3' forward stop -> 3' forward stop (forward operon)
    ForwardOperon,
    /// 3' reverse stop -> 3' reverse stop (reverse operon)
    ReverseOperon,
    /// 3' forward stop -> 5' reverse start (overlapping opposite strands)
    OverlappingOpposite,
    /// 5' reverse start -> 5' forward start
    FiveReverseToFiveForward,
    /// Connection the scorer never accepts
    Invalid,
}

/// Determines the type of connection between two nodes based on their strand, codon type and frame
#[must_use]
pub fn determine_connection_type(left: CandidateNode, right: CandidateNode) -> ConnectionType {
    use Strand::*;

    let left_is_stop = left.codon_type.is_stop();
    let right_is_stop = right.codon_type.is_stop();

    // a gene cannot change frame between its start and its stop
    if left.strand == right.strand && left.frame != right.frame {
        if left.strand == Forward && !left_is_stop && right_is_stop {
            return ConnectionType::Invalid;
        }
        if left.strand == Reverse && left_is_stop && !right_is_stop {
            return ConnectionType::Invalid;
        }
    }

    match (left.strand, left_is_stop, right.strand, right_is_stop) {
        (Forward, false, Forward, true) => ConnectionType::ForwardGene,
        (Reverse, true, Reverse, false) => ConnectionType::ReverseGene,
        (Forward, true, Forward, false) => ConnectionType::ForwardIntergenic,
        (Reverse, false, Reverse, true) => ConnectionType::ReverseIntergenic,
        (Forward, true, Reverse, true) => ConnectionType::TripleOverlap,
        (Forward, true, Forward, true) => ConnectionType::ForwardOperon,
        (Reverse, true, Reverse, true) => ConnectionType::ReverseOperon,
        (Forward, true, Reverse, false) => ConnectionType::OverlappingOpposite,
        (Reverse, false, Forward, false) => ConnectionType::FiveReverseToFiveForward,
        _ => ConnectionType::Invalid,
    }
}

/// Whether the scorer can skip the connection from `left` to `right`.
///
/// This is the reference definition the vectorised pruning kernel must
/// reproduce lane for lane.
#[inline]
#[must_use]
pub fn is_skippable(left: CandidateNode, right: CandidateNode) -> bool {
    determine_connection_type(left, right) == ConnectionType::Invalid
}
