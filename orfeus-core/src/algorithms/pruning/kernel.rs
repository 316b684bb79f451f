use crate::algorithms::pruning::lanes::{Lanes, Scalar};
use crate::constants::{NODE_STOP, STRAND_FORWARD, STRAND_REVERSE};
use crate::node::NodeAttributes;

#[inline(always)]
const fn mask(condition: bool) -> u8 {
    if condition { u8::MAX } else { 0 }
}

/// Target-node attributes broadcast once and reused for every batch
#[derive(Clone, Copy)]
struct Target<V> {
    strand: V,
    frame: V,
    start: V,
    reverse: V,
    forward: V,
    forward_stop: V,
    reverse_start: V,
}

impl<V: Lanes> Target<V> {
    #[inline(always)]
    fn new(nodes: &NodeAttributes<'_>, i: usize) -> Self {
        let strand = nodes.strands()[i];
        let is_stop = nodes.types()[i] == NODE_STOP;
        let is_forward = strand == STRAND_FORWARD;

        Self {
            strand: V::splat(strand as u8),
            frame: V::splat(nodes.frames()[i]),
            start: V::splat(mask(!is_stop)),
            reverse: V::splat(mask(!is_forward)),
            forward: V::splat(mask(is_forward)),
            forward_stop: V::splat(mask(is_forward && is_stop)),
            reverse_start: V::splat(mask(!is_forward && !is_stop)),
        }
    }

    /// Flags for predecessors `start..start + V::LANES`, written to `skip[..V::LANES]`
    #[inline(always)]
    fn evaluate(&self, nodes: &NodeAttributes<'_>, start: usize, skip: &mut [u8]) {
        let strands = V::load(bytemuck::cast_slice(&nodes.strands()[start..]));
        let types = V::load(&nodes.types()[start..]);
        let frames = V::load(&nodes.frames()[start..]);

        let forward = strands.equals(V::splat(STRAND_FORWARD as u8));
        let reverse = strands.equals(V::splat(STRAND_REVERSE as u8));
        let stop = types.equals(V::splat(NODE_STOP));
        let same_strand = strands.equals(self.strand);
        let same_frame = frames.equals(self.frame);

        let forward_start = forward.and_not(stop);
        let reverse_start = reverse.and_not(stop);
        let reverse_stop = reverse.and(stop);

        // start followed by start on one strand
        let mut flags = same_strand.and_not(stop).and(self.start);
        // forward start running into the other strand
        flags = flags.or(forward_start.and(self.reverse));
        // reverse stop followed by anything forward
        flags = flags.or(reverse_stop.and(self.forward));
        // reverse start closed by a forward stop
        flags = flags.or(reverse_start.and(self.forward_stop));
        // genes cannot change frame between their two ends
        flags = flags.or(forward_start.and_not(same_frame).and(self.forward_stop));
        flags = flags.or(reverse_stop.and_not(same_frame).and(self.reverse_start));

        flags.and(V::splat(1)).store(skip);
    }
}

/// Evaluate one batch of `V::LANES` predecessors against target node `i`.
///
/// Writes `skip[k] = 1` when the connection from node `start + k` to node `i`
/// is one the scorer always rejects, `0` otherwise.
///
/// Preconditions: `i < nodes.len()`, `start + V::LANES <= nodes.len()` and
/// `skip.len() >= V::LANES`.
#[inline(always)]
pub fn compute_skip<V: Lanes>(nodes: &NodeAttributes<'_>, i: usize, start: usize, skip: &mut [u8]) {
    debug_assert!(i < nodes.len());
    debug_assert!(start + V::LANES <= nodes.len());
    debug_assert!(skip.len() >= V::LANES);
    Target::<V>::new(nodes, i).evaluate(nodes, start, skip);
}

/// Fill `skip[j - min]` for every predecessor `j` in `min..i` of node `i`.
///
/// Full batches go through `V`; the remaining `(i - min) % V::LANES`
/// predecessors go through the scalar policy, so the output does not depend
/// on `V`.
///
/// Preconditions: `min <= i < nodes.len()` and `skip.len() >= i - min`.
#[inline(always)]
pub fn skippable_with<V: Lanes>(
    nodes: &NodeAttributes<'_>,
    min: usize,
    i: usize,
    skip: &mut [u8],
) {
    debug_assert!(min <= i && i < nodes.len());
    debug_assert!(skip.len() >= i - min);

    let mut j = min;
    if V::LANES > 1 {
        let batch = Target::<V>::new(nodes, i);
        while j + V::LANES <= i {
            batch.evaluate(nodes, j, &mut skip[j - min..]);
            j += V::LANES;
        }
    }

    let tail = Target::<Scalar>::new(nodes, i);
    while j < i {
        tail.evaluate(nodes, j, &mut skip[j - min..]);
        j += 1;
    }
}
