mod common;

use common::{both_strands, reverse_complement};
use orfeus_core::algorithms::pruning::{KernelBackend, PruningKernel, Scalar, skippable, skippable_with};
use orfeus_core::constants::{A, C, G, N, T};
use orfeus_core::node::{NodeAttributes, is_skippable};
use orfeus_core::sequence::{
    background_mer_frequencies, complement, encode, is_gc, is_start, is_stop, mer_index,
};
use orfeus_core::{GeneticCode, Strand};
use proptest::prelude::*;
use wide::{u8x16, u8x32};

#[test]
fn test_complement_involution() {
    for digit in [A, G, C, T] {
        assert_eq!(complement(complement(digit)), digit);
        assert_ne!(complement(digit), digit);
    }
    assert_eq!(complement(N), N);
}

/// Parallel node arrays with `min <= i < len`
fn node_window() -> impl Strategy<Value = (Vec<i8>, Vec<u8>, Vec<u8>, usize, usize)> {
    (1usize..160).prop_flat_map(|len| {
        (
            prop::collection::vec(prop::sample::select(vec![1i8, -1]), len),
            prop::collection::vec(0u8..4, len),
            prop::collection::vec(0u8..3, len),
            0..len,
        )
            .prop_flat_map(|(strands, types, frames, i)| {
                (Just(strands), Just(types), Just(frames), 0..=i, Just(i))
            })
    })
}

fn flags_with<F>(nodes: &NodeAttributes<'_>, min: usize, i: usize, run: F) -> Vec<u8>
where
    F: Fn(&NodeAttributes<'_>, usize, usize, &mut [u8]),
{
    let mut skip = vec![0xEE; i - min];
    run(nodes, min, i, &mut skip);
    skip
}

proptest! {
    /// Property: reading the reverse strand equals reading the reverse complement forward
    #[test]
    fn prop_strand_symmetry(seq in "[ACGTN]{3,80}") {
        let (forward, reverse) = both_strands(seq.as_bytes());
        let last = forward.len() - 3;
        for code in GeneticCode::all() {
            for i in 0..=last {
                prop_assert_eq!(
                    is_start(&forward, i, code, Strand::Reverse),
                    is_start(&reverse, i, code, Strand::Forward)
                );
                prop_assert_eq!(
                    is_stop(&forward, i, code, Strand::Reverse),
                    is_stop(&reverse, i, code, Strand::Forward)
                );
                prop_assert_eq!(
                    is_start(&forward, i, code, Strand::Forward),
                    is_start(&reverse, i, code, Strand::Reverse)
                );
            }
        }
    }

    /// Property: GC membership is strand independent, N included
    #[test]
    fn prop_gc_strand_independent(seq in "[ACGTN]{1,60}") {
        let digits = encode(seq.as_bytes());
        let len = digits.len();
        for i in 0..len {
            prop_assert_eq!(
                is_gc(&digits, i, Strand::Forward),
                is_gc(&digits, len - 1 - i, Strand::Reverse)
            );
        }
    }

    /// Property: N packs into a k-mer index exactly like C on the strand being read
    #[test]
    fn prop_mer_index_n_aliasing(seq in "[ACGTN]{1,31}") {
        let digits = encode(seq.as_bytes());
        let as_c = encode(seq.replace('N', "C").as_bytes());
        // the reverse strand reads the complement, so a forward G reads as C
        let as_g = encode(seq.replace('N', "G").as_bytes());
        let len = digits.len();
        prop_assert_eq!(
            mer_index(&digits, 0, len, Strand::Forward),
            mer_index(&as_c, 0, len, Strand::Forward)
        );
        prop_assert_eq!(
            mer_index(&digits, 0, len, Strand::Reverse),
            mer_index(&as_g, 0, len, Strand::Reverse)
        );
    }

    /// Property: background frequencies are symmetric under reverse complement
    #[test]
    fn prop_background_symmetric(seq in "[ACGT]{4,120}", k in 1usize..5) {
        let frequencies = background_mer_frequencies(&encode(seq.as_bytes()), k).unwrap();
        let total: f64 = frequencies.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);

        let flipped = background_mer_frequencies(&encode(&reverse_complement(seq.as_bytes())), k)
            .unwrap();
        for (a, b) in frequencies.iter().zip(&flipped) {
            prop_assert!((a - b).abs() < 1e-12);
        }
    }

    /// Property: every width produces the flags of the node-by-node predicate
    #[test]
    fn prop_width_invariance((strands, types, frames, min, i) in node_window()) {
        let nodes = NodeAttributes::new(&strands, &types, &frames).unwrap();
        let expected: Vec<u8> = (min..i)
            .map(|j| u8::from(is_skippable(nodes.node(j), nodes.node(i))))
            .collect();

        prop_assert_eq!(&flags_with(&nodes, min, i, skippable_with::<u8x32>), &expected);
        prop_assert_eq!(&flags_with(&nodes, min, i, skippable_with::<u8x16>), &expected);
        prop_assert_eq!(&flags_with(&nodes, min, i, skippable_with::<Scalar>), &expected);
        prop_assert_eq!(&flags_with(&nodes, min, i, skippable), &expected);

        for backend in KernelBackend::ALL {
            if let Ok(kernel) = PruningKernel::new(backend) {
                let flags = flags_with(&nodes, min, i, |n, lo, hi, out| kernel.skippable(n, lo, hi, out));
                prop_assert_eq!(&flags, &expected);
            }
        }
    }
}
