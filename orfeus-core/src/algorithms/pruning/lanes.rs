use wide::{CmpEq, u8x16, u8x32};

use crate::constants::{NARROW_LANES, SCALAR_LANES, WIDE_LANES};

/// Byte-lane vector operations the skip kernel is written against.
///
/// Comparisons produce `0xFF` in matching lanes and `0x00` elsewhere, so their
/// results can be combined directly with the bitwise operations.
pub trait Lanes: Copy {
    /// Number of nodes evaluated per batch
    const LANES: usize;

    /// Load the first `LANES` bytes of `src`
    fn load(src: &[u8]) -> Self;

    /// Store into the first `LANES` bytes of `dst`
    fn store(self, dst: &mut [u8]);

    /// Broadcast one byte to every lane
    fn splat(value: u8) -> Self;

    fn or(self, rhs: Self) -> Self;

    fn and(self, rhs: Self) -> Self;

    /// `self & !rhs`
    fn and_not(self, rhs: Self) -> Self;

    /// Lane-wise equality mask
    fn equals(self, rhs: Self) -> Self;
}

impl Lanes for u8x32 {
    const LANES: usize = WIDE_LANES;

    #[inline(always)]
    fn load(src: &[u8]) -> Self {
        let mut lanes = [0u8; WIDE_LANES];
        lanes.copy_from_slice(&src[..WIDE_LANES]);
        Self::from(lanes)
    }

    #[inline(always)]
    fn store(self, dst: &mut [u8]) {
        let lanes: [u8; WIDE_LANES] = self.into();
        dst[..WIDE_LANES].copy_from_slice(&lanes);
    }

    #[inline(always)]
    fn splat(value: u8) -> Self {
        u8x32::splat(value)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        self & (rhs ^ u8x32::splat(u8::MAX))
    }

    #[inline(always)]
    fn equals(self, rhs: Self) -> Self {
        self.cmp_eq(rhs)
    }
}

impl Lanes for u8x16 {
    const LANES: usize = NARROW_LANES;

    #[inline(always)]
    fn load(src: &[u8]) -> Self {
        let mut lanes = [0u8; NARROW_LANES];
        lanes.copy_from_slice(&src[..NARROW_LANES]);
        bytemuck::cast(lanes)
    }

    #[inline(always)]
    fn store(self, dst: &mut [u8]) {
        let lanes: [u8; NARROW_LANES] = bytemuck::cast(self);
        dst[..NARROW_LANES].copy_from_slice(&lanes);
    }

    #[inline(always)]
    fn splat(value: u8) -> Self {
        u8x16::splat(value)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        self & (rhs ^ u8x16::splat(u8::MAX))
    }

    #[inline(always)]
    fn equals(self, rhs: Self) -> Self {
        self.cmp_eq(rhs)
    }
}

/// Single-lane policy, used on CPUs without a vector unit and for batch tails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar(pub u8);

impl Lanes for Scalar {
    const LANES: usize = SCALAR_LANES;

    #[inline(always)]
    fn load(src: &[u8]) -> Self {
        Self(src[0])
    }

    #[inline(always)]
    fn store(self, dst: &mut [u8]) {
        dst[0] = self.0;
    }

    #[inline(always)]
    fn splat(value: u8) -> Self {
        Self(value)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }

    #[inline(always)]
    fn equals(self, rhs: Self) -> Self {
        Self(if self.0 == rhs.0 { u8::MAX } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<V: Lanes>(input: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; V::LANES];
        V::load(input).store(&mut out);
        out
    }

    fn ops<V: Lanes>(a: &[u8], b: &[u8]) -> [Vec<u8>; 4] {
        let (x, y) = (V::load(a), V::load(b));
        let mut results: [Vec<u8>; 4] = std::array::from_fn(|_| vec![0u8; V::LANES]);
        x.or(y).store(&mut results[0]);
        x.and(y).store(&mut results[1]);
        x.and_not(y).store(&mut results[2]);
        x.equals(y).store(&mut results[3]);
        results
    }

    #[test]
    fn test_load_store() {
        let input: Vec<u8> = (0..40).collect();
        assert_eq!(roundtrip::<u8x32>(&input), input[..32].to_vec());
        assert_eq!(roundtrip::<u8x16>(&input), input[..16].to_vec());
        assert_eq!(roundtrip::<Scalar>(&input), vec![0]);
    }

    #[test]
    fn test_policies_agree_lane_by_lane() {
        let a: Vec<u8> = (0..32u8).map(|k| k.wrapping_mul(37) ^ 0x5A).collect();
        let b: Vec<u8> = (0..32u8).map(|k| if k % 3 == 0 { a[k as usize] } else { k }).collect();

        let wide = ops::<u8x32>(&a, &b);
        let narrow = ops::<u8x16>(&a, &b);
        for lane in 0..32 {
            let scalar = ops::<Scalar>(&a[lane..], &b[lane..]);
            for op in 0..4 {
                assert_eq!(wide[op][lane], scalar[op][0], "op {op} lane {lane}");
                if lane < 16 {
                    assert_eq!(narrow[op][lane], scalar[op][0], "op {op} lane {lane}");
                }
            }
        }
    }

    #[test]
    fn test_equality_mask() {
        assert_eq!(Scalar(3).equals(Scalar(3)), Scalar(0xFF));
        assert_eq!(Scalar(3).equals(Scalar(2)), Scalar(0));
        assert_eq!(Scalar(0b1100).and_not(Scalar(0b0100)), Scalar(0b1000));
    }
}
