use core::ops::BitXor;

/// A polynomial of degree < 64 over GF(2), kept as two 32-bit halves.
///
/// Coefficients are stored reflected: bit 63 of `lo | hi << 32` is the
/// x^0 coefficient and bit 0 is the x^63 coefficient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Poly {
    pub(crate) lo: u32,
    pub(crate) hi: u32,
}

impl Poly {
    pub(crate) const ONE: Poly = Poly::new(0, 0x8000_0000);

    #[inline(always)]
    pub(crate) const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    #[inline(always)]
    pub(crate) const fn to_bytes(self) -> [u8; 8] {
        let lo = self.lo.to_le_bytes();
        let hi = self.hi.to_le_bytes();
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }

    #[inline(always)]
    pub(crate) const fn from_bytes(b: [u8; 8]) -> Self {
        Self {
            lo: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            hi: u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
        }
    }

    #[inline(always)]
    pub(crate) const fn to_u64(self) -> u64 {
        (self.lo as u64) | ((self.hi as u64) << 32)
    }

    #[inline(always)]
    pub(crate) const fn from_u64(v: u64) -> Self {
        Self::new(v as u32, (v >> 32) as u32)
    }
}

impl BitXor for Poly {
    type Output = Poly;

    #[inline(always)]
    fn bitxor(self, rhs: Poly) -> Poly {
        Poly::new(self.lo ^ rhs.lo, self.hi ^ rhs.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_layout_is_little_endian_halves() {
        let p = Poly::new(0x0403_0201, 0x0807_0605);
        assert_eq!(p.to_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Poly::from_bytes(p.to_bytes()), p);
        assert_eq!(p.to_u64(), u64::from_le_bytes(p.to_bytes()));
        assert_eq!(Poly::from_u64(p.to_u64()), p);
    }

    #[test]
    fn one_sets_only_the_top_bit() {
        assert_eq!(Poly::ONE.to_u64(), 1 << 63);
        assert_eq!(Poly::ONE.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 0x80]);
    }

    #[test]
    fn xor_is_addition() {
        let a = Poly::new(0xdead_beef, 0x0123_4567);
        assert_eq!(a ^ a, Poly::default());
        assert_eq!(a ^ Poly::default(), a);
    }
}
