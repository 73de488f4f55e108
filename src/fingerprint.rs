use core::fmt;

use crate::poly::Poly;

/// A 64-bit Rabin fingerprint in its canonical 8-byte form.
///
/// Bytes 0..4 hold the low half and bytes 4..8 the high half, both
/// little-endian, on every host. Equality, ordering and hashing all work on
/// these bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fingerprint([u8; 8]);

impl Fingerprint {
    /// The all-zero fingerprint. A buffer only reduces to it when its
    /// polynomial, with the leading one, is a multiple of the modulus, which is
    /// unlikely for real data but not impossible.
    pub const ZERO: Fingerprint = Fingerprint([0; 8]);

    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 8] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// The canonical bytes read as a little-endian integer.
    pub const fn to_u64(self) -> u64 {
        self.to_poly().to_u64()
    }

    pub const fn from_u64(v: u64) -> Self {
        Self::from_poly(Poly::from_u64(v))
    }

    #[inline(always)]
    pub(crate) const fn from_poly(p: Poly) -> Self {
        Self(p.to_bytes())
    }

    #[inline(always)]
    pub(crate) const fn to_poly(self) -> Poly {
        Poly::from_bytes(self.0)
    }
}

impl From<[u8; 8]> for Fingerprint {
    fn from(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }
}

impl From<Fingerprint> for [u8; 8] {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:x})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_canonical_bytes_in_order() {
        let fp = Fingerprint::from_bytes([0x79, 0x62, 0xbf, 0x45, 0xa3, 0x53, 0xb2, 0x2b]);
        assert_eq!(fp.to_string(), "7962bf45a353b22b");
        assert_eq!(format!("{:?}", fp), "Fingerprint(7962bf45a353b22b)");
    }

    #[test]
    fn integral_view_matches_poly_halves() {
        let fp = Fingerprint::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
        let p = fp.to_poly();
        assert_eq!((p.lo, p.hi), (0x0403_0201, 0x0807_0605));
        assert_eq!(fp.to_u64(), p.to_u64());
        assert_eq!(Fingerprint::from_u64(fp.to_u64()), fp);
        assert_eq!(Fingerprint::from_poly(p), fp);
    }

    #[test]
    fn a_multiple_of_the_modulus_reduces_to_zero() {
        let engine = crate::Rabin64::new().unwrap();
        let data = crate::reference::REDUCTION.to_le_bytes();
        assert_eq!(engine.from_buffer(data), Fingerprint::ZERO);
        assert_ne!(engine.from_buffer(b"not a multiple"), Fingerprint::ZERO);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Fingerprint::default(), Fingerprint::ZERO);
        assert_eq!(<[u8; 8]>::from(Fingerprint::ZERO), [0; 8]);
    }
}
