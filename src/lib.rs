//! Rabin fingerprints of byte strings.
//!
//! A fingerprint is the remainder of the input, read as a polynomial over
//! GF(2), modulo a fixed irreducible polynomial of degree 64. It is small,
//! stable across hosts and processes, and cheap to extend, but it is not a
//! cryptographic hash: inputs chosen by an adversary can collide.
//!
//! ```
//! let engine = rabin_fingerprint::initialize().unwrap();
//! let fp = engine.from_text("The quick brown fox jumped over the lazy dog.");
//! assert_eq!(fp.to_bytes(), [0x53, 0x3e, 0x7b, 0x88, 0x06, 0x19, 0xba, 0x38]);
//! ```

mod byte_order;
mod error;
mod fingerprint;
mod hasher;
mod poly;
mod reduce;
mod tables;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod reference;

use tracing::debug;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;

pub use byte_order::ByteOrder;
pub use error::ConfigError;
pub use fingerprint::Fingerprint;
pub use hasher::FingerprintHasher;

use poly::Poly;
use reduce::compute_mod;
use tables::PERM;

const _: () = assert!(u8::BITS == 8);
const _: () = assert!(core::mem::size_of::<u32>() == 4);
const _: () = assert!(core::mem::size_of::<Fingerprint>() == 8);

/// Fingerprint of the empty buffer.
pub const EMPTY: Fingerprint = Fingerprint::from_poly(Poly::ONE);

/// Builds the fingerprint engine for this host.
///
/// Call once before fingerprinting anything and share the returned engine;
/// it is `Copy` and can be read from any number of threads.
pub fn initialize() -> Result<Rabin64, ConfigError> {
    Rabin64::new()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rabin64 {
    order: ByteOrder,
}

#[allow(clippy::wrong_self_convention)]
impl Rabin64 {
    pub fn new() -> Result<Self, ConfigError> {
        let engine = Self::with_byte_order(ByteOrder::detect()?);
        debug!(byte_order = ?engine.order, empty = %EMPTY, "fingerprint engine ready");
        Ok(engine)
    }

    /// Uses the given word reducer instead of probing the host. Both choices
    /// yield identical fingerprints.
    pub const fn with_byte_order(order: ByteOrder) -> Self {
        Self { order }
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub const fn empty(&self) -> Fingerprint {
        EMPTY
    }

    /// Fingerprints arbitrary bytes, zero bytes included.
    pub fn from_buffer(&self, buf: impl AsRef<[u8]>) -> Fingerprint {
        Fingerprint::from_poly(compute_mod(self.order, Poly::ONE, buf.as_ref()))
    }

    /// Fingerprints `text` up to, not including, its first NUL.
    pub fn from_text(&self, text: &str) -> Fingerprint {
        self.from_buffer(until_nul(text))
    }

    /// Extends `fp` with `text` up to its first NUL.
    pub fn extend(&self, fp: Fingerprint, text: &str) -> Fingerprint {
        self.extend_buffer(fp, until_nul(text))
    }

    /// Extends `fp` as if `buf` had been appended to the data it was taken
    /// from: `extend_buffer(from_buffer(a), b) == from_buffer(a ++ b)`.
    pub fn extend_buffer(&self, fp: Fingerprint, buf: impl AsRef<[u8]>) -> Fingerprint {
        let buf = buf.as_ref();
        if buf.is_empty() {
            return fp;
        }
        Fingerprint::from_poly(compute_mod(self.order, fp.to_poly(), buf))
    }

    /// Mixes two fingerprints into one. The order of the arguments matters.
    pub fn combine(&self, fp1: Fingerprint, fp2: Fingerprint) -> Fingerprint {
        let mut buf = [0u8; 16];
        buf[..8].copy_from_slice(fp1.as_bytes());
        buf[8..].copy_from_slice(fp2.as_bytes());
        let p = compute_mod(self.order, Poly::ONE, &buf);

        let mixed = Poly::new(
            p.lo.wrapping_mul(COMBINE_A)
                .wrapping_add(p.hi.wrapping_mul(COMBINE_B)),
            p.lo.wrapping_mul(COMBINE_C)
                .wrapping_add(p.hi.wrapping_mul(COMBINE_D)),
        );
        let mut out = mixed.to_bytes();
        out.iter_mut().for_each(|b| *b = PERM[*b as usize]);
        Fingerprint::from_bytes(out)
    }

    pub fn equal(&self, fp1: Fingerprint, fp2: Fingerprint) -> bool {
        fp1.as_bytes() == fp2.as_bytes()
    }

    /// Folds a fingerprint to a 32-bit bucket key. The result is not itself a
    /// fingerprint.
    pub fn hash(&self, fp: Fingerprint) -> u32 {
        let p = fp.to_poly();
        p.lo ^ p.hi
    }
}

const COMBINE_A: u32 = 0xff208489;
const COMBINE_B: u32 = 0xf4872e10;
const COMBINE_C: u32 = 0x402d619b;
const COMBINE_D: u32 = 0x0bf359a7;

#[inline(always)]
fn until_nul(text: &str) -> &[u8] {
    let bytes = text.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_MEN: &str = "Now is the time for all good men to come to the aid of their country.";
    const QUICK_FOX: &str = "The quick brown fox jumped over the lazy dog.";

    const FP_GOOD_MEN: [u8; 8] = [0x79, 0x62, 0xbf, 0x45, 0xa3, 0x53, 0xb2, 0x2b];
    const FP_QUICK_FOX: [u8; 8] = [0x53, 0x3e, 0x7b, 0x88, 0x06, 0x19, 0xba, 0x38];
    const FP_COMBINED: [u8; 8] = [0xd4, 0x18, 0x54, 0x06, 0xa7, 0x68, 0x8c, 0x35];

    fn engines() -> [Rabin64; 2] {
        [
            Rabin64::with_byte_order(ByteOrder::Little),
            Rabin64::with_byte_order(ByteOrder::Big),
        ]
    }

    #[test]
    fn test() {
        for engine in engines() {
            let empty = engine.from_text("");
            let good_men = engine.from_text(GOOD_MEN);
            let quick_fox = engine.from_text(QUICK_FOX);

            assert!(engine.equal(empty, EMPTY));
            assert_eq!(good_men.to_bytes(), FP_GOOD_MEN);
            assert_eq!(quick_fox.to_bytes(), FP_QUICK_FOX);
            assert_eq!(engine.combine(good_men, quick_fox).to_bytes(), FP_COMBINED);
        }
    }

    #[test]
    fn empty_is_canonical_one() {
        let engine = initialize().unwrap();
        assert_eq!(engine.from_buffer(b""), EMPTY);
        assert_eq!(engine.empty(), EMPTY);
        assert_eq!(EMPTY.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 0x80]);
        assert_ne!(EMPTY, Fingerprint::ZERO);
    }

    #[test]
    fn text_stops_at_nul() {
        let engine = initialize().unwrap();
        assert_eq!(engine.from_text("abc\0def"), engine.from_text("abc"));
        assert_eq!(engine.from_text("\0abc"), EMPTY);
        assert_ne!(engine.from_buffer("abc\0def"), engine.from_buffer("abc"));
    }

    #[test]
    fn extend_continues_a_prefix() {
        let engine = initialize().unwrap();
        let (head, tail) = GOOD_MEN.split_at(13);
        let fp = engine.extend(engine.from_buffer(head), tail);
        assert_eq!(fp.to_bytes(), FP_GOOD_MEN);

        let binary = [0u8, 1, 0, 2, 0xff];
        assert_eq!(
            engine.extend_buffer(engine.from_buffer(&binary[..2]), &binary[2..]),
            engine.from_buffer(binary)
        );
    }

    #[test]
    fn extend_with_nothing_is_identity() {
        let engine = initialize().unwrap();
        let fp = Fingerprint::from_bytes(FP_QUICK_FOX);
        assert_eq!(engine.extend(fp, ""), fp);
        assert_eq!(engine.extend(fp, "\0ignored"), fp);
        assert_eq!(engine.extend_buffer(fp, b""), fp);
        assert_eq!(engine.extend(Fingerprint::ZERO, ""), Fingerprint::ZERO);
    }

    #[test]
    fn combine_depends_on_order() {
        let engine = initialize().unwrap();
        let a = Fingerprint::from_bytes(FP_GOOD_MEN);
        let b = Fingerprint::from_bytes(FP_QUICK_FOX);
        assert_eq!(engine.combine(a, b), engine.combine(a, b));
        assert_ne!(engine.combine(a, b), engine.combine(b, a));
    }

    #[test]
    fn hash_folds_halves() {
        let engine = initialize().unwrap();
        let fp = Fingerprint::from_bytes(FP_GOOD_MEN);
        assert_eq!(engine.hash(fp), 0x45bf_6279 ^ 0x2bb2_53a3);
        assert_eq!(engine.hash(fp), 0x6e0d_31da);
        assert_eq!(engine.hash(EMPTY), 0x8000_0000);
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Rabin64>();
        assert_send_sync::<Fingerprint>();

        let engine = initialize().unwrap();
        let expected = engine.from_text(QUICK_FOX);
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || engine.from_text(QUICK_FOX)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
