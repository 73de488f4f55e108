use core::hash::{BuildHasher, Hasher};

use crate::fingerprint::Fingerprint;
use crate::poly::Poly;
use crate::reduce::compute_mod;
use crate::Rabin64;

/// A [`Hasher`] that fingerprints everything written to it.
///
/// Writes are folded in as they arrive, so any split of the input gives the
/// same result as one [`Rabin64::from_buffer`] over the whole of it.
#[derive(Clone, Copy, Debug)]
pub struct FingerprintHasher {
    engine: Rabin64,
    state: Poly,
}

impl FingerprintHasher {
    pub fn new(engine: Rabin64) -> Self {
        Self {
            engine,
            state: Poly::ONE,
        }
    }

    /// Continues from an existing fingerprint instead of the empty one.
    pub fn resume(engine: Rabin64, fp: Fingerprint) -> Self {
        Self {
            engine,
            state: fp.to_poly(),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from_poly(self.state)
    }
}

impl Hasher for FingerprintHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.state = compute_mod(self.engine.byte_order(), self.state, bytes);
    }

    fn finish(&self) -> u64 {
        self.state.to_u64()
    }
}

impl BuildHasher for Rabin64 {
    type Hasher = FingerprintHasher;

    fn build_hasher(&self) -> FingerprintHasher {
        FingerprintHasher::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn split_writes_match_one_buffer() {
        let engine = Rabin64::new().unwrap();
        let data = b"The quick brown fox jumped over the lazy dog.";
        for split in 0..data.len() {
            let mut h = engine.build_hasher();
            h.write(&data[..split]);
            h.write(&data[split..]);
            assert_eq!(h.fingerprint(), engine.from_buffer(data));
            assert_eq!(h.finish(), engine.from_buffer(data).to_u64());
        }
    }

    #[test]
    fn resume_continues_a_fingerprint() {
        let engine = Rabin64::new().unwrap();
        let mut h = FingerprintHasher::resume(engine, engine.from_buffer(b"Now is "));
        h.write(b"the time");
        assert_eq!(h.fingerprint(), engine.from_buffer(b"Now is the time"));
    }

    #[test]
    fn keys_a_hash_map() {
        let engine = Rabin64::new().unwrap();
        let mut map: HashMap<&str, u32, Rabin64> = HashMap::with_hasher(engine);
        map.insert("alpha", 1);
        map.insert("beta", 2);
        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get("beta"), Some(&2));
        assert_eq!(map.get("gamma"), None);
    }
}
