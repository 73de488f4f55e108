//! Bit-serial reduction, one coefficient at a time, for checking the tables
//! and the word/byte reducers.

/// `x^64 mod P` in the reflected representation.
pub(crate) const REDUCTION: u64 = 0x19b9_6480_06ee_40b5;

#[inline]
fn mul_x(v: u64) -> u64 {
    (v >> 1) ^ if v & 1 != 0 { REDUCTION } else { 0 }
}

/// `(init * x^(8 * data.len()) + data(x)) mod P`.
pub(crate) fn fingerprint(init: u64, data: &[u8]) -> u64 {
    let mut v = init;
    for &b in data {
        for _ in 0..8 {
            v = mul_x(v);
        }
        v ^= (b as u64) << 56;
    }
    v
}

/// `b(x) * x^k mod P`.
pub(crate) fn table_entry(b: u8, k: u32) -> u64 {
    let mut v = (b as u64) << 56;
    for _ in 0..k {
        v = mul_x(v);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{POLY64, POLY72, POLY80, POLY88};

    #[test]
    fn reduction_is_the_first_table_coefficient() {
        assert_eq!(POLY64[0x80].to_u64(), REDUCTION);
    }

    #[test]
    fn tables_match_the_modulus() {
        for (k, table) in [(64, &POLY64), (72, &POLY72), (80, &POLY80), (88, &POLY88)] {
            for b in 0..=255u8 {
                assert_eq!(
                    table[b as usize].to_u64(),
                    table_entry(b, k),
                    "POLY{}[{}]",
                    k,
                    b
                );
            }
        }
    }

    #[test]
    fn known_vector() {
        let fp = fingerprint(
            1 << 63,
            b"Now is the time for all good men to come to the aid of their country.",
        );
        assert_eq!(
            fp.to_le_bytes(),
            [0x79, 0x62, 0xbf, 0x45, 0xa3, 0x53, 0xb2, 0x2b]
        );
    }
}
