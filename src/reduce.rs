use crate::byte_order::ByteOrder;
use crate::poly::Poly;
use crate::tables::{POLY64, POLY72, POLY80, POLY88};

/// Returns `(init * x^(8 * buf.len()) + buf(x)) mod P`.
pub(crate) fn compute_mod(order: ByteOrder, init: Poly, buf: &[u8]) -> Poly {
    let mut p = init;
    let mut buf = buf;

    let misalign = buf.as_ptr() as usize % 4;
    if buf.len() >= 4 && misalign != 0 {
        let (head, rest) = buf.split_at(4 - misalign);
        p = extend_bytes(order, p, head);
        buf = rest;
    }

    let bulk = buf.len() & !3;
    if bulk > 0 {
        let (words, rest) = buf.split_at(bulk);
        p = extend_words(order, p, words);
        buf = rest;
    }

    if !buf.is_empty() {
        p = extend_bytes(order, p, buf);
    }
    p
}

#[inline(always)]
pub(crate) fn extend_words(order: ByteOrder, p: Poly, words: &[u8]) -> Poly {
    match order {
        ByteOrder::Little => extend_words_le(p, words),
        ByteOrder::Big => extend_words_be(p, words),
    }
}

// One word step: the four bytes of the old low half are reduced through the
// tables, the old high half moves down and the input word enters on top.
#[inline(always)]
fn step(p: Poly, word: u32, b88: u8, b80: u8, b72: u8, b64: u8) -> Poly {
    let t = POLY88[b88 as usize]
        ^ POLY80[b80 as usize]
        ^ POLY72[b72 as usize]
        ^ POLY64[b64 as usize];
    Poly::new(p.hi ^ t.lo, word ^ t.hi)
}

pub(crate) fn extend_words_le(mut p: Poly, words: &[u8]) -> Poly {
    debug_assert_eq!(words.len() % 4, 0);
    for w in words.chunks_exact(4) {
        let word = u32::from_le_bytes([w[0], w[1], w[2], w[3]]);
        let b = p.lo.to_le_bytes();
        p = step(p, word, b[0], b[1], b[2], b[3]);
    }
    p
}

pub(crate) fn extend_words_be(mut p: Poly, words: &[u8]) -> Poly {
    debug_assert_eq!(words.len() % 4, 0);
    for w in words.chunks_exact(4) {
        // A big-endian load sees the word reversed, and the low half's bytes
        // sit in memory from the other end.
        let word = u32::from_be_bytes([w[0], w[1], w[2], w[3]]).swap_bytes();
        let b = p.lo.to_be_bytes();
        p = step(p, word, b[3], b[2], b[1], b[0]);
    }
    p
}

/// Extends `p` by one to three bytes.
pub(crate) fn extend_bytes(order: ByteOrder, p: Poly, bytes: &[u8]) -> Poly {
    let n = 8 * bytes.len() as u32;
    let x = 32u32.wrapping_sub(n);
    let carry = match bytes.len() {
        1..=3 => (p.hi >> n).to_le_bytes(),
        len => unreachable!("extend_bytes called with {} bytes", len),
    };
    let shifted = Poly::new(p.lo << x, (p.lo >> n) ^ (p.hi << x));

    let group = match *bytes {
        [a] => [carry[0], carry[1], carry[2], a],
        [a, b] => [carry[0], carry[1], a, b],
        [a, b, c] => [carry[0], a, b, c],
        _ => unreachable!(),
    };
    extend_words(order, shifted, &group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    const SAMPLE: &[u8] = b"Now is the time for all good men to come to the aid of their country.";

    #[test]
    fn word_variants_agree() {
        let words = &SAMPLE[..SAMPLE.len() & !3];
        let le = extend_words_le(Poly::ONE, words);
        let be = extend_words_be(Poly::ONE, words);
        assert_eq!(le, be);
        assert_eq!(le.to_u64(), reference::fingerprint(Poly::ONE.to_u64(), words));
    }

    #[test]
    fn byte_steps_match_reference() {
        let init = Poly::new(0x0bad_f00d, 0x1234_5678);
        for len in 1..=3 {
            let bytes = &SAMPLE[..len];
            let expected = reference::fingerprint(init.to_u64(), bytes);
            for order in [ByteOrder::Little, ByteOrder::Big] {
                assert_eq!(extend_bytes(order, init, bytes).to_u64(), expected);
            }
        }
    }

    #[test]
    fn byte_steps_compose_into_a_word() {
        let init = Poly::ONE;
        let bytes = &SAMPLE[..4];
        let by_word = extend_words_le(init, bytes);
        let by_bytes = extend_bytes(
            ByteOrder::Little,
            extend_bytes(ByteOrder::Little, init, &bytes[..1]),
            &bytes[1..],
        );
        assert_eq!(by_word, by_bytes);
    }

    #[test]
    #[should_panic]
    fn four_bytes_is_not_a_byte_step() {
        extend_bytes(ByteOrder::Little, Poly::ONE, &SAMPLE[..4]);
    }

    #[test]
    fn alignment_does_not_change_the_result() {
        let expected = compute_mod(ByteOrder::Little, Poly::ONE, SAMPLE);
        let mut storage = [0u8; 80];
        for offset in 0..8 {
            storage[offset..offset + SAMPLE.len()].copy_from_slice(SAMPLE);
            let shifted = &storage[offset..offset + SAMPLE.len()];
            assert_eq!(compute_mod(ByteOrder::Little, Poly::ONE, shifted), expected);
            assert_eq!(compute_mod(ByteOrder::Big, Poly::ONE, shifted), expected);
        }
    }

    #[test]
    fn empty_input_keeps_the_remainder() {
        let init = Poly::new(7, 9);
        assert_eq!(compute_mod(ByteOrder::Little, init, &[]), init);
    }
}
