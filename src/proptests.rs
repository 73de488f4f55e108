use core::hash::{BuildHasher, Hasher};

use proptest::prelude::*;

use crate::poly::Poly;
use crate::reference;
use crate::{ByteOrder, Fingerprint, Rabin64};

fn le() -> Rabin64 {
    Rabin64::with_byte_order(ByteOrder::Little)
}

fn be() -> Rabin64 {
    Rabin64::with_byte_order(ByteOrder::Big)
}

proptest! {
    #[test]
    fn from_buffer_matches_bit_serial(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
        let expected = reference::fingerprint(Poly::ONE.to_u64(), &data);
        prop_assert_eq!(le().from_buffer(&data).to_u64(), expected);
    }

    #[test]
    fn byte_orders_agree(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
        prop_assert_eq!(le().from_buffer(&data), be().from_buffer(&data));
    }

    #[test]
    fn position_in_memory_is_irrelevant(data in proptest::collection::vec(any::<u8>(), 0..=256), offset in 0usize..8) {
        let mut storage = vec![0xa5u8; data.len() + 8];
        storage[offset..offset + data.len()].copy_from_slice(&data);
        let shifted = &storage[offset..offset + data.len()];
        prop_assert_eq!(le().from_buffer(shifted), le().from_buffer(&data));
        prop_assert_eq!(be().from_buffer(shifted), be().from_buffer(&data));
    }

    #[test]
    fn extend_buffer_matches_concatenation(data in proptest::collection::vec(any::<u8>(), 0..=512), split in any::<usize>()) {
        let split = split % (data.len() + 1);
        let (a, b) = data.split_at(split);
        let engine = le();
        prop_assert_eq!(engine.extend_buffer(engine.from_buffer(a), b), engine.from_buffer(&data));
    }

    #[test]
    fn extend_text_matches_concatenation(a in proptest::collection::vec(any::<u8>(), 0..=256), b in "[ -~]{0,128}") {
        let engine = be();
        let mut whole = a.clone();
        whole.extend_from_slice(b.as_bytes());
        prop_assert_eq!(engine.extend(engine.from_buffer(&a), &b), engine.from_buffer(&whole));
    }

    #[test]
    fn hasher_is_chunking_invariant(data in proptest::collection::vec(any::<u8>(), 0..=1024), chunk in 1usize..=37) {
        let engine = le();
        let mut hasher = engine.build_hasher();
        for part in data.chunks(chunk) {
            hasher.write(part);
        }
        prop_assert_eq!(hasher.fingerprint(), engine.from_buffer(&data));
        prop_assert_eq!(hasher.finish(), engine.from_buffer(&data).to_u64());
    }

    #[test]
    fn combine_is_a_function_of_its_inputs(x in any::<u64>(), y in any::<u64>()) {
        let (x, y) = (Fingerprint::from_u64(x), Fingerprint::from_u64(y));
        prop_assert_eq!(le().combine(x, y), le().combine(x, y));
        prop_assert_eq!(le().combine(x, y), be().combine(x, y));
    }

    #[test]
    fn hash_is_xor_of_halves(x in any::<u64>()) {
        let fp = Fingerprint::from_u64(x);
        prop_assert_eq!(le().hash(fp), (x as u32) ^ ((x >> 32) as u32));
    }
}
