use rabin_fingerprint::{Fingerprint, Rabin64};
use std::collections::HashMap;

// The engine itself is the BuildHasher
type RabinHashMap<K, V> = HashMap<K, V, Rabin64>;

fn main() {
    let engine = Rabin64::new().expect("unsupported host byte order");

    // Content-addressed store: identical chunks are kept once
    let chunks: [&[u8]; 5] = [
        b"header",
        b"body\0with\0nuls",
        b"header",
        b"footer",
        b"body\0with\0nuls",
    ];
    let mut store: HashMap<Fingerprint, &[u8]> = HashMap::new();
    for chunk in chunks {
        let fp = engine.from_buffer(chunk);
        let fresh = !store.contains_key(&fp);
        store.entry(fp).or_insert(chunk);
        println!("{} {:?}{}", fp, chunk, if fresh { "" } else { " (duplicate)" });
    }
    println!("{} chunks, {} stored", chunks.len(), store.len());

    // Text keys stop at the first NUL, buffers do not
    assert_ne!(engine.from_text("body\0with\0nuls"), engine.from_buffer(chunks[1]));

    // Bucket map keyed by the 32-bit fold of each fingerprint
    let mut buckets: RabinHashMap<u32, Vec<Fingerprint>> = HashMap::with_hasher(engine);
    for fp in store.keys() {
        buckets.entry(engine.hash(*fp)).or_default().push(*fp);
    }
    for (bucket, fps) in &buckets {
        println!("bucket {:08x}: {:?}", bucket, fps);
    }
}
