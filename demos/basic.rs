use rabin_fingerprint::{initialize, EMPTY};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Probe the host once and share the engine
    let engine = initialize().expect("unsupported host byte order");

    // Fingerprint some data
    let data = b"Hello, world!";
    let fp = engine.from_buffer(data);
    println!("Fingerprint of {:?}: {}", data, fp);

    // Binary data may contain zero bytes
    let binary = [0u8, 1, 2, 0, 3];
    println!("Fingerprint of {:?}: {}", binary, engine.from_buffer(binary));

    // The empty buffer maps to a fixed constant
    assert_eq!(engine.from_buffer(b""), EMPTY);
    println!("Empty fingerprint: {}", EMPTY);

    // Fingerprints are stable
    assert_eq!(fp, engine.from_buffer(data), "Fingerprints should be stable!");
    println!("Fingerprint stability verified!");

    // A 32-bit bucket key for hash tables
    println!("Bucket key: 0x{:08x}", engine.hash(fp));
}
