use benchmark_simple::*;
use core::hash::Hasher;
use fnv::*;
use fxhash::*;
use rabin_fingerprint::*;
use xxhash_rust::xxh3::xxh3_64;

fn options() -> Options {
    Options {
        iterations: 100_000,
        warmup_iterations: 1_000,
        min_samples: 5,
        max_samples: 10,
        max_rsd: 1.0,
        ..Default::default()
    }
}

fn sizes() -> impl Iterator<Item = usize> {
    (0..=16).map(|shift| 1 << shift)
}

fn bench_rabin(engine: Rabin64) {
    println!("\n* Rabin64 ({:?} words)\n", engine.byte_order());

    let bench = Bench::new();
    let options = &options();
    for size in sizes() {
        let m = vec![0u8; size];
        let res = bench.run(options, || engine.from_buffer(&m));
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
    }
}

fn bench_rabin_unaligned(engine: Rabin64) {
    println!("\n* Rabin64, buffer offset by one byte\n");

    let bench = Bench::new();
    let options = &options();
    for size in sizes() {
        let m = vec![0u8; size + 1];
        let res = bench.run(options, || engine.from_buffer(&m[1..]));
        println!("{} bytes:\t{}", size, res.throughput(size as _));
    }
}

fn bench_combine(engine: Rabin64) {
    println!("\n* Rabin64 combine\n");

    let bench = Bench::new();
    let a = engine.from_text("Now is the time for all good men to come to the aid of their country.");
    let b = engine.from_text("The quick brown fox jumped over the lazy dog.");
    let res = bench.run(&options(), || engine.combine(a, b));
    println!("16 bytes:\t{}", res.throughput(16));
}

fn bench_fnv() {
    println!("\n* FNV Hash\n");

    let bench = Bench::new();
    let options = &options();
    for size in sizes() {
        let m = vec![0u8; size];
        let res = bench.run(options, || {
            let mut hasher = FnvHasher::default();
            hasher.write(&m);
            hasher.finish()
        });
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
    }
}

fn bench_fxhash() {
    println!("\n* FxHash\n");

    let bench = Bench::new();
    let options = &options();
    for size in sizes() {
        let m = vec![0u8; size];
        let res = bench.run(options, || {
            let mut hasher = FxHasher::default();
            hasher.write(&m);
            hasher.finish()
        });
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
    }
}

fn bench_xxh3() {
    println!("\n* XXH3\n");

    let bench = Bench::new();
    let options = &options();
    for size in sizes() {
        let m = vec![0u8; size];
        let res = bench.run(options, || xxh3_64(&m));
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
    }
}

fn main() {
    let engine = initialize().expect("unsupported host");

    bench_xxh3();
    bench_fxhash();
    bench_rabin(engine);
    bench_rabin(Rabin64::with_byte_order(ByteOrder::Big));
    bench_rabin_unaligned(engine);
    bench_combine(engine);
    bench_fnv();
}
