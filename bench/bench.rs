use std::env;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

use sha1_kernel::{compress, BLOCK_LEN, STATE_LEN};

const DEFAULT_ITERATIONS: u64 = 10_000_000;

fn time<T, F, FMT>(desc: &str, f: F, fmt: FMT) -> T
where
    F: FnOnce() -> T,
    FMT: Fn(Duration) -> String,
{
    let start = Instant::now();
    let rv = f();
    println!("{}: {}", desc, fmt(Instant::now() - start));
    rv
}

fn to_hex(bytes: &[u8]) -> String {
    let hex_bytes: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    hex_bytes.join("")
}

fn megabytes_per_second(bytes: u64) -> impl Fn(Duration) -> String {
    move |duration: Duration| {
        let secs = duration.as_secs_f64();
        format!("{:.1} MB/s", bytes as f64 / secs / 1_000_000.0)
    }
}

fn iterations() -> u64 {
    match env::var("ITERATIONS") {
        Ok(value) => match value.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("ITERATIONS must be a positive integer, got {:?}", value);
                process::exit(2);
            }
        },
        Err(_) => DEFAULT_ITERATIONS,
    }
}

fn compare_file(path: &str) {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("cannot read {}: {}", path, err);
            process::exit(2);
        }
    };
    let throughput = megabytes_per_second(data.len() as u64);

    let ours = time("sha1_kernel", || sha1_kernel::digest(&data), &throughput);
    println!("sha1_kernel: {}", ours);

    let ring_digest = time(
        "ring crate",
        || ring::digest::digest(&ring::digest::SHA1_FOR_LEGACY_USE_ONLY, &data),
        &throughput,
    );
    println!("ring: {}", to_hex(ring_digest.as_ref()));

    let openssl_digest = time("openssl crate", || openssl::sha::sha1(&data), &throughput);
    println!("openssl: {}", to_hex(&openssl_digest));

    if ours.bytes() != openssl_digest || ring_digest.as_ref() != &openssl_digest[..] {
        eprintln!("digest mismatch for {}", path);
        process::exit(1);
    }
}

fn main() {
    let args: Vec<_> = env::args().collect();
    if args.len() > 2 {
        eprintln!("usage: {} [file]", args[0]);
        process::exit(2);
    }

    if !sha1_kernel::self_check() {
        println!("Self-check failed");
        process::exit(1);
    }
    println!("Self-check passed");

    let n = iterations();
    let mut state = [0u32; STATE_LEN];
    let block = [0u8; BLOCK_LEN];
    time(
        "Speed",
        || {
            for _ in 0..n {
                compress(&mut state, &block);
            }
        },
        megabytes_per_second(n * BLOCK_LEN as u64),
    );
    // keeps the loop from being optimized away
    if state == [0u32; STATE_LEN] {
        println!("state collapsed to zero");
    }

    if let Some(path) = args.get(1) {
        compare_file(path);
    }
}
