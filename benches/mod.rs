#![feature(test)]
extern crate test;

use sha1_kernel::{compress, hash, BLOCK_LEN, STATE_LEN};
use test::Bencher;

#[bench]
pub fn sha1_compress(bh: &mut Bencher) {
    let mut state = [0u32; STATE_LEN];
    let block = [0u8; BLOCK_LEN];
    bh.iter(|| {
        compress(&mut state, test::black_box(&block));
    });
    bh.bytes = BLOCK_LEN as u64;
}

#[bench]
pub fn sha1_10(bh: &mut Bencher) {
    let bytes = [1u8; 10];
    bh.iter(|| hash(test::black_box(&bytes)));
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha1_55(bh: &mut Bencher) {
    let bytes = [1u8; 55];
    bh.iter(|| hash(test::black_box(&bytes)));
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha1_56(bh: &mut Bencher) {
    let bytes = [1u8; 56];
    bh.iter(|| hash(test::black_box(&bytes)));
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha1_1k(bh: &mut Bencher) {
    let bytes = [1u8; 1024];
    bh.iter(|| hash(test::black_box(&bytes)));
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha1_64k(bh: &mut Bencher) {
    let bytes = [1u8; 65536];
    bh.iter(|| hash(test::black_box(&bytes)));
    bh.bytes = bytes.len() as u64;
}
