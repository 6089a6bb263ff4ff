use criterion::{criterion_group, criterion_main, Criterion};
use keccakhash::{keccak256::keccak256, KeccakDigest};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rnd = rand::thread_rng();
    let mut buf = [0; 600];
    for i in buf.iter_mut() {
        *i = rnd.gen();
    }

    c.bench_function("keccak256 600 bytes", |b| {
        b.iter(|| {
            keccak256(&buf);
        })
    });

    c.bench_function("keccak256 600 bytes, 7-byte updates", |b| {
        b.iter(|| {
            let mut h = KeccakDigest::new(256).unwrap();
            buf.chunks(7).for_each(|chunk| h.update(chunk).unwrap());
            h.finalize().unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
