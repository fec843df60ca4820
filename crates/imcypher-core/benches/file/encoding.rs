use criterion::{criterion_group, criterion_main, Criterion};
use imcypher_core::AppendCodec;

pub fn file_encoding(c: &mut Criterion) {
    c.bench_function("File Append Encoding", |b| {
        let codec = AppendCodec::default();
        let plain = vec![0x42u8; 4 * 1024 * 1024];
        let secret = codec.encode(&plain, "an older message");

        b.iter(|| codec.encode(&secret, "Hello World!"))
    });

    c.bench_function("File Append Decoding", |b| {
        let codec = AppendCodec::default();
        let secret = codec.encode(&vec![0x42u8; 4 * 1024 * 1024], "Hello World!");

        b.iter(|| codec.decode(&secret))
    });
}

criterion_group!(benches, file_encoding);
criterion_main!(benches);
