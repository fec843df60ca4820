use criterion::{criterion_group, criterion_main, Criterion};
use imcypher_core::LsbCodec;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let codec = LsbCodec::default();
        let plain = vec![0x81u8; 512 * 512 * 4];
        let secret_message = "Hello World!";

        b.iter(|| codec.encode(&plain, secret_message))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
