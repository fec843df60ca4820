use criterion::{criterion_group, criterion_main, Criterion};
use imcypher_core::LsbCodec;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let codec = LsbCodec::default();
        let plain = vec![0x81u8; 512 * 512 * 4];
        let secret = codec.encode(&plain, "Hello World!");

        b.iter(|| {
            codec.decode(&secret).expect("Failed to decode message");
        })
    });

    c.bench_function("Image Decoding Noise", |b| {
        let plain = vec![0xffu8; 512 * 512 * 4];

        b.iter(|| LsbCodec::default().decode(&plain))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
