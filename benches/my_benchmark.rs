use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecp_codec::{EcpTranscoder, Intent};

fn benchmark_encode(c: &mut Criterion) {
    let mut transcoder = EcpTranscoder::default();

    c.bench_function("encode_exceptional_name", |b| {
        b.iter(|| {
            transcoder.encode(
                black_box("Collector's Professional Killstreak Rocket Launcher"),
                black_box(Intent::Buy),
            )
        })
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let mut transcoder = EcpTranscoder::default();
    let token = transcoder
        .encode("Collector's Professional Killstreak Rocket Launcher", Intent::Buy)
        .unwrap();

    c.bench_function("decode_cached_token", |b| {
        b.iter(|| transcoder.decode(black_box(&token)))
    });
}

criterion_group!(benches, benchmark_encode, benchmark_decode);
criterion_main!(benches);
