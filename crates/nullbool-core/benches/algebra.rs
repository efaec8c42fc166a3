use criterion::{criterion_group, criterion_main, Criterion};
use nullbool_core::NullBool;
use std::hint::black_box;

const INPUTS: [NullBool; 4] = [
    NullBool::new(true, true),
    NullBool::new(false, true),
    NullBool::new(false, false),
    NullBool::new(true, false),
];

fn bench_algebra(c: &mut Criterion) {
    c.bench_function("xor_all_pairs", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for x in INPUTS {
                for y in INPUTS {
                    acc += black_box(x).xor(black_box(y)).get() as usize;
                }
            }
            acc
        })
    });
}

fn bench_codecs(c: &mut Criterion) {
    c.bench_function("json_decode_object", |b| {
        b.iter(|| {
            serde_json::from_str::<NullBool>(black_box(r#"{"Bool":true,"Valid":true}"#))
        })
    });

    c.bench_function("parse_lenient", |b| {
        b.iter(|| NullBool::from_str_lenient(black_box("FALSE")))
    });

    c.bench_function("text_decode", |b| {
        b.iter(|| black_box("true").parse::<NullBool>())
    });
}

criterion_group!(benches, bench_algebra, bench_codecs);
criterion_main!(benches);
