// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use petal_grid::gallery::manifest::{self, SparseRecordPolicy};
use petal_grid::gallery::PhotoAsset;
use std::hint::black_box;

fn synthetic_manifest(count: usize) -> String {
    let names = ["carnation", "daisy", "lavender", "lily", "marigold", "rose", "sunflower", "tulip"];
    let body: String = (0..count)
        .map(|i| {
            let name = names[i % names.len()];
            format!("<photo><title>{name} {i}</title><file>{name}.jpg</file></photo>")
        })
        .collect();
    format!("<?xml version=\"1.0\" encoding=\"utf-8\"?><photos>{body}</photos>")
}

fn manifest_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_loading");

    group.bench_function("bundled", |b| {
        b.iter(|| black_box(manifest::load_bundled(SparseRecordPolicy::CarryOver)));
    });

    let large = synthetic_manifest(1_000);
    group.bench_function("parse_1000_records", |b| {
        b.iter(|| black_box(manifest::parse(large.as_bytes(), SparseRecordPolicy::CarryOver)));
    });

    let photos = manifest::parse(large.as_bytes(), SparseRecordPolicy::CarryOver).into_photos();
    group.bench_function("resolve_1000_assets", |b| {
        b.iter(|| {
            for photo in &photos {
                black_box(PhotoAsset::resolve(&photo.file_name));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, manifest_loading_benchmark);
criterion_main!(benches);
