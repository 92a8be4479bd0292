//! Benchmarks for the template codec and document edits.
//!
//! Run with: cargo bench -p tokenfield-core

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tokenfield_core::document::Span;
use tokenfield_core::{Catalog, Document, Segment, template};

/// Build a template with `n` markers: every other one resolves.
fn make_template(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        out.push_str("some text ");
        if i % 2 == 0 {
            out.push_str("${user}");
        } else {
            out.push_str("${missing}");
        }
    }
    out
}

fn make_catalog(n: usize) -> Catalog {
    Catalog::new((0..n).map(|i| format!("var{i}")).chain(["user".to_string()]))
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/decode");
    let catalog = make_catalog(50);

    for n in [1, 10, 100] {
        let template = make_template(n);
        group.bench_with_input(BenchmarkId::new("markers", n), &template, |b, template| {
            b.iter(|| black_box(template::decode(template, &catalog)))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/encode");
    let catalog = make_catalog(50);
    let doc = template::decode(&make_template(100), &catalog);

    group.bench_function("markers_100", |b| {
        b.iter(|| black_box(template::encode(&doc)))
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/filter");

    for n in [10, 100, 1000] {
        let catalog = make_catalog(n);
        group.bench_with_input(BenchmarkId::new("names", n), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.filter_prefix("var1", 10)))
        });
    }

    group.finish();
}

fn bench_document_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("document/edit");
    let catalog = make_catalog(50);
    let base = template::decode(&make_template(20), &catalog);
    let middle = base.atom_len() / 2;

    group.bench_function("insert_text", |b| {
        b.iter(|| {
            let mut doc = base.clone();
            doc.insert_text(middle, "hello");
            black_box(doc.atom_len())
        })
    });

    group.bench_function("remove_range", |b| {
        b.iter(|| {
            let mut doc = base.clone();
            doc.remove_range(Span::new(middle, middle + 5));
            black_box(doc.atom_len())
        })
    });

    group.bench_function("word_start_before", |b| {
        b.iter(|| black_box(base.word_start_before(black_box(middle))))
    });

    group.bench_function("from_segments_normalize", |b| {
        let segments: Vec<Segment> = base.segments().to_vec();
        b.iter(|| black_box(Document::from_segments(black_box(segments.clone()))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_decode,
    bench_encode,
    bench_filter,
    bench_document_edit,
);

criterion_main!(benches);
