use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;
use truename::expand;
use truename::Truename;

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    // Benchmark absolute path expansion
    group.bench_function("absolute_path", |b| {
        b.iter(|| expand::expand(black_box("/absolute/path/to/file")));
    });

    // Benchmark relative path expansion
    group.bench_function("relative_path", |b| {
        b.iter(|| expand::expand(black_box("./relative/path")));
    });

    // Benchmark path with . and .. segments
    group.bench_function("with_dots", |b| {
        b.iter(|| expand::expand(black_box("/a/b/../c/./d")));
    });

    // Benchmark tilde expansion
    group.bench_function("tilde", |b| {
        b.iter(|| expand::expand(black_box("~/project/src")));
    });

    // Benchmark directory-name input
    group.bench_function("directory_name", |b| {
        b.iter(|| expand::expand(black_box("/a/b/c/")));
    });

    group.finish();
}

fn bench_expand_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_operations");

    // Benchmark tilde expansion only
    group.bench_function("expand_tilde", |b| {
        b.iter(|| expand::expand_tilde(black_box("~/test")));
    });

    // Benchmark dot-segment resolution only
    group.bench_function("resolve_dot_segments", |b| {
        b.iter(|| expand::resolve_dot_segments(black_box(Path::new("/a/b/../c/./d"))));
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let resolver = Truename::native();

    // Benchmark the not-found fallback (no canonicalization result)
    group.bench_function("missing_target", |b| {
        b.iter(|| resolver.resolve(black_box("/truename-bench-missing/path")));
    });

    // Benchmark resolution of an existing path
    group.bench_function("existing_target", |b| {
        b.iter(|| resolver.resolve(black_box("/tmp")));
    });

    // Benchmark with different input shapes
    for (name, input) in [
        ("absolute", "/truename-bench-missing/a/b"),
        ("with_dots", "/truename-bench-missing/a/../b"),
        ("directory_name", "/truename-bench-missing/a/"),
        ("tilde", "~/truename-bench-missing"),
    ] {
        group.bench_with_input(BenchmarkId::new("resolve_varied", name), &input, |b, &s| {
            b.iter(|| resolver.resolve(black_box(s)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expand, bench_expand_operations, bench_resolve);
criterion_main!(benches);
