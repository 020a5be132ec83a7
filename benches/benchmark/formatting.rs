use crate::common::{configure_criterion, OrderError};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use tristate_rail::definition::ErrorDefinition;
use tristate_rail::format::{format, ArgArray, FormatArg};
use tristate_rail::{rail_args, Cause};

/// Anchor substitution with scalars, escapes and a trailing cause.
pub fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/format");

    group.bench_function("scalars", |b| {
        b.iter(|| {
            let out = format(black_box("order {} for {} items totalling {}"), &rail_args![42u64, 3, 99.5]);
            black_box(out)
        })
    });

    group.bench_function("escapes", |b| {
        b.iter(|| {
            let out = format(black_box("C:\\\\{} and \\{} with {}"), &rail_args!["dir", "x"]);
            black_box(out)
        })
    });

    group.bench_function("trailing_cause", |b| {
        let cause = Cause::msg("connection reset");
        b.iter(|| {
            let out = format(black_box("order {} failed"), &rail_args![7, cause.clone()]);
            black_box(out)
        })
    });

    group.finish();
}

/// Array rendering, including a self-referencing array.
pub fn bench_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/arrays");

    let flat: Vec<FormatArg> = (0..32).map(FormatArg::from).collect();
    group.bench_function("flat_32", |b| {
        b.iter(|| black_box(format("{}", &[FormatArg::from(flat.clone())])))
    });

    let cyclic = ArgArray::new();
    cyclic.push("head");
    cyclic.push(cyclic.clone());
    group.bench_function("cyclic", |b| {
        b.iter(|| black_box(format("{}", &[FormatArg::from(cyclic.clone())])))
    });

    group.finish();
}

/// Rendering the multi-line description.
pub fn bench_description(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/description");

    let ctx = OrderError::Storage
        .because("writing order 7")
        .with_cause(std::io::Error::other("disk full"));

    group.bench_function("default", |b| b.iter(|| black_box(ctx.to_string())));
    group.bench_function("compact", |b| b.iter(|| black_box(ctx.fmt().compact().to_string())));

    group.finish();
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets = bench_format, bench_arrays, bench_description
}
