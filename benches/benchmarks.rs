// benches/benchmarks.rs — Performance benchmarks (criterion)
//
//   1. Formatter throughput on long, marker-heavy replies
//   2. Session store lookups under a populated map

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chatgate::core::formatter::format_response;
use chatgate::infra::session::SessionStore;

// ─── Helpers ────────────────────────────────────────────────────────────────

/// A reply shaped like a typical provider answer: headings, bullets, inline bold.
fn sample_reply(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 4 {
            0 => format!("**القسم {i}**"),
            1 => format!("- النقطة **{i}** مهمة و**واضحة**"),
            2 => "plain text without any markers at all".to_string(),
            _ => format!("dangling ** marker on line {i}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ─── Formatter ──────────────────────────────────────────────────────────────

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter");

    let short = sample_reply(20);
    group.bench_function("20_lines", |b| {
        b.iter(|| format_response(black_box(&short)))
    });

    let long = sample_reply(2_000);
    group.bench_function("2000_lines", |b| {
        b.iter(|| format_response(black_box(&long)))
    });

    group.finish();
}

// ─── Sessions ───────────────────────────────────────────────────────────────

fn bench_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("sessions");

    let store = SessionStore::new(86_400);
    let ids: Vec<String> = (0..1_000).map(|_| store.create_authenticated()).collect();

    group.bench_function("lookup_1000", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % ids.len();
            store.is_authenticated(black_box(&ids[i]))
        })
    });

    group.finish();
}

// ─── Main ───────────────────────────────────────────────────────────────────

criterion_group!(benches, bench_formatter, bench_sessions);
criterion_main!(benches);
