use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn passage_params(
    reference: &str,
    numbers: bool,
    headings: bool,
    extras: bool,
) -> Vec<(&'static str, String)> {
    let numbers = numbers.to_string();
    let headings = headings.to_string();
    let extras = extras.to_string();

    vec![
        ("q", reference.to_string()),
        ("include-passage-references", "true".to_string()),
        ("include-verse-anchors", "true".to_string()),
        ("include-chapter-numbers", numbers.clone()),
        ("include-verse-numbers", numbers),
        ("include-headings", headings.clone()),
        ("include-subheadings", headings),
        ("include-footnotes", extras.clone()),
        ("include-audio-link", extras),
    ]
}

fn benchmark_passage_params(c: &mut Criterion) {
    c.bench_function("passage_params", |b| {
        b.iter(|| {
            passage_params(
                black_box("John 3:16-21"),
                black_box(true),
                black_box(false),
                black_box(true),
            )
        })
    });
}

fn benchmark_passage_params_long_reference(c: &mut Criterion) {
    let reference = "Psalm 119:1-176; Isaiah 40:1-31; Romans 8:1-39".to_string();

    c.bench_function("passage_params_long_reference", |b| {
        b.iter(|| {
            passage_params(
                black_box(&reference),
                black_box(true),
                black_box(true),
                black_box(true),
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_passage_params,
    benchmark_passage_params_long_reference
);
criterion_main!(benches);
