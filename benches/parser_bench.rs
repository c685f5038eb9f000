use criterion::{criterion_group, criterion_main, Criterion};
use rill_ast::{parse, tokenize};
use serde_json::Value;
use std::hint::black_box;

// A sample "medium" JSON document
const MEDIUM_JSON: &str = r#"
{
    "name": "Babbage",
    "age": 30,
    "admin": true,
    "friends": ["Ada", "Charles", "Grace"],
    "tasks": [
        { "id": 1, "title": "Parse JSON", "done": false },
        { "id": 2, "title": "Write \"docs\"", "done": true }
    ],
    "nested": {"key": [null, 1, 1.23e4, "é"]}
}
"#;

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("JSON Parsing");

    group.bench_function("rill_ast::parse", |b| {
        b.iter(|| {
            let _ = parse(black_box(MEDIUM_JSON)).unwrap();
        })
    });

    // serde_json decodes numbers and escapes, so it does more work per
    // literal but builds no spans.
    group.bench_function("serde_json::from_str", |b| {
        b.iter(|| {
            let _: Value = serde_json::from_str(black_box(MEDIUM_JSON)).unwrap();
        })
    });

    group.finish();
}

fn bench_lexing(c: &mut Criterion) {
    let long_strings = format!("[{}]", vec![format!("\"{}\\n\"", "x".repeat(512)); 64].join(","));

    let mut group = c.benchmark_group("JSON Lexing");

    group.bench_function("tokenize medium", |b| {
        b.iter(|| {
            let _ = tokenize(black_box(MEDIUM_JSON)).unwrap().len();
        })
    });

    group.bench_function("tokenize long strings", |b| {
        b.iter(|| {
            let _ = tokenize(black_box(&long_strings)).unwrap().len();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_lexing);
criterion_main!(benches);
