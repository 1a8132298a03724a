use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Deserialize;
use serde_luatable::{from_str, load, load_assignments};

#[derive(Deserialize)]
#[allow(dead_code)]
struct Bar {
    enabled: bool,
    buttons: u32,
    scale: f64,
    name: String,
}

fn bars_literal(size: u32) -> String {
    let mut text = String::from("{\n");
    for i in 0..size {
        text.push_str(&format!(
            "\t{{\n\t\t[\"enabled\"] = {},\n\t\t[\"buttons\"] = {},\n\t\t[\"scale\"] = {}.5,\n\t\t[\"name\"] = \"Bar {}\",\n\t}}, -- [{}]\n",
            i % 2 == 0,
            i % 12,
            i,
            i,
            i + 1
        ));
    }
    text.push('}');
    text
}

fn benchmark_decode_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_scalar");

    group.bench_function("integer", |b| b.iter(|| load(black_box("-1234567"))));
    group.bench_function("hex", |b| b.iter(|| load(black_box("0x7FFFFFFF"))));
    group.bench_function("float", |b| b.iter(|| load(black_box("3.14159e-2"))));
    group.bench_function("quoted_string", |b| {
        b.iter(|| load(black_box(r#""Thrall - Durotan \"the\" Warchief""#)))
    });
    group.bench_function("long_string", |b| {
        b.iter(|| load(black_box("[[a long string spanning\nseveral lines of text]]")))
    });

    group.finish();
}

fn benchmark_decode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_array");

    for size in [10, 100, 1000].iter() {
        let text = format!(
            "{{ {} }}",
            (0..*size).map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| load(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_decode_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_keyed");

    for size in [10, 100, 1000].iter() {
        let text = format!(
            "{{\n{}\n}}",
            (0..*size)
                .map(|i| format!("\t[\"key{}\"] = {},", i, i))
                .collect::<Vec<_>>()
                .join("\n")
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| load(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_typed");

    for size in [10, 100, 500].iter() {
        let text = bars_literal(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str::<Vec<Bar>>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_saved_variables_file(c: &mut Criterion) {
    let text = format!(
        "AddonDB = {}\nAddonCharDB = {{ [\"last\"] = 0x1F, seen = {{ 1, 2, 3 }} }}\n",
        bars_literal(200)
    );

    c.bench_function("load_assignments", |b| {
        b.iter(|| load_assignments(black_box(&text)))
    });
}

fn benchmark_deep_nesting(c: &mut Criterion) {
    let depth = 100;
    let text = format!("{}1{}", "{".repeat(depth), "}".repeat(depth));

    c.bench_function("deep_nesting", |b| b.iter(|| load(black_box(&text))));
}

criterion_group!(
    benches,
    benchmark_decode_scalar,
    benchmark_decode_array,
    benchmark_decode_keyed,
    benchmark_deserialize_typed,
    benchmark_saved_variables_file,
    benchmark_deep_nesting
);
criterion_main!(benches);
