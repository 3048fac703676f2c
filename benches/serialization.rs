use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsondoc::{from_str, to_string, to_string_pretty, to_value, Array, Object, Value};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn product_document(size: u32) -> Value {
    let mut arr = Array::with_capacity(size as usize);
    for i in 0..size {
        let mut obj = Object::with_capacity(4);
        obj.set("sku", format!("SKU{}", i))
            .set("name", format!("Product {}", i))
            .set("price", 9.99 + f64::from(i))
            .set("quantity", i)
            .set_if(i % 3 == 0, "featured", true);
        arr.add(obj);
    }
    Value::Array(arr)
}

fn benchmark_render_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_array");

    for size in [10, 50, 100, 500].iter() {
        let doc = product_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&product_document(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_pretty(c: &mut Criterion) {
    let doc = product_document(100);
    c.bench_function("render_pretty_100", |b| {
        b.iter(|| to_string_pretty(black_box(&doc)))
    });
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("builder_100", |b| {
        b.iter(|| product_document(black_box(100)))
    });

    let items = products(100);
    group.bench_function("to_value_100", |b| b.iter(|| to_value(black_box(&items))));

    group.finish();
}

fn benchmark_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    let integers: Vec<i64> = (0..100).map(|i| i * 1_000_003).collect();
    let decimals: Vec<f64> = (0..100).map(|i| f64::from(i) * 1.5).collect();
    let big = format!("[{}]", vec!["123456789012345678901234567890.0001"; 100].join(","));

    let integers_text = to_string(&to_value(&integers).unwrap());
    let decimals_text = to_string(&to_value(&decimals).unwrap());

    group.bench_function("parse_integers", |b| {
        b.iter(|| from_str(black_box(&integers_text)))
    });

    group.bench_function("parse_decimals", |b| {
        b.iter(|| from_str(black_box(&decimals_text)))
    });

    group.bench_function("parse_big_decimals", |b| b.iter(|| from_str(black_box(&big))));

    let parsed = from_str(&decimals_text).unwrap();
    let arr = parsed.as_array().cloned().unwrap_or_default();
    group.bench_function("narrow_f64", |b| {
        b.iter(|| {
            arr.iter()
                .map(|v| v.to_number::<f64>().unwrap_or_default())
                .sum::<f64>()
        })
    });

    group.finish();
}

fn benchmark_comparison_with_serde_json(c: &mut Criterion) {
    let doc = product_document(100);
    let text = to_string(&doc);

    let mut group = c.benchmark_group("comparison");

    group.bench_function("jsondoc_parse", |b| b.iter(|| from_str(black_box(&text))));

    group.bench_function("serde_json_parse", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&text)))
    });

    group.bench_function("jsondoc_render", |b| b.iter(|| to_string(black_box(&doc))));

    let json_doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    group.bench_function("serde_json_render", |b| {
        b.iter(|| serde_json::to_string(black_box(&json_doc)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_array,
    benchmark_parse_array,
    benchmark_pretty,
    benchmark_build,
    benchmark_numbers,
    benchmark_comparison_with_serde_json
);
criterion_main!(benches);
