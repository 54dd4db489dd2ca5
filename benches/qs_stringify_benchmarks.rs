use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qs_stringify::Value;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
struct SimpleStruct {
    id: u32,
    name: String,
    active: bool,
}

#[derive(Debug, Clone, Serialize)]
struct SimpleWithOption {
    id: u32,
    name: String,
    email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct Address {
    city: String,
    street: String,
    postcode: String,
}

#[derive(Debug, Clone, Serialize)]
struct QueryParams {
    id: u8,
    name: String,
    phone: u32,
    address: Address,
    user_ids: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
struct Item {
    sku: String,
    tags: Vec<String>,
}

fn serialize_simple_struct(c: &mut Criterion) {
    let data = SimpleStruct {
        id: 42,
        name: "test_user".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| qs_stringify::to_string(black_box(&data)).unwrap())
    });
}

fn serialize_simple_with_option_none(c: &mut Criterion) {
    let data = SimpleWithOption {
        id: 456,
        name: "user_without_email".to_string(),
        email: None,
    };

    c.bench_function("serialize_simple_with_option_none", |b| {
        b.iter(|| qs_stringify::to_string(black_box(&data)).unwrap())
    });
}

fn serialize_simple_map(c: &mut Criterion) {
    let mut data = BTreeMap::new();
    data.insert("key1".to_string(), "value1".to_string());
    data.insert("key2".to_string(), "value2".to_string());
    data.insert("key3".to_string(), "value3".to_string());

    c.bench_function("serialize_simple_map", |b| {
        b.iter(|| qs_stringify::to_string(black_box(&data)).unwrap())
    });
}

fn serialize_nested_struct(c: &mut Criterion) {
    let data = QueryParams {
        id: 42,
        name: "Acme".to_string(),
        phone: 12345,
        address: Address {
            city: "Carrot City".to_string(),
            street: "Special-Street* No. 11".to_string(),
            postcode: "12345".to_string(),
        },
        user_ids: vec![1, 2, 3, 4],
    };

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| qs_stringify::to_string(black_box(&data)).unwrap())
    });
}

fn serialize_indexed_vec(c: &mut Criterion) {
    let data: BTreeMap<&str, Vec<Item>> = [(
        "items",
        (0..50)
            .map(|i| Item {
                sku: format!("sku-{i}"),
                tags: vec!["a".to_string(), "b c".to_string()],
            })
            .collect(),
    )]
    .into();

    c.bench_function("serialize_indexed_vec", |b| {
        b.iter(|| qs_stringify::to_string(black_box(&data)).unwrap())
    });
}

fn stages_value_tree(c: &mut Criterion) {
    let data = Value::from_iter([
        ("q", Value::from("rust & friends")),
        ("page", Value::from(3)),
        ("cursor", Value::Absent),
        ("ids", Value::from((0..100).collect::<Vec<u32>>())),
    ]);

    c.bench_function("stages_normalize", |b| {
        b.iter(|| qs_stringify::normalize(black_box(&data)))
    });

    let normalized = qs_stringify::normalize(&data);
    c.bench_function("stages_shake", |b| {
        b.iter(|| qs_stringify::shake(black_box(normalized.clone())))
    });

    let shaken = qs_stringify::shake(normalized).unwrap();
    c.bench_function("stages_serialize", |b| {
        b.iter(|| qs_stringify::serialize(black_box(&shaken), None))
    });
}

fn comparison_simple_struct_serde_urlencoded(c: &mut Criterion) {
    let data = SimpleStruct {
        id: 42,
        name: "test_user".to_string(),
        active: true,
    };

    c.bench_function("comparison_simple_struct_serde_urlencoded", |b| {
        b.iter(|| serde_urlencoded::to_string(black_box(&data)).unwrap())
    });
}

criterion_group!(
    serialize_benches,
    serialize_simple_struct,
    serialize_simple_with_option_none,
    serialize_simple_map,
    serialize_nested_struct,
    serialize_indexed_vec,
);

criterion_group!(stage_benches, stages_value_tree);

criterion_group!(comparison_benches, comparison_simple_struct_serde_urlencoded);

criterion_main!(serialize_benches, stage_benches, comparison_benches);
