use qs_stringify::Value;
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

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
    nickname: Option<String>,
    address: Address,
    user_ids: Vec<u8>,
}

fn main() {
    let profile_duration = Duration::from_secs(30);
    println!("Profiling stringification for {:?}...", profile_duration);

    match std::env::args().nth(1).as_deref() {
        Some("serde") => profile_serde_timed(profile_duration),
        Some("value") => profile_value_timed(profile_duration),
        _ => {
            println!("Usage: cargo run --release --example profile_ser [serde|value]");
            println!("Defaulting to serde...");
            profile_serde_timed(profile_duration);
        }
    }
}

fn profile_serde_timed(duration: Duration) {
    println!("Running serde stringification profile...");
    let data = QueryParams {
        id: 42,
        name: "Acme".to_string(),
        nickname: None,
        address: Address {
            city: "Carrot City".to_string(),
            street: "Special-Street* No. 11".to_string(),
            postcode: "12345".to_string(),
        },
        user_ids: vec![1, 2, 3, 4],
    };
    println!("Sample: {}", qs_stringify::to_string(&data).unwrap());

    run(duration, || {
        let _ = qs_stringify::to_string(black_box(&data)).unwrap();
    });
}

fn profile_value_timed(duration: Duration) {
    println!("Running value tree stringification profile...");
    let data = Value::from_iter([
        ("q", Value::from("rust & friends")),
        ("page", Value::from(3)),
        ("cursor", Value::Absent),
        (
            "filters",
            Value::from(vec![
                Value::from_iter([("field", "lang"), ("eq", "rust")]),
                Value::from_iter([("field", "stars"), ("gt", "100")]),
            ]),
        ),
    ]);
    println!(
        "Sample: {}",
        qs_stringify::append_to_url("https://example.com/search", &data).unwrap()
    );

    run(duration, || {
        let _ = qs_stringify::to_query_string(black_box(&data)).unwrap();
    });
}

fn run(duration: Duration, mut op: impl FnMut()) {
    let start = Instant::now();
    let mut count = 0u64;

    while start.elapsed() < duration {
        // Run in batches to reduce timing overhead
        for _ in 0..1000 {
            op();
            count += 1;
        }
    }

    let elapsed = start.elapsed();
    println!("Completed {} operations in {:?}", count, elapsed);
    println!("Average: {:?} per operation", elapsed / count as u32);
}
