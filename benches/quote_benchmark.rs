use criterion::{black_box, criterion_group, criterion_main, Criterion};
use farm_shipping::{QuoteEngine, ShipmentRequest, ShippingQuoteEngine};

fn benchmark_quotes(c: &mut Criterion) {
    let engine = ShippingQuoteEngine::default();
    let requests = create_benchmark_requests();

    // Benchmark a single quote
    c.bench_function("quote_single", |b| {
        b.iter(|| engine.quote(black_box(&requests[0])))
    });

    // Benchmark sequential vs parallel quoting of the whole batch
    c.bench_function("quote_sequential_batch", |b| {
        b.iter(|| {
            black_box(&requests)
                .iter()
                .map(|request| engine.quote(request))
                .collect::<Vec<_>>()
        })
    });

    c.bench_function("quote_parallel_batch", |b| {
        b.iter(|| engine.quote_batch(black_box(&requests)))
    });
}

// Create shipments across every known region pair
fn create_benchmark_requests() -> Vec<ShipmentRequest> {
    let regions = ["Delhi", "Punjab", "Maharashtra", "Bangalore", "Kerala"];
    let methods = ["standard", "express", "priority"];

    (0..10_000)
        .map(|i| {
            let origin = format!("City {}, {}, India", i, regions[i % regions.len()]);
            let destination = format!("Town {}, {}, India", i, regions[(i / 5) % regions.len()]);
            ShipmentRequest::new(origin, destination, (i % 40) as f64)
                .with_method(methods[i % methods.len()])
        })
        .collect()
}

criterion_group!(benches, benchmark_quotes);
criterion_main!(benches);
