//! Performance benchmarks for BerryLink output processing
//!
//! The poll loop reprocesses the device's console buffer every second, so
//! processing cost is the one hot path worth tracking.

use berrylink::script::output::OutputProcessor;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_output_processing(c: &mut Criterion) {
    let plain: String = "12:00:00 RSL: tele/tasmota/SENSOR = {\"Time\":\"...\"}\n".repeat(200);
    let framed = format!("HTTP status header\u{1}{}", plain);
    let erroring = format!("{}syntax_error: unexpected symbol input:42\n", plain);

    c.bench_function("process_plain_console_chunk", |b| {
        b.iter(|| {
            let mut processor = OutputProcessor::new(String::new());
            black_box(processor.process(black_box(&plain)));
        })
    });

    c.bench_function("process_framed_console_chunk", |b| {
        b.iter(|| {
            let mut processor = OutputProcessor::new(String::new());
            black_box(processor.process(black_box(&framed)));
        })
    });

    c.bench_function("process_chunk_with_syntax_error", |b| {
        b.iter(|| {
            let mut processor = OutputProcessor::new(String::new());
            black_box(processor.process(black_box(&erroring)));
        })
    });
}

criterion_group!(benches, benchmark_output_processing);
criterion_main!(benches);
