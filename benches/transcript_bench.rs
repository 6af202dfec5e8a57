//! Benchmarks for the session transcript
//!
//! Run with: cargo bench

use airwave::{Message, Transcript};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_transcript_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("append_{}", size), |b| {
            b.iter(|| {
                let mut transcript = Transcript::new();
                for i in 0..size {
                    let message = if i % 2 == 0 {
                        Message::user(format!("question {}", i))
                    } else {
                        Message::assistant(format!("answer {}", i))
                    };
                    transcript.push(black_box(message));
                }
                transcript
            })
        });
    }

    group.finish();
}

fn bench_transcript_scan(c: &mut Criterion) {
    let mut transcript = Transcript::new();
    for i in 0..10_000 {
        transcript.push(Message::user(format!("message {}", i)));
    }

    c.bench_function("transcript_scan_10000", |b| {
        b.iter(|| {
            black_box(&transcript)
                .messages()
                .iter()
                .map(|m| m.content.len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_transcript_append, bench_transcript_scan);
criterion_main!(benches);
