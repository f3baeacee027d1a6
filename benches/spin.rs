use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use spin_hint::spin_loop;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Measures the raw cost of the hint in the tightest possible loop. The hint
/// is a few cycles on every supported target, so this mostly guards against
/// regressions that would accidentally turn it into something heavier.
fn tight_loop_benchmark(c: &mut Criterion) {
    const ITERATIONS: usize = 10_000;

    let mut g = c.benchmark_group("tight_loop");
    g.throughput(Throughput::Elements(ITERATIONS as u64));

    g.bench_function("hint", |b| {
        b.iter(|| {
            for _ in 0..ITERATIONS {
                spin_loop();
            }
        });
    });
}

/// A two-thread flag handoff where the waiting side spins on the hint. This
/// is the contended spin-wait the primitive exists for; the interesting
/// number is rounds per second with both sides polling.
fn handoff_benchmark(c: &mut Criterion) {
    const ROUNDS: usize = 1_000;

    let mut g = c.benchmark_group("handoff");
    g.throughput(Throughput::Elements(ROUNDS as u64));

    g.bench_function("flag_ping_pong", |b| {
        b.iter(|| {
            let flag = Arc::new(AtomicBool::new(false));
            let flag2 = Arc::clone(&flag);

            let worker = thread::spawn(move || {
                for _ in 0..ROUNDS {
                    while flag2.load(Ordering::Acquire) {
                        spin_loop();
                    }
                    flag2.store(true, Ordering::Release);
                }
            });

            for _ in 0..ROUNDS {
                while !flag.load(Ordering::Acquire) {
                    spin_loop();
                }
                flag.store(false, Ordering::Release);
            }

            worker.join().unwrap();
        });
    });
}

criterion_group!(benches, tight_loop_benchmark, handoff_benchmark);
criterion_main!(benches);
