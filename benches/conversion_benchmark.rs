// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Raw Conversion - numeral string <-> f64 primitives per base
// 2. Session - full edit/execute conversion cycle
// 3. Calculator - chained arithmetic keystroke sequences
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeral_engine::numeric::{radix_to_real, real_to_radix, Radix};
use numeral_engine::prelude::*;

fn benchmark_real_to_radix(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_to_radix");

    for base in [2u32, 8, 10, 16] {
        let radix = Radix::new(base).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(base), &radix, |b, &radix| {
            b.iter(|| black_box(real_to_radix(black_box(12345.6789), radix, 10).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_radix_to_real(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_to_real");

    for (base, text) in [(2u32, "11000000111001.101"), (16, "3039.ADF")] {
        let radix = Radix::new(base).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(base),
            &(radix, text),
            |b, &(radix, text)| {
                b.iter(|| black_box(radix_to_real(black_box(text), radix).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_session_execute(c: &mut Criterion) {
    c.bench_function("session_edit_and_execute", |b| {
        b.iter(|| {
            let mut session = ConversionSession::new();
            session.set_target_base(2).unwrap();
            for command in [1, 6, 5, CMD_DELIMITER_CODE, 8, 7, 5] {
                session.dispatch(command).unwrap();
            }
            black_box(session.dispatch(CMD_EXECUTE).unwrap())
        });
    });
}

fn benchmark_calculator_chain(c: &mut Criterion) {
    c.bench_function("calculator_chained_ops", |b| {
        b.iter(|| {
            let mut calc = CalculatorEngine::new();
            calc.set_base(16).unwrap();
            for _ in 0..10 {
                calc.digit('A').unwrap();
                calc.operator(BinaryOp::Add).unwrap();
                calc.digit('5').unwrap();
                calc.equals().unwrap();
            }
            black_box(calc.current_text().to_string())
        });
    });
}

criterion_group!(
    benches,
    benchmark_real_to_radix,
    benchmark_radix_to_real,
    benchmark_session_execute,
    benchmark_calculator_chain
);
criterion_main!(benches);
