//! Benchmarks for each pipeline stage.

use calcvm::{compile, execute, run, tokenize, Compiler, Vm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SAMPLE: &str = "13 - 43 + - 64 * (11 ** 12 ** -13) / 24 * ( - - 31 / 27) % 483";

/// A left-associative chain of `n` additions spread over several lines.
fn long_chain(n: usize) -> String {
    let mut source = String::from("1");
    for i in 0..n {
        source.push_str(if i % 8 == 0 { "\n+ " } else { " + " });
        source.push_str(&(i % 97).to_string());
    }
    source
}

fn sample_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_expression");

    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(SAMPLE)).unwrap()));

    let tokens = tokenize(SAMPLE).unwrap();
    group.bench_function("compile", |b| {
        b.iter(|| Compiler::compile(black_box(&tokens)).unwrap())
    });

    let code = compile(SAMPLE).unwrap();
    group.bench_function("execute", |b| {
        let mut vm = Vm::new();
        b.iter(|| vm.execute(black_box(&code)).unwrap())
    });

    group.bench_function("run", |b| b.iter(|| run(black_box(SAMPLE)).unwrap()));

    group.finish();
}

fn chain_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_scaling");

    for n in [100, 1_000, 10_000].iter() {
        let source = long_chain(*n);
        group.bench_with_input(BenchmarkId::new("compile", n), &source, |b, src| {
            b.iter(|| compile(black_box(src)).unwrap())
        });

        let code = compile(&source).unwrap();
        group.bench_with_input(BenchmarkId::new("execute", n), &code, |b, code| {
            b.iter(|| execute(black_box(code)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, sample_stages, chain_scaling);

criterion_main!(benches);
