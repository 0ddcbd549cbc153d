use brio_codegen::compiler::parse;
use brio_parser::NameTable;
use brio_parser::lexer::tokenize;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const FIB: &str = "Function fib(n)\n    If n < 2 Then Return n; End\n    Return fib(n - 1) + fib(n - 2);\nEnd\n";

const BRANCHY: &str = "Function classify(n)\n    If n < 0 Then Return 0;\n    ElseIf n == 0 || n == 1 Then Return 1;\n    ElseIf n < 10 && n % 2 == 0 Then Return 2;\n    Else Return 3;\n    End\nEnd\n";

fn bench_compile_fib(c: &mut Criterion) {
    c.bench_function("compile_fib", |b| {
        b.iter(|| {
            let mut names = NameTable::new();
            let tokens = tokenize(black_box(FIB), &mut names);
            black_box(parse(tokens, &names)).unwrap();
        });
    });
}

fn bench_compile_branchy(c: &mut Criterion) {
    c.bench_function("compile_branchy", |b| {
        b.iter(|| {
            let mut names = NameTable::new();
            let tokens = tokenize(black_box(BRANCHY), &mut names);
            black_box(parse(tokens, &names)).unwrap();
        });
    });
}

criterion_group!(benches, bench_compile_fib, bench_compile_branchy);
criterion_main!(benches);
