use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lispy::{parse, print, read};

fn nested_input(depth: usize) -> String {
    let mut input = String::new();
    for i in 0..depth {
        input.push_str(&format!("(+ {i} "));
    }
    input.push_str("(min 1 2)");
    input.push_str(&")".repeat(depth));
    input
}

fn benchmark_parse(c: &mut Criterion) {
    let flat = "+ 1 2 3 4 5 6 7 8 9 10 (add 11 12) (min -13 14)";
    let nested = nested_input(64);

    c.bench_function("parse_flat", |b| b.iter(|| parse("<bench>", black_box(flat))));
    c.bench_function("parse_nested", |b| {
        b.iter(|| parse("<bench>", black_box(&nested)))
    });
}

fn benchmark_read_print(c: &mut Criterion) {
    let nested = nested_input(64);
    let ast = parse("<bench>", &nested).unwrap();

    c.bench_function("read_nested", |b| b.iter(|| read(black_box(&ast)).release()));

    let value = read(&ast);
    c.bench_function("print_nested", |b| b.iter(|| print(black_box(&value))));
}

fn benchmark_full_line(c: &mut Criterion) {
    let line = "(* (+ 1 2 3) (- 4 (/ 5 6)) (add 7 (min 8 9 -10)) ())";

    c.bench_function("parse_read_print", |b| {
        b.iter(|| {
            let ast = parse("<bench>", black_box(line)).unwrap();
            let value = read(&ast);
            let rendered = print(&value);
            value.release();
            rendered
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_read_print,
    benchmark_full_line
);
criterion_main!(benches);
