use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlbuilder::{BulkBuilder, QueryBuilder};

/// Build `SELECT * FROM t WHERE col0 = ? AND col1 = ? ...` with `n` conditions.
fn build_select(n: usize) -> QueryBuilder {
    let mut b = QueryBuilder::new();
    b.append("SELECT * FROM t WHERE", [0_i64; 0]);
    for i in 0..n {
        if i > 0 {
            b.append("AND", [0_i64; 0]);
        }
        b.append(&format!("col{i} = ?"), [i as i64]);
    }
    b
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/append");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let q = build_select(n);
                black_box(q.build().0.len());
            });
        });
    }

    group.finish();
}

fn bench_bulk_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/bulk_bind");

    for rows in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut bulk = BulkBuilder::new("INSERT INTO t (a,b,c) VALUES (?)").unwrap();
                for i in 0..rows {
                    let i = i as i64;
                    bulk.bind([i, i + 1, i + 2]).unwrap();
                }
                black_box(bulk.build().1.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_bulk_bind);
criterion_main!(benches);
