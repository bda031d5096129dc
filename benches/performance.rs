use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finance_core::{
    domain::{Budget, Period, Transaction, TransactionKind},
    metrics::{budget_progress, category_breakdown, monthly_totals, spending_trend_ending},
};

const CATEGORIES: [&str; 5] = ["Groceries", "Transport", "Rent", "Dining", "Utilities"];

fn build_sample_transactions(count: usize) -> Vec<Transaction> {
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    (0..count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % 365) as i64);
            let kind = if idx % 4 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            Transaction::new(
                kind,
                50.0 + (idx % 100) as f64,
                CATEGORIES[idx % CATEGORIES.len()],
                date,
            )
        })
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let transactions = build_sample_transactions(black_box(10_000));
    let period = Period::new(6, 2025);
    let budgets: Vec<Budget> = CATEGORIES
        .iter()
        .map(|category| Budget::new(*category, 1_000.0, period))
        .collect();

    c.bench_function("monthly_totals_10k", |b| {
        b.iter(|| {
            let totals = monthly_totals(&transactions, period);
            black_box(totals);
        })
    });

    c.bench_function("category_breakdown_10k", |b| {
        b.iter(|| {
            let rows = category_breakdown(&transactions, period);
            black_box(rows);
        })
    });

    c.bench_function("spending_trend_12m_10k", |b| {
        b.iter(|| {
            let points = spending_trend_ending(&transactions, 12, Period::new(12, 2025));
            black_box(points);
        })
    });

    c.bench_function("budget_progress_10k", |b| {
        b.iter(|| {
            let progress = budget_progress(&budgets, &transactions, period);
            black_box(progress);
        })
    });
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
