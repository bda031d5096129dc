use chrono::NaiveDate;
use finance_core::{
    domain::{Budget, Period, SavingsGoal, Transaction, TransactionKind},
    metrics::{
        budget_progress, category_breakdown, monthly_totals, monthly_totals_current,
        savings_progress, spending_trend, spending_trend_ending, AlertLevel, BudgetStatus,
        GoalStatus, DEFAULT_TREND_MONTHS,
    },
    time::FixedClock,
};

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// The reference scenario: two March expenses and one March income.
fn march_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(TransactionKind::Expense, 100.0, "Groceries", march(5)),
        Transaction::new(TransactionKind::Expense, 50.0, "Transport", march(10)),
        Transaction::new(TransactionKind::Income, 500.0, "Salary", march(1)),
    ]
}

#[test]
fn monthly_totals_reference_scenario() {
    let totals = monthly_totals(&march_transactions(), Period::new(3, 2024));
    assert_eq!(totals.income, 500.0);
    assert_eq!(totals.expenses, 150.0);
    assert_eq!(totals.balance, 350.0);
    assert_eq!(totals.transactions.len(), 3);
}

#[test]
fn monthly_totals_current_uses_the_injected_clock() {
    let clock = FixedClock::from_date(march(15));
    let totals = monthly_totals_current(&march_transactions(), &clock);
    assert_eq!(totals.balance, 350.0);

    let elsewhere = FixedClock::from_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let empty = monthly_totals_current(&march_transactions(), &elsewhere);
    assert_eq!(empty.income, 0.0);
    assert!(empty.transactions.is_empty());
}

#[test]
fn category_breakdown_reference_scenario() {
    let rows = category_breakdown(&march_transactions(), Period::new(3, 2024));
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].category, "Groceries");
    assert_eq!(rows[0].amount, 100.0);
    assert_eq!(rows[0].count, 1);
    assert!((rows[0].percentage - 66.67).abs() < 0.01);

    assert_eq!(rows[1].category, "Transport");
    assert_eq!(rows[1].amount, 50.0);
    assert!((rows[1].percentage - 33.33).abs() < 0.01);
}

#[test]
fn breakdown_percentages_sum_to_one_hundred_or_zero() {
    let rows = category_breakdown(&march_transactions(), Period::new(3, 2024));
    let sum: f64 = rows.iter().map(|r| r.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);

    let income_only = vec![Transaction::new(
        TransactionKind::Income,
        500.0,
        "Salary",
        march(1),
    )];
    assert!(category_breakdown(&income_only, Period::new(3, 2024)).is_empty());
}

#[test]
fn trend_spans_year_boundary_without_duplicates() {
    let clock = FixedClock::from_date(NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
    let points = spending_trend(&[], DEFAULT_TREND_MONTHS, &clock);
    assert_eq!(points.len(), 6);

    let labels: Vec<(&str, i32)> = points.iter().map(|p| (p.month, p.year)).collect();
    assert_eq!(
        labels,
        vec![
            ("Nov", 2023),
            ("Dec", 2023),
            ("Jan", 2024),
            ("Feb", 2024),
            ("Mar", 2024),
            ("Apr", 2024),
        ]
    );

    let mut unique = labels.clone();
    unique.dedup();
    assert_eq!(unique.len(), labels.len());
}

#[test]
fn trend_points_match_monthly_totals() {
    let transactions = march_transactions();
    let points = spending_trend_ending(&transactions, 3, Period::new(4, 2024));
    let march_point = &points[1];
    let totals = monthly_totals(&transactions, Period::new(3, 2024));
    assert_eq!(march_point.income, totals.income);
    assert_eq!(march_point.expenses, totals.expenses);
    assert_eq!(march_point.balance, totals.balance);
}

#[test]
fn budget_progress_reference_scenario() {
    let budgets = vec![Budget::new("Groceries", 100.0, Period::new(3, 2024))];
    let progress = budget_progress(&budgets, &march_transactions(), Period::new(3, 2024));
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].spent, 100.0);
    assert_eq!(progress[0].percentage, 100.0);
    assert_eq!(progress[0].remaining, 0.0);
    assert_eq!(progress[0].status, BudgetStatus::Exceeded);
    assert_eq!(progress[0].alert_level, AlertLevel::Critical);
}

#[test]
fn budget_status_is_exceeded_iff_spent_reaches_limit() {
    let period = Period::new(3, 2024);
    for (limit, spent, exceeded) in [
        (100.0, 99.99, false),
        (100.0, 100.0, true),
        (100.0, 150.0, true),
        (200.0, 100.0, false),
    ] {
        let budgets = vec![Budget::new("Groceries", limit, period)];
        let transactions = vec![Transaction::new(
            TransactionKind::Expense,
            spent,
            "Groceries",
            march(5),
        )];
        let progress = budget_progress(&budgets, &transactions, period);
        assert_eq!(
            progress[0].status == BudgetStatus::Exceeded,
            exceeded,
            "limit {limit} spent {spent}"
        );
        assert!(progress[0].remaining >= 0.0);
    }
}

#[test]
fn savings_progress_reference_scenario() {
    let goals = vec![SavingsGoal::new("Vacation", 1000.0).with_current(200.0)];
    let transactions = vec![Transaction::new(
        TransactionKind::Income,
        900.0,
        "Savings",
        march(1),
    )];
    let progress = savings_progress(&goals, &transactions);
    assert_eq!(progress[0].current_amount, 900.0);
    assert_eq!(progress[0].percentage, 90.0);
    assert_eq!(progress[0].status, GoalStatus::Close);
}

#[test]
fn savings_floor_and_clamp_properties() {
    let goals = vec![SavingsGoal::new("Vacation", 1000.0).with_current(200.0)];

    let progress = savings_progress(&goals, &[]);
    assert!(progress[0].current_amount >= goals[0].current_amount);
    assert_eq!(progress[0].current_amount, 200.0);

    let oversubscribed = vec![Transaction::new(
        TransactionKind::Income,
        2500.0,
        "Savings",
        march(1),
    )];
    let progress = savings_progress(&goals, &oversubscribed);
    assert_eq!(progress[0].percentage, 100.0);
    assert_eq!(progress[0].status, GoalStatus::Completed);
    assert!(progress[0].percentage >= 0.0 && progress[0].percentage <= 100.0);
}

#[test]
fn every_operation_is_idempotent() {
    let transactions = march_transactions();
    let budgets = vec![Budget::new("Groceries", 100.0, Period::new(3, 2024))];
    let goals = vec![SavingsGoal::new("Vacation", 1000.0)];
    let period = Period::new(3, 2024);

    assert_eq!(
        monthly_totals(&transactions, period),
        monthly_totals(&transactions, period)
    );
    assert_eq!(
        category_breakdown(&transactions, period),
        category_breakdown(&transactions, period)
    );
    assert_eq!(
        spending_trend_ending(&transactions, 6, period),
        spending_trend_ending(&transactions, 6, period)
    );
    assert_eq!(
        budget_progress(&budgets, &transactions, period),
        budget_progress(&budgets, &transactions, period)
    );
    assert_eq!(
        savings_progress(&goals, &transactions),
        savings_progress(&goals, &transactions)
    );
}

#[test]
fn inputs_are_left_untouched() {
    let transactions = march_transactions();
    let before = transactions.clone();
    let _ = monthly_totals(&transactions, Period::new(3, 2024));
    let _ = category_breakdown(&transactions, Period::new(3, 2024));
    assert_eq!(transactions, before);
}
