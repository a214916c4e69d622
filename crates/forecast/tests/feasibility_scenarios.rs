use chrono::{Duration, NaiveDate};

use florijn_core::{
    DueSchedule, Frequency, Money, Obligation, ObligationKind, RecurringIncomeRule,
};
use florijn_forecast::{prioritize, project, simulate, EngineConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn salary_rule(cents: i64, day: u32) -> RecurringIncomeRule {
    RecurringIncomeRule {
        frequency: Frequency::Monthly,
        amount: Money::from_cents(cents),
        day_of_month: day,
        description: "Salary".to_string(),
    }
}

fn rent() -> Obligation {
    Obligation::new(
        1,
        "Rent",
        Money::from_cents(90_000),
        DueSchedule::DayOfMonth(1),
        ObligationKind::FixedCost,
    )
    .essential()
}

fn target_bill() -> Obligation {
    Obligation::new(
        99,
        "Overdue dentist bill",
        Money::from_cents(90_000),
        DueSchedule::On(date(2024, 3, 10)),
        ObligationKind::FixedCost,
    )
}

/// Salary of 1800 on the 25th, asked on the 20th: the first payday covers a
/// 900 bill in full because the rent's next recurrence (the 1st) falls past
/// that checkpoint.
#[test]
fn bill_affordable_at_first_payday() {
    let config = EngineConfig::default();
    let today = date(2024, 3, 20);
    let events = project(&[salary_rule(180_000, 25)], today, config.horizon_days);
    let result = simulate(Money::from_cents(90_000), today, &events, &[rent()]);

    assert!(result.feasible);
    assert_eq!(result.payoff_date, Some(date(2024, 3, 25)));
    assert_eq!(result.available_at_payoff, Some(Money::from_cents(180_000)));
    assert!(result.obligations_until_payoff.is_empty());
}

/// A 2500 target overshoots the first payday (1800); the second cycle adds
/// another 1800 and pays the April rent on the way: 2700 at April 25.
#[test]
fn larger_bill_needs_a_second_cycle() {
    let config = EngineConfig::default();
    let today = date(2024, 3, 20);
    let events = project(&[salary_rule(180_000, 25)], today, config.horizon_days);
    let result = simulate(Money::from_cents(250_000), today, &events, &[rent()]);

    assert!(result.feasible);
    assert_eq!(result.payoff_date, Some(date(2024, 4, 25)));
    assert_eq!(result.available_at_payoff, Some(Money::from_cents(270_000)));
    assert_eq!(result.obligations_until_payoff.len(), 1);
    assert_eq!(result.obligations_until_payoff[0].name, "Rent");
}

/// No income rules: the projector yields nothing and the simulator reports
/// infeasibility with a fallback message instead of erroring.
#[test]
fn no_income_degrades_to_infeasible() {
    let today = date(2024, 3, 20);
    let events = project(&[], today, 90);
    assert!(events.is_empty());

    let result = simulate(Money::from_cents(90_000), today, &events, &[rent()]);
    assert!(!result.feasible);
    assert!(result.payoff_date.is_none());
    assert!(result.message.is_some());
}

#[test]
fn projected_events_respect_the_horizon_and_never_predate_today() {
    let today = date(2024, 1, 31);
    let horizon_days = 90;
    let rules = [salary_rule(180_000, 25), salary_rule(20_000, 31)];
    let events = project(&rules, today, horizon_days);

    assert!(!events.is_empty());
    for event in &events {
        assert!(event.date >= today, "event {} predates today", event.date);
        assert!(event.date <= today + Duration::days(horizon_days as i64));
    }
}

#[test]
fn payoff_date_always_coincides_with_an_income_event() {
    let today = date(2024, 3, 20);
    let events = project(&[salary_rule(180_000, 25)], today, 90);
    let result = simulate(Money::from_cents(250_000), today, &events, &[rent()]);

    let payoff = result.payoff_date.expect("scenario is feasible");
    assert!(events.iter().any(|event| event.date == payoff));
    assert!(result.available_at_payoff.unwrap() >= Money::from_cents(250_000));
}

/// Pipeline end to end: forecast, then partition the upcoming budget into
/// the keep-paying and can-wait lists.
#[test]
fn spend_plan_partitions_the_upcoming_budget() {
    let today = date(2024, 3, 20);
    let target = target_bill();
    let events = project(&[salary_rule(180_000, 25)], today, 90);
    let forecast = simulate(target.amount, today, &events, &[rent()]);

    let upcoming = vec![
        rent(),
        target.clone(),
        Obligation::new(
            4,
            "Streaming subscriptions",
            Money::from_cents(2_900),
            DueSchedule::DayOfMonth(15),
            ObligationKind::FixedCost,
        ),
        Obligation::new(
            5,
            "Car loan installment",
            Money::from_cents(25_000),
            DueSchedule::DayOfMonth(28),
            ObligationKind::DebtInstallment,
        )
        .essential(),
    ];

    let plan = prioritize(&forecast, &target, &upcoming);

    assert_eq!(plan.essential.len() + plan.deferrable.len(), upcoming.len());
    let essential_names: Vec<_> = plan.essential.iter().map(|o| o.name.as_str()).collect();
    assert!(essential_names.contains(&"Rent")); // flagged essential
    assert!(essential_names.contains(&"Overdue dentist bill")); // the target
    assert!(essential_names.contains(&"Car loan installment")); // flagged essential
    assert_eq!(plan.deferrable.len(), 1);
    assert_eq!(plan.deferrable[0].name, "Streaming subscriptions");
    assert_eq!(plan.essential_total, Money::from_cents(205_000));
}

#[test]
fn identical_inputs_give_identical_results_end_to_end() {
    let today = date(2024, 3, 20);
    let rules = [salary_rule(180_000, 25)];
    let obligations = [rent()];

    let run = || {
        let events = project(&rules, today, 90);
        simulate(Money::from_cents(250_000), today, &events, &obligations)
    };
    let a = run();
    let b = run();
    assert_eq!(a.feasible, b.feasible);
    assert_eq!(a.payoff_date, b.payoff_date);
    assert_eq!(a.available_at_payoff, b.available_at_payoff);
    assert_eq!(
        a.obligations_until_payoff.len(),
        b.obligations_until_payoff.len()
    );
}
