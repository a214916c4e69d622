use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use florijn_core::calendar::due_date_in_month;
use florijn_core::{Money, Obligation, ProjectedIncomeEvent};

/// Outcome of a feasibility scan. Transient: produced for one question
/// ("when can I pay this bill?") and consumed once by the caller.
///
/// When `feasible` is true, `payoff_date` always equals the date of one of
/// the income events that were scanned — a bill is only considered payable
/// at the moment income arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    pub feasible: bool,
    pub payoff_date: Option<NaiveDate>,
    pub available_at_payoff: Option<Money>,
    pub obligations_until_payoff: Vec<Obligation>,
    pub message: Option<String>,
}

impl ForecastResult {
    fn infeasible(consumed: Vec<Obligation>, message: &str) -> Self {
        ForecastResult {
            feasible: false,
            payoff_date: None,
            available_at_payoff: None,
            obligations_until_payoff: consumed,
            message: Some(message.to_string()),
        }
    }
}

/// Greedy forward scan over projected income checkpoints.
///
/// Starting from a zero balance at `start`, each income event in date order
/// adds its amount and subtracts every obligation falling due in the window
/// `(checkpoint, event date]` — due days are re-anchored to the event's
/// month, since fixed costs recur monthly. The first checkpoint whose
/// balance covers `target_amount` is the payoff date. The scan is
/// deliberately greedy and chronological: the product's answer is the
/// earliest feasible date, not an optimized payment schedule.
pub fn simulate(
    target_amount: Money,
    start: NaiveDate,
    income_events: &[ProjectedIncomeEvent],
    other_obligations: &[Obligation],
) -> ForecastResult {
    if income_events.is_empty() {
        return ForecastResult::infeasible(
            Vec::new(),
            "No expected income was found; the bill cannot be scheduled from income alone.",
        );
    }

    let mut events = income_events.to_vec();
    events.sort_by_key(|event| event.date);

    let mut running_balance = Money::zero();
    let mut last_checkpoint = start;
    let mut consumed: Vec<Obligation> = Vec::new();

    for event in &events {
        let due_this_cycle: Vec<Obligation> = other_obligations
            .iter()
            .filter(|obligation| {
                let due = due_date_in_month(&obligation.due, event.date.year(), event.date.month());
                due > last_checkpoint && due <= event.date
            })
            .cloned()
            .collect();
        let costs_this_cycle: Money = due_this_cycle.iter().map(|o| o.amount).sum();

        let balance_after_income = running_balance + event.amount - costs_this_cycle;
        debug!(
            checkpoint = %event.date,
            income = %event.amount,
            costs = %costs_this_cycle,
            balance = %balance_after_income,
            "feasibility checkpoint"
        );
        consumed.extend(due_this_cycle);

        if balance_after_income >= target_amount {
            return ForecastResult {
                feasible: true,
                payoff_date: Some(event.date),
                available_at_payoff: Some(balance_after_income),
                obligations_until_payoff: consumed,
                message: None,
            };
        }

        running_balance = balance_after_income;
        last_checkpoint = event.date;
    }

    ForecastResult::infeasible(
        consumed,
        "Income within the forecast horizon does not cover this bill after other obligations.",
    )
}
