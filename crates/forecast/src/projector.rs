use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use florijn_core::calendar::{add_months, clamped_day};
use florijn_core::{Frequency, ProjectedIncomeEvent, RecurringIncomeRule};

/// Expands recurring income rules into concrete calendar occurrences within
/// `[today, today + horizon_days]`, ascending by date.
///
/// Only monthly rules project. The first occurrence per rule is anchored at
/// the rule's day in `today`'s month (clamped to the month's last day when
/// shorter) and advanced one month if that day has already passed. Rules with
/// an invalid day of month and empty input produce no events, never an error.
pub fn project(
    rules: &[RecurringIncomeRule],
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<ProjectedIncomeEvent> {
    let horizon_end = today + Duration::days(horizon_days as i64);
    let mut events = Vec::new();

    for rule in rules {
        if rule.frequency != Frequency::Monthly {
            debug!(frequency = %rule.frequency, "skipping non-monthly income rule");
            continue;
        }
        if rule.day_of_month == 0 || rule.day_of_month > 31 {
            debug!(day = rule.day_of_month, "skipping rule with invalid day of month");
            continue;
        }

        let mut occurrence = clamped_day(today.year(), today.month(), rule.day_of_month);
        if occurrence < today {
            occurrence = monthly_step(occurrence, rule.day_of_month);
        }
        while occurrence <= horizon_end {
            events.push(ProjectedIncomeEvent {
                date: occurrence,
                amount: rule.amount,
                source_description: rule.description.clone(),
            });
            occurrence = monthly_step(occurrence, rule.day_of_month);
        }
    }

    events.sort_by_key(|event| event.date);
    events
}

/// Advances one month, re-anchoring on the rule's nominal day so a clamped
/// February occurrence returns to the 31st in March rather than sticking on
/// the 28th.
fn monthly_step(occurrence: NaiveDate, nominal_day: u32) -> NaiveDate {
    let next = add_months(occurrence, 1);
    clamped_day(next.year(), next.month(), nominal_day)
}
