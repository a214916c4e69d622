use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use florijn_core::{Money, Obligation, ObligationId};

use crate::simulator::ForecastResult;

/// The "what to keep paying" plan for everything due before the payoff date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendPlan {
    pub essential: Vec<Obligation>,
    pub deferrable: Vec<Obligation>,
    pub essential_total: Money,
}

/// Partitions the upcoming budget items into essential and deferrable.
///
/// Essential: the target bill itself, every obligation the simulator
/// consumed on the way to the payoff date, and anything the user flagged
/// essential. Everything else can be deferred. The two lists together are
/// exactly the input, in input order. Pure function.
pub fn prioritize(
    forecast: &ForecastResult,
    target: &Obligation,
    upcoming: &[Obligation],
) -> SpendPlan {
    let consumed_ids: HashSet<ObligationId> = forecast
        .obligations_until_payoff
        .iter()
        .map(|obligation| obligation.id)
        .collect();

    let mut essential = Vec::new();
    let mut deferrable = Vec::new();
    for item in upcoming {
        if item.id == target.id || consumed_ids.contains(&item.id) || item.is_essential {
            essential.push(item.clone());
        } else {
            deferrable.push(item.clone());
        }
    }

    let essential_total = essential.iter().map(|item| item.amount).sum();
    SpendPlan {
        essential,
        deferrable,
        essential_total,
    }
}
