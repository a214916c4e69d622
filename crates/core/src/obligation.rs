use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObligationId(pub i64);

impl fmt::Display for ObligationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationKind {
    FixedCost,
    DebtInstallment,
}

impl fmt::Display for ObligationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObligationKind::FixedCost => write!(f, "fixed cost"),
            ObligationKind::DebtInstallment => write!(f, "debt installment"),
        }
    }
}

/// When an obligation falls due: either a fixed day recurring every month,
/// or a one-off calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueSchedule {
    DayOfMonth(u32),
    On(NaiveDate),
}

/// A payment the user must make. Read-only input to the simulation; the
/// engine never mutates obligations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    pub id: ObligationId,
    pub name: String,
    pub amount: Money,
    pub due: DueSchedule,
    pub kind: ObligationKind,
    pub is_essential: bool,
}

impl Obligation {
    pub fn new(id: i64, name: &str, amount: Money, due: DueSchedule, kind: ObligationKind) -> Self {
        Obligation {
            id: ObligationId(id),
            name: name.to_string(),
            amount,
            due,
            kind,
            is_essential: false,
        }
    }

    pub fn essential(mut self) -> Self {
        self.is_essential = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_marks_essential() {
        let rent = Obligation::new(
            1,
            "Rent",
            Money::from_cents(90_000),
            DueSchedule::DayOfMonth(1),
            ObligationKind::FixedCost,
        )
        .essential();
        assert!(rent.is_essential);
        assert_eq!(rent.id, ObligationId(1));
    }

    #[test]
    fn kind_display() {
        assert_eq!(ObligationKind::DebtInstallment.to_string(), "debt installment");
    }
}
