use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How often a recurring income rule pays out. Only monthly rules take part
/// in projection; the other variants occur in user data and are carried
/// through the boundary but produce no events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Weekly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Yearly => write!(f, "yearly"),
        }
    }
}

/// User-declared periodic inflow: "salary, €1800, on the 25th".
/// Immutable for the duration of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringIncomeRule {
    pub frequency: Frequency,
    pub amount: Money,
    pub day_of_month: u32,
    pub description: String,
}

/// One concrete occurrence derived from a rule. Value object; ordering key
/// is `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedIncomeEvent {
    pub date: NaiveDate,
    pub amount: Money,
    pub source_description: String,
}
