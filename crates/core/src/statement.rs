use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Direction of a cash flow as reported on a bank statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Income,
    Expense,
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowKind::Income => write!(f, "income"),
            FlowKind::Expense => write!(f, "expense"),
        }
    }
}

/// A transaction candidate produced by the upstream statement-extraction
/// collaborator. Transient: screened once against the ledger, then either
/// recorded by the caller or discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub kind: FlowKind,
    pub counterparty: Option<String>,
}

/// An entry already persisted in the user's ledger. The date is truncated to
/// the calendar day at the boundary; time-of-day is never compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub kind: FlowKind,
}
