use serde::{Deserialize, Serialize};
use tracing::debug;

use florijn_core::{ExtractedTransaction, LedgerRecord, Money};

use crate::util::{abbreviation_match, normalize, similarity};

/// Per-candidate outcome of screening a statement import against the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportVerdict {
    pub candidate_index: usize,
    /// Id of the first ledger record judged to be the same transaction, or
    /// `None` when the candidate is new.
    pub duplicate_of: Option<i64>,
}

/// Flags extracted bank-statement transactions that already exist in the
/// user's ledger. A pure comparison over two records; neither side is ever
/// mutated.
pub struct DuplicateMatcher {
    pub similarity_threshold: f32,
    pub amount_tolerance: Money,
}

impl Default for DuplicateMatcher {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.70,
            amount_tolerance: Money::from_cents(1),
        }
    }
}

impl DuplicateMatcher {
    pub fn new(similarity_threshold: f32, amount_tolerance_cents: i64) -> Self {
        Self {
            similarity_threshold,
            amount_tolerance: Money::from_cents(amount_tolerance_cents),
        }
    }

    /// Short-circuits on the first ledger record that matches. The caller
    /// pre-filters `existing` by flow kind, but mixed input is tolerated:
    /// income is never compared against expense.
    pub fn is_duplicate(&self, candidate: &ExtractedTransaction, existing: &[LedgerRecord]) -> bool {
        existing.iter().any(|record| self.matches(candidate, record))
    }

    /// Screens a whole import batch, reporting which ledger record each
    /// duplicate collided with so the caller can present a review list.
    pub fn screen(
        &self,
        candidates: &[ExtractedTransaction],
        existing: &[LedgerRecord],
    ) -> Vec<ImportVerdict> {
        candidates
            .iter()
            .enumerate()
            .map(|(candidate_index, candidate)| ImportVerdict {
                candidate_index,
                duplicate_of: existing
                    .iter()
                    .find(|record| self.matches(candidate, record))
                    .map(|record| record.id),
            })
            .collect()
    }

    fn matches(&self, candidate: &ExtractedTransaction, record: &LedgerRecord) -> bool {
        if candidate.kind != record.kind {
            return false;
        }
        if candidate.date != record.date {
            return false;
        }
        // Compare magnitudes: the bank and the ledger disagree on the sign
        // convention for expenses.
        let difference = (candidate.amount.abs() - record.amount.abs()).abs();
        if difference >= self.amount_tolerance {
            return false;
        }
        let equivalent = self.descriptions_equivalent(&candidate.description, &record.description);
        if equivalent {
            debug!(
                date = %record.date,
                ledger_id = record.id,
                "extracted transaction matches existing ledger record"
            );
        }
        equivalent
    }

    fn descriptions_equivalent(&self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);

        // Empty-description policy: two blanks describe the same nothing;
        // one blank against text is never equivalent, and the empty string
        // takes no part in the containment rule.
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        if a.contains(&b) || b.contains(&a) {
            return true;
        }
        if similarity(&a, &b) > self.similarity_threshold {
            return true;
        }
        let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
        abbreviation_match(shorter, longer)
    }
}
