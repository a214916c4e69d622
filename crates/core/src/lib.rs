pub mod boundary;
pub mod calendar;
pub mod income;
pub mod money;
pub mod obligation;
pub mod statement;

pub use income::{Frequency, ProjectedIncomeEvent, RecurringIncomeRule};
pub use money::Money;
pub use obligation::{DueSchedule, Obligation, ObligationId, ObligationKind};
pub use statement::{ExtractedTransaction, FlowKind, LedgerRecord};
