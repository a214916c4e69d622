//! Conversion of loosely-typed records from the persistence collaborator
//! into the strongly-typed entities of this crate. The engine never accepts
//! untyped maps past this point.
//!
//! Amounts are coerced defensively: a missing or non-numeric amount becomes
//! zero rather than an error. Records whose structurally required fields
//! (date, due day) cannot be read are skipped with a warning so one bad row
//! never halts the surrounding flow.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

use super::income::{Frequency, RecurringIncomeRule};
use super::money::Money;
use super::obligation::{DueSchedule, Obligation, ObligationId, ObligationKind};
use super::statement::{ExtractedTransaction, FlowKind, LedgerRecord};

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Looks a field up under both snake_case and camelCase spellings; the
/// persistence collaborator has shipped both over time.
fn field<'a>(obj: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| obj.get(name))
}

fn require<'a>(obj: &'a Value, names: &'static [&'static str]) -> Result<&'a Value, BoundaryError> {
    field(obj, names).ok_or(BoundaryError::MissingField(names[0]))
}

/// Tolerant amount reader: JSON numbers, or numeric strings with currency
/// symbols, thousands separators, and accounting parentheses. Anything else
/// coerces to zero.
pub fn coerce_amount(value: Option<&Value>) -> Money {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Money::from_decimal(Decimal::from(i))
            } else {
                n.as_f64()
                    .and_then(Decimal::from_f64_retain)
                    .map(Money::from_decimal)
                    .unwrap_or_else(Money::zero)
            }
        }
        Some(Value::String(s)) => parse_amount_str(s).unwrap_or_else(Money::zero),
        _ => Money::zero(),
    }
}

fn parse_amount_str(s: &str) -> Option<Money> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let (negative, s) = if s.starts_with('(') && s.ends_with(')') {
        (true, &s[1..s.len() - 1])
    } else {
        (false, s)
    };
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, ',' | '€' | '$' | ' '))
        .collect();
    let mut dec = Decimal::from_str(&cleaned).ok()?;
    if negative {
        dec = -dec;
    }
    Some(Money::from_decimal(dec))
}

/// Accepts plain `YYYY-MM-DD` dates and RFC 3339 timestamps, truncating the
/// latter to the calendar day.
pub fn parse_date(value: &Value) -> Result<NaiveDate, BoundaryError> {
    let s = value
        .as_str()
        .ok_or_else(|| BoundaryError::InvalidDate(value.to_string()))?;
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.date_naive());
    }
    Err(BoundaryError::InvalidDate(s.to_string()))
}

fn parse_frequency(value: Option<&Value>) -> Option<Frequency> {
    match value.and_then(Value::as_str)?.to_lowercase().as_str() {
        "monthly" => Some(Frequency::Monthly),
        "weekly" => Some(Frequency::Weekly),
        "yearly" | "annual" | "annually" => Some(Frequency::Yearly),
        _ => None,
    }
}

fn parse_obligation_kind(value: Option<&Value>) -> ObligationKind {
    match value.and_then(Value::as_str).map(str::to_lowercase).as_deref() {
        Some("debt_installment") | Some("debtinstallment") | Some("debt") => {
            ObligationKind::DebtInstallment
        }
        _ => ObligationKind::FixedCost,
    }
}

fn parse_flow_kind(value: Option<&Value>) -> Option<FlowKind> {
    match value.and_then(Value::as_str)?.to_lowercase().as_str() {
        "income" | "credit" => Some(FlowKind::Income),
        "expense" | "debit" => Some(FlowKind::Expense),
        _ => None,
    }
}

fn income_rule_from_json(record: &Value) -> Result<RecurringIncomeRule, BoundaryError> {
    if !record.is_object() {
        return Err(BoundaryError::NotAnObject);
    }
    let frequency = parse_frequency(field(record, &["frequency"]))
        .ok_or(BoundaryError::MissingField("frequency"))?;
    let day = require(record, &["day_of_month", "dayOfMonth"])?
        .as_u64()
        .ok_or(BoundaryError::MissingField("day_of_month"))? as u32;
    Ok(RecurringIncomeRule {
        frequency,
        amount: coerce_amount(field(record, &["amount"])),
        day_of_month: day,
        description: field(record, &["description"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

fn obligation_from_json(record: &Value) -> Result<Obligation, BoundaryError> {
    if !record.is_object() {
        return Err(BoundaryError::NotAnObject);
    }
    let id = require(record, &["id"])?
        .as_i64()
        .ok_or(BoundaryError::MissingField("id"))?;
    let due = if let Some(day) = field(record, &["due_day", "dueDay"]).and_then(Value::as_u64) {
        DueSchedule::DayOfMonth(day as u32)
    } else if let Some(value) = field(record, &["due_date", "dueDate"]) {
        DueSchedule::On(parse_date(value)?)
    } else {
        return Err(BoundaryError::MissingField("due_day"));
    };
    Ok(Obligation {
        id: ObligationId(id),
        name: field(record, &["name"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        amount: coerce_amount(field(record, &["amount"])),
        due,
        kind: parse_obligation_kind(field(record, &["kind"])),
        is_essential: field(record, &["is_essential", "isEssential"])
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn ledger_record_from_json(record: &Value) -> Result<LedgerRecord, BoundaryError> {
    if !record.is_object() {
        return Err(BoundaryError::NotAnObject);
    }
    let kind = parse_flow_kind(field(record, &["kind", "type"]))
        .ok_or(BoundaryError::MissingField("kind"))?;
    Ok(LedgerRecord {
        id: require(record, &["id"])?
            .as_i64()
            .ok_or(BoundaryError::MissingField("id"))?,
        date: parse_date(require(record, &["date"])?)?,
        description: field(record, &["description"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        amount: coerce_amount(field(record, &["amount"])),
        kind,
    })
}

fn extracted_from_json_one(record: &Value) -> Result<ExtractedTransaction, BoundaryError> {
    if !record.is_object() {
        return Err(BoundaryError::NotAnObject);
    }
    let kind = parse_flow_kind(field(record, &["kind", "type"]))
        .ok_or(BoundaryError::MissingField("kind"))?;
    Ok(ExtractedTransaction {
        date: parse_date(require(record, &["date"])?)?,
        description: field(record, &["description"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        amount: coerce_amount(field(record, &["amount"])),
        kind,
        counterparty: field(record, &["counterparty"])
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn convert_batch<T>(
    records: &[Value],
    what: &str,
    convert: impl Fn(&Value) -> Result<T, BoundaryError>,
) -> Vec<T> {
    records
        .iter()
        .filter_map(|record| match convert(record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!("skipping malformed {what} record: {e}");
                None
            }
        })
        .collect()
}

pub fn income_rules_from_json(records: &[Value]) -> Vec<RecurringIncomeRule> {
    convert_batch(records, "income rule", income_rule_from_json)
}

pub fn obligations_from_json(records: &[Value]) -> Vec<Obligation> {
    convert_batch(records, "obligation", obligation_from_json)
}

pub fn ledger_records_from_json(records: &[Value]) -> Vec<LedgerRecord> {
    convert_batch(records, "ledger", ledger_record_from_json)
}

pub fn extracted_from_json(records: &[Value]) -> Vec<ExtractedTransaction> {
    convert_batch(records, "extracted transaction", extracted_from_json_one)
}
