use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub type TransactionId = i64;

/// Categories the server accepts for a correction.
pub const ALLOWED_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Shopping",
    "Healthcare",
    "Utilities",
    "Entertainment",
    "Income",
    "Transfers",
];

#[derive(Clone, Debug, PartialEq, Default)]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
    /// Anything else the server sent. Kept verbatim for display.
    Unknown(String),
}

impl TransactionType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "expense" => TransactionType::Expense,
            "income" => TransactionType::Income,
            other => TransactionType::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
            TransactionType::Unknown(raw) => raw,
        }
    }

    pub fn presentation(&self) -> Presentation {
        match self {
            TransactionType::Expense => Presentation::Expense,
            TransactionType::Income | TransactionType::Unknown(_) => Presentation::Income,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => TransactionType::from_label(&s),
            Value::Null => TransactionType::Unknown(String::new()),
            other => TransactionType::Unknown(other.to_string()),
        })
    }
}

impl Serialize for TransactionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// The two row styles a transaction can take in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Expense,
    Income,
}

impl Presentation {
    pub fn row_class(self) -> &'static str {
        match self {
            Presentation::Expense => "row-expense",
            Presentation::Income => "row-income",
        }
    }

    pub fn amount_class(self) -> &'static str {
        match self {
            Presentation::Expense => "amount-expense",
            Presentation::Income => "amount-income",
        }
    }
}

/// One transaction as returned by `GET /transactions`.
///
/// Every field is lenient: a missing, null or oddly typed value falls back to
/// a default so one bad row never takes the whole table down.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct TransactionRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<TransactionId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub transaction_type: TransactionType,
}

impl TransactionRecord {
    pub fn presentation(&self) -> Presentation {
        self.transaction_type.presentation()
    }

    /// True if the lowercased description, category or type contains `query`.
    /// `query` must already be lowercase.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self.description.to_lowercase().contains(query)
            || self.category.to_lowercase().contains(query)
            || self.transaction_type.label().to_lowercase().contains(query)
    }
}

/// Builds records from a raw JSON list. Entries that are not objects are
/// skipped; everything else is accepted with defaults.
pub fn parse_records(values: Vec<Value>) -> Vec<TransactionRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            if !value.is_object() {
                log::warn!("skipping transaction #{idx}: expected an object, got {value}");
                return None;
            }
            match serde_json::from_value::<TransactionRecord>(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("skipping transaction #{idx}: {err}");
                    None
                }
            }
        })
        .collect()
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<TransactionId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if amount.is_finite() { amount } else { 0.0 })
}

/// `GET /summary`
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_income: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_expense: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub balance: f64,
}

/// `GET /summary/insights`
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct Insights {
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub highest_expense: f64,
    #[serde(default)]
    pub top_category: Option<String>,
}

/// `GET /summary/categories`: expense total per category.
pub type CategoryTotals = BTreeMap<String, f64>;

#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct MonthlyTotals {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub income: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub expense: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub balance: f64,
}

/// `GET /summary/monthly`, keyed by `YYYY-MM` so iteration is chronological.
pub type MonthlySummary = BTreeMap<String, MonthlyTotals>;

/// `POST /transactions/upload`
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub transactions_inserted: u64,
}

#[derive(Debug, Serialize)]
pub struct CategoryCorrection<'a> {
    pub category: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_server_shape() -> anyhow::Result<()> {
        let record: TransactionRecord = serde_json::from_value(json!({
            "id": 7,
            "amount": 12.5,
            "category": "Food",
            "description": "Lunch",
            "transaction_type": "expense",
            "created_at": "2024-03-02T10:15:00"
        }))?;

        assert_eq!(record.id, Some(7));
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.transaction_type, TransactionType::Expense);
        assert_eq!(record.presentation(), Presentation::Expense);
        Ok(())
    }

    #[test]
    fn test_record_tolerates_missing_and_null_fields() -> anyhow::Result<()> {
        let record: TransactionRecord = serde_json::from_value(json!({
            "id": "12",
            "description": null,
            "amount": "oops"
        }))?;

        assert_eq!(record.id, Some(12));
        assert_eq!(record.description, "");
        assert_eq!(record.category, "");
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.created_at, "");
        Ok(())
    }

    #[test]
    fn test_unknown_type_is_kept_and_styled_as_income() -> anyhow::Result<()> {
        let record: TransactionRecord =
            serde_json::from_value(json!({ "id": 1, "transaction_type": "refund" }))?;

        assert_eq!(record.transaction_type, TransactionType::Unknown("refund".into()));
        assert_eq!(record.transaction_type.label(), "refund");
        assert_eq!(record.presentation().row_class(), "row-income");
        Ok(())
    }

    #[test]
    fn test_parse_records_skips_non_objects() {
        let records = parse_records(vec![
            json!({ "id": 1, "amount": 3 }),
            json!("garbage"),
            json!(null),
            json!({ "id": 2 }),
        ]);

        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_matches_is_case_insensitive_on_record_side() {
        let record = TransactionRecord {
            description: "Morning COFFEE".into(),
            category: "Food".into(),
            ..Default::default()
        };

        assert!(record.matches("coffee"));
        assert!(record.matches("food"));
        assert!(record.matches("expense"));
        assert!(record.matches(""));
        assert!(!record.matches("salary"));
    }

    #[test]
    fn test_monthly_summary_iterates_chronologically() -> anyhow::Result<()> {
        let monthly: MonthlySummary = serde_json::from_value(json!({
            "2024-02": { "income": 10, "expense": 4, "balance": 6 },
            "2023-12": { "income": 1, "expense": 2, "balance": -1 }
        }))?;

        let months: Vec<_> = monthly.keys().cloned().collect();
        assert_eq!(months, vec!["2023-12".to_string(), "2024-02".to_string()]);
        Ok(())
    }
}
