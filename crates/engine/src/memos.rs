//! Daily cash memos: one ledger page per calendar day.
//!
//! `closing_balance_minor` is derived: opening + credits − debits. It is
//! recomputed every time an entry lands and frozen once the memo is posted.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError,
    cash_entries::{CashEntry, EntryType},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoStatus {
    Draft,
    Posted,
    Closed,
}

impl MemoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Posted => "posted",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for MemoStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "draft" => Ok(Self::Draft),
            "posted" => Ok(Self::Posted),
            "closed" => Ok(Self::Closed),
            other => Err(EngineError::Validation(format!(
                "invalid memo status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCashMemo {
    pub id: Uuid,
    pub date: NaiveDate,
    pub opening_balance_minor: i64,
    pub closing_balance_minor: i64,
    pub status: MemoStatus,
    pub notes: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub posted_by: Option<String>,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DailyCashMemo {
    pub fn new(date: NaiveDate, opening_balance_minor: i64, created_by: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            opening_balance_minor,
            closing_balance_minor: opening_balance_minor,
            status: MemoStatus::Draft,
            notes: None,
            posted_at: None,
            posted_by: None,
            created_by,
            updated_by: None,
            created_at: Utc::now(),
        }
    }
}

/// Closing balance for a memo page given its entries.
pub fn closing_balance(opening_minor: i64, entries: &[CashEntry]) -> i64 {
    let credits: i64 = entries
        .iter()
        .filter(|e| e.entry_type == EntryType::Credit)
        .map(|e| e.amount_minor)
        .sum();
    let debits: i64 = entries
        .iter()
        .filter(|e| e.entry_type == EntryType::Debit)
        .map(|e| e.amount_minor)
        .sum();
    opening_minor + credits - debits
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_cash_memos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: Date,
    pub opening_balance_minor: i64,
    pub closing_balance_minor: i64,
    pub status: String,
    pub notes: Option<String>,
    pub posted_at: Option<DateTimeUtc>,
    pub posted_by: Option<String>,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cash_entries::Entity")]
    CashEntries,
}

impl Related<super::cash_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CashEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&DailyCashMemo> for ActiveModel {
    fn from(memo: &DailyCashMemo) -> Self {
        Self {
            id: ActiveValue::Set(memo.id.to_string()),
            date: ActiveValue::Set(memo.date),
            opening_balance_minor: ActiveValue::Set(memo.opening_balance_minor),
            closing_balance_minor: ActiveValue::Set(memo.closing_balance_minor),
            status: ActiveValue::Set(memo.status.as_str().to_string()),
            notes: ActiveValue::Set(memo.notes.clone()),
            posted_at: ActiveValue::Set(memo.posted_at),
            posted_by: ActiveValue::Set(memo.posted_by.clone()),
            created_by: ActiveValue::Set(memo.created_by.clone()),
            updated_by: ActiveValue::Set(memo.updated_by.clone()),
            created_at: ActiveValue::Set(memo.created_at),
        }
    }
}

impl TryFrom<Model> for DailyCashMemo {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("memo not exists".to_string()))?,
            date: model.date,
            opening_balance_minor: model.opening_balance_minor,
            closing_balance_minor: model.closing_balance_minor,
            status: MemoStatus::try_from(model.status.as_str())?,
            notes: model.notes,
            posted_at: model.posted_at,
            posted_by: model.posted_by,
            created_by: model.created_by,
            updated_by: model.updated_by,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cash_entries::CashEntry;

    fn entry(entry_type: EntryType, amount_minor: i64) -> CashEntry {
        CashEntry {
            id: Uuid::new_v4(),
            memo_id: Uuid::new_v4(),
            entry_type,
            name: "test".to_string(),
            description: None,
            amount_minor,
            account: None,
            customer: None,
            receipt_type: None,
            category: None,
            mazdoor: None,
            supplier: None,
            payment_method: crate::payments::PaymentMethod::Cash,
            payment_reference: None,
            expense_reference: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn closing_is_opening_plus_credits_minus_debits() {
        let entries = vec![entry(EntryType::Credit, 500), entry(EntryType::Debit, 200)];
        assert_eq!(closing_balance(1_000, &entries), 1_300);
    }

    #[test]
    fn closing_of_empty_page_is_opening() {
        assert_eq!(closing_balance(750, &[]), 750);
    }
}
