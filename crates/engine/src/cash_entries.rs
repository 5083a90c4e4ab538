//! Cash memo lines. Credit entries record cash coming in, debit entries cash
//! going out. `payment_reference` links a line to the payment voucher that
//! mirrors it; the reconciliation service keys its idempotency guard on it.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError,
    payments::{Category, PaymentMethod},
    util::parse_optional_uuid,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Credit,
    Debit,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl TryFrom<&str> for EntryType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            other => Err(EngineError::Validation(format!(
                "invalid entry type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptType {
    General,
    CustomerPayment,
    Sale,
    OtherIncome,
}

impl ReceiptType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::CustomerPayment => "customer_payment",
            Self::Sale => "sale",
            Self::OtherIncome => "other_income",
        }
    }
}

impl TryFrom<&str> for ReceiptType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "general" => Ok(Self::General),
            "customer_payment" => Ok(Self::CustomerPayment),
            "sale" => Ok(Self::Sale),
            "other_income" => Ok(Self::OtherIncome),
            other => Err(EngineError::Validation(format!(
                "invalid receipt type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashEntry {
    pub id: Uuid,
    pub memo_id: Uuid,
    pub entry_type: EntryType,
    pub name: String,
    pub description: Option<String>,
    pub amount_minor: i64,
    pub account: Option<Uuid>,
    pub customer: Option<Uuid>,
    pub receipt_type: Option<ReceiptType>,
    pub category: Option<Category>,
    pub mazdoor: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<Uuid>,
    pub expense_reference: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cash_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub memo_id: String,
    pub entry_type: String,
    pub name: String,
    pub description: Option<String>,
    pub amount_minor: i64,
    pub account: Option<String>,
    pub customer: Option<String>,
    pub receipt_type: Option<String>,
    pub category: Option<String>,
    pub mazdoor: Option<String>,
    pub supplier: Option<String>,
    pub payment_method: String,
    pub payment_reference: Option<String>,
    pub expense_reference: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::memos::Entity",
        from = "Column::MemoId",
        to = "super::memos::Column::Id"
    )]
    Memos,
}

impl Related<super::memos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&CashEntry> for ActiveModel {
    fn from(entry: &CashEntry) -> Self {
        Self {
            id: ActiveValue::Set(entry.id.to_string()),
            memo_id: ActiveValue::Set(entry.memo_id.to_string()),
            entry_type: ActiveValue::Set(entry.entry_type.as_str().to_string()),
            name: ActiveValue::Set(entry.name.clone()),
            description: ActiveValue::Set(entry.description.clone()),
            amount_minor: ActiveValue::Set(entry.amount_minor),
            account: ActiveValue::Set(entry.account.map(|id| id.to_string())),
            customer: ActiveValue::Set(entry.customer.map(|id| id.to_string())),
            receipt_type: ActiveValue::Set(entry.receipt_type.map(|r| r.as_str().to_string())),
            category: ActiveValue::Set(entry.category.map(|c| c.as_str().to_string())),
            mazdoor: ActiveValue::Set(entry.mazdoor.map(|id| id.to_string())),
            supplier: ActiveValue::Set(entry.supplier.map(|id| id.to_string())),
            payment_method: ActiveValue::Set(entry.payment_method.as_str().to_string()),
            payment_reference: ActiveValue::Set(entry.payment_reference.map(|id| id.to_string())),
            expense_reference: ActiveValue::Set(entry.expense_reference.map(|id| id.to_string())),
            created_at: ActiveValue::Set(entry.created_at),
        }
    }
}

impl TryFrom<Model> for CashEntry {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("cash entry not exists".to_string()))?,
            memo_id: Uuid::parse_str(&model.memo_id)
                .map_err(|_| EngineError::NotFound("memo not exists".to_string()))?,
            entry_type: EntryType::try_from(model.entry_type.as_str())?,
            name: model.name,
            description: model.description,
            amount_minor: model.amount_minor,
            account: parse_optional_uuid(model.account),
            customer: parse_optional_uuid(model.customer),
            receipt_type: model
                .receipt_type
                .as_deref()
                .map(ReceiptType::try_from)
                .transpose()?,
            category: model
                .category
                .as_deref()
                .map(Category::try_from)
                .transpose()?,
            mazdoor: parse_optional_uuid(model.mazdoor),
            supplier: parse_optional_uuid(model.supplier),
            payment_method: PaymentMethod::try_from(model.payment_method.as_str())?,
            payment_reference: parse_optional_uuid(model.payment_reference),
            expense_reference: parse_optional_uuid(model.expense_reference),
            created_at: model.created_at,
        })
    }
}
