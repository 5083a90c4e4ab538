//! Payment vouchers.
//!
//! A `Payment` is a single cash movement: kind `payment` moves money out of
//! `from_account`, kind `receipt` moves money into `to_account`. Posted
//! payments have already been applied to the account balance; drafts have not.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, util::parse_optional_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Payment,
    Receipt,
}

impl PaymentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Receipt => "receipt",
        }
    }

    pub fn voucher_prefix(self) -> &'static str {
        match self {
            Self::Payment => "PAY",
            Self::Receipt => "REC",
        }
    }
}

impl TryFrom<&str> for PaymentKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "payment" => Ok(Self::Payment),
            "receipt" => Ok(Self::Receipt),
            other => Err(EngineError::Validation(format!(
                "invalid payment kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Draft,
    Posted,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Posted => "posted",
            Self::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "draft" => Ok(Self::Draft),
            "posted" => Ok(Self::Posted),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(EngineError::Validation(format!(
                "invalid payment status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Cheque,
    BankTransfer,
    Online,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Cheque => "cheque",
            Self::BankTransfer => "bank_transfer",
            Self::Online => "online",
        }
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "cash" => Ok(Self::Cash),
            "cheque" => Ok(Self::Cheque),
            "bank_transfer" => Ok(Self::BankTransfer),
            "online" => Ok(Self::Online),
            other => Err(EngineError::Validation(format!(
                "invalid payment method: {other}"
            ))),
        }
    }
}

/// Where a payment was born. Memo-born payments are never mirrored back into
/// a memo, which is one half of the double-mirroring guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSource {
    Manual,
    DailyCashMemo,
}

impl PaymentSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::DailyCashMemo => "daily_cash_memo",
        }
    }
}

impl TryFrom<&str> for PaymentSource {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "manual" => Ok(Self::Manual),
            "daily_cash_memo" => Ok(Self::DailyCashMemo),
            other => Err(EngineError::Validation(format!(
                "invalid payment source: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mazdoor,
    Electricity,
    Rent,
    Transport,
    RawMaterial,
    Maintenance,
    Packaging,
    CustomerPayment,
    SupplierPayment,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mazdoor => "mazdoor",
            Self::Electricity => "electricity",
            Self::Rent => "rent",
            Self::Transport => "transport",
            Self::RawMaterial => "raw_material",
            Self::Maintenance => "maintenance",
            Self::Packaging => "packaging",
            Self::CustomerPayment => "customer_payment",
            Self::SupplierPayment => "supplier_payment",
            Self::Other => "other",
        }
    }

    /// Categories that also show up in the expense book when money leaves
    /// through a memo debit entry.
    pub fn is_expense_worthy(self) -> bool {
        matches!(
            self,
            Self::Mazdoor
                | Self::Electricity
                | Self::Rent
                | Self::Transport
                | Self::RawMaterial
                | Self::Maintenance
                | Self::Other
                | Self::SupplierPayment
        )
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "mazdoor" => Ok(Self::Mazdoor),
            "electricity" => Ok(Self::Electricity),
            "rent" => Ok(Self::Rent),
            "transport" => Ok(Self::Transport),
            "raw_material" => Ok(Self::RawMaterial),
            "maintenance" => Ok(Self::Maintenance),
            "packaging" => Ok(Self::Packaging),
            "customer_payment" => Ok(Self::CustomerPayment),
            "supplier_payment" => Ok(Self::SupplierPayment),
            "other" => Ok(Self::Other),
            unknown => Err(EngineError::Validation(format!(
                "invalid category: {unknown}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub voucher_number: String,
    pub kind: PaymentKind,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount_minor: i64,
    pub payment_method: PaymentMethod,
    pub cheque_number: Option<String>,
    pub from_account: Option<Uuid>,
    pub to_account: Option<Uuid>,
    pub paid_to: Option<String>,
    pub received_from: Option<String>,
    pub mazdoor: Option<Uuid>,
    pub customer: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub category: Option<Category>,
    pub status: PaymentStatus,
    pub source: PaymentSource,
    pub notes: Option<String>,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// The account this payment moves money through, with the signed delta a
    /// posted payment applies to its balance.
    pub fn account_delta(&self) -> Option<(Uuid, i64)> {
        match self.kind {
            PaymentKind::Payment => self.from_account.map(|id| (id, -self.amount_minor)),
            PaymentKind::Receipt => self.to_account.map(|id| (id, self.amount_minor)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub voucher_number: String,
    pub kind: String,
    pub date: DateTimeUtc,
    pub description: String,
    pub amount_minor: i64,
    pub payment_method: String,
    pub cheque_number: Option<String>,
    pub from_account: Option<String>,
    pub to_account: Option<String>,
    pub paid_to: Option<String>,
    pub received_from: Option<String>,
    pub mazdoor: Option<String>,
    pub customer: Option<String>,
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub status: String,
    pub source: String,
    pub notes: Option<String>,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Payment> for ActiveModel {
    fn from(payment: &Payment) -> Self {
        Self {
            id: ActiveValue::Set(payment.id.to_string()),
            voucher_number: ActiveValue::Set(payment.voucher_number.clone()),
            kind: ActiveValue::Set(payment.kind.as_str().to_string()),
            date: ActiveValue::Set(payment.date),
            description: ActiveValue::Set(payment.description.clone()),
            amount_minor: ActiveValue::Set(payment.amount_minor),
            payment_method: ActiveValue::Set(payment.payment_method.as_str().to_string()),
            cheque_number: ActiveValue::Set(payment.cheque_number.clone()),
            from_account: ActiveValue::Set(payment.from_account.map(|id| id.to_string())),
            to_account: ActiveValue::Set(payment.to_account.map(|id| id.to_string())),
            paid_to: ActiveValue::Set(payment.paid_to.clone()),
            received_from: ActiveValue::Set(payment.received_from.clone()),
            mazdoor: ActiveValue::Set(payment.mazdoor.map(|id| id.to_string())),
            customer: ActiveValue::Set(payment.customer.map(|id| id.to_string())),
            supplier: ActiveValue::Set(payment.supplier.map(|id| id.to_string())),
            category: ActiveValue::Set(payment.category.map(|c| c.as_str().to_string())),
            status: ActiveValue::Set(payment.status.as_str().to_string()),
            source: ActiveValue::Set(payment.source.as_str().to_string()),
            notes: ActiveValue::Set(payment.notes.clone()),
            created_by: ActiveValue::Set(payment.created_by.clone()),
            updated_by: ActiveValue::Set(payment.updated_by.clone()),
            created_at: ActiveValue::Set(payment.created_at),
        }
    }
}

impl TryFrom<Model> for Payment {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("payment not exists".to_string()))?,
            voucher_number: model.voucher_number,
            kind: PaymentKind::try_from(model.kind.as_str())?,
            date: model.date,
            description: model.description,
            amount_minor: model.amount_minor,
            payment_method: PaymentMethod::try_from(model.payment_method.as_str())?,
            cheque_number: model.cheque_number,
            from_account: parse_optional_uuid(model.from_account),
            to_account: parse_optional_uuid(model.to_account),
            paid_to: model.paid_to,
            received_from: model.received_from,
            mazdoor: parse_optional_uuid(model.mazdoor),
            customer: parse_optional_uuid(model.customer),
            supplier: parse_optional_uuid(model.supplier),
            category: model
                .category
                .as_deref()
                .map(Category::try_from)
                .transpose()?,
            status: PaymentStatus::try_from(model.status.as_str())?,
            source: PaymentSource::try_from(model.source.as_str())?,
            notes: model.notes,
            created_by: model.created_by,
            updated_by: model.updated_by,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_delta_signs() {
        let mut payment = Payment {
            id: Uuid::new_v4(),
            voucher_number: "PAY-000001".to_string(),
            kind: PaymentKind::Payment,
            date: Utc::now(),
            description: "diesel".to_string(),
            amount_minor: 5_000,
            payment_method: PaymentMethod::Cash,
            cheque_number: None,
            from_account: Some(Uuid::new_v4()),
            to_account: None,
            paid_to: None,
            received_from: None,
            mazdoor: None,
            customer: None,
            supplier: None,
            category: None,
            status: PaymentStatus::Posted,
            source: PaymentSource::Manual,
            notes: None,
            created_by: "tester".to_string(),
            updated_by: None,
            created_at: Utc::now(),
        };

        let (_, delta) = payment.account_delta().unwrap();
        assert_eq!(delta, -5_000);

        payment.kind = PaymentKind::Receipt;
        payment.to_account = payment.from_account;
        let (_, delta) = payment.account_delta().unwrap();
        assert_eq!(delta, 5_000);
    }

    #[test]
    fn expense_worthy_categories() {
        assert!(Category::Mazdoor.is_expense_worthy());
        assert!(Category::SupplierPayment.is_expense_worthy());
        assert!(!Category::CustomerPayment.is_expense_worthy());
        assert!(!Category::Packaging.is_expense_worthy());
    }
}
