//! Sale and purchase trades.
//!
//! A trade is a header plus line items. Sales move stock out and raise the
//! customer's receivable by the unpaid portion; purchases move stock in and
//! raise the supplier's payable.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, payments::PaymentMethod, trade_items, util::parse_optional_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeKind {
    Purchase,
    Sale,
}

impl TradeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sale => "sale",
        }
    }
}

impl TryFrom<&str> for TradeKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "purchase" => Ok(Self::Purchase),
            "sale" => Ok(Self::Sale),
            other => Err(EngineError::Validation(format!(
                "invalid trade kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProgress {
    Pending,
    Partial,
    Paid,
}

impl PaymentProgress {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Partial => "partial",
            Self::Paid => "paid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,
    pub kind: TradeKind,
    pub customer: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub subtotal_minor: i64,
    pub discount_minor: i64,
    pub tax_minor: i64,
    pub total_minor: i64,
    pub paid_amount_minor: i64,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<trade_items::TradeItem>,
}

impl Trade {
    /// Unpaid portion, clamped at zero for overpayments.
    pub fn remaining_minor(&self) -> i64 {
        (self.total_minor - self.paid_amount_minor).max(0)
    }

    pub fn payment_progress(&self) -> PaymentProgress {
        if self.paid_amount_minor <= 0 && self.total_minor > 0 {
            PaymentProgress::Pending
        } else if self.paid_amount_minor >= self.total_minor {
            PaymentProgress::Paid
        } else {
            PaymentProgress::Partial
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trades")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub kind: String,
    pub customer: Option<String>,
    pub supplier: Option<String>,
    pub date: DateTimeUtc,
    pub subtotal_minor: i64,
    pub discount_minor: i64,
    pub tax_minor: i64,
    pub total_minor: i64,
    pub paid_amount_minor: i64,
    pub payment_method: String,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub updated_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trade_items::Entity")]
    TradeItems,
}

impl Related<super::trade_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Trade> for ActiveModel {
    fn from(trade: &Trade) -> Self {
        Self {
            id: ActiveValue::Set(trade.id.to_string()),
            kind: ActiveValue::Set(trade.kind.as_str().to_string()),
            customer: ActiveValue::Set(trade.customer.map(|id| id.to_string())),
            supplier: ActiveValue::Set(trade.supplier.map(|id| id.to_string())),
            date: ActiveValue::Set(trade.date),
            subtotal_minor: ActiveValue::Set(trade.subtotal_minor),
            discount_minor: ActiveValue::Set(trade.discount_minor),
            tax_minor: ActiveValue::Set(trade.tax_minor),
            total_minor: ActiveValue::Set(trade.total_minor),
            paid_amount_minor: ActiveValue::Set(trade.paid_amount_minor),
            payment_method: ActiveValue::Set(trade.payment_method.as_str().to_string()),
            notes: ActiveValue::Set(trade.notes.clone()),
            is_active: ActiveValue::Set(trade.is_active),
            created_by: ActiveValue::Set(trade.created_by.clone()),
            updated_by: ActiveValue::Set(trade.updated_by.clone()),
            created_at: ActiveValue::Set(trade.created_at),
        }
    }
}

impl TryFrom<Model> for Trade {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("trade not exists".to_string()))?,
            kind: TradeKind::try_from(model.kind.as_str())?,
            customer: parse_optional_uuid(model.customer),
            supplier: parse_optional_uuid(model.supplier),
            date: model.date,
            subtotal_minor: model.subtotal_minor,
            discount_minor: model.discount_minor,
            tax_minor: model.tax_minor,
            total_minor: model.total_minor,
            paid_amount_minor: model.paid_amount_minor,
            payment_method: PaymentMethod::try_from(model.payment_method.as_str())?,
            notes: model.notes,
            is_active: model.is_active,
            created_by: model.created_by,
            updated_by: model.updated_by,
            created_at: model.created_at,
            items: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(total_minor: i64, paid_amount_minor: i64) -> Trade {
        Trade {
            id: Uuid::new_v4(),
            kind: TradeKind::Sale,
            customer: Some(Uuid::new_v4()),
            supplier: None,
            date: Utc::now(),
            subtotal_minor: total_minor,
            discount_minor: 0,
            tax_minor: 0,
            total_minor,
            paid_amount_minor,
            payment_method: PaymentMethod::Cash,
            notes: None,
            is_active: true,
            created_by: "tester".to_string(),
            updated_by: None,
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    #[test]
    fn payment_progress_thresholds() {
        assert_eq!(trade(1_000, 0).payment_progress(), PaymentProgress::Pending);
        assert_eq!(
            trade(1_000, 400).payment_progress(),
            PaymentProgress::Partial
        );
        assert_eq!(trade(1_000, 1_000).payment_progress(), PaymentProgress::Paid);
        assert_eq!(trade(1_000, 1_500).payment_progress(), PaymentProgress::Paid);
    }

    #[test]
    fn remaining_clamps_overpayment() {
        assert_eq!(trade(1_000, 400).remaining_minor(), 600);
        assert_eq!(trade(1_000, 1_500).remaining_minor(), 0);
    }
}
