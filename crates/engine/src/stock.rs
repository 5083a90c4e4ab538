//! Stock movement journal.
//!
//! Every change to an item's `current_stock` leaves a row here with the
//! before/after snapshot and, when known, what caused it.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, util::parse_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockOperation {
    In,
    Out,
    Adjustment,
}

impl StockOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Adjustment => "adjustment",
        }
    }
}

impl TryFrom<&str> for StockOperation {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "adjustment" => Ok(Self::Adjustment),
            other => Err(EngineError::Validation(format!(
                "invalid stock operation: {other}"
            ))),
        }
    }
}

/// What caused a stock move. Stored as a `reference_kind` + `reference_id`
/// column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockReference {
    Trade { trade_id: Uuid },
    Supplier { supplier_id: Uuid },
    Customer { customer_id: Uuid },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockReferenceKind {
    Trade,
    Supplier,
    Customer,
}

impl StockReferenceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trade => "trade",
            Self::Supplier => "supplier",
            Self::Customer => "customer",
        }
    }
}

impl StockReference {
    pub fn kind(self) -> StockReferenceKind {
        match self {
            Self::Trade { .. } => StockReferenceKind::Trade,
            Self::Supplier { .. } => StockReferenceKind::Supplier,
            Self::Customer { .. } => StockReferenceKind::Customer,
        }
    }

    pub fn id(self) -> Uuid {
        match self {
            Self::Trade { trade_id } => trade_id,
            Self::Supplier { supplier_id } => supplier_id,
            Self::Customer { customer_id } => customer_id,
        }
    }

    fn from_columns(kind: Option<String>, id: Option<String>) -> Option<Self> {
        let kind = kind?;
        let id = Uuid::parse_str(id?.as_str()).ok()?;
        match kind.as_str() {
            "trade" => Some(Self::Trade { trade_id: id }),
            "supplier" => Some(Self::Supplier { supplier_id: id }),
            "customer" => Some(Self::Customer { customer_id: id }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMove {
    pub id: Uuid,
    pub item_id: Uuid,
    pub operation: StockOperation,
    pub quantity: i64,
    pub previous_stock: i64,
    pub new_stock: i64,
    pub rate_minor: Option<i64>,
    pub total_amount_minor: Option<i64>,
    pub reference: Option<StockReference>,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_by: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_moves")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item_id: String,
    pub operation: String,
    pub quantity: i64,
    pub previous_stock: i64,
    pub new_stock: i64,
    pub rate_minor: Option<i64>,
    pub total_amount_minor: Option<i64>,
    pub reference_kind: Option<String>,
    pub reference_id: Option<String>,
    pub date: DateTimeUtc,
    pub notes: Option<String>,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&StockMove> for ActiveModel {
    fn from(stock_move: &StockMove) -> Self {
        Self {
            id: ActiveValue::Set(stock_move.id.to_string()),
            item_id: ActiveValue::Set(stock_move.item_id.to_string()),
            operation: ActiveValue::Set(stock_move.operation.as_str().to_string()),
            quantity: ActiveValue::Set(stock_move.quantity),
            previous_stock: ActiveValue::Set(stock_move.previous_stock),
            new_stock: ActiveValue::Set(stock_move.new_stock),
            rate_minor: ActiveValue::Set(stock_move.rate_minor),
            total_amount_minor: ActiveValue::Set(stock_move.total_amount_minor),
            reference_kind: ActiveValue::Set(
                stock_move.reference.map(|r| r.kind().as_str().to_string()),
            ),
            reference_id: ActiveValue::Set(stock_move.reference.map(|r| r.id().to_string())),
            date: ActiveValue::Set(stock_move.date),
            notes: ActiveValue::Set(stock_move.notes.clone()),
            created_by: ActiveValue::Set(stock_move.created_by.clone()),
        }
    }
}

impl TryFrom<Model> for StockMove {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "stock move")?,
            item_id: parse_uuid(&model.item_id, "item")?,
            operation: StockOperation::try_from(model.operation.as_str())?,
            quantity: model.quantity,
            previous_stock: model.previous_stock,
            new_stock: model.new_stock,
            rate_minor: model.rate_minor,
            total_amount_minor: model.total_amount_minor,
            reference: StockReference::from_columns(model.reference_kind, model.reference_id),
            date: model.date,
            notes: model.notes,
            created_by: model.created_by,
        })
    }
}
