//! Trade line items.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeItem {
    pub id: Uuid,
    pub trade_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
    pub rate_minor: i64,
    pub total_minor: i64,
}

impl TradeItem {
    pub fn new(trade_id: Uuid, item_id: Uuid, quantity: i64, rate_minor: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            trade_id,
            item_id,
            quantity,
            rate_minor,
            total_minor: quantity * rate_minor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trade_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub trade_id: String,
    pub item_id: String,
    pub quantity: i64,
    pub rate_minor: i64,
    pub total_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trades::Entity",
        from = "Column::TradeId",
        to = "super::trades::Column::Id"
    )]
    Trades,
}

impl Related<super::trades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&TradeItem> for ActiveModel {
    fn from(line: &TradeItem) -> Self {
        Self {
            id: ActiveValue::Set(line.id.to_string()),
            trade_id: ActiveValue::Set(line.trade_id.to_string()),
            item_id: ActiveValue::Set(line.item_id.to_string()),
            quantity: ActiveValue::Set(line.quantity),
            rate_minor: ActiveValue::Set(line.rate_minor),
            total_minor: ActiveValue::Set(line.total_minor),
        }
    }
}

impl TryFrom<Model> for TradeItem {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("trade item not exists".to_string()))?,
            trade_id: Uuid::parse_str(&model.trade_id)
                .map_err(|_| EngineError::NotFound("trade not exists".to_string()))?,
            item_id: Uuid::parse_str(&model.item_id)
                .map_err(|_| EngineError::NotFound("item not exists".to_string()))?,
            quantity: model.quantity,
            rate_minor: model.rate_minor,
            total_minor: model.total_minor,
        })
    }
}
