//! Inventory items. `current_stock` is denormalized and only moved through
//! stock operations or trades, never written directly by handlers.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub unit: String,
    pub item_type: Option<String>,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub purchase_rate_minor: i64,
    pub selling_rate_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(name: String, code: String, unit: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            code,
            unit,
            item_type: None,
            current_stock: 0,
            reorder_level: 0,
            purchase_rate_minor: 0,
            selling_rate_minor: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub code: String,
    pub unit: String,
    pub item_type: Option<String>,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub purchase_rate_minor: i64,
    pub selling_rate_minor: i64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Item> for ActiveModel {
    fn from(item: &Item) -> Self {
        Self {
            id: ActiveValue::Set(item.id.to_string()),
            name: ActiveValue::Set(item.name.clone()),
            code: ActiveValue::Set(item.code.clone()),
            unit: ActiveValue::Set(item.unit.clone()),
            item_type: ActiveValue::Set(item.item_type.clone()),
            current_stock: ActiveValue::Set(item.current_stock),
            reorder_level: ActiveValue::Set(item.reorder_level),
            purchase_rate_minor: ActiveValue::Set(item.purchase_rate_minor),
            selling_rate_minor: ActiveValue::Set(item.selling_rate_minor),
            is_active: ActiveValue::Set(item.is_active),
            created_at: ActiveValue::Set(item.created_at),
        }
    }
}

impl TryFrom<Model> for Item {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("item not exists".to_string()))?,
            name: model.name,
            code: model.code,
            unit: model.unit,
            item_type: model.item_type,
            current_stock: model.current_stock,
            reorder_level: model.reorder_level,
            purchase_rate_minor: model.purchase_rate_minor,
            selling_rate_minor: model.selling_rate_minor,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
