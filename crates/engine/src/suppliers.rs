//! Suppliers carry a payable balance: positive means the mill owes them.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub opening_balance_minor: i64,
    pub current_balance_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Supplier {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone: None,
            address: None,
            opening_balance_minor: 0,
            current_balance_minor: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub opening_balance_minor: i64,
    pub current_balance_minor: i64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Supplier> for ActiveModel {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: ActiveValue::Set(supplier.id.to_string()),
            name: ActiveValue::Set(supplier.name.clone()),
            phone: ActiveValue::Set(supplier.phone.clone()),
            address: ActiveValue::Set(supplier.address.clone()),
            opening_balance_minor: ActiveValue::Set(supplier.opening_balance_minor),
            current_balance_minor: ActiveValue::Set(supplier.current_balance_minor),
            is_active: ActiveValue::Set(supplier.is_active),
            created_at: ActiveValue::Set(supplier.created_at),
        }
    }
}

impl TryFrom<Model> for Supplier {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("supplier not exists".to_string()))?,
            name: model.name,
            phone: model.phone,
            address: model.address,
            opening_balance_minor: model.opening_balance_minor,
            current_balance_minor: model.current_balance_minor,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
