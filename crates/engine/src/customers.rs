//! Customers carry a receivable balance: positive means they owe the mill.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub opening_balance_minor: i64,
    pub current_balance_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Customer {
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
#[sea_orm(table_name = "customers")]
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

impl From<&Customer> for ActiveModel {
    fn from(customer: &Customer) -> Self {
        Self {
            id: ActiveValue::Set(customer.id.to_string()),
            name: ActiveValue::Set(customer.name.clone()),
            phone: ActiveValue::Set(customer.phone.clone()),
            address: ActiveValue::Set(customer.address.clone()),
            opening_balance_minor: ActiveValue::Set(customer.opening_balance_minor),
            current_balance_minor: ActiveValue::Set(customer.current_balance_minor),
            is_active: ActiveValue::Set(customer.is_active),
            created_at: ActiveValue::Set(customer.created_at),
        }
    }
}

impl TryFrom<Model> for Customer {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("customer not exists".to_string()))?,
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
