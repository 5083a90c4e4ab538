//! Mazdoors (day labourers). The balance tracks advances: positive means the
//! worker holds an advance against future wages.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mazdoor {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub daily_wage_minor: i64,
    pub current_balance_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Mazdoor {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone: None,
            daily_wage_minor: 0,
            current_balance_minor: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mazdoors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub daily_wage_minor: i64,
    pub current_balance_minor: i64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Mazdoor> for ActiveModel {
    fn from(mazdoor: &Mazdoor) -> Self {
        Self {
            id: ActiveValue::Set(mazdoor.id.to_string()),
            name: ActiveValue::Set(mazdoor.name.clone()),
            phone: ActiveValue::Set(mazdoor.phone.clone()),
            daily_wage_minor: ActiveValue::Set(mazdoor.daily_wage_minor),
            current_balance_minor: ActiveValue::Set(mazdoor.current_balance_minor),
            is_active: ActiveValue::Set(mazdoor.is_active),
            created_at: ActiveValue::Set(mazdoor.created_at),
        }
    }
}

impl TryFrom<Model> for Mazdoor {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("mazdoor not exists".to_string()))?,
            name: model.name,
            phone: model.phone,
            daily_wage_minor: model.daily_wage_minor,
            current_balance_minor: model.current_balance_minor,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
