//! Expense book entries. Every expense is backed by a posted payment from the
//! cash account; the record here is the categorized view the reports read.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError,
    payments::{Category, PaymentMethod, PaymentSource},
    util::parse_optional_uuid,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub category: Category,
    pub description: String,
    pub amount_minor: i64,
    pub date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub mazdoor: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub source: PaymentSource,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category: String,
    pub description: String,
    pub amount_minor: i64,
    pub date: DateTimeUtc,
    pub payment_method: String,
    pub mazdoor: Option<String>,
    pub supplier: Option<String>,
    pub source: String,
    pub created_by: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Expense> for ActiveModel {
    fn from(expense: &Expense) -> Self {
        Self {
            id: ActiveValue::Set(expense.id.to_string()),
            category: ActiveValue::Set(expense.category.as_str().to_string()),
            description: ActiveValue::Set(expense.description.clone()),
            amount_minor: ActiveValue::Set(expense.amount_minor),
            date: ActiveValue::Set(expense.date),
            payment_method: ActiveValue::Set(expense.payment_method.as_str().to_string()),
            mazdoor: ActiveValue::Set(expense.mazdoor.map(|id| id.to_string())),
            supplier: ActiveValue::Set(expense.supplier.map(|id| id.to_string())),
            source: ActiveValue::Set(expense.source.as_str().to_string()),
            created_by: ActiveValue::Set(expense.created_by.clone()),
            created_at: ActiveValue::Set(expense.created_at),
        }
    }
}

impl TryFrom<Model> for Expense {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("expense not exists".to_string()))?,
            category: Category::try_from(model.category.as_str())?,
            description: model.description,
            amount_minor: model.amount_minor,
            date: model.date,
            payment_method: PaymentMethod::try_from(model.payment_method.as_str())?,
            mazdoor: parse_optional_uuid(model.mazdoor),
            supplier: parse_optional_uuid(model.supplier),
            source: PaymentSource::try_from(model.source.as_str())?,
            created_by: model.created_by,
            created_at: model.created_at,
        })
    }
}
