//! Ledger accounts: the cash box, bank accounts and expense heads.
//!
//! One account is flagged `is_cash_account`; the reconciliation service moves
//! cash through it whenever an expense or a memo debit entry lands.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Asset,
    Liability,
    Income,
    Expense,
    Equity,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Equity => "equity",
        }
    }
}

impl TryFrom<&str> for AccountType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "equity" => Ok(Self::Equity),
            other => Err(EngineError::Validation(format!(
                "invalid account type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub account_type: AccountType,
    pub is_cash_account: bool,
    pub is_bank_account: bool,
    pub opening_balance_minor: i64,
    pub current_balance_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(name: String, code: String, account_type: AccountType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            code,
            account_type,
            is_cash_account: false,
            is_bank_account: false,
            opening_balance_minor: 0,
            current_balance_minor: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub code: String,
    pub account_type: String,
    pub is_cash_account: bool,
    pub is_bank_account: bool,
    pub opening_balance_minor: i64,
    pub current_balance_minor: i64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        Self {
            id: ActiveValue::Set(account.id.to_string()),
            name: ActiveValue::Set(account.name.clone()),
            code: ActiveValue::Set(account.code.clone()),
            account_type: ActiveValue::Set(account.account_type.as_str().to_string()),
            is_cash_account: ActiveValue::Set(account.is_cash_account),
            is_bank_account: ActiveValue::Set(account.is_bank_account),
            opening_balance_minor: ActiveValue::Set(account.opening_balance_minor),
            current_balance_minor: ActiveValue::Set(account.current_balance_minor),
            is_active: ActiveValue::Set(account.is_active),
            created_at: ActiveValue::Set(account.created_at),
        }
    }
}

impl TryFrom<Model> for Account {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::NotFound("account not exists".to_string()))?,
            name: model.name,
            code: model.code,
            account_type: AccountType::try_from(model.account_type.as_str())?,
            is_cash_account: model.is_cash_account,
            is_bank_account: model.is_bank_account,
            opening_balance_minor: model.opening_balance_minor,
            current_balance_minor: model.current_balance_minor,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
