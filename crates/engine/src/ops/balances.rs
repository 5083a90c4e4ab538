//! Atomic balance increments for the four balance-holding families.
//!
//! Accounts are primary targets: a miss is an error and rolls the caller's
//! transaction back. Customer, supplier and mazdoor balances are best-effort
//! side effects; a miss is logged and the operation carries on.

use sea_orm::{DatabaseTransaction, QueryFilter, prelude::*, sea_query::Expr};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, customers, mazdoors, suppliers};
use crate::accounts;

use super::Engine;

impl Engine {
    pub(crate) async fn apply_account_delta(
        &self,
        db_tx: &DatabaseTransaction,
        account_id: Uuid,
        delta_minor: i64,
    ) -> ResultEngine<()> {
        let result = accounts::Entity::update_many()
            .col_expr(
                accounts::Column::CurrentBalanceMinor,
                Expr::col(accounts::Column::CurrentBalanceMinor).add(delta_minor),
            )
            .filter(accounts::Column::Id.eq(account_id.to_string()))
            .exec(db_tx)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::NotFound("account not exists".to_string()));
        }
        Ok(())
    }

    pub(crate) async fn apply_customer_delta(
        &self,
        db_tx: &DatabaseTransaction,
        customer_id: Uuid,
        delta_minor: i64,
    ) -> ResultEngine<()> {
        let result = customers::Entity::update_many()
            .col_expr(
                customers::Column::CurrentBalanceMinor,
                Expr::col(customers::Column::CurrentBalanceMinor).add(delta_minor),
            )
            .filter(customers::Column::Id.eq(customer_id.to_string()))
            .exec(db_tx)
            .await?;
        if result.rows_affected == 0 {
            tracing::warn!(%customer_id, delta_minor, "customer missing, balance delta dropped");
        }
        Ok(())
    }

    pub(crate) async fn apply_supplier_delta(
        &self,
        db_tx: &DatabaseTransaction,
        supplier_id: Uuid,
        delta_minor: i64,
    ) -> ResultEngine<()> {
        let result = suppliers::Entity::update_many()
            .col_expr(
                suppliers::Column::CurrentBalanceMinor,
                Expr::col(suppliers::Column::CurrentBalanceMinor).add(delta_minor),
            )
            .filter(suppliers::Column::Id.eq(supplier_id.to_string()))
            .exec(db_tx)
            .await?;
        if result.rows_affected == 0 {
            tracing::warn!(%supplier_id, delta_minor, "supplier missing, balance delta dropped");
        }
        Ok(())
    }

    pub(crate) async fn apply_mazdoor_delta(
        &self,
        db_tx: &DatabaseTransaction,
        mazdoor_id: Uuid,
        delta_minor: i64,
    ) -> ResultEngine<()> {
        let result = mazdoors::Entity::update_many()
            .col_expr(
                mazdoors::Column::CurrentBalanceMinor,
                Expr::col(mazdoors::Column::CurrentBalanceMinor).add(delta_minor),
            )
            .filter(mazdoors::Column::Id.eq(mazdoor_id.to_string()))
            .exec(db_tx)
            .await?;
        if result.rows_affected == 0 {
            tracing::warn!(%mazdoor_id, delta_minor, "mazdoor missing, balance delta dropped");
        }
        Ok(())
    }
}
