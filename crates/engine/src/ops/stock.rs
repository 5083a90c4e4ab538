//! Direct stock operations outside trades: goods received, wastage, and
//! physical-count corrections.

use chrono::Utc;
use sea_orm::{
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    commands::StockCmd,
    items,
    stock::{self, StockMove, StockOperation},
};

use super::{Engine, ensure_positive_amount, page_window};

impl Engine {
    pub async fn stock_in(&self, cmd: StockCmd) -> ResultEngine<Uuid> {
        ensure_positive_amount(cmd.quantity)?;

        let db_tx = self.database.begin().await?;
        let item = items::Entity::find_by_id(cmd.item_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("item not exists".to_string()))?;

        items::Entity::update_many()
            .col_expr(
                items::Column::CurrentStock,
                Expr::col(items::Column::CurrentStock).add(cmd.quantity),
            )
            .filter(items::Column::Id.eq(item.id.clone()))
            .exec(&db_tx)
            .await?;

        let stock_move = StockMove {
            id: Uuid::new_v4(),
            item_id: cmd.item_id,
            operation: StockOperation::In,
            quantity: cmd.quantity,
            previous_stock: item.current_stock,
            new_stock: item.current_stock + cmd.quantity,
            rate_minor: cmd.rate_minor,
            total_amount_minor: cmd.rate_minor.map(|rate| rate * cmd.quantity),
            reference: cmd.reference,
            date: cmd.date.unwrap_or_else(Utc::now),
            notes: cmd.notes,
            created_by: cmd.user,
        };
        stock::ActiveModel::from(&stock_move).insert(&db_tx).await?;

        db_tx.commit().await?;
        Ok(stock_move.id)
    }

    pub async fn stock_out(&self, cmd: StockCmd) -> ResultEngine<Uuid> {
        ensure_positive_amount(cmd.quantity)?;

        let db_tx = self.database.begin().await?;
        let item = items::Entity::find_by_id(cmd.item_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("item not exists".to_string()))?;
        if item.current_stock < cmd.quantity {
            return Err(EngineError::InsufficientStock(format!(
                "{}: have {}, need {}",
                item.name, item.current_stock, cmd.quantity
            )));
        }

        let result = items::Entity::update_many()
            .col_expr(
                items::Column::CurrentStock,
                Expr::col(items::Column::CurrentStock).sub(cmd.quantity),
            )
            .filter(items::Column::Id.eq(item.id.clone()))
            .filter(items::Column::CurrentStock.gte(cmd.quantity))
            .exec(&db_tx)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::InsufficientStock(format!(
                "{}: stock changed underneath the operation",
                item.name
            )));
        }

        let stock_move = StockMove {
            id: Uuid::new_v4(),
            item_id: cmd.item_id,
            operation: StockOperation::Out,
            quantity: cmd.quantity,
            previous_stock: item.current_stock,
            new_stock: item.current_stock - cmd.quantity,
            rate_minor: cmd.rate_minor,
            total_amount_minor: cmd.rate_minor.map(|rate| rate * cmd.quantity),
            reference: cmd.reference,
            date: cmd.date.unwrap_or_else(Utc::now),
            notes: cmd.notes,
            created_by: cmd.user,
        };
        stock::ActiveModel::from(&stock_move).insert(&db_tx).await?;

        db_tx.commit().await?;
        Ok(stock_move.id)
    }

    /// Sets the absolute stock level after a physical count.
    pub async fn adjust_stock(
        &self,
        item_id: Uuid,
        new_quantity: i64,
        notes: Option<String>,
        user: &str,
    ) -> ResultEngine<Uuid> {
        if new_quantity < 0 {
            return Err(EngineError::Validation(
                "stock cannot be negative".to_string(),
            ));
        }

        let db_tx = self.database.begin().await?;
        let item = items::Entity::find_by_id(item_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("item not exists".to_string()))?;

        let update = items::ActiveModel {
            id: sea_orm::ActiveValue::Set(item.id.clone()),
            current_stock: sea_orm::ActiveValue::Set(new_quantity),
            ..Default::default()
        };
        update.update(&db_tx).await?;

        let stock_move = StockMove {
            id: Uuid::new_v4(),
            item_id,
            operation: StockOperation::Adjustment,
            quantity: (new_quantity - item.current_stock).abs(),
            previous_stock: item.current_stock,
            new_stock: new_quantity,
            rate_minor: None,
            total_amount_minor: None,
            reference: None,
            date: Utc::now(),
            notes,
            created_by: user.to_string(),
        };
        stock::ActiveModel::from(&stock_move).insert(&db_tx).await?;

        db_tx.commit().await?;
        Ok(stock_move.id)
    }

    pub async fn list_stock_moves(
        &self,
        item_id: Option<Uuid>,
        page: u64,
        limit: u64,
    ) -> ResultEngine<(Vec<StockMove>, u64)> {
        let mut query = stock::Entity::find();
        if let Some(item_id) = item_id {
            query = query.filter(stock::Column::ItemId.eq(item_id.to_string()));
        }

        let total = query.clone().count(&self.database).await?;
        let (offset, limit) = page_window(page, limit);
        let models = query
            .order_by_desc(stock::Column::Date)
            .offset(offset)
            .limit(limit)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(StockMove::try_from(model)?);
        }
        Ok((out, total))
    }
}
