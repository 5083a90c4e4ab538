//! Sale/purchase trades: stock and party balances move together, inside one
//! transaction. A single short sale line fails the whole trade.

use chrono::Utc;
use sea_orm::{
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    commands::TradeCmd,
    items,
    payments::PaymentMethod,
    stock::{StockMove, StockOperation, StockReference},
    trade_items::{self, TradeItem},
    trades::{self, Trade, TradeKind},
};

use super::{Engine, page_window};

/// Filters for [`Engine::list_trades`].
#[derive(Clone, Debug)]
pub struct TradeListFilter {
    pub kind: Option<TradeKind>,
    pub customer: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub include_deleted: bool,
    pub page: u64,
    pub limit: u64,
}

impl Default for TradeListFilter {
    fn default() -> Self {
        Self {
            kind: None,
            customer: None,
            supplier: None,
            include_deleted: false,
            page: 1,
            limit: 50,
        }
    }
}

impl Engine {
    /// Creates a trade: header, lines, stock moves and the party balance
    /// delta for the unpaid portion, all or nothing.
    pub async fn create_trade(&self, cmd: TradeCmd) -> ResultEngine<Uuid> {
        if cmd.lines.is_empty() {
            return Err(EngineError::Validation(
                "trade needs at least one line".to_string(),
            ));
        }
        for line in &cmd.lines {
            if line.quantity <= 0 {
                return Err(EngineError::Validation(
                    "line quantity must be > 0".to_string(),
                ));
            }
            if line.rate_minor < 0 {
                return Err(EngineError::Validation(
                    "line rate must not be negative".to_string(),
                ));
            }
        }
        match cmd.kind {
            TradeKind::Sale if cmd.customer.is_none() => {
                return Err(EngineError::Validation(
                    "sale requires a customer".to_string(),
                ));
            }
            TradeKind::Purchase if cmd.supplier.is_none() => {
                return Err(EngineError::Validation(
                    "purchase requires a supplier".to_string(),
                ));
            }
            _ => {}
        }
        if cmd.paid_amount_minor < 0 {
            return Err(EngineError::Validation(
                "paid amount must not be negative".to_string(),
            ));
        }

        let subtotal_minor: i64 = cmd
            .lines
            .iter()
            .map(|line| line.quantity * line.rate_minor)
            .sum();
        let total_minor = subtotal_minor - cmd.discount_minor + cmd.tax_minor;
        if total_minor < 0 {
            return Err(EngineError::Validation(
                "discount exceeds trade value".to_string(),
            ));
        }

        let trade = Trade {
            id: Uuid::new_v4(),
            kind: cmd.kind,
            customer: cmd.customer,
            supplier: cmd.supplier,
            date: cmd.date.unwrap_or_else(Utc::now),
            subtotal_minor,
            discount_minor: cmd.discount_minor,
            tax_minor: cmd.tax_minor,
            total_minor,
            paid_amount_minor: cmd.paid_amount_minor,
            payment_method: cmd.payment_method,
            notes: cmd.notes,
            is_active: true,
            created_by: cmd.user,
            updated_by: None,
            created_at: Utc::now(),
            items: Vec::new(),
        };

        let db_tx = self.database.begin().await?;
        trades::ActiveModel::from(&trade).insert(&db_tx).await?;

        for line in &cmd.lines {
            let item = items::Entity::find_by_id(line.item_id.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::NotFound("item not exists".to_string()))?;

            let (operation, stock_delta) = match cmd.kind {
                TradeKind::Sale => {
                    if item.current_stock < line.quantity {
                        return Err(EngineError::InsufficientStock(format!(
                            "{}: have {}, need {}",
                            item.name, item.current_stock, line.quantity
                        )));
                    }
                    (StockOperation::Out, -line.quantity)
                }
                TradeKind::Purchase => (StockOperation::In, line.quantity),
            };

            let mut update = items::Entity::update_many()
                .col_expr(
                    items::Column::CurrentStock,
                    Expr::col(items::Column::CurrentStock).add(stock_delta),
                )
                .filter(items::Column::Id.eq(item.id.clone()));
            if cmd.kind == TradeKind::Sale {
                update = update.filter(items::Column::CurrentStock.gte(line.quantity));
            }
            let result = update.exec(&db_tx).await?;
            if result.rows_affected == 0 {
                return Err(EngineError::InsufficientStock(format!(
                    "{}: stock changed underneath the sale",
                    item.name
                )));
            }

            let trade_line = TradeItem::new(trade.id, line.item_id, line.quantity, line.rate_minor);
            trade_items::ActiveModel::from(&trade_line)
                .insert(&db_tx)
                .await?;

            let stock_move = StockMove {
                id: Uuid::new_v4(),
                item_id: line.item_id,
                operation,
                quantity: line.quantity,
                previous_stock: item.current_stock,
                new_stock: item.current_stock + stock_delta,
                rate_minor: Some(line.rate_minor),
                total_amount_minor: Some(trade_line.total_minor),
                reference: Some(StockReference::Trade { trade_id: trade.id }),
                date: trade.date,
                notes: None,
                created_by: trade.created_by.clone(),
            };
            crate::stock::ActiveModel::from(&stock_move)
                .insert(&db_tx)
                .await?;
        }

        let outstanding_minor = total_minor - cmd.paid_amount_minor;
        if outstanding_minor != 0 {
            match cmd.kind {
                TradeKind::Sale => {
                    if let Some(customer_id) = cmd.customer {
                        self.apply_customer_delta(&db_tx, customer_id, outstanding_minor)
                            .await?;
                    }
                }
                TradeKind::Purchase => {
                    if let Some(supplier_id) = cmd.supplier {
                        self.apply_supplier_delta(&db_tx, supplier_id, outstanding_minor)
                            .await?;
                    }
                }
            }
        }

        db_tx.commit().await?;
        Ok(trade.id)
    }

    /// Replaces the paid amount, adjusting the party balance by the
    /// difference only: raising paid from 200 to 500 moves the balance by
    /// −300, whatever else happened to it in between.
    pub async fn update_trade_payment(
        &self,
        trade_id: Uuid,
        paid_amount_minor: i64,
        payment_method: Option<PaymentMethod>,
        user: &str,
    ) -> ResultEngine<()> {
        if paid_amount_minor < 0 {
            return Err(EngineError::Validation(
                "paid amount must not be negative".to_string(),
            ));
        }

        let db_tx = self.database.begin().await?;

        let model = trades::Entity::find_by_id(trade_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("trade not exists".to_string()))?;
        let trade = Trade::try_from(model)?;
        if !trade.is_active {
            return Err(EngineError::Validation("trade is deleted".to_string()));
        }

        let difference_minor = paid_amount_minor - trade.paid_amount_minor;

        let update = trades::ActiveModel {
            id: sea_orm::ActiveValue::Set(trade.id.to_string()),
            paid_amount_minor: sea_orm::ActiveValue::Set(paid_amount_minor),
            payment_method: payment_method.map_or(sea_orm::ActiveValue::NotSet, |m| {
                sea_orm::ActiveValue::Set(m.as_str().to_string())
            }),
            updated_by: sea_orm::ActiveValue::Set(Some(user.to_string())),
            ..Default::default()
        };
        update.update(&db_tx).await?;

        if difference_minor != 0 {
            match trade.kind {
                TradeKind::Sale => {
                    if let Some(customer_id) = trade.customer {
                        self.apply_customer_delta(&db_tx, customer_id, -difference_minor)
                            .await?;
                    }
                }
                TradeKind::Purchase => {
                    if let Some(supplier_id) = trade.supplier {
                        self.apply_supplier_delta(&db_tx, supplier_id, -difference_minor)
                            .await?;
                    }
                }
            }
        }

        db_tx.commit().await?;
        Ok(())
    }

    /// Soft delete: reverses every line's stock delta and the outstanding
    /// balance delta, then marks the trade inactive.
    pub async fn delete_trade(&self, trade_id: Uuid, user: &str) -> ResultEngine<()> {
        let db_tx = self.database.begin().await?;

        let model = trades::Entity::find_by_id(trade_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("trade not exists".to_string()))?;
        let trade = Trade::try_from(model)?;
        if !trade.is_active {
            return Err(EngineError::Validation("trade already deleted".to_string()));
        }

        let lines = trade_items::Entity::find()
            .filter(trade_items::Column::TradeId.eq(trade.id.to_string()))
            .all(&db_tx)
            .await?;
        for line in lines {
            let stock_delta = match trade.kind {
                TradeKind::Sale => line.quantity,
                TradeKind::Purchase => -line.quantity,
            };
            items::Entity::update_many()
                .col_expr(
                    items::Column::CurrentStock,
                    Expr::col(items::Column::CurrentStock).add(stock_delta),
                )
                .filter(items::Column::Id.eq(line.item_id.clone()))
                .exec(&db_tx)
                .await?;
        }

        let outstanding_minor = trade.total_minor - trade.paid_amount_minor;
        if outstanding_minor != 0 {
            match trade.kind {
                TradeKind::Sale => {
                    if let Some(customer_id) = trade.customer {
                        self.apply_customer_delta(&db_tx, customer_id, -outstanding_minor)
                            .await?;
                    }
                }
                TradeKind::Purchase => {
                    if let Some(supplier_id) = trade.supplier {
                        self.apply_supplier_delta(&db_tx, supplier_id, -outstanding_minor)
                            .await?;
                    }
                }
            }
        }

        let update = trades::ActiveModel {
            id: sea_orm::ActiveValue::Set(trade.id.to_string()),
            is_active: sea_orm::ActiveValue::Set(false),
            updated_by: sea_orm::ActiveValue::Set(Some(user.to_string())),
            ..Default::default()
        };
        update.update(&db_tx).await?;

        db_tx.commit().await?;
        Ok(())
    }

    pub async fn trade(&self, trade_id: Uuid) -> ResultEngine<Trade> {
        let model = trades::Entity::find_by_id(trade_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("trade not exists".to_string()))?;
        let mut trade = Trade::try_from(model)?;

        let line_models = trade_items::Entity::find()
            .filter(trade_items::Column::TradeId.eq(trade.id.to_string()))
            .all(&self.database)
            .await?;
        for line_model in line_models {
            trade.items.push(TradeItem::try_from(line_model)?);
        }
        Ok(trade)
    }

    pub async fn list_trades(&self, filter: TradeListFilter) -> ResultEngine<(Vec<Trade>, u64)> {
        let mut query = trades::Entity::find();
        if let Some(kind) = filter.kind {
            query = query.filter(trades::Column::Kind.eq(kind.as_str()));
        }
        if let Some(customer) = filter.customer {
            query = query.filter(trades::Column::Customer.eq(customer.to_string()));
        }
        if let Some(supplier) = filter.supplier {
            query = query.filter(trades::Column::Supplier.eq(supplier.to_string()));
        }
        if !filter.include_deleted {
            query = query.filter(trades::Column::IsActive.eq(true));
        }

        let total = query.clone().count(&self.database).await?;
        let (offset, limit) = page_window(filter.page, filter.limit);
        let models = query
            .order_by_desc(trades::Column::Date)
            .offset(offset)
            .limit(limit)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Trade::try_from(model)?);
        }
        Ok((out, total))
    }
}
