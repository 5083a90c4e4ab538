//! Expense book operations. Creating an expense runs the Direction A sync in
//! the same transaction, so the expense, its payment and the memo entry land
//! together or not at all.

use chrono::Utc;
use sea_orm::{
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement, TransactionTrait, prelude::*,
};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    commands::ExpenseCmd,
    expenses::{self, Expense},
    payments::{Category, PaymentSource},
};

use super::{Engine, ensure_positive_amount, normalize_required_text, page_window};

/// Filters for [`Engine::list_expenses`].
#[derive(Clone, Debug)]
pub struct ExpenseListFilter {
    pub category: Option<Category>,
    pub mazdoor: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub date_from: Option<chrono::DateTime<Utc>>,
    pub date_to: Option<chrono::DateTime<Utc>>,
    pub page: u64,
    pub limit: u64,
}

impl Default for ExpenseListFilter {
    fn default() -> Self {
        Self {
            category: None,
            mazdoor: None,
            supplier: None,
            date_from: None,
            date_to: None,
            page: 1,
            limit: 50,
        }
    }
}

/// What a `create_expense` call produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpenseSync {
    pub expense_id: Uuid,
    pub payment_id: Uuid,
    /// `None` when the day's memo was already posted.
    pub memo_id: Option<Uuid>,
}

impl Engine {
    /// Records an expense and syncs it into the payment book and the daily
    /// cash memo (Direction A).
    pub async fn create_expense(&self, cmd: ExpenseCmd) -> ResultEngine<ExpenseSync> {
        let description = normalize_required_text(&cmd.description, "description")?;
        ensure_positive_amount(cmd.amount_minor)?;

        let expense = Expense {
            id: Uuid::new_v4(),
            category: cmd.category,
            description,
            amount_minor: cmd.amount_minor,
            date: cmd.date.unwrap_or_else(Utc::now),
            payment_method: cmd.payment_method,
            mazdoor: cmd.mazdoor,
            supplier: cmd.supplier,
            source: PaymentSource::Manual,
            created_by: cmd.user,
            created_at: Utc::now(),
        };

        let db_tx = self.database.begin().await?;
        expenses::ActiveModel::from(&expense).insert(&db_tx).await?;
        let (payment_id, memo_id) = self.sync_expense(&db_tx, &expense).await?;
        db_tx.commit().await?;

        Ok(ExpenseSync {
            expense_id: expense.id,
            payment_id,
            memo_id,
        })
    }

    pub async fn expense(&self, expense_id: Uuid) -> ResultEngine<Expense> {
        let model = expenses::Entity::find_by_id(expense_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("expense not exists".to_string()))?;
        Expense::try_from(model)
    }

    /// Lists expenses with the filtered total amount.
    pub async fn list_expenses(
        &self,
        filter: ExpenseListFilter,
    ) -> ResultEngine<(Vec<Expense>, u64, i64)> {
        let mut query = expenses::Entity::find();
        if let Some(category) = filter.category {
            query = query.filter(expenses::Column::Category.eq(category.as_str()));
        }
        if let Some(mazdoor) = filter.mazdoor {
            query = query.filter(expenses::Column::Mazdoor.eq(mazdoor.to_string()));
        }
        if let Some(supplier) = filter.supplier {
            query = query.filter(expenses::Column::Supplier.eq(supplier.to_string()));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(expenses::Column::Date.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(expenses::Column::Date.lte(date_to));
        }

        let total = query.clone().count(&self.database).await?;
        let (offset, limit) = page_window(filter.page, filter.limit);
        let models = query
            .clone()
            .order_by_desc(expenses::Column::Date)
            .offset(offset)
            .limit(limit)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Expense::try_from(model)?);
        }

        let total_amount_minor = self.sum_expenses(&filter).await?;
        Ok((out, total, total_amount_minor))
    }

    async fn sum_expenses(&self, filter: &ExpenseListFilter) -> ResultEngine<i64> {
        let backend = self.database.get_database_backend();
        let mut sql = String::from(
            "SELECT COALESCE(SUM(amount_minor), 0) AS sum FROM expenses WHERE 1 = 1",
        );
        let mut values: Vec<sea_orm::Value> = Vec::new();
        if let Some(category) = filter.category {
            sql.push_str(" AND category = ?");
            values.push(category.as_str().into());
        }
        if let Some(mazdoor) = filter.mazdoor {
            sql.push_str(" AND mazdoor = ?");
            values.push(mazdoor.to_string().into());
        }
        if let Some(supplier) = filter.supplier {
            sql.push_str(" AND supplier = ?");
            values.push(supplier.to_string().into());
        }
        if let Some(date_from) = filter.date_from {
            sql.push_str(" AND date >= ?");
            values.push(date_from.into());
        }
        if let Some(date_to) = filter.date_to {
            sql.push_str(" AND date <= ?");
            values.push(date_to.into());
        }

        let stmt = Statement::from_sql_and_values(backend, sql, values);
        let row = self.database.query_one(stmt).await?;
        Ok(row.and_then(|r| r.try_get("", "sum").ok()).unwrap_or(0))
    }

    /// Removes the expense record. The payment voucher and memo entry it
    /// produced stay put as the audit trail of the cash that actually moved.
    pub async fn delete_expense(&self, expense_id: Uuid) -> ResultEngine<()> {
        let result = expenses::Entity::delete_by_id(expense_id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::NotFound("expense not exists".to_string()));
        }
        Ok(())
    }
}
