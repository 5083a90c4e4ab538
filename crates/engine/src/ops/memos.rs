//! Daily cash memo book operations, including Direction B: entries written
//! on the memo page that fan out into mirrored payments and expenses.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ConnectionTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    prelude::*,
};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    cash_entries::{self, CashEntry, EntryType, ReceiptType},
    commands::{CreditEntryCmd, DebitEntryCmd, MemoCmd},
    expenses::Expense,
    memos::{self, DailyCashMemo, MemoStatus},
    payments::{Category, Payment, PaymentKind, PaymentSource, PaymentStatus},
};

use super::{Engine, ensure_positive_amount, normalize_required_text, page_window};

/// Filters for [`Engine::list_memos`].
#[derive(Clone, Debug)]
pub struct MemoListFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub status: Option<MemoStatus>,
    pub page: u64,
    pub limit: u64,
}

impl Default for MemoListFilter {
    fn default() -> Self {
        Self {
            date_from: None,
            date_to: None,
            status: None,
            page: 1,
            limit: 50,
        }
    }
}

/// Closing balance of the latest memo strictly before `date`, or 0 when the
/// book is empty.
pub(crate) async fn previous_closing<C: ConnectionTrait>(
    conn: &C,
    date: NaiveDate,
) -> ResultEngine<i64> {
    let previous = memos::Entity::find()
        .filter(memos::Column::Date.lt(date))
        .order_by_desc(memos::Column::Date)
        .one(conn)
        .await?;
    Ok(previous.map_or(0, |m| m.closing_balance_minor))
}

impl Engine {
    /// Opens a memo page for a day. Rejects duplicate dates; the opening
    /// balance defaults to the previous page's closing balance.
    pub async fn create_memo(&self, cmd: MemoCmd) -> ResultEngine<Uuid> {
        let db_tx = self.database.begin().await?;

        let existing = memos::Entity::find()
            .filter(memos::Column::Date.eq(cmd.date))
            .one(&db_tx)
            .await?;
        if existing.is_some() {
            return Err(EngineError::Conflict(format!("memo for {}", cmd.date)));
        }

        let opening = match cmd.opening_balance_minor {
            Some(opening) => opening,
            None => previous_closing(&db_tx, cmd.date).await?,
        };
        let mut memo = DailyCashMemo::new(cmd.date, opening, cmd.user);
        memo.notes = cmd.notes;
        memos::ActiveModel::from(&memo).insert(&db_tx).await?;

        db_tx.commit().await?;
        Ok(memo.id)
    }

    pub async fn memo(&self, memo_id: Uuid) -> ResultEngine<DailyCashMemo> {
        let model = memos::Entity::find_by_id(memo_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("memo not exists".to_string()))?;
        DailyCashMemo::try_from(model)
    }

    pub async fn memo_for_date(&self, date: NaiveDate) -> ResultEngine<Option<DailyCashMemo>> {
        let model = memos::Entity::find()
            .filter(memos::Column::Date.eq(date))
            .one(&self.database)
            .await?;
        model.map(DailyCashMemo::try_from).transpose()
    }

    pub async fn memo_entries(&self, memo_id: Uuid) -> ResultEngine<Vec<CashEntry>> {
        let models = cash_entries::Entity::find()
            .filter(cash_entries::Column::MemoId.eq(memo_id.to_string()))
            .order_by_asc(cash_entries::Column::CreatedAt)
            .all(&self.database)
            .await?;
        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(CashEntry::try_from(model)?);
        }
        Ok(out)
    }

    pub async fn previous_closing_balance(&self, date: NaiveDate) -> ResultEngine<i64> {
        previous_closing(&self.database, date).await
    }

    pub async fn list_memos(
        &self,
        filter: MemoListFilter,
    ) -> ResultEngine<(Vec<DailyCashMemo>, u64)> {
        let mut query = memos::Entity::find();
        if let Some(date_from) = filter.date_from {
            query = query.filter(memos::Column::Date.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(memos::Column::Date.lte(date_to));
        }
        if let Some(status) = filter.status {
            query = query.filter(memos::Column::Status.eq(status.as_str()));
        }

        let total = query.clone().count(&self.database).await?;
        let (offset, limit) = page_window(filter.page, filter.limit);
        let models = query
            .order_by_desc(memos::Column::Date)
            .offset(offset)
            .limit(limit)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(DailyCashMemo::try_from(model)?);
        }
        Ok((out, total))
    }

    /// Posts a memo, freezing its entries and closing balance.
    pub async fn post_memo(&self, memo_id: Uuid, user: &str) -> ResultEngine<()> {
        let db_tx = self.database.begin().await?;

        let model = memos::Entity::find_by_id(memo_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("memo not exists".to_string()))?;
        if model.status == MemoStatus::Posted.as_str() {
            return Err(EngineError::Validation("memo already posted".to_string()));
        }

        let update = memos::ActiveModel {
            id: sea_orm::ActiveValue::Set(model.id),
            status: sea_orm::ActiveValue::Set(MemoStatus::Posted.as_str().to_string()),
            posted_at: sea_orm::ActiveValue::Set(Some(Utc::now())),
            posted_by: sea_orm::ActiveValue::Set(Some(user.to_string())),
            updated_by: sea_orm::ActiveValue::Set(Some(user.to_string())),
            ..Default::default()
        };
        update.update(&db_tx).await?;

        db_tx.commit().await?;
        Ok(())
    }

    /// Removes a memo page and its entries. Mirrored payments and expenses
    /// stay in their books.
    pub async fn delete_memo(&self, memo_id: Uuid) -> ResultEngine<()> {
        let db_tx = self.database.begin().await?;

        cash_entries::Entity::delete_many()
            .filter(cash_entries::Column::MemoId.eq(memo_id.to_string()))
            .exec(&db_tx)
            .await?;
        let result = memos::Entity::delete_by_id(memo_id.to_string())
            .exec(&db_tx)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::NotFound("memo not exists".to_string()));
        }

        db_tx.commit().await?;
        Ok(())
    }

    /// Direction B, credit side: cash came in over the counter. Creates the
    /// mirrored posted receipt into `cmd.account` and appends the entry.
    pub async fn add_credit_entry(
        &self,
        memo_id: Uuid,
        cmd: CreditEntryCmd,
    ) -> ResultEngine<Uuid> {
        let name = normalize_required_text(&cmd.name, "entry name")?;
        ensure_positive_amount(cmd.amount_minor)?;
        if cmd.receipt_type == ReceiptType::CustomerPayment && cmd.customer.is_none() {
            return Err(EngineError::Validation(
                "customer required for customer_payment receipts".to_string(),
            ));
        }

        let db_tx = self.database.begin().await?;
        let memo = self.require_open_memo(&db_tx, memo_id).await?;

        let mut payment = Payment {
            id: Uuid::new_v4(),
            voucher_number: String::new(),
            kind: PaymentKind::Receipt,
            date: Utc::now(),
            description: name.clone(),
            amount_minor: cmd.amount_minor,
            payment_method: cmd.payment_method,
            cheque_number: None,
            from_account: None,
            to_account: Some(cmd.account),
            paid_to: None,
            received_from: None,
            mazdoor: None,
            customer: cmd.customer,
            supplier: None,
            category: None,
            status: PaymentStatus::Posted,
            source: PaymentSource::DailyCashMemo,
            notes: None,
            created_by: cmd.user,
            updated_by: None,
            created_at: Utc::now(),
        };
        self.insert_payment(&db_tx, &mut payment).await?;

        let entry = CashEntry {
            id: Uuid::new_v4(),
            memo_id,
            entry_type: EntryType::Credit,
            name,
            description: cmd.description,
            amount_minor: cmd.amount_minor,
            account: Some(cmd.account),
            customer: cmd.customer,
            receipt_type: Some(cmd.receipt_type),
            category: None,
            mazdoor: None,
            supplier: None,
            payment_method: cmd.payment_method,
            payment_reference: Some(payment.id),
            expense_reference: None,
            created_at: Utc::now(),
        };
        cash_entries::ActiveModel::from(&entry).insert(&db_tx).await?;

        if let Some(customer_id) = cmd.customer {
            self.apply_customer_delta(&db_tx, customer_id, -cmd.amount_minor)
                .await?;
        }

        self.recompute_closing(&db_tx, &memo).await?;
        db_tx.commit().await?;
        Ok(entry.id)
    }

    /// Direction B, debit side: cash went out over the counter. Creates the
    /// mirrored posted payment from the cash account, the mirrored expense
    /// for expense-worthy categories, and appends the entry.
    pub async fn add_debit_entry(&self, memo_id: Uuid, cmd: DebitEntryCmd) -> ResultEngine<Uuid> {
        let name = normalize_required_text(&cmd.name, "entry name")?;
        ensure_positive_amount(cmd.amount_minor)?;
        if cmd.category == Category::Mazdoor && cmd.mazdoor.is_none() {
            return Err(EngineError::Validation(
                "mazdoor required for mazdoor entries".to_string(),
            ));
        }
        if cmd.category == Category::SupplierPayment && cmd.supplier.is_none() {
            return Err(EngineError::Validation(
                "supplier required for supplier_payment entries".to_string(),
            ));
        }
        let cash_account = self.require_cash_account()?;

        let db_tx = self.database.begin().await?;
        let memo = self.require_open_memo(&db_tx, memo_id).await?;

        let mut payment = Payment {
            id: Uuid::new_v4(),
            voucher_number: String::new(),
            kind: PaymentKind::Payment,
            date: Utc::now(),
            description: name.clone(),
            amount_minor: cmd.amount_minor,
            payment_method: cmd.payment_method,
            cheque_number: None,
            from_account: Some(cash_account),
            to_account: None,
            paid_to: None,
            received_from: None,
            mazdoor: cmd.mazdoor,
            customer: None,
            supplier: cmd.supplier,
            category: Some(cmd.category),
            status: PaymentStatus::Posted,
            source: PaymentSource::DailyCashMemo,
            notes: None,
            created_by: cmd.user.clone(),
            updated_by: None,
            created_at: Utc::now(),
        };
        self.insert_payment(&db_tx, &mut payment).await?;

        let expense_reference = if cmd.category.is_expense_worthy() {
            let expense = Expense {
                id: Uuid::new_v4(),
                category: cmd.category,
                description: name.clone(),
                amount_minor: cmd.amount_minor,
                date: Utc::now(),
                payment_method: cmd.payment_method,
                mazdoor: cmd.mazdoor,
                supplier: cmd.supplier,
                source: PaymentSource::DailyCashMemo,
                created_by: cmd.user,
                created_at: Utc::now(),
            };
            crate::expenses::ActiveModel::from(&expense)
                .insert(&db_tx)
                .await?;
            Some(expense.id)
        } else {
            None
        };

        let entry = CashEntry {
            id: Uuid::new_v4(),
            memo_id,
            entry_type: EntryType::Debit,
            name,
            description: cmd.description,
            amount_minor: cmd.amount_minor,
            account: None,
            customer: None,
            receipt_type: None,
            category: Some(cmd.category),
            mazdoor: cmd.mazdoor,
            supplier: cmd.supplier,
            payment_method: cmd.payment_method,
            payment_reference: Some(payment.id),
            expense_reference,
            created_at: Utc::now(),
        };
        cash_entries::ActiveModel::from(&entry).insert(&db_tx).await?;

        self.apply_debit_party_deltas(
            &db_tx,
            cmd.category,
            cmd.mazdoor,
            cmd.supplier,
            cmd.amount_minor,
        )
        .await?;

        self.recompute_closing(&db_tx, &memo).await?;
        db_tx.commit().await?;
        Ok(entry.id)
    }

    async fn require_open_memo(
        &self,
        db_tx: &sea_orm::DatabaseTransaction,
        memo_id: Uuid,
    ) -> ResultEngine<memos::Model> {
        let model = memos::Entity::find_by_id(memo_id.to_string())
            .one(db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("memo not exists".to_string()))?;
        if model.status == MemoStatus::Posted.as_str() {
            return Err(EngineError::Validation("memo already posted".to_string()));
        }
        Ok(model)
    }
}
