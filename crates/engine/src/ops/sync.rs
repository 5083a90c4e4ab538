//! The reconciliation service between payments, expenses and the daily cash
//! memo book.
//!
//! Direction A: an expense recorded outside the memo becomes a posted payment
//! from the cash account plus a debit line on that day's memo.
//! Manual posted payments are mirrored into the memo the same way, guarded by
//! the `payment_reference` back-link so a voucher is never mirrored twice.

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseTransaction, QueryFilter, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    ResultEngine,
    cash_entries::{self, CashEntry, EntryType, ReceiptType},
    expenses::Expense,
    memos::{self, DailyCashMemo, MemoStatus},
    payments::{Category, Payment, PaymentKind, PaymentSource, PaymentStatus},
};

use super::{Engine, memos::previous_closing};

impl Engine {
    /// The memo page for a calendar day, created on first touch with the
    /// previous page's closing balance as its opening.
    pub(crate) async fn get_or_create_memo(
        &self,
        db_tx: &DatabaseTransaction,
        date: NaiveDate,
        user: &str,
    ) -> ResultEngine<memos::Model> {
        if let Some(model) = memos::Entity::find()
            .filter(memos::Column::Date.eq(date))
            .one(db_tx)
            .await?
        {
            return Ok(model);
        }

        let opening = previous_closing(db_tx, date).await?;
        let memo = DailyCashMemo::new(date, opening, user.to_string());
        let model = memos::ActiveModel::from(&memo).insert(db_tx).await?;
        Ok(model)
    }

    /// Recomputes and stores a memo's closing balance from its entries.
    pub(crate) async fn recompute_closing(
        &self,
        db_tx: &DatabaseTransaction,
        memo: &memos::Model,
    ) -> ResultEngine<i64> {
        let entry_models = cash_entries::Entity::find()
            .filter(cash_entries::Column::MemoId.eq(memo.id.clone()))
            .all(db_tx)
            .await?;
        let mut entries = Vec::with_capacity(entry_models.len());
        for model in entry_models {
            entries.push(CashEntry::try_from(model)?);
        }
        let closing = memos::closing_balance(memo.opening_balance_minor, &entries);

        let update = memos::ActiveModel {
            id: sea_orm::ActiveValue::Set(memo.id.clone()),
            closing_balance_minor: sea_orm::ActiveValue::Set(closing),
            ..Default::default()
        };
        update.update(db_tx).await?;
        Ok(closing)
    }

    /// Applies the party-balance side effects of a debit movement.
    pub(crate) async fn apply_debit_party_deltas(
        &self,
        db_tx: &DatabaseTransaction,
        category: Category,
        mazdoor: Option<Uuid>,
        supplier: Option<Uuid>,
        amount_minor: i64,
    ) -> ResultEngine<()> {
        if category == Category::Mazdoor {
            if let Some(mazdoor_id) = mazdoor {
                self.apply_mazdoor_delta(db_tx, mazdoor_id, -amount_minor)
                    .await?;
            }
        }
        if matches!(category, Category::SupplierPayment | Category::RawMaterial) {
            if let Some(supplier_id) = supplier {
                self.apply_supplier_delta(db_tx, supplier_id, -amount_minor)
                    .await?;
            }
        }
        Ok(())
    }

    /// Direction A: expense → posted payment from the cash account → memo
    /// debit entry. Returns the payment id and, when the memo accepted the
    /// entry, the memo id.
    pub(crate) async fn sync_expense(
        &self,
        db_tx: &DatabaseTransaction,
        expense: &Expense,
    ) -> ResultEngine<(Uuid, Option<Uuid>)> {
        let cash_account = self.require_cash_account()?;

        let mut payment = Payment {
            id: Uuid::new_v4(),
            voucher_number: String::new(),
            kind: PaymentKind::Payment,
            date: expense.date,
            description: format!("Expense: {}", expense.description),
            amount_minor: expense.amount_minor,
            payment_method: expense.payment_method,
            cheque_number: None,
            from_account: Some(cash_account),
            to_account: None,
            paid_to: None,
            received_from: None,
            mazdoor: expense.mazdoor,
            customer: None,
            supplier: expense.supplier,
            category: Some(expense.category),
            status: PaymentStatus::Posted,
            source: PaymentSource::Manual,
            notes: None,
            created_by: expense.created_by.clone(),
            updated_by: None,
            created_at: Utc::now(),
        };
        self.insert_payment(db_tx, &mut payment).await?;

        let memo = self
            .get_or_create_memo(db_tx, expense.date.date_naive(), &expense.created_by)
            .await?;
        if memo.status == MemoStatus::Posted.as_str() {
            tracing::warn!(
                memo_date = %memo.date,
                expense_id = %expense.id,
                "memo already posted, expense left off the memo page"
            );
            return Ok((payment.id, None));
        }

        let entry = CashEntry {
            id: Uuid::new_v4(),
            memo_id: Uuid::parse_str(&memo.id)
                .map_err(|_| crate::EngineError::NotFound("memo not exists".to_string()))?,
            entry_type: EntryType::Debit,
            name: expense.description.clone(),
            description: Some(format!("Expense - {}", expense.category.as_str())),
            amount_minor: expense.amount_minor,
            account: None,
            customer: None,
            receipt_type: None,
            category: Some(expense.category),
            mazdoor: expense.mazdoor,
            supplier: expense.supplier,
            payment_method: expense.payment_method,
            payment_reference: Some(payment.id),
            expense_reference: Some(expense.id),
            created_at: Utc::now(),
        };
        cash_entries::ActiveModel::from(&entry).insert(db_tx).await?;

        self.apply_debit_party_deltas(
            db_tx,
            expense.category,
            expense.mazdoor,
            expense.supplier,
            expense.amount_minor,
        )
        .await?;

        self.recompute_closing(db_tx, &memo).await?;
        Ok((payment.id, Some(entry.memo_id)))
    }

    /// Mirrors a manual posted payment onto the day's memo page. No-op when
    /// the voucher was born in a memo, is not posted, the memo is posted, or
    /// an entry already references the voucher.
    pub(crate) async fn mirror_payment_into_memo(
        &self,
        db_tx: &DatabaseTransaction,
        payment: &Payment,
    ) -> ResultEngine<Option<Uuid>> {
        if payment.source == PaymentSource::DailyCashMemo {
            return Ok(None);
        }
        if payment.status != PaymentStatus::Posted {
            return Ok(None);
        }

        let memo = self
            .get_or_create_memo(db_tx, payment.date.date_naive(), &payment.created_by)
            .await?;
        if memo.status == MemoStatus::Posted.as_str() {
            tracing::warn!(
                memo_date = %memo.date,
                voucher = %payment.voucher_number,
                "memo already posted, payment left off the memo page"
            );
            return Ok(None);
        }

        let already_mirrored = cash_entries::Entity::find()
            .filter(cash_entries::Column::PaymentReference.eq(payment.id.to_string()))
            .one(db_tx)
            .await?
            .is_some();
        if already_mirrored {
            return Ok(None);
        }

        let memo_id = Uuid::parse_str(&memo.id)
            .map_err(|_| crate::EngineError::NotFound("memo not exists".to_string()))?;

        match payment.kind {
            PaymentKind::Receipt => {
                let entry = CashEntry {
                    id: Uuid::new_v4(),
                    memo_id,
                    entry_type: EntryType::Credit,
                    name: payment.description.clone(),
                    description: Some(format!("Receipt {}", payment.voucher_number)),
                    amount_minor: payment.amount_minor,
                    account: payment.to_account,
                    customer: payment.customer,
                    receipt_type: Some(if payment.customer.is_some() {
                        ReceiptType::CustomerPayment
                    } else {
                        ReceiptType::General
                    }),
                    category: None,
                    mazdoor: None,
                    supplier: None,
                    payment_method: payment.payment_method,
                    payment_reference: Some(payment.id),
                    expense_reference: None,
                    created_at: Utc::now(),
                };
                cash_entries::ActiveModel::from(&entry).insert(db_tx).await?;

                if let Some(customer_id) = payment.customer {
                    self.apply_customer_delta(db_tx, customer_id, -payment.amount_minor)
                        .await?;
                }
            }
            PaymentKind::Payment => {
                let category = payment.category.unwrap_or(Category::Other);

                let expense_reference = if category.is_expense_worthy() {
                    let expense = Expense {
                        id: Uuid::new_v4(),
                        category,
                        description: payment.description.clone(),
                        amount_minor: payment.amount_minor,
                        date: payment.date,
                        payment_method: payment.payment_method,
                        mazdoor: payment.mazdoor,
                        supplier: payment.supplier,
                        source: PaymentSource::DailyCashMemo,
                        created_by: payment.created_by.clone(),
                        created_at: Utc::now(),
                    };
                    crate::expenses::ActiveModel::from(&expense)
                        .insert(db_tx)
                        .await?;
                    Some(expense.id)
                } else {
                    None
                };

                let entry = CashEntry {
                    id: Uuid::new_v4(),
                    memo_id,
                    entry_type: EntryType::Debit,
                    name: payment.description.clone(),
                    description: Some(format!("Payment {}", payment.voucher_number)),
                    amount_minor: payment.amount_minor,
                    account: None,
                    customer: None,
                    receipt_type: None,
                    category: Some(category),
                    mazdoor: payment.mazdoor,
                    supplier: payment.supplier,
                    payment_method: payment.payment_method,
                    payment_reference: Some(payment.id),
                    expense_reference,
                    created_at: Utc::now(),
                };
                cash_entries::ActiveModel::from(&entry).insert(db_tx).await?;

                self.apply_debit_party_deltas(
                    db_tx,
                    category,
                    payment.mazdoor,
                    payment.supplier,
                    payment.amount_minor,
                )
                .await?;
            }
        }

        self.recompute_closing(db_tx, &memo).await?;
        Ok(Some(memo_id))
    }

    /// Re-runs the payment → memo mirror for a stored voucher. Safe to call
    /// repeatedly; the `payment_reference` guard makes it idempotent.
    pub async fn sync_payment_to_memo(&self, payment_id: Uuid) -> ResultEngine<Option<Uuid>> {
        let payment = self.payment(payment_id).await?;
        let db_tx = self.database.begin().await?;
        let memo_id = self.mirror_payment_into_memo(&db_tx, &payment).await?;
        db_tx.commit().await?;
        Ok(memo_id)
    }
}
