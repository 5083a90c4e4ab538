//! Payment voucher lifecycle.
//!
//! Posting discipline: a posted payment has already moved its account
//! balance. Create applies the delta, update reverses the old delta and
//! applies the new one, delete reverses it. Draft and cancelled vouchers
//! never touch balances.

use chrono::Utc;
use sea_orm::{
    Condition, DatabaseTransaction, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Statement, TransactionTrait, prelude::*,
};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    accounts,
    commands::{PaymentCmd, PaymentUpdateCmd},
    payments::{self, Category, Payment, PaymentKind, PaymentMethod, PaymentSource, PaymentStatus},
};

use super::{Engine, ensure_positive_amount, normalize_required_text, page_window};

/// Filters for [`Engine::list_payments`].
#[derive(Clone, Debug)]
pub struct PaymentListFilter {
    pub kind: Option<PaymentKind>,
    pub status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub category: Option<Category>,
    pub date_from: Option<chrono::DateTime<Utc>>,
    pub date_to: Option<chrono::DateTime<Utc>>,
    pub search: Option<String>,
    pub page: u64,
    pub limit: u64,
}

impl Default for PaymentListFilter {
    fn default() -> Self {
        Self {
            kind: None,
            status: None,
            payment_method: None,
            category: None,
            date_from: None,
            date_to: None,
            search: None,
            page: 1,
            limit: 50,
        }
    }
}

/// Posted voucher totals, split by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaymentTotals {
    pub payments_minor: i64,
    pub receipts_minor: i64,
}

impl Engine {
    /// Next voucher label for a kind: `PAY-000042` style. The sequence is an
    /// audit label, not a uniqueness guarantee; on a failed count query it
    /// degrades to a timestamp suffix.
    pub(crate) async fn next_voucher_number(
        &self,
        db_tx: &DatabaseTransaction,
        kind: PaymentKind,
    ) -> String {
        match payments::Entity::find()
            .filter(payments::Column::Kind.eq(kind.as_str()))
            .count(db_tx)
            .await
        {
            Ok(count) => format!("{}-{:06}", kind.voucher_prefix(), count + 1),
            Err(err) => {
                tracing::warn!("voucher sequence lookup failed, using timestamp suffix: {err}");
                format!(
                    "{}-{:06}",
                    kind.voucher_prefix(),
                    Utc::now().timestamp_millis() % 1_000_000
                )
            }
        }
    }

    /// Inserts a payment row inside an open transaction, assigning the
    /// voucher number and applying the account delta when posted.
    pub(crate) async fn insert_payment(
        &self,
        db_tx: &DatabaseTransaction,
        payment: &mut Payment,
    ) -> ResultEngine<()> {
        ensure_positive_amount(payment.amount_minor)?;
        let (account_id, delta_minor) = payment
            .account_delta()
            .ok_or_else(|| EngineError::Validation("payment needs an account".to_string()))?;

        let account = accounts::Entity::find_by_id(account_id.to_string())
            .one(db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("account not exists".to_string()))?;
        if !account.is_active {
            return Err(EngineError::Validation(format!(
                "account {} is inactive",
                account.name
            )));
        }

        payment.voucher_number = self.next_voucher_number(db_tx, payment.kind).await;
        payments::ActiveModel::from(&*payment).insert(db_tx).await?;

        if payment.status == PaymentStatus::Posted {
            self.apply_account_delta(db_tx, account_id, delta_minor)
                .await?;
        }
        Ok(())
    }

    /// Creates a manual payment voucher and mirrors it into the day's cash
    /// memo when posted.
    pub async fn create_payment(&self, cmd: PaymentCmd) -> ResultEngine<Uuid> {
        let description = normalize_required_text(&cmd.description, "description")?;

        let mut payment = Payment {
            id: Uuid::new_v4(),
            voucher_number: String::new(),
            kind: cmd.kind,
            date: cmd.date.unwrap_or_else(Utc::now),
            description,
            amount_minor: cmd.amount_minor,
            payment_method: cmd.payment_method,
            cheque_number: cmd.cheque_number,
            from_account: (cmd.kind == PaymentKind::Payment).then_some(cmd.account),
            to_account: (cmd.kind == PaymentKind::Receipt).then_some(cmd.account),
            paid_to: cmd.paid_to,
            received_from: cmd.received_from,
            mazdoor: cmd.mazdoor,
            customer: cmd.customer,
            supplier: cmd.supplier,
            category: cmd.category,
            status: cmd.status,
            source: PaymentSource::Manual,
            notes: cmd.notes,
            created_by: cmd.user,
            updated_by: None,
            created_at: Utc::now(),
        };

        let db_tx = self.database.begin().await?;
        self.insert_payment(&db_tx, &mut payment).await?;
        if payment.status == PaymentStatus::Posted {
            self.mirror_payment_into_memo(&db_tx, &payment).await?;
        }
        db_tx.commit().await?;
        Ok(payment.id)
    }

    pub async fn payment(&self, payment_id: Uuid) -> ResultEngine<Payment> {
        let model = payments::Entity::find_by_id(payment_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("payment not exists".to_string()))?;
        Payment::try_from(model)
    }

    /// Updates a payment. Kind and accounts are immutable. When the amount or
    /// status changes, the old posted delta is reversed before the new state
    /// is applied, so the account balance stays consistent.
    pub async fn update_payment(&self, payment_id: Uuid, cmd: PaymentUpdateCmd) -> ResultEngine<()> {
        if let Some(amount_minor) = cmd.amount_minor {
            ensure_positive_amount(amount_minor)?;
        }

        let db_tx = self.database.begin().await?;

        let model = payments::Entity::find_by_id(payment_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("payment not exists".to_string()))?;
        let old = Payment::try_from(model)?;

        if old.status == PaymentStatus::Posted {
            if let Some((account_id, delta_minor)) = old.account_delta() {
                self.apply_account_delta(&db_tx, account_id, -delta_minor)
                    .await?;
            }
        }

        let mut updated = old.clone();
        if let Some(amount_minor) = cmd.amount_minor {
            updated.amount_minor = amount_minor;
        }
        if let Some(date) = cmd.date {
            updated.date = date;
        }
        if let Some(description) = cmd.description {
            updated.description = normalize_required_text(&description, "description")?;
        }
        if let Some(method) = cmd.payment_method {
            updated.payment_method = method;
        }
        if let Some(cheque_number) = cmd.cheque_number {
            updated.cheque_number = Some(cheque_number);
        }
        if let Some(paid_to) = cmd.paid_to {
            updated.paid_to = Some(paid_to);
        }
        if let Some(received_from) = cmd.received_from {
            updated.received_from = Some(received_from);
        }
        if let Some(category) = cmd.category {
            updated.category = Some(category);
        }
        if let Some(status) = cmd.status {
            updated.status = status;
        }
        if let Some(notes) = cmd.notes {
            updated.notes = Some(notes);
        }
        updated.updated_by = Some(cmd.user);

        if updated.status == PaymentStatus::Posted {
            if let Some((account_id, delta_minor)) = updated.account_delta() {
                self.apply_account_delta(&db_tx, account_id, delta_minor)
                    .await?;
            }
        }

        payments::ActiveModel::from(&updated).update(&db_tx).await?;
        db_tx.commit().await?;
        Ok(())
    }

    /// Removes a payment, reversing its account delta first when posted. Any
    /// memo entry that mirrors it is left in place for the audit trail.
    pub async fn delete_payment(&self, payment_id: Uuid) -> ResultEngine<()> {
        let db_tx = self.database.begin().await?;

        let model = payments::Entity::find_by_id(payment_id.to_string())
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("payment not exists".to_string()))?;
        let payment = Payment::try_from(model)?;

        if payment.status == PaymentStatus::Posted {
            if let Some((account_id, delta_minor)) = payment.account_delta() {
                self.apply_account_delta(&db_tx, account_id, -delta_minor)
                    .await?;
            }
        }

        payments::Entity::delete_by_id(payment_id.to_string())
            .exec(&db_tx)
            .await?;
        db_tx.commit().await?;
        Ok(())
    }

    pub async fn list_payments(
        &self,
        filter: PaymentListFilter,
    ) -> ResultEngine<(Vec<Payment>, u64)> {
        let mut query = payments::Entity::find();
        if let Some(kind) = filter.kind {
            query = query.filter(payments::Column::Kind.eq(kind.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(payments::Column::Status.eq(status.as_str()));
        }
        if let Some(method) = filter.payment_method {
            query = query.filter(payments::Column::PaymentMethod.eq(method.as_str()));
        }
        if let Some(category) = filter.category {
            query = query.filter(payments::Column::Category.eq(category.as_str()));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(payments::Column::Date.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(payments::Column::Date.lte(date_to));
        }
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(payments::Column::VoucherNumber.contains(search))
                    .add(payments::Column::Description.contains(search))
                    .add(payments::Column::PaidTo.contains(search))
                    .add(payments::Column::ReceivedFrom.contains(search)),
            );
        }

        let total = query.clone().count(&self.database).await?;
        let (offset, limit) = page_window(filter.page, filter.limit);
        let models = query
            .order_by_desc(payments::Column::Date)
            .offset(offset)
            .limit(limit)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Payment::try_from(model)?);
        }
        Ok((out, total))
    }

    /// Sums of posted vouchers, split by kind.
    pub async fn payment_totals(&self) -> ResultEngine<PaymentTotals> {
        let backend = self.database.get_database_backend();
        let mut totals = PaymentTotals::default();

        for kind in [PaymentKind::Payment, PaymentKind::Receipt] {
            let stmt = Statement::from_sql_and_values(
                backend,
                "SELECT COALESCE(SUM(amount_minor), 0) AS sum \
                 FROM payments \
                 WHERE kind = ? AND status = ?",
                [kind.as_str().into(), PaymentStatus::Posted.as_str().into()],
            );
            let row = self.database.query_one(stmt).await?;
            let sum: i64 = row.and_then(|r| r.try_get("", "sum").ok()).unwrap_or(0);
            match kind {
                PaymentKind::Payment => totals.payments_minor = sum,
                PaymentKind::Receipt => totals.receipts_minor = sum,
            }
        }
        Ok(totals)
    }
}
