use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

mod accounts;
mod balances;
mod expenses;
mod items;
mod memos;
mod parties;
mod payments;
mod stock;
mod sync;
mod trades;

pub use expenses::{ExpenseListFilter, ExpenseSync};
pub use memos::MemoListFilter;
pub use payments::{PaymentListFilter, PaymentTotals};
pub use trades::TradeListFilter;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    cash_account_id: Option<Uuid>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The configured cash account, required by every operation that moves
    /// physical cash on behalf of a memo or an expense.
    pub(crate) fn require_cash_account(&self) -> ResultEngine<Uuid> {
        self.cash_account_id.ok_or_else(|| {
            EngineError::Validation("no cash account configured".to_string())
        })
    }
}

fn normalize_required_text(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn ensure_positive_amount(amount_minor: i64) -> ResultEngine<()> {
    if amount_minor <= 0 {
        return Err(EngineError::Validation(
            "amount_minor must be > 0".to_string(),
        ));
    }
    Ok(())
}

fn page_window(page: u64, limit: u64) -> (u64, u64) {
    let limit = limit.clamp(1, 500);
    let page = page.max(1);
    ((page - 1) * limit, limit)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    cash_account_id: Option<Uuid>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Pass the account that backs memo and expense cash movements.
    pub fn cash_account(mut self, account_id: Uuid) -> EngineBuilder {
        self.cash_account_id = Some(account_id);
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
            cash_account_id: self.cash_account_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::page_window;

    #[test]
    fn page_window_clamps() {
        assert_eq!(page_window(1, 50), (0, 50));
        assert_eq!(page_window(3, 20), (40, 20));
        assert_eq!(page_window(0, 0), (0, 1));
    }
}
