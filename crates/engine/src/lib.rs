//! Bookkeeping engine for a small flour mill.
//!
//! The engine owns four balance-holding families (accounts, customers,
//! suppliers, mazdoors), the payment/expense vouchers, the daily cash memo
//! book and the trade/stock side. All invariants are enforced here; the HTTP
//! layer is a thin shell over these methods.

pub use accounts::{Account, AccountType};
pub use cash_entries::{CashEntry, EntryType, ReceiptType};
pub use commands::{
    AccountCmd, CreditEntryCmd, CustomerCmd, DebitEntryCmd, ExpenseCmd, ItemCmd, MazdoorCmd,
    MemoCmd, PaymentCmd, PaymentUpdateCmd, StockCmd, SupplierCmd, TradeCmd, TradeLine,
};
pub use customers::Customer;
pub use error::EngineError;
pub use expenses::Expense;
pub use items::Item;
pub use mazdoors::Mazdoor;
pub use memos::{DailyCashMemo, MemoStatus};
pub use ops::{
    Engine, EngineBuilder, ExpenseListFilter, ExpenseSync, MemoListFilter, PaymentListFilter,
    PaymentTotals, TradeListFilter,
};
pub use payments::{Category, Payment, PaymentKind, PaymentMethod, PaymentSource, PaymentStatus};
pub use stock::{StockMove, StockOperation, StockReference};
pub use suppliers::Supplier;
pub use trades::{PaymentProgress, Trade, TradeKind};
pub use trade_items::TradeItem;

mod accounts;
mod cash_entries;
mod commands;
mod customers;
mod error;
mod expenses;
mod items;
mod mazdoors;
mod memos;
mod ops;
mod payments;
mod stock;
mod suppliers;
mod trade_items;
mod trades;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
