//! Wire types shared between the HTTP server and its clients.
//!
//! Every response is wrapped in [`ApiResponse`]; list endpoints additionally
//! carry a [`Pagination`] block. Amounts travel as integer minor units
//! (paisa), timestamps as RFC3339 strings and calendar days as `YYYY-MM-DD`.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uniform response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

/// Pagination block attached to list responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// A page of items plus its pagination block.
#[derive(Debug, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Response body for creation endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: Uuid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Cheque,
    BankTransfer,
    Online,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mazdoor,
    Electricity,
    Rent,
    Transport,
    RawMaterial,
    Maintenance,
    Packaging,
    CustomerPayment,
    SupplierPayment,
    Other,
}

pub mod payment {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PaymentKind {
        Payment,
        Receipt,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PaymentStatus {
        Draft,
        Posted,
        Cancelled,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PaymentNew {
        pub kind: PaymentKind,
        pub amount_minor: i64,
        /// Account debited (payment) or credited (receipt).
        pub account: Uuid,
        pub description: String,
        /// RFC3339 timestamp; defaults to now.
        pub date: Option<DateTime<FixedOffset>>,
        pub payment_method: Option<PaymentMethod>,
        pub cheque_number: Option<String>,
        pub paid_to: Option<String>,
        pub received_from: Option<String>,
        pub mazdoor: Option<Uuid>,
        pub customer: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub category: Option<Category>,
        /// Defaults to `posted`.
        pub status: Option<PaymentStatus>,
        pub notes: Option<String>,
    }

    /// Partial update; absent fields are left untouched.
    ///
    /// Kind, accounts and party references are immutable after creation.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PaymentPatch {
        pub amount_minor: Option<i64>,
        pub date: Option<DateTime<FixedOffset>>,
        pub description: Option<String>,
        pub payment_method: Option<PaymentMethod>,
        pub cheque_number: Option<String>,
        pub paid_to: Option<String>,
        pub received_from: Option<String>,
        pub category: Option<Category>,
        pub status: Option<PaymentStatus>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PaymentView {
        pub id: Uuid,
        pub voucher_number: String,
        pub kind: PaymentKind,
        pub date: DateTime<FixedOffset>,
        pub description: String,
        pub amount_minor: i64,
        pub payment_method: PaymentMethod,
        pub cheque_number: Option<String>,
        pub from_account: Option<Uuid>,
        pub to_account: Option<Uuid>,
        pub paid_to: Option<String>,
        pub received_from: Option<String>,
        pub mazdoor: Option<Uuid>,
        pub customer: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub category: Option<Category>,
        pub status: PaymentStatus,
        pub source: String,
        pub notes: Option<String>,
    }

    /// Query string for `GET /payments`.
    #[derive(Debug, Default, Deserialize)]
    pub struct PaymentListQuery {
        pub kind: Option<PaymentKind>,
        pub status: Option<PaymentStatus>,
        pub payment_method: Option<PaymentMethod>,
        pub category: Option<Category>,
        pub date_from: Option<DateTime<FixedOffset>>,
        pub date_to: Option<DateTime<FixedOffset>>,
        pub search: Option<String>,
        pub page: Option<u64>,
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PaymentTotals {
        pub payments_minor: i64,
        pub receipts_minor: i64,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub category: Category,
        pub amount_minor: i64,
        pub description: String,
        pub date: Option<DateTime<FixedOffset>>,
        pub payment_method: Option<PaymentMethod>,
        pub mazdoor: Option<Uuid>,
        pub supplier: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        pub category: Category,
        pub description: String,
        pub amount_minor: i64,
        pub date: DateTime<FixedOffset>,
        pub payment_method: PaymentMethod,
        pub mazdoor: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub source: String,
    }

    /// Created expense plus the records the reconciliation produced.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub id: Uuid,
        pub payment_id: Uuid,
        /// Absent when the day's memo was already posted.
        pub memo_id: Option<Uuid>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct ExpenseListQuery {
        pub category: Option<Category>,
        pub mazdoor: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub date_from: Option<DateTime<FixedOffset>>,
        pub date_to: Option<DateTime<FixedOffset>>,
        pub page: Option<u64>,
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub items: Vec<ExpenseView>,
        pub pagination: Pagination,
        pub total_amount_minor: i64,
    }
}

pub mod memo {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MemoStatus {
        Draft,
        Posted,
        Closed,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ReceiptType {
        General,
        CustomerPayment,
        Sale,
        OtherIncome,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemoNew {
        pub date: NaiveDate,
        /// Defaults to the previous memo's closing balance.
        pub opening_balance_minor: Option<i64>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemoView {
        pub id: Uuid,
        pub date: NaiveDate,
        pub opening_balance_minor: i64,
        pub closing_balance_minor: i64,
        pub status: MemoStatus,
        pub notes: Option<String>,
        pub posted_at: Option<DateTime<FixedOffset>>,
        pub posted_by: Option<String>,
    }

    /// A memo together with its entries.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemoDetail {
        pub memo: MemoView,
        pub entries: Vec<CashEntryView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CashEntryView {
        pub id: Uuid,
        pub entry_type: String,
        pub name: String,
        pub description: Option<String>,
        pub amount_minor: i64,
        pub account: Option<Uuid>,
        pub customer: Option<Uuid>,
        pub receipt_type: Option<ReceiptType>,
        pub category: Option<Category>,
        pub mazdoor: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub payment_method: PaymentMethod,
        pub payment_reference: Option<Uuid>,
        pub expense_reference: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CreditEntryNew {
        pub name: String,
        pub amount_minor: i64,
        /// Account the mirrored receipt credits.
        pub account: Uuid,
        pub description: Option<String>,
        pub customer: Option<Uuid>,
        /// Defaults to `general`. `customer_payment` requires a customer.
        pub receipt_type: Option<ReceiptType>,
        pub payment_method: Option<PaymentMethod>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DebitEntryNew {
        pub name: String,
        pub amount_minor: i64,
        pub category: Category,
        pub description: Option<String>,
        pub mazdoor: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub payment_method: Option<PaymentMethod>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct MemoListQuery {
        pub date_from: Option<NaiveDate>,
        pub date_to: Option<NaiveDate>,
        pub status: Option<MemoStatus>,
        pub page: Option<u64>,
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PreviousBalance {
        pub date: NaiveDate,
        pub previous_closing_minor: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct PreviousBalanceQuery {
        pub date: NaiveDate,
    }
}

pub mod trade {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TradeKind {
        Purchase,
        Sale,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PaymentProgress {
        Pending,
        Partial,
        Paid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TradeLineNew {
        pub item_id: Uuid,
        pub quantity: i64,
        pub rate_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TradeNew {
        pub kind: TradeKind,
        /// Required for sales.
        pub customer: Option<Uuid>,
        /// Required for purchases.
        pub supplier: Option<Uuid>,
        pub date: Option<DateTime<FixedOffset>>,
        pub items: Vec<TradeLineNew>,
        pub discount_minor: Option<i64>,
        pub tax_minor: Option<i64>,
        pub paid_amount_minor: Option<i64>,
        pub payment_method: Option<PaymentMethod>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TradePaymentPatch {
        pub paid_amount_minor: i64,
        pub payment_method: Option<PaymentMethod>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TradeItemView {
        pub item_id: Uuid,
        pub quantity: i64,
        pub rate_minor: i64,
        pub total_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TradeView {
        pub id: Uuid,
        pub kind: TradeKind,
        pub customer: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub date: DateTime<FixedOffset>,
        pub items: Vec<TradeItemView>,
        pub subtotal_minor: i64,
        pub discount_minor: i64,
        pub tax_minor: i64,
        pub total_minor: i64,
        pub paid_amount_minor: i64,
        pub remaining_minor: i64,
        pub payment_progress: PaymentProgress,
        pub payment_method: PaymentMethod,
        pub notes: Option<String>,
        pub is_active: bool,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct TradeListQuery {
        pub kind: Option<TradeKind>,
        pub customer: Option<Uuid>,
        pub supplier: Option<Uuid>,
        pub include_deleted: Option<bool>,
        pub page: Option<u64>,
        pub limit: Option<u64>,
    }
}

pub mod stock {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StockMoveNew {
        pub item_id: Uuid,
        pub quantity: i64,
        pub rate_minor: Option<i64>,
        pub date: Option<DateTime<FixedOffset>>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StockAdjust {
        pub item_id: Uuid,
        pub new_quantity: i64,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StockMoveView {
        pub id: Uuid,
        pub item_id: Uuid,
        pub operation: String,
        pub quantity: i64,
        pub previous_stock: i64,
        pub new_stock: i64,
        pub rate_minor: Option<i64>,
        pub total_amount_minor: Option<i64>,
        pub reference_kind: Option<String>,
        pub reference_id: Option<Uuid>,
        pub date: DateTime<FixedOffset>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct StockMovesQuery {
        pub item_id: Option<Uuid>,
        pub page: Option<u64>,
        pub limit: Option<u64>,
    }
}

pub mod account {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AccountType {
        Asset,
        Liability,
        Income,
        Expense,
        Equity,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub name: String,
        pub code: String,
        pub account_type: AccountType,
        pub is_cash_account: Option<bool>,
        pub is_bank_account: Option<bool>,
        pub opening_balance_minor: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: Uuid,
        pub name: String,
        pub code: String,
        pub account_type: AccountType,
        pub is_cash_account: bool,
        pub is_bank_account: bool,
        pub opening_balance_minor: i64,
        pub current_balance_minor: i64,
    }
}

pub mod party {
    use super::*;

    /// Shared shape for customers and suppliers.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct PartyNew {
        pub name: String,
        pub phone: Option<String>,
        pub address: Option<String>,
        pub opening_balance_minor: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PartyView {
        pub id: Uuid,
        pub name: String,
        pub phone: Option<String>,
        pub address: Option<String>,
        pub opening_balance_minor: i64,
        pub current_balance_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MazdoorNew {
        pub name: String,
        pub phone: Option<String>,
        pub daily_wage_minor: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MazdoorView {
        pub id: Uuid,
        pub name: String,
        pub phone: Option<String>,
        pub daily_wage_minor: i64,
        pub current_balance_minor: i64,
    }
}

pub mod item {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub name: String,
        pub code: String,
        pub unit: String,
        pub item_type: Option<String>,
        pub opening_stock: Option<i64>,
        pub reorder_level: Option<i64>,
        pub purchase_rate_minor: Option<i64>,
        pub selling_rate_minor: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemView {
        pub id: Uuid,
        pub name: String,
        pub code: String,
        pub unit: String,
        pub item_type: Option<String>,
        pub current_stock: i64,
        pub reorder_level: i64,
        pub purchase_rate_minor: i64,
        pub selling_rate_minor: i64,
    }
}
