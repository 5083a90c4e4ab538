//! Mappings between the wire enums in `api_types` and the engine's enums.
//!
//! The two sides are kept as distinct types so the engine never depends on
//! wire concerns; these are the only places the pairs meet.

use api_types::{
    Category as ApiCategory, PaymentMethod as ApiMethod,
    account::AccountType as ApiAccountType,
    memo::{MemoStatus as ApiMemoStatus, ReceiptType as ApiReceiptType},
    payment::{PaymentKind as ApiKind, PaymentStatus as ApiStatus},
    trade::{PaymentProgress as ApiProgress, TradeKind as ApiTradeKind},
};

pub(crate) fn kind_to_engine(kind: ApiKind) -> engine::PaymentKind {
    match kind {
        ApiKind::Payment => engine::PaymentKind::Payment,
        ApiKind::Receipt => engine::PaymentKind::Receipt,
    }
}

pub(crate) fn kind_to_api(kind: engine::PaymentKind) -> ApiKind {
    match kind {
        engine::PaymentKind::Payment => ApiKind::Payment,
        engine::PaymentKind::Receipt => ApiKind::Receipt,
    }
}

pub(crate) fn status_to_engine(status: ApiStatus) -> engine::PaymentStatus {
    match status {
        ApiStatus::Draft => engine::PaymentStatus::Draft,
        ApiStatus::Posted => engine::PaymentStatus::Posted,
        ApiStatus::Cancelled => engine::PaymentStatus::Cancelled,
    }
}

pub(crate) fn status_to_api(status: engine::PaymentStatus) -> ApiStatus {
    match status {
        engine::PaymentStatus::Draft => ApiStatus::Draft,
        engine::PaymentStatus::Posted => ApiStatus::Posted,
        engine::PaymentStatus::Cancelled => ApiStatus::Cancelled,
    }
}

pub(crate) fn method_to_engine(method: ApiMethod) -> engine::PaymentMethod {
    match method {
        ApiMethod::Cash => engine::PaymentMethod::Cash,
        ApiMethod::Cheque => engine::PaymentMethod::Cheque,
        ApiMethod::BankTransfer => engine::PaymentMethod::BankTransfer,
        ApiMethod::Online => engine::PaymentMethod::Online,
    }
}

pub(crate) fn method_to_api(method: engine::PaymentMethod) -> ApiMethod {
    match method {
        engine::PaymentMethod::Cash => ApiMethod::Cash,
        engine::PaymentMethod::Cheque => ApiMethod::Cheque,
        engine::PaymentMethod::BankTransfer => ApiMethod::BankTransfer,
        engine::PaymentMethod::Online => ApiMethod::Online,
    }
}

pub(crate) fn category_to_engine(category: ApiCategory) -> engine::Category {
    match category {
        ApiCategory::Mazdoor => engine::Category::Mazdoor,
        ApiCategory::Electricity => engine::Category::Electricity,
        ApiCategory::Rent => engine::Category::Rent,
        ApiCategory::Transport => engine::Category::Transport,
        ApiCategory::RawMaterial => engine::Category::RawMaterial,
        ApiCategory::Maintenance => engine::Category::Maintenance,
        ApiCategory::Packaging => engine::Category::Packaging,
        ApiCategory::CustomerPayment => engine::Category::CustomerPayment,
        ApiCategory::SupplierPayment => engine::Category::SupplierPayment,
        ApiCategory::Other => engine::Category::Other,
    }
}

pub(crate) fn category_to_api(category: engine::Category) -> ApiCategory {
    match category {
        engine::Category::Mazdoor => ApiCategory::Mazdoor,
        engine::Category::Electricity => ApiCategory::Electricity,
        engine::Category::Rent => ApiCategory::Rent,
        engine::Category::Transport => ApiCategory::Transport,
        engine::Category::RawMaterial => ApiCategory::RawMaterial,
        engine::Category::Maintenance => ApiCategory::Maintenance,
        engine::Category::Packaging => ApiCategory::Packaging,
        engine::Category::CustomerPayment => ApiCategory::CustomerPayment,
        engine::Category::SupplierPayment => ApiCategory::SupplierPayment,
        engine::Category::Other => ApiCategory::Other,
    }
}

pub(crate) fn memo_status_to_engine(status: ApiMemoStatus) -> engine::MemoStatus {
    match status {
        ApiMemoStatus::Draft => engine::MemoStatus::Draft,
        ApiMemoStatus::Posted => engine::MemoStatus::Posted,
        ApiMemoStatus::Closed => engine::MemoStatus::Closed,
    }
}

pub(crate) fn memo_status_to_api(status: engine::MemoStatus) -> ApiMemoStatus {
    match status {
        engine::MemoStatus::Draft => ApiMemoStatus::Draft,
        engine::MemoStatus::Posted => ApiMemoStatus::Posted,
        engine::MemoStatus::Closed => ApiMemoStatus::Closed,
    }
}

pub(crate) fn receipt_type_to_engine(receipt_type: ApiReceiptType) -> engine::ReceiptType {
    match receipt_type {
        ApiReceiptType::General => engine::ReceiptType::General,
        ApiReceiptType::CustomerPayment => engine::ReceiptType::CustomerPayment,
        ApiReceiptType::Sale => engine::ReceiptType::Sale,
        ApiReceiptType::OtherIncome => engine::ReceiptType::OtherIncome,
    }
}

pub(crate) fn receipt_type_to_api(receipt_type: engine::ReceiptType) -> ApiReceiptType {
    match receipt_type {
        engine::ReceiptType::General => ApiReceiptType::General,
        engine::ReceiptType::CustomerPayment => ApiReceiptType::CustomerPayment,
        engine::ReceiptType::Sale => ApiReceiptType::Sale,
        engine::ReceiptType::OtherIncome => ApiReceiptType::OtherIncome,
    }
}

pub(crate) fn trade_kind_to_engine(kind: ApiTradeKind) -> engine::TradeKind {
    match kind {
        ApiTradeKind::Purchase => engine::TradeKind::Purchase,
        ApiTradeKind::Sale => engine::TradeKind::Sale,
    }
}

pub(crate) fn trade_kind_to_api(kind: engine::TradeKind) -> ApiTradeKind {
    match kind {
        engine::TradeKind::Purchase => ApiTradeKind::Purchase,
        engine::TradeKind::Sale => ApiTradeKind::Sale,
    }
}

pub(crate) fn progress_to_api(progress: engine::PaymentProgress) -> ApiProgress {
    match progress {
        engine::PaymentProgress::Pending => ApiProgress::Pending,
        engine::PaymentProgress::Partial => ApiProgress::Partial,
        engine::PaymentProgress::Paid => ApiProgress::Paid,
    }
}

pub(crate) fn account_type_to_engine(account_type: ApiAccountType) -> engine::AccountType {
    match account_type {
        ApiAccountType::Asset => engine::AccountType::Asset,
        ApiAccountType::Liability => engine::AccountType::Liability,
        ApiAccountType::Income => engine::AccountType::Income,
        ApiAccountType::Expense => engine::AccountType::Expense,
        ApiAccountType::Equity => engine::AccountType::Equity,
    }
}

pub(crate) fn account_type_to_api(account_type: engine::AccountType) -> ApiAccountType {
    match account_type {
        engine::AccountType::Asset => ApiAccountType::Asset,
        engine::AccountType::Liability => ApiAccountType::Liability,
        engine::AccountType::Income => ApiAccountType::Income,
        engine::AccountType::Expense => ApiAccountType::Expense,
        engine::AccountType::Equity => ApiAccountType::Equity,
    }
}
