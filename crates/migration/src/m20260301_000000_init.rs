//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for millbook:
//!
//! - `users`: authentication
//! - `accounts`: ledger accounts (cash box, banks, expense heads)
//! - `customers`, `suppliers`, `mazdoors`: balance-holding parties
//! - `items`: inventory
//! - `payments`: payment/receipt vouchers
//! - `expenses`: categorized expense book
//! - `daily_cash_memos` + `cash_entries`: the daily cash book
//! - `trades` + `trade_items`: sales and purchases
//! - `stock_moves`: stock movement journal
//!
//! It also seeds the default cash account the reconciliation service needs.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Username,
    Password,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    Name,
    Code,
    AccountType,
    IsCashAccount,
    IsBankAccount,
    OpeningBalanceMinor,
    CurrentBalanceMinor,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    Name,
    Phone,
    Address,
    OpeningBalanceMinor,
    CurrentBalanceMinor,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum Suppliers {
    Table,
    Id,
    Name,
    Phone,
    Address,
    OpeningBalanceMinor,
    CurrentBalanceMinor,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum Mazdoors {
    Table,
    Id,
    Name,
    Phone,
    DailyWageMinor,
    CurrentBalanceMinor,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    Name,
    Code,
    Unit,
    ItemType,
    CurrentStock,
    ReorderLevel,
    PurchaseRateMinor,
    SellingRateMinor,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum Payments {
    Table,
    Id,
    VoucherNumber,
    Kind,
    Date,
    Description,
    AmountMinor,
    PaymentMethod,
    ChequeNumber,
    FromAccount,
    ToAccount,
    PaidTo,
    ReceivedFrom,
    Mazdoor,
    Customer,
    Supplier,
    Category,
    Status,
    Source,
    Notes,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    Category,
    Description,
    AmountMinor,
    Date,
    PaymentMethod,
    Mazdoor,
    Supplier,
    Source,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum DailyCashMemos {
    Table,
    Id,
    Date,
    OpeningBalanceMinor,
    ClosingBalanceMinor,
    Status,
    Notes,
    PostedAt,
    PostedBy,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum CashEntries {
    Table,
    Id,
    MemoId,
    EntryType,
    Name,
    Description,
    AmountMinor,
    Account,
    Customer,
    ReceiptType,
    Category,
    Mazdoor,
    Supplier,
    PaymentMethod,
    PaymentReference,
    ExpenseReference,
    CreatedAt,
}

#[derive(Iden)]
enum Trades {
    Table,
    Id,
    Kind,
    Customer,
    Supplier,
    Date,
    SubtotalMinor,
    DiscountMinor,
    TaxMinor,
    TotalMinor,
    PaidAmountMinor,
    PaymentMethod,
    Notes,
    IsActive,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum TradeItems {
    Table,
    Id,
    TradeId,
    ItemId,
    Quantity,
    RateMinor,
    TotalMinor,
}

#[derive(Iden)]
enum StockMoves {
    Table,
    Id,
    ItemId,
    Operation,
    Quantity,
    PreviousStock,
    NewStock,
    RateMinor,
    TotalAmountMinor,
    ReferenceKind,
    ReferenceId,
    Date,
    Notes,
    CreatedBy,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Accounts
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::Name).string().not_null())
                    .col(ColumnDef::new(Accounts::Code).string().not_null())
                    .col(ColumnDef::new(Accounts::AccountType).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::IsCashAccount)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsBankAccount)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Accounts::OpeningBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Accounts::CurrentBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-code-unique")
                    .table(Accounts::Table)
                    .col(Accounts::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Customers / Suppliers / Mazdoors
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(ColumnDef::new(Customers::Phone).string())
                    .col(ColumnDef::new(Customers::Address).string())
                    .col(
                        ColumnDef::new(Customers::OpeningBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Customers::CurrentBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Customers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Suppliers::Name).string().not_null())
                    .col(ColumnDef::new(Suppliers::Phone).string())
                    .col(ColumnDef::new(Suppliers::Address).string())
                    .col(
                        ColumnDef::new(Suppliers::OpeningBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Suppliers::CurrentBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Suppliers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Suppliers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Mazdoors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mazdoors::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Mazdoors::Name).string().not_null())
                    .col(ColumnDef::new(Mazdoors::Phone).string())
                    .col(
                        ColumnDef::new(Mazdoors::DailyWageMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Mazdoors::CurrentBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Mazdoors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Mazdoors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Items
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Items::Name).string().not_null())
                    .col(ColumnDef::new(Items::Code).string().not_null())
                    .col(ColumnDef::new(Items::Unit).string().not_null())
                    .col(ColumnDef::new(Items::ItemType).string())
                    .col(
                        ColumnDef::new(Items::CurrentStock)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::ReorderLevel)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::PurchaseRateMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::SellingRateMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Items::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Items::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-items-code-unique")
                    .table(Items::Table)
                    .col(Items::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Payments
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::VoucherNumber).string().not_null())
                    .col(ColumnDef::new(Payments::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Payments::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::Description).string().not_null())
                    .col(ColumnDef::new(Payments::AmountMinor).big_integer().not_null())
                    .col(ColumnDef::new(Payments::PaymentMethod).string().not_null())
                    .col(ColumnDef::new(Payments::ChequeNumber).string())
                    .col(ColumnDef::new(Payments::FromAccount).string())
                    .col(ColumnDef::new(Payments::ToAccount).string())
                    .col(ColumnDef::new(Payments::PaidTo).string())
                    .col(ColumnDef::new(Payments::ReceivedFrom).string())
                    .col(ColumnDef::new(Payments::Mazdoor).string())
                    .col(ColumnDef::new(Payments::Customer).string())
                    .col(ColumnDef::new(Payments::Supplier).string())
                    .col(ColumnDef::new(Payments::Category).string())
                    .col(ColumnDef::new(Payments::Status).string().not_null())
                    .col(ColumnDef::new(Payments::Source).string().not_null())
                    .col(ColumnDef::new(Payments::Notes).string())
                    .col(ColumnDef::new(Payments::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Payments::UpdatedBy).string())
                    .col(
                        ColumnDef::new(Payments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-from_account")
                            .from(Payments::Table, Payments::FromAccount)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-to_account")
                            .from(Payments::Table, Payments::ToAccount)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-payments-kind-date")
                    .table(Payments::Table)
                    .col(Payments::Kind)
                    .col(Payments::Date)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 6. Expenses
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Category).string().not_null())
                    .col(ColumnDef::new(Expenses::Description).string().not_null())
                    .col(ColumnDef::new(Expenses::AmountMinor).big_integer().not_null())
                    .col(
                        ColumnDef::new(Expenses::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::PaymentMethod).string().not_null())
                    .col(ColumnDef::new(Expenses::Mazdoor).string())
                    .col(ColumnDef::new(Expenses::Supplier).string())
                    .col(ColumnDef::new(Expenses::Source).string().not_null())
                    .col(ColumnDef::new(Expenses::CreatedBy).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-category-date")
                    .table(Expenses::Table)
                    .col(Expenses::Category)
                    .col(Expenses::Date)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 7. Daily cash memos + entries
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(DailyCashMemos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyCashMemos::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DailyCashMemos::Date).date().not_null())
                    .col(
                        ColumnDef::new(DailyCashMemos::OpeningBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DailyCashMemos::ClosingBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(DailyCashMemos::Status).string().not_null())
                    .col(ColumnDef::new(DailyCashMemos::Notes).string())
                    .col(ColumnDef::new(DailyCashMemos::PostedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(DailyCashMemos::PostedBy).string())
                    .col(ColumnDef::new(DailyCashMemos::CreatedBy).string().not_null())
                    .col(ColumnDef::new(DailyCashMemos::UpdatedBy).string())
                    .col(
                        ColumnDef::new(DailyCashMemos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-daily_cash_memos-date-unique")
                    .table(DailyCashMemos::Table)
                    .col(DailyCashMemos::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CashEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CashEntries::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CashEntries::MemoId).string().not_null())
                    .col(ColumnDef::new(CashEntries::EntryType).string().not_null())
                    .col(ColumnDef::new(CashEntries::Name).string().not_null())
                    .col(ColumnDef::new(CashEntries::Description).string())
                    .col(
                        ColumnDef::new(CashEntries::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CashEntries::Account).string())
                    .col(ColumnDef::new(CashEntries::Customer).string())
                    .col(ColumnDef::new(CashEntries::ReceiptType).string())
                    .col(ColumnDef::new(CashEntries::Category).string())
                    .col(ColumnDef::new(CashEntries::Mazdoor).string())
                    .col(ColumnDef::new(CashEntries::Supplier).string())
                    .col(ColumnDef::new(CashEntries::PaymentMethod).string().not_null())
                    .col(ColumnDef::new(CashEntries::PaymentReference).string())
                    .col(ColumnDef::new(CashEntries::ExpenseReference).string())
                    .col(
                        ColumnDef::new(CashEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-cash_entries-memo_id")
                            .from(CashEntries::Table, CashEntries::MemoId)
                            .to(DailyCashMemos::Table, DailyCashMemos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-cash_entries-memo_id")
                    .table(CashEntries::Table)
                    .col(CashEntries::MemoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-cash_entries-payment_reference")
                    .table(CashEntries::Table)
                    .col(CashEntries::PaymentReference)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 8. Trades + lines
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Trades::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Trades::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Trades::Kind).string().not_null())
                    .col(ColumnDef::new(Trades::Customer).string())
                    .col(ColumnDef::new(Trades::Supplier).string())
                    .col(
                        ColumnDef::new(Trades::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trades::SubtotalMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trades::DiscountMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Trades::TaxMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Trades::TotalMinor).big_integer().not_null())
                    .col(
                        ColumnDef::new(Trades::PaidAmountMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Trades::PaymentMethod).string().not_null())
                    .col(ColumnDef::new(Trades::Notes).string())
                    .col(
                        ColumnDef::new(Trades::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Trades::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Trades::UpdatedBy).string())
                    .col(
                        ColumnDef::new(Trades::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TradeItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TradeItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TradeItems::TradeId).string().not_null())
                    .col(ColumnDef::new(TradeItems::ItemId).string().not_null())
                    .col(ColumnDef::new(TradeItems::Quantity).big_integer().not_null())
                    .col(
                        ColumnDef::new(TradeItems::RateMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradeItems::TotalMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-trade_items-trade_id")
                            .from(TradeItems::Table, TradeItems::TradeId)
                            .to(Trades::Table, Trades::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-trade_items-item_id")
                            .from(TradeItems::Table, TradeItems::ItemId)
                            .to(Items::Table, Items::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-trade_items-trade_id")
                    .table(TradeItems::Table)
                    .col(TradeItems::TradeId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 9. Stock moves
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(StockMoves::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockMoves::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StockMoves::ItemId).string().not_null())
                    .col(ColumnDef::new(StockMoves::Operation).string().not_null())
                    .col(ColumnDef::new(StockMoves::Quantity).big_integer().not_null())
                    .col(
                        ColumnDef::new(StockMoves::PreviousStock)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMoves::NewStock).big_integer().not_null())
                    .col(ColumnDef::new(StockMoves::RateMinor).big_integer())
                    .col(ColumnDef::new(StockMoves::TotalAmountMinor).big_integer())
                    .col(ColumnDef::new(StockMoves::ReferenceKind).string())
                    .col(ColumnDef::new(StockMoves::ReferenceId).string())
                    .col(
                        ColumnDef::new(StockMoves::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMoves::Notes).string())
                    .col(ColumnDef::new(StockMoves::CreatedBy).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stock_moves-item_id")
                            .from(StockMoves::Table, StockMoves::ItemId)
                            .to(Items::Table, Items::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_moves-item_id-date")
                    .table(StockMoves::Table)
                    .col(StockMoves::ItemId)
                    .col(StockMoves::Date)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 10. Seed the default cash account
        // ───────────────────────────────────────────────────────────────────
        let seed = Query::insert()
            .into_table(Accounts::Table)
            .columns([
                Accounts::Id,
                Accounts::Name,
                Accounts::Code,
                Accounts::AccountType,
                Accounts::IsCashAccount,
                Accounts::IsBankAccount,
                Accounts::OpeningBalanceMinor,
                Accounts::CurrentBalanceMinor,
                Accounts::IsActive,
                Accounts::CreatedAt,
            ])
            .values_panic([
                uuid::Uuid::new_v4().to_string().into(),
                "Cash in Hand".into(),
                "CASH".into(),
                "asset".into(),
                true.into(),
                false.into(),
                0i64.into(),
                0i64.into(),
                true.into(),
                Expr::current_timestamp().into(),
            ])
            .to_owned();
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(StockMoves::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TradeItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Trades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CashEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DailyCashMemos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Mazdoors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
