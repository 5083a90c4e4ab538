//! Command structs for engine operations.
//!
//! These types group parameters for write operations, keeping call sites
//! readable and avoiding long argument lists.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    accounts::AccountType,
    cash_entries::ReceiptType,
    payments::{Category, PaymentKind, PaymentMethod, PaymentStatus},
    stock::StockReference,
    trades::TradeKind,
};

/// Create a payment voucher.
#[derive(Clone, Debug)]
pub struct PaymentCmd {
    pub kind: PaymentKind,
    pub amount_minor: i64,
    /// `from_account` for payments, `to_account` for receipts.
    pub account: Uuid,
    pub description: String,
    pub date: Option<DateTime<Utc>>,
    pub payment_method: PaymentMethod,
    pub cheque_number: Option<String>,
    pub paid_to: Option<String>,
    pub received_from: Option<String>,
    pub mazdoor: Option<Uuid>,
    pub customer: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub category: Option<Category>,
    pub status: PaymentStatus,
    pub notes: Option<String>,
    pub user: String,
}

impl PaymentCmd {
    #[must_use]
    pub fn new(
        kind: PaymentKind,
        amount_minor: i64,
        account: Uuid,
        description: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount_minor,
            account,
            description: description.into(),
            date: None,
            payment_method: PaymentMethod::Cash,
            cheque_number: None,
            paid_to: None,
            received_from: None,
            mazdoor: None,
            customer: None,
            supplier: None,
            category: None,
            status: PaymentStatus::Posted,
            notes: None,
            user: user.into(),
        }
    }

    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    #[must_use]
    pub fn cheque_number(mut self, number: impl Into<String>) -> Self {
        self.cheque_number = Some(number.into());
        self
    }

    #[must_use]
    pub fn paid_to(mut self, name: impl Into<String>) -> Self {
        self.paid_to = Some(name.into());
        self
    }

    #[must_use]
    pub fn received_from(mut self, name: impl Into<String>) -> Self {
        self.received_from = Some(name.into());
        self
    }

    #[must_use]
    pub fn mazdoor(mut self, id: Uuid) -> Self {
        self.mazdoor = Some(id);
        self
    }

    #[must_use]
    pub fn customer(mut self, id: Uuid) -> Self {
        self.customer = Some(id);
        self
    }

    #[must_use]
    pub fn supplier(mut self, id: Uuid) -> Self {
        self.supplier = Some(id);
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Update a payment voucher. Kind and accounts are immutable; unset fields
/// keep their stored values.
#[derive(Clone, Debug, Default)]
pub struct PaymentUpdateCmd {
    pub amount_minor: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub cheque_number: Option<String>,
    pub paid_to: Option<String>,
    pub received_from: Option<String>,
    pub category: Option<Category>,
    pub status: Option<PaymentStatus>,
    pub notes: Option<String>,
    pub user: String,
}

impl PaymentUpdateCmd {
    #[must_use]
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn amount_minor(mut self, amount_minor: i64) -> Self {
        self.amount_minor = Some(amount_minor);
        self
    }

    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    #[must_use]
    pub fn cheque_number(mut self, number: impl Into<String>) -> Self {
        self.cheque_number = Some(number.into());
        self
    }

    #[must_use]
    pub fn paid_to(mut self, name: impl Into<String>) -> Self {
        self.paid_to = Some(name.into());
        self
    }

    #[must_use]
    pub fn received_from(mut self, name: impl Into<String>) -> Self {
        self.received_from = Some(name.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Create an expense. Triggers the expense → payment → memo sync.
#[derive(Clone, Debug)]
pub struct ExpenseCmd {
    pub category: Category,
    pub amount_minor: i64,
    pub description: String,
    pub date: Option<DateTime<Utc>>,
    pub payment_method: PaymentMethod,
    pub mazdoor: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub user: String,
}

impl ExpenseCmd {
    #[must_use]
    pub fn new(
        category: Category,
        amount_minor: i64,
        description: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            category,
            amount_minor,
            description: description.into(),
            date: None,
            payment_method: PaymentMethod::Cash,
            mazdoor: None,
            supplier: None,
            user: user.into(),
        }
    }

    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    #[must_use]
    pub fn mazdoor(mut self, id: Uuid) -> Self {
        self.mazdoor = Some(id);
        self
    }

    #[must_use]
    pub fn supplier(mut self, id: Uuid) -> Self {
        self.supplier = Some(id);
        self
    }
}

/// Create a daily cash memo page.
#[derive(Clone, Debug)]
pub struct MemoCmd {
    pub date: NaiveDate,
    /// Defaults to the previous memo's closing balance.
    pub opening_balance_minor: Option<i64>,
    pub notes: Option<String>,
    pub user: String,
}

impl MemoCmd {
    #[must_use]
    pub fn new(date: NaiveDate, user: impl Into<String>) -> Self {
        Self {
            date,
            opening_balance_minor: None,
            notes: None,
            user: user.into(),
        }
    }

    #[must_use]
    pub fn opening_balance_minor(mut self, opening_balance_minor: i64) -> Self {
        self.opening_balance_minor = Some(opening_balance_minor);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Append a credit (cash in) entry to a memo.
#[derive(Clone, Debug)]
pub struct CreditEntryCmd {
    pub name: String,
    pub amount_minor: i64,
    /// Account the mirrored receipt lands in.
    pub account: Uuid,
    pub description: Option<String>,
    pub customer: Option<Uuid>,
    pub receipt_type: ReceiptType,
    pub payment_method: PaymentMethod,
    pub user: String,
}

impl CreditEntryCmd {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        amount_minor: i64,
        account: Uuid,
        user: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount_minor,
            account,
            description: None,
            customer: None,
            receipt_type: ReceiptType::General,
            payment_method: PaymentMethod::Cash,
            user: user.into(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn customer(mut self, id: Uuid) -> Self {
        self.customer = Some(id);
        self
    }

    #[must_use]
    pub fn receipt_type(mut self, receipt_type: ReceiptType) -> Self {
        self.receipt_type = receipt_type;
        self
    }

    #[must_use]
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }
}

/// Append a debit (cash out) entry to a memo.
#[derive(Clone, Debug)]
pub struct DebitEntryCmd {
    pub name: String,
    pub amount_minor: i64,
    pub category: Category,
    pub description: Option<String>,
    pub mazdoor: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub payment_method: PaymentMethod,
    pub user: String,
}

impl DebitEntryCmd {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        amount_minor: i64,
        category: Category,
        user: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount_minor,
            category,
            description: None,
            mazdoor: None,
            supplier: None,
            payment_method: PaymentMethod::Cash,
            user: user.into(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn mazdoor(mut self, id: Uuid) -> Self {
        self.mazdoor = Some(id);
        self
    }

    #[must_use]
    pub fn supplier(mut self, id: Uuid) -> Self {
        self.supplier = Some(id);
        self
    }

    #[must_use]
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }
}

/// One line of a trade.
#[derive(Clone, Copy, Debug)]
pub struct TradeLine {
    pub item_id: Uuid,
    pub quantity: i64,
    pub rate_minor: i64,
}

/// Create a sale or purchase trade.
#[derive(Clone, Debug)]
pub struct TradeCmd {
    pub kind: TradeKind,
    pub customer: Option<Uuid>,
    pub supplier: Option<Uuid>,
    pub date: Option<DateTime<Utc>>,
    pub lines: Vec<TradeLine>,
    pub discount_minor: i64,
    pub tax_minor: i64,
    pub paid_amount_minor: i64,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub user: String,
}

impl TradeCmd {
    #[must_use]
    pub fn new(kind: TradeKind, user: impl Into<String>) -> Self {
        Self {
            kind,
            customer: None,
            supplier: None,
            date: None,
            lines: Vec::new(),
            discount_minor: 0,
            tax_minor: 0,
            paid_amount_minor: 0,
            payment_method: PaymentMethod::Cash,
            notes: None,
            user: user.into(),
        }
    }

    #[must_use]
    pub fn customer(mut self, id: Uuid) -> Self {
        self.customer = Some(id);
        self
    }

    #[must_use]
    pub fn supplier(mut self, id: Uuid) -> Self {
        self.supplier = Some(id);
        self
    }

    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn line(mut self, item_id: Uuid, quantity: i64, rate_minor: i64) -> Self {
        self.lines.push(TradeLine {
            item_id,
            quantity,
            rate_minor,
        });
        self
    }

    #[must_use]
    pub fn discount_minor(mut self, discount_minor: i64) -> Self {
        self.discount_minor = discount_minor;
        self
    }

    #[must_use]
    pub fn tax_minor(mut self, tax_minor: i64) -> Self {
        self.tax_minor = tax_minor;
        self
    }

    #[must_use]
    pub fn paid_amount_minor(mut self, paid_amount_minor: i64) -> Self {
        self.paid_amount_minor = paid_amount_minor;
        self
    }

    #[must_use]
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Move stock in or out of an item.
#[derive(Clone, Debug)]
pub struct StockCmd {
    pub item_id: Uuid,
    pub quantity: i64,
    pub rate_minor: Option<i64>,
    pub reference: Option<StockReference>,
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub user: String,
}

impl StockCmd {
    #[must_use]
    pub fn new(item_id: Uuid, quantity: i64, user: impl Into<String>) -> Self {
        Self {
            item_id,
            quantity,
            rate_minor: None,
            reference: None,
            date: None,
            notes: None,
            user: user.into(),
        }
    }

    #[must_use]
    pub fn rate_minor(mut self, rate_minor: i64) -> Self {
        self.rate_minor = Some(rate_minor);
        self
    }

    #[must_use]
    pub fn reference(mut self, reference: StockReference) -> Self {
        self.reference = Some(reference);
        self
    }

    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Create a ledger account.
#[derive(Clone, Debug)]
pub struct AccountCmd {
    pub name: String,
    pub code: String,
    pub account_type: AccountType,
    pub is_cash_account: bool,
    pub is_bank_account: bool,
    pub opening_balance_minor: i64,
}

impl AccountCmd {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            account_type,
            is_cash_account: false,
            is_bank_account: false,
            opening_balance_minor: 0,
        }
    }

    #[must_use]
    pub fn cash_account(mut self) -> Self {
        self.is_cash_account = true;
        self
    }

    #[must_use]
    pub fn bank_account(mut self) -> Self {
        self.is_bank_account = true;
        self
    }

    #[must_use]
    pub fn opening_balance_minor(mut self, opening_balance_minor: i64) -> Self {
        self.opening_balance_minor = opening_balance_minor;
        self
    }
}

/// Create a customer.
#[derive(Clone, Debug)]
pub struct CustomerCmd {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub opening_balance_minor: i64,
}

impl CustomerCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
            address: None,
            opening_balance_minor: 0,
        }
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn opening_balance_minor(mut self, opening_balance_minor: i64) -> Self {
        self.opening_balance_minor = opening_balance_minor;
        self
    }
}

/// Create a supplier.
#[derive(Clone, Debug)]
pub struct SupplierCmd {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub opening_balance_minor: i64,
}

impl SupplierCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
            address: None,
            opening_balance_minor: 0,
        }
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn opening_balance_minor(mut self, opening_balance_minor: i64) -> Self {
        self.opening_balance_minor = opening_balance_minor;
        self
    }
}

/// Create a mazdoor.
#[derive(Clone, Debug)]
pub struct MazdoorCmd {
    pub name: String,
    pub phone: Option<String>,
    pub daily_wage_minor: i64,
}

impl MazdoorCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
            daily_wage_minor: 0,
        }
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn daily_wage_minor(mut self, daily_wage_minor: i64) -> Self {
        self.daily_wage_minor = daily_wage_minor;
        self
    }
}

/// Create an inventory item.
#[derive(Clone, Debug)]
pub struct ItemCmd {
    pub name: String,
    pub code: String,
    pub unit: String,
    pub item_type: Option<String>,
    pub opening_stock: i64,
    pub reorder_level: i64,
    pub purchase_rate_minor: i64,
    pub selling_rate_minor: i64,
}

impl ItemCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            unit: unit.into(),
            item_type: None,
            opening_stock: 0,
            reorder_level: 0,
            purchase_rate_minor: 0,
            selling_rate_minor: 0,
        }
    }

    #[must_use]
    pub fn item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    #[must_use]
    pub fn opening_stock(mut self, opening_stock: i64) -> Self {
        self.opening_stock = opening_stock;
        self
    }

    #[must_use]
    pub fn reorder_level(mut self, reorder_level: i64) -> Self {
        self.reorder_level = reorder_level;
        self
    }

    #[must_use]
    pub fn purchase_rate_minor(mut self, purchase_rate_minor: i64) -> Self {
        self.purchase_rate_minor = purchase_rate_minor;
        self
    }

    #[must_use]
    pub fn selling_rate_minor(mut self, selling_rate_minor: i64) -> Self {
        self.selling_rate_minor = selling_rate_minor;
        self
    }
}
