use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::Database;
use uuid::Uuid;

use engine::{
    Category, CreditEntryCmd, DebitEntryCmd, Engine, EngineError, EntryType, ExpenseCmd, MemoCmd,
    MemoStatus, PaymentCmd, PaymentKind,
};
use migration::MigratorTrait;

async fn engine_with_cash() -> (Engine, Uuid) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let probe = Engine::builder().database(db.clone()).build();
    let cash = probe
        .find_cash_account()
        .await
        .unwrap()
        .expect("migration seeds a cash account")
        .id;
    let engine = Engine::builder().database(db).cash_account(cash).build();
    (engine, cash)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[tokio::test]
async fn entries_drive_the_closing_balance() {
    let (engine, cash) = engine_with_cash().await;

    let memo_id = engine
        .create_memo(MemoCmd::new(day(1), "alice"))
        .await
        .unwrap();

    engine
        .add_credit_entry(
            memo_id,
            CreditEntryCmd::new("counter sales", 1_000, cash, "alice"),
        )
        .await
        .unwrap();
    engine
        .add_debit_entry(
            memo_id,
            DebitEntryCmd::new("generator diesel", 400, Category::Electricity, "alice"),
        )
        .await
        .unwrap();

    let memo = engine.memo(memo_id).await.unwrap();
    assert_eq!(memo.opening_balance_minor, 0);
    assert_eq!(memo.closing_balance_minor, 600);

    let entries = engine.memo_entries(memo_id).await.unwrap();
    assert_eq!(entries.len(), 2);
    // Every memo entry is backed by a mirrored voucher.
    assert!(entries.iter().all(|e| e.payment_reference.is_some()));
}

#[tokio::test]
async fn opening_balance_chains_from_the_previous_page() {
    let (engine, cash) = engine_with_cash().await;

    let first = engine
        .create_memo(MemoCmd::new(day(1), "alice"))
        .await
        .unwrap();
    engine
        .add_credit_entry(first, CreditEntryCmd::new("opening sales", 1_000, cash, "alice"))
        .await
        .unwrap();

    assert_eq!(engine.previous_closing_balance(day(2)).await.unwrap(), 1_000);

    let second = engine
        .create_memo(MemoCmd::new(day(2), "alice"))
        .await
        .unwrap();
    let memo = engine.memo(second).await.unwrap();
    assert_eq!(memo.opening_balance_minor, 1_000);
}

#[tokio::test]
async fn rejects_a_second_memo_for_the_same_day() {
    let (engine, _) = engine_with_cash().await;

    engine
        .create_memo(MemoCmd::new(day(1), "alice"))
        .await
        .unwrap();
    assert!(matches!(
        engine.create_memo(MemoCmd::new(day(1), "alice")).await,
        Err(EngineError::Conflict(_))
    ));
}

#[tokio::test]
async fn posted_memo_refuses_further_entries() {
    let (engine, cash) = engine_with_cash().await;

    let memo_id = engine
        .create_memo(MemoCmd::new(day(1), "alice"))
        .await
        .unwrap();
    engine.post_memo(memo_id, "alice").await.unwrap();

    let memo = engine.memo(memo_id).await.unwrap();
    assert_eq!(memo.status, MemoStatus::Posted);
    assert_eq!(memo.posted_by.as_deref(), Some("alice"));

    let refused = engine
        .add_credit_entry(memo_id, CreditEntryCmd::new("late cash", 100, cash, "alice"))
        .await;
    assert!(matches!(refused, Err(EngineError::Validation(_))));

    assert!(matches!(
        engine.post_memo(memo_id, "alice").await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn expense_fans_out_into_payment_and_memo_debit() {
    let (engine, cash) = engine_with_cash().await;

    let cmd = ExpenseCmd::new(Category::Electricity, 750, "meter bill", "alice")
        .date(Utc.with_ymd_and_hms(2026, 3, 5, 9, 0, 0).unwrap());
    let sync = engine.create_expense(cmd).await.unwrap();

    let payment = engine.payment(sync.payment_id).await.unwrap();
    assert_eq!(payment.kind, PaymentKind::Payment);
    assert_eq!(payment.from_account, Some(cash));
    assert_eq!(payment.amount_minor, 750);

    assert_eq!(engine.account(cash).await.unwrap().current_balance_minor, -750);

    let memo_id = sync.memo_id.expect("open memo accepts the entry");
    let entries = engine.memo_entries(memo_id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entry_type, EntryType::Debit);
    assert_eq!(entries[0].expense_reference, Some(sync.expense_id));
    assert_eq!(entries[0].payment_reference, Some(sync.payment_id));

    let memo = engine.memo(memo_id).await.unwrap();
    assert_eq!(memo.closing_balance_minor, -750);
}

#[tokio::test]
async fn expense_skips_an_already_posted_memo() {
    let (engine, cash) = engine_with_cash().await;

    let memo_id = engine
        .create_memo(MemoCmd::new(day(6), "alice"))
        .await
        .unwrap();
    engine.post_memo(memo_id, "alice").await.unwrap();

    let cmd = ExpenseCmd::new(Category::Rent, 5_000, "godown rent", "alice")
        .date(Utc.with_ymd_and_hms(2026, 3, 6, 9, 0, 0).unwrap());
    let sync = engine.create_expense(cmd).await.unwrap();

    // Payment book and account still move; the frozen page does not.
    assert_eq!(sync.memo_id, None);
    assert_eq!(engine.account(cash).await.unwrap().current_balance_minor, -5_000);
    assert!(engine.memo_entries(memo_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn manual_voucher_is_mirrored_exactly_once() {
    let (engine, cash) = engine_with_cash().await;

    let cmd = PaymentCmd::new(PaymentKind::Payment, 300, cash, "bag labels", "alice")
        .category(Category::Packaging)
        .date(Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap());
    let payment_id = engine.create_payment(cmd).await.unwrap();

    let memo = engine
        .memo_for_date(day(7))
        .await
        .unwrap()
        .expect("mirror created the page");
    let entries = engine.memo_entries(memo.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].payment_reference, Some(payment_id));

    // Re-running the sync is a no-op thanks to the back-link guard.
    assert_eq!(engine.sync_payment_to_memo(payment_id).await.unwrap(), None);
    assert_eq!(engine.memo_entries(memo.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_memo_keeps_the_mirrored_vouchers() {
    let (engine, cash) = engine_with_cash().await;

    let memo_id = engine
        .create_memo(MemoCmd::new(day(8), "alice"))
        .await
        .unwrap();
    let entry_id = engine
        .add_credit_entry(memo_id, CreditEntryCmd::new("cash in", 900, cash, "alice"))
        .await
        .unwrap();
    let entries = engine.memo_entries(memo_id).await.unwrap();
    assert_eq!(entries[0].id, entry_id);
    let payment_id = entries[0].payment_reference.unwrap();

    engine.delete_memo(memo_id).await.unwrap();

    assert!(matches!(
        engine.memo(memo_id).await,
        Err(EngineError::NotFound(_))
    ));
    assert_eq!(engine.payment(payment_id).await.unwrap().amount_minor, 900);
}

#[tokio::test]
async fn debit_entry_requires_the_named_party() {
    let (engine, _) = engine_with_cash().await;

    let memo_id = engine
        .create_memo(MemoCmd::new(day(9), "alice"))
        .await
        .unwrap();

    let missing_mazdoor = engine
        .add_debit_entry(
            memo_id,
            DebitEntryCmd::new("day wages", 500, Category::Mazdoor, "alice"),
        )
        .await;
    assert!(matches!(missing_mazdoor, Err(EngineError::Validation(_))));

    let missing_supplier = engine
        .add_debit_entry(
            memo_id,
            DebitEntryCmd::new("wheat bill", 500, Category::SupplierPayment, "alice"),
        )
        .await;
    assert!(matches!(missing_supplier, Err(EngineError::Validation(_))));
}
