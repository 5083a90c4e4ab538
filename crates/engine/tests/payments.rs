use chrono::{TimeZone, Utc};
use sea_orm::Database;
use uuid::Uuid;

use engine::{
    Category, Engine, EngineError, PaymentCmd, PaymentKind, PaymentListFilter, PaymentUpdateCmd,
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

fn march(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 10, 0, 0).unwrap()
}

#[tokio::test]
async fn posted_payment_debits_the_account() {
    let (engine, cash) = engine_with_cash().await;

    let cmd = PaymentCmd::new(PaymentKind::Payment, 1_000, cash, "diesel for truck", "alice")
        .category(Category::Transport)
        .date(march(1));
    let id = engine.create_payment(cmd).await.unwrap();

    let payment = engine.payment(id).await.unwrap();
    assert_eq!(payment.voucher_number, "PAY-000001");
    assert_eq!(payment.from_account, Some(cash));
    assert_eq!(payment.to_account, None);

    let account = engine.account(cash).await.unwrap();
    assert_eq!(account.current_balance_minor, -1_000);
}

#[tokio::test]
async fn posted_receipt_credits_the_account() {
    let (engine, cash) = engine_with_cash().await;

    let cmd = PaymentCmd::new(PaymentKind::Receipt, 2_500, cash, "flour sale cash", "alice")
        .date(march(1));
    let id = engine.create_payment(cmd).await.unwrap();

    let payment = engine.payment(id).await.unwrap();
    assert_eq!(payment.voucher_number, "REC-000001");
    assert_eq!(payment.to_account, Some(cash));

    let account = engine.account(cash).await.unwrap();
    assert_eq!(account.current_balance_minor, 2_500);
}

#[tokio::test]
async fn amount_update_reverses_the_old_delta_first() {
    let (engine, cash) = engine_with_cash().await;

    let cmd = PaymentCmd::new(PaymentKind::Payment, 1_000, cash, "bag stitching", "alice")
        .category(Category::Packaging)
        .date(march(2));
    let id = engine.create_payment(cmd).await.unwrap();
    assert_eq!(engine.account(cash).await.unwrap().current_balance_minor, -1_000);

    let update = PaymentUpdateCmd::new("alice").amount_minor(500);
    engine.update_payment(id, update).await.unwrap();

    assert_eq!(engine.payment(id).await.unwrap().amount_minor, 500);
    assert_eq!(engine.account(cash).await.unwrap().current_balance_minor, -500);
}

#[tokio::test]
async fn delete_restores_the_account_balance() {
    let (engine, cash) = engine_with_cash().await;

    let cmd = PaymentCmd::new(PaymentKind::Payment, 1_000, cash, "grease and oil", "alice")
        .category(Category::Maintenance)
        .date(march(3));
    let id = engine.create_payment(cmd).await.unwrap();

    engine.delete_payment(id).await.unwrap();

    assert_eq!(engine.account(cash).await.unwrap().current_balance_minor, 0);
    assert!(matches!(
        engine.payment(id).await,
        Err(EngineError::NotFound(_))
    ));
}

#[tokio::test]
async fn rejects_non_positive_amounts() {
    let (engine, cash) = engine_with_cash().await;

    let cmd = PaymentCmd::new(PaymentKind::Payment, 0, cash, "nothing", "alice");
    assert!(matches!(
        engine.create_payment(cmd).await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn totals_split_by_kind() {
    let (engine, cash) = engine_with_cash().await;

    let payment = PaymentCmd::new(PaymentKind::Payment, 1_000, cash, "electric bill", "alice")
        .category(Category::Electricity)
        .date(march(4));
    engine.create_payment(payment).await.unwrap();
    let receipt = PaymentCmd::new(PaymentKind::Receipt, 400, cash, "counter sale", "alice")
        .date(march(4));
    engine.create_payment(receipt).await.unwrap();

    let totals = engine.payment_totals().await.unwrap();
    assert_eq!(totals.payments_minor, 1_000);
    assert_eq!(totals.receipts_minor, 400);
}

#[tokio::test]
async fn list_filters_by_kind_and_search() {
    let (engine, cash) = engine_with_cash().await;

    let payment = PaymentCmd::new(PaymentKind::Payment, 700, cash, "wheat freight", "alice")
        .category(Category::Transport)
        .date(march(5));
    engine.create_payment(payment).await.unwrap();
    let receipt = PaymentCmd::new(PaymentKind::Receipt, 900, cash, "atta counter", "alice")
        .date(march(5));
    engine.create_payment(receipt).await.unwrap();

    let filter = PaymentListFilter {
        kind: Some(PaymentKind::Receipt),
        ..Default::default()
    };
    let (receipts, total) = engine.list_payments(filter).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(receipts[0].description, "atta counter");

    let filter = PaymentListFilter {
        search: Some("freight".to_string()),
        ..Default::default()
    };
    let (found, total) = engine.list_payments(filter).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(found[0].amount_minor, 700);
}
