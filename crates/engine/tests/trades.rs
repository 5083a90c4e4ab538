use sea_orm::Database;
use uuid::Uuid;

use engine::{
    CustomerCmd, Engine, EngineError, ItemCmd, PaymentProgress, StockCmd, StockOperation,
    SupplierCmd, TradeCmd, TradeKind,
};
use migration::MigratorTrait;

async fn engine_with_cash() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let probe = Engine::builder().database(db.clone()).build();
    let cash = probe
        .find_cash_account()
        .await
        .unwrap()
        .expect("migration seeds a cash account")
        .id;
    Engine::builder().database(db).cash_account(cash).build()
}

async fn atta_item(engine: &Engine, stock: i64) -> Uuid {
    engine
        .create_item(
            ItemCmd::new("Fine Atta", "ATTA-F", "bag")
                .opening_stock(stock)
                .selling_rate_minor(500),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn sale_moves_stock_and_books_the_outstanding() {
    let engine = engine_with_cash().await;
    let item = atta_item(&engine, 100).await;
    let customer = engine
        .create_customer(CustomerCmd::new("Karim Traders"))
        .await
        .unwrap();

    let trade_id = engine
        .create_trade(
            TradeCmd::new(TradeKind::Sale, "alice")
                .customer(customer)
                .line(item, 10, 500)
                .paid_amount_minor(2_000),
        )
        .await
        .unwrap();

    let trade = engine.trade(trade_id).await.unwrap();
    assert_eq!(trade.subtotal_minor, 5_000);
    assert_eq!(trade.total_minor, 5_000);
    assert_eq!(trade.remaining_minor(), 3_000);
    assert_eq!(trade.payment_progress(), PaymentProgress::Partial);
    assert_eq!(trade.items.len(), 1);

    assert_eq!(engine.item(item).await.unwrap().current_stock, 90);
    assert_eq!(
        engine.customer(customer).await.unwrap().current_balance_minor,
        3_000
    );

    let (moves, total) = engine.list_stock_moves(Some(item), 1, 50).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(moves[0].operation, StockOperation::Out);
    assert_eq!(moves[0].new_stock, 90);
}

#[tokio::test]
async fn purchase_receives_stock_and_owes_the_supplier() {
    let engine = engine_with_cash().await;
    let item = atta_item(&engine, 10).await;
    let supplier = engine
        .create_supplier(SupplierCmd::new("Punjab Wheat Co"))
        .await
        .unwrap();

    engine
        .create_trade(
            TradeCmd::new(TradeKind::Purchase, "alice")
                .supplier(supplier)
                .line(item, 20, 300),
        )
        .await
        .unwrap();

    assert_eq!(engine.item(item).await.unwrap().current_stock, 30);
    assert_eq!(
        engine.supplier(supplier).await.unwrap().current_balance_minor,
        6_000
    );
}

#[tokio::test]
async fn insufficient_stock_rolls_back_the_whole_sale() {
    let engine = engine_with_cash().await;
    let plenty = atta_item(&engine, 100).await;
    let scarce = engine
        .create_item(ItemCmd::new("Choker", "CHOKER", "bag").opening_stock(5))
        .await
        .unwrap();
    let customer = engine
        .create_customer(CustomerCmd::new("Karim Traders"))
        .await
        .unwrap();

    let refused = engine
        .create_trade(
            TradeCmd::new(TradeKind::Sale, "alice")
                .customer(customer)
                .line(plenty, 10, 500)
                .line(scarce, 8, 200),
        )
        .await;
    assert!(matches!(refused, Err(EngineError::InsufficientStock(_))));

    // The first line's decrement must not survive the failed second line.
    assert_eq!(engine.item(plenty).await.unwrap().current_stock, 100);
    assert_eq!(engine.item(scarce).await.unwrap().current_stock, 5);
    assert_eq!(
        engine.customer(customer).await.unwrap().current_balance_minor,
        0
    );
}

#[tokio::test]
async fn payment_update_moves_the_balance_by_the_difference() {
    let engine = engine_with_cash().await;
    let item = atta_item(&engine, 100).await;
    let customer = engine
        .create_customer(CustomerCmd::new("Karim Traders"))
        .await
        .unwrap();

    let trade_id = engine
        .create_trade(
            TradeCmd::new(TradeKind::Sale, "alice")
                .customer(customer)
                .line(item, 10, 500)
                .paid_amount_minor(200),
        )
        .await
        .unwrap();
    assert_eq!(
        engine.customer(customer).await.unwrap().current_balance_minor,
        4_800
    );

    engine
        .update_trade_payment(trade_id, 500, None, "alice")
        .await
        .unwrap();

    assert_eq!(engine.trade(trade_id).await.unwrap().paid_amount_minor, 500);
    assert_eq!(
        engine.customer(customer).await.unwrap().current_balance_minor,
        4_500
    );
}

#[tokio::test]
async fn delete_reverses_stock_and_balance() {
    let engine = engine_with_cash().await;
    let item = atta_item(&engine, 100).await;
    let customer = engine
        .create_customer(CustomerCmd::new("Karim Traders"))
        .await
        .unwrap();

    let trade_id = engine
        .create_trade(
            TradeCmd::new(TradeKind::Sale, "alice")
                .customer(customer)
                .line(item, 10, 500)
                .paid_amount_minor(2_000),
        )
        .await
        .unwrap();

    engine.delete_trade(trade_id, "alice").await.unwrap();

    assert_eq!(engine.item(item).await.unwrap().current_stock, 100);
    assert_eq!(
        engine.customer(customer).await.unwrap().current_balance_minor,
        0
    );
    assert!(!engine.trade(trade_id).await.unwrap().is_active);

    assert!(matches!(
        engine.delete_trade(trade_id, "alice").await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn sale_without_customer_is_refused() {
    let engine = engine_with_cash().await;
    let item = atta_item(&engine, 100).await;

    let refused = engine
        .create_trade(TradeCmd::new(TradeKind::Sale, "alice").line(item, 1, 500))
        .await;
    assert!(matches!(refused, Err(EngineError::Validation(_))));
}

#[tokio::test]
async fn direct_stock_moves_and_adjustment() {
    let engine = engine_with_cash().await;
    let item = atta_item(&engine, 50).await;

    engine
        .stock_in(StockCmd::new(item, 10, "alice").rate_minor(300))
        .await
        .unwrap();
    assert_eq!(engine.item(item).await.unwrap().current_stock, 60);

    let refused = engine.stock_out(StockCmd::new(item, 100, "alice")).await;
    assert!(matches!(refused, Err(EngineError::InsufficientStock(_))));

    engine
        .adjust_stock(item, 40, Some("monthly count".to_string()), "alice")
        .await
        .unwrap();
    assert_eq!(engine.item(item).await.unwrap().current_stock, 40);

    let (moves, total) = engine.list_stock_moves(Some(item), 1, 50).await.unwrap();
    assert_eq!(total, 2);
    assert!(moves
        .iter()
        .any(|m| m.operation == StockOperation::Adjustment && m.new_stock == 40));
}
