use migration::{Migrator, MigratorTrait};
use settings::Database;
use uuid::Uuid;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "millbook={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let server = settings.server;
    let db = parse_database(&server.database).await?;

    let cash_account = match &server.cash_account {
        Some(raw) => Some(Uuid::parse_str(raw)?),
        None => {
            let probe = engine::Engine::builder().database(db.clone()).build();
            probe.find_cash_account().await?.map(|account| account.id)
        }
    };

    let mut builder = engine::Engine::builder().database(db.clone());
    match cash_account {
        Some(id) => builder = builder.cash_account(id),
        None => {
            tracing::warn!("no cash account configured; memo mirroring is disabled");
        }
    }
    let engine = builder.build();

    let bind = server.bind.unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(engine, db, listener).await?;

    Ok(())
}

async fn parse_database(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
