use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use std::sync::Arc;

use crate::{accounts, expenses, items, memos, parties, payments, stock, trades, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub db: DatabaseConnection,
}

async fn auth(
    auth_header: TypedHeader<Authorization<Basic>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user: Option<user::Model> = user::Entity::find()
        .filter(user::Column::Username.eq(auth_header.username()))
        .filter(user::Column::Password.eq(auth_header.password()))
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let Some(user) = user else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/payments", get(payments::list).post(payments::create))
        .route("/payments/totals", get(payments::totals))
        .route(
            "/payments/{id}",
            get(payments::get)
                .patch(payments::update)
                .delete(payments::delete),
        )
        .route("/payments/{id}/sync-to-memo", post(payments::sync_to_memo))
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/expenses/{id}",
            get(expenses::get).delete(expenses::delete),
        )
        .route("/daily-cash-memos", get(memos::list).post(memos::create))
        .route(
            "/daily-cash-memos/previous-balance",
            get(memos::previous_balance),
        )
        .route("/daily-cash-memos/date/{date}", get(memos::by_date))
        .route(
            "/daily-cash-memos/{id}",
            get(memos::get).delete(memos::delete),
        )
        .route("/daily-cash-memos/{id}/post", post(memos::post_memo))
        .route(
            "/daily-cash-memos/{id}/credit-entries",
            post(memos::credit_entry),
        )
        .route(
            "/daily-cash-memos/{id}/debit-entries",
            post(memos::debit_entry),
        )
        .route("/trades", get(trades::list).post(trades::create))
        .route("/trades/{id}", get(trades::get).delete(trades::delete))
        .route(
            "/trades/{id}/payment",
            axum::routing::patch(trades::update_payment),
        )
        .route("/stock/in", post(stock::stock_in))
        .route("/stock/out", post(stock::stock_out))
        .route("/stock/adjust", post(stock::adjust))
        .route("/stock/moves", get(stock::moves))
        .route("/accounts", get(accounts::list).post(accounts::create))
        .route("/accounts/{id}", get(accounts::get))
        .route(
            "/customers",
            get(parties::list_customers).post(parties::create_customer),
        )
        .route("/customers/{id}", get(parties::get_customer))
        .route(
            "/suppliers",
            get(parties::list_suppliers).post(parties::create_supplier),
        )
        .route("/suppliers/{id}", get(parties::get_supplier))
        .route(
            "/mazdoors",
            get(parties::list_mazdoors).post(parties::create_mazdoor),
        )
        .route("/mazdoors/{id}", get(parties::get_mazdoor))
        .route("/items", get(items::list).post(items::create))
        .route("/items/{id}", get(items::get))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

pub async fn run(engine: Engine, db: DatabaseConnection) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, db, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        db,
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, db, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, header};
    use base64::Engine as _;
    use http_body_util::BodyExt;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::ActiveValue;
    use tower::ServiceExt;

    async fn test_state() -> ServerState {
        let db = sea_orm::Database::connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        Migrator::up(&db, None).await.expect("migrations");

        user::Entity::insert(user::ActiveModel {
            username: ActiveValue::Set("miller".to_string()),
            password: ActiveValue::Set("grindstone".to_string()),
        })
        .exec(&db)
        .await
        .expect("seed user");

        let engine = Engine::builder().database(db.clone()).build();
        ServerState {
            engine: Arc::new(engine),
            db,
        }
    }

    fn basic_auth() -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode("miller:grindstone");
        format!("Basic {encoded}")
    }

    #[tokio::test]
    async fn rejects_requests_without_credentials() {
        let app = router(test_state().await);
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/accounts")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn rejects_unknown_credentials() {
        let app = router(test_state().await);
        let bogus = base64::engine::general_purpose::STANDARD.encode("miller:wrong");
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/accounts")
                    .header(header::AUTHORIZATION, format!("Basic {bogus}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn lists_the_seeded_cash_account() {
        let app = router(test_state().await);
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/accounts")
                    .header(header::AUTHORIZATION, basic_auth())
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["success"], true);
        let accounts = body["data"].as_array().expect("account list");
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0]["code"], "CASH");
        assert_eq!(accounts[0]["is_cash_account"], true);
    }
}
