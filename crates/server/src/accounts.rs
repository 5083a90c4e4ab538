//! Ledger account endpoints.

use api_types::{
    ApiResponse, Created,
    account::{AccountNew, AccountView},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, convert, ok, server::ServerState, user};

fn view(account: engine::Account) -> AccountView {
    AccountView {
        id: account.id,
        name: account.name,
        code: account.code,
        account_type: convert::account_type_to_api(account.account_type),
        is_cash_account: account.is_cash_account,
        is_bank_account: account.is_bank_account,
        opening_balance_minor: account.opening_balance_minor,
        current_balance_minor: account.current_balance_minor,
    }
}

pub async fn create(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<AccountNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::AccountCmd::new(
        payload.name,
        payload.code,
        convert::account_type_to_engine(payload.account_type),
    );
    if payload.is_cash_account.unwrap_or(false) {
        cmd = cmd.cash_account();
    }
    if payload.is_bank_account.unwrap_or(false) {
        cmd = cmd.bank_account();
    }
    if let Some(opening) = payload.opening_balance_minor {
        cmd = cmd.opening_balance_minor(opening);
    }

    let id = state.engine.create_account(cmd).await?;
    Ok((StatusCode::CREATED, ok("account created", Created { id })))
}

pub async fn get(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AccountView>>, ServerError> {
    let account = state.engine.account(id).await?;
    Ok(ok("account", view(account)))
}

pub async fn list(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<AccountView>>>, ServerError> {
    let accounts = state.engine.list_accounts().await?;
    Ok(ok("accounts", accounts.into_iter().map(view).collect()))
}
