//! Direct stock endpoints: goods in/out outside trades, physical-count
//! adjustments and the movement journal.

use api_types::{
    ApiResponse, Created, Paginated, Pagination,
    stock::{StockAdjust, StockMoveNew, StockMoveView, StockMovesQuery},
};
use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::{ServerError, ok, server::ServerState, user};

fn view(stock_move: engine::StockMove) -> StockMoveView {
    StockMoveView {
        id: stock_move.id,
        item_id: stock_move.item_id,
        operation: stock_move.operation.as_str().to_string(),
        quantity: stock_move.quantity,
        previous_stock: stock_move.previous_stock,
        new_stock: stock_move.new_stock,
        rate_minor: stock_move.rate_minor,
        total_amount_minor: stock_move.total_amount_minor,
        reference_kind: stock_move
            .reference
            .map(|r| r.kind().as_str().to_string()),
        reference_id: stock_move.reference.map(|r| r.id()),
        date: stock_move.date.fixed_offset(),
        notes: stock_move.notes,
    }
}

fn build_cmd(payload: StockMoveNew, user: String) -> engine::StockCmd {
    let mut cmd = engine::StockCmd::new(payload.item_id, payload.quantity, user);
    if let Some(rate_minor) = payload.rate_minor {
        cmd = cmd.rate_minor(rate_minor);
    }
    if let Some(date) = payload.date {
        cmd = cmd.date(date.with_timezone(&Utc));
    }
    if let Some(notes) = payload.notes {
        cmd = cmd.notes(notes);
    }
    cmd
}

pub async fn stock_in(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<StockMoveNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let id = state
        .engine
        .stock_in(build_cmd(payload, user.username))
        .await?;
    Ok((StatusCode::CREATED, ok("stock received", Created { id })))
}

pub async fn stock_out(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<StockMoveNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let id = state
        .engine
        .stock_out(build_cmd(payload, user.username))
        .await?;
    Ok((StatusCode::CREATED, ok("stock issued", Created { id })))
}

pub async fn adjust(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<StockAdjust>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let id = state
        .engine
        .adjust_stock(
            payload.item_id,
            payload.new_quantity,
            payload.notes,
            &user.username,
        )
        .await?;
    Ok((StatusCode::CREATED, ok("stock adjusted", Created { id })))
}

pub async fn moves(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<StockMovesQuery>,
) -> Result<Json<ApiResponse<Paginated<StockMoveView>>>, ServerError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(50);
    let (moves, total) = state
        .engine
        .list_stock_moves(query.item_id, page, limit)
        .await?;
    let items = moves.into_iter().map(view).collect();
    Ok(ok(
        "stock moves",
        Paginated {
            items,
            pagination: Pagination::new(page, limit, total),
        },
    ))
}
