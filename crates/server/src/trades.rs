//! Sale/purchase trade endpoints.

use api_types::{
    ApiResponse, Created, Paginated, Pagination,
    trade::{TradeItemView, TradeListQuery, TradeNew, TradePaymentPatch, TradeView},
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{ServerError, convert, ok, server::ServerState, user};

fn view(trade: engine::Trade) -> TradeView {
    let remaining_minor = trade.remaining_minor();
    let payment_progress = convert::progress_to_api(trade.payment_progress());
    TradeView {
        id: trade.id,
        kind: convert::trade_kind_to_api(trade.kind),
        customer: trade.customer,
        supplier: trade.supplier,
        date: trade.date.fixed_offset(),
        items: trade
            .items
            .into_iter()
            .map(|line| TradeItemView {
                item_id: line.item_id,
                quantity: line.quantity,
                rate_minor: line.rate_minor,
                total_minor: line.total_minor,
            })
            .collect(),
        subtotal_minor: trade.subtotal_minor,
        discount_minor: trade.discount_minor,
        tax_minor: trade.tax_minor,
        total_minor: trade.total_minor,
        paid_amount_minor: trade.paid_amount_minor,
        remaining_minor,
        payment_progress,
        payment_method: convert::method_to_api(trade.payment_method),
        notes: trade.notes,
        is_active: trade.is_active,
    }
}

pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<TradeNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::TradeCmd::new(convert::trade_kind_to_engine(payload.kind), user.username);
    if let Some(customer) = payload.customer {
        cmd = cmd.customer(customer);
    }
    if let Some(supplier) = payload.supplier {
        cmd = cmd.supplier(supplier);
    }
    if let Some(date) = payload.date {
        cmd = cmd.date(date.with_timezone(&Utc));
    }
    for line in payload.items {
        cmd = cmd.line(line.item_id, line.quantity, line.rate_minor);
    }
    if let Some(discount_minor) = payload.discount_minor {
        cmd = cmd.discount_minor(discount_minor);
    }
    if let Some(tax_minor) = payload.tax_minor {
        cmd = cmd.tax_minor(tax_minor);
    }
    if let Some(paid_amount_minor) = payload.paid_amount_minor {
        cmd = cmd.paid_amount_minor(paid_amount_minor);
    }
    if let Some(method) = payload.payment_method {
        cmd = cmd.payment_method(convert::method_to_engine(method));
    }
    if let Some(notes) = payload.notes {
        cmd = cmd.notes(notes);
    }

    let id = state.engine.create_trade(cmd).await?;
    Ok((StatusCode::CREATED, ok("trade created", Created { id })))
}

pub async fn get(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TradeView>>, ServerError> {
    let trade = state.engine.trade(id).await?;
    Ok(ok("trade", view(trade)))
}

pub async fn list(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<TradeListQuery>,
) -> Result<Json<ApiResponse<Paginated<TradeView>>>, ServerError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(50);
    let filter = engine::TradeListFilter {
        kind: query.kind.map(convert::trade_kind_to_engine),
        customer: query.customer,
        supplier: query.supplier,
        include_deleted: query.include_deleted.unwrap_or(false),
        page,
        limit,
    };

    let (trades, total) = state.engine.list_trades(filter).await?;
    let items = trades.into_iter().map(view).collect();
    Ok(ok(
        "trades",
        Paginated {
            items,
            pagination: Pagination::new(page, limit, total),
        },
    ))
}

pub async fn update_payment(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TradePaymentPatch>,
) -> Result<Json<ApiResponse<Created>>, ServerError> {
    state
        .engine
        .update_trade_payment(
            id,
            payload.paid_amount_minor,
            payload.payment_method.map(convert::method_to_engine),
            &user.username,
        )
        .await?;
    Ok(ok("trade payment updated", Created { id }))
}

pub async fn delete(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_trade(id, &user.username).await?;
    Ok(StatusCode::NO_CONTENT)
}
