//! Payment voucher endpoints.

use api_types::{
    ApiResponse, Created, Paginated, Pagination,
    payment::{PaymentListQuery, PaymentNew, PaymentPatch, PaymentTotals, PaymentView},
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{ServerError, convert, ok, server::ServerState, user};

fn view(payment: engine::Payment) -> PaymentView {
    PaymentView {
        id: payment.id,
        voucher_number: payment.voucher_number,
        kind: convert::kind_to_api(payment.kind),
        date: payment.date.fixed_offset(),
        description: payment.description,
        amount_minor: payment.amount_minor,
        payment_method: convert::method_to_api(payment.payment_method),
        cheque_number: payment.cheque_number,
        from_account: payment.from_account,
        to_account: payment.to_account,
        paid_to: payment.paid_to,
        received_from: payment.received_from,
        mazdoor: payment.mazdoor,
        customer: payment.customer,
        supplier: payment.supplier,
        category: payment.category.map(convert::category_to_api),
        status: convert::status_to_api(payment.status),
        source: payment.source.as_str().to_string(),
        notes: payment.notes,
    }
}

pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<PaymentNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::PaymentCmd::new(
        convert::kind_to_engine(payload.kind),
        payload.amount_minor,
        payload.account,
        payload.description,
        user.username,
    );
    if let Some(date) = payload.date {
        cmd = cmd.date(date.with_timezone(&Utc));
    }
    if let Some(method) = payload.payment_method {
        cmd = cmd.payment_method(convert::method_to_engine(method));
    }
    if let Some(number) = payload.cheque_number {
        cmd = cmd.cheque_number(number);
    }
    if let Some(name) = payload.paid_to {
        cmd = cmd.paid_to(name);
    }
    if let Some(name) = payload.received_from {
        cmd = cmd.received_from(name);
    }
    if let Some(id) = payload.mazdoor {
        cmd = cmd.mazdoor(id);
    }
    if let Some(id) = payload.customer {
        cmd = cmd.customer(id);
    }
    if let Some(id) = payload.supplier {
        cmd = cmd.supplier(id);
    }
    if let Some(category) = payload.category {
        cmd = cmd.category(convert::category_to_engine(category));
    }
    if let Some(status) = payload.status {
        cmd = cmd.status(convert::status_to_engine(status));
    }
    if let Some(notes) = payload.notes {
        cmd = cmd.notes(notes);
    }

    let id = state.engine.create_payment(cmd).await?;
    Ok((StatusCode::CREATED, ok("payment created", Created { id })))
}

pub async fn get(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaymentView>>, ServerError> {
    let payment = state.engine.payment(id).await?;
    Ok(ok("payment", view(payment)))
}

pub async fn list(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<PaymentListQuery>,
) -> Result<Json<ApiResponse<Paginated<PaymentView>>>, ServerError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(50);
    let filter = engine::PaymentListFilter {
        kind: query.kind.map(convert::kind_to_engine),
        status: query.status.map(convert::status_to_engine),
        payment_method: query.payment_method.map(convert::method_to_engine),
        category: query.category.map(convert::category_to_engine),
        date_from: query.date_from.map(|dt| dt.with_timezone(&Utc)),
        date_to: query.date_to.map(|dt| dt.with_timezone(&Utc)),
        search: query.search,
        page,
        limit,
    };

    let (payments, total) = state.engine.list_payments(filter).await?;
    let items = payments.into_iter().map(view).collect();
    Ok(ok(
        "payments",
        Paginated {
            items,
            pagination: Pagination::new(page, limit, total),
        },
    ))
}

pub async fn update(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PaymentPatch>,
) -> Result<Json<ApiResponse<Created>>, ServerError> {
    let mut cmd = engine::PaymentUpdateCmd::new(user.username);
    if let Some(amount_minor) = payload.amount_minor {
        cmd = cmd.amount_minor(amount_minor);
    }
    if let Some(date) = payload.date {
        cmd = cmd.date(date.with_timezone(&Utc));
    }
    if let Some(description) = payload.description {
        cmd = cmd.description(description);
    }
    if let Some(method) = payload.payment_method {
        cmd = cmd.payment_method(convert::method_to_engine(method));
    }
    if let Some(number) = payload.cheque_number {
        cmd = cmd.cheque_number(number);
    }
    if let Some(name) = payload.paid_to {
        cmd = cmd.paid_to(name);
    }
    if let Some(name) = payload.received_from {
        cmd = cmd.received_from(name);
    }
    if let Some(category) = payload.category {
        cmd = cmd.category(convert::category_to_engine(category));
    }
    if let Some(status) = payload.status {
        cmd = cmd.status(convert::status_to_engine(status));
    }
    if let Some(notes) = payload.notes {
        cmd = cmd.notes(notes);
    }

    state.engine.update_payment(id, cmd).await?;
    Ok(ok("payment updated", Created { id }))
}

pub async fn delete(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_payment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn totals(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<PaymentTotals>>, ServerError> {
    let totals = state.engine.payment_totals().await?;
    Ok(ok(
        "payment totals",
        PaymentTotals {
            payments_minor: totals.payments_minor,
            receipts_minor: totals.receipts_minor,
        },
    ))
}

/// Re-runs the payment → memo mirror for a voucher. Idempotent: already
/// mirrored, memo-born or unposted vouchers come back with no memo id.
pub async fn sync_to_memo(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<Uuid>>>, ServerError> {
    let memo_id = state.engine.sync_payment_to_memo(id).await?;
    Ok(ok("payment synced", memo_id))
}
