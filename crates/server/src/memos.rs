//! Daily cash memo endpoints, including the Direction B entry routes.

use api_types::{
    ApiResponse, Created, Paginated, Pagination,
    memo::{
        CashEntryView, CreditEntryNew, DebitEntryNew, MemoDetail, MemoListQuery, MemoNew,
        MemoView, PreviousBalance, PreviousBalanceQuery,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{ServerError, convert, ok, server::ServerState, user};

fn memo_view(memo: engine::DailyCashMemo) -> MemoView {
    MemoView {
        id: memo.id,
        date: memo.date,
        opening_balance_minor: memo.opening_balance_minor,
        closing_balance_minor: memo.closing_balance_minor,
        status: convert::memo_status_to_api(memo.status),
        notes: memo.notes,
        posted_at: memo.posted_at.map(|dt| dt.fixed_offset()),
        posted_by: memo.posted_by,
    }
}

fn entry_view(entry: engine::CashEntry) -> CashEntryView {
    CashEntryView {
        id: entry.id,
        entry_type: entry.entry_type.as_str().to_string(),
        name: entry.name,
        description: entry.description,
        amount_minor: entry.amount_minor,
        account: entry.account,
        customer: entry.customer,
        receipt_type: entry.receipt_type.map(convert::receipt_type_to_api),
        category: entry.category.map(convert::category_to_api),
        mazdoor: entry.mazdoor,
        supplier: entry.supplier,
        payment_method: convert::method_to_api(entry.payment_method),
        payment_reference: entry.payment_reference,
        expense_reference: entry.expense_reference,
    }
}

pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<MemoNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::MemoCmd::new(payload.date, user.username);
    if let Some(opening) = payload.opening_balance_minor {
        cmd = cmd.opening_balance_minor(opening);
    }
    if let Some(notes) = payload.notes {
        cmd = cmd.notes(notes);
    }

    let id = state.engine.create_memo(cmd).await?;
    Ok((StatusCode::CREATED, ok("memo created", Created { id })))
}

pub async fn get(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MemoDetail>>, ServerError> {
    let memo = state.engine.memo(id).await?;
    let entries = state.engine.memo_entries(id).await?;
    Ok(ok(
        "memo",
        MemoDetail {
            memo: memo_view(memo),
            entries: entries.into_iter().map(entry_view).collect(),
        },
    ))
}

pub async fn by_date(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<ApiResponse<Option<MemoDetail>>>, ServerError> {
    let Some(memo) = state.engine.memo_for_date(date).await? else {
        return Ok(ok("no memo for date", None));
    };
    let entries = state.engine.memo_entries(memo.id).await?;
    Ok(ok(
        "memo",
        Some(MemoDetail {
            memo: memo_view(memo),
            entries: entries.into_iter().map(entry_view).collect(),
        }),
    ))
}

pub async fn previous_balance(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<PreviousBalanceQuery>,
) -> Result<Json<ApiResponse<PreviousBalance>>, ServerError> {
    let previous_closing_minor = state.engine.previous_closing_balance(query.date).await?;
    Ok(ok(
        "previous balance",
        PreviousBalance {
            date: query.date,
            previous_closing_minor,
        },
    ))
}

pub async fn list(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<MemoListQuery>,
) -> Result<Json<ApiResponse<Paginated<MemoView>>>, ServerError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(50);
    let filter = engine::MemoListFilter {
        date_from: query.date_from,
        date_to: query.date_to,
        status: query.status.map(convert::memo_status_to_engine),
        page,
        limit,
    };

    let (memos, total) = state.engine.list_memos(filter).await?;
    let items = memos.into_iter().map(memo_view).collect();
    Ok(ok(
        "memos",
        Paginated {
            items,
            pagination: Pagination::new(page, limit, total),
        },
    ))
}

pub async fn post_memo(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Created>>, ServerError> {
    state.engine.post_memo(id, &user.username).await?;
    Ok(ok("memo posted", Created { id }))
}

pub async fn delete(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_memo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn credit_entry(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreditEntryNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::CreditEntryCmd::new(
        payload.name,
        payload.amount_minor,
        payload.account,
        user.username,
    );
    if let Some(description) = payload.description {
        cmd = cmd.description(description);
    }
    if let Some(customer) = payload.customer {
        cmd = cmd.customer(customer);
    }
    if let Some(receipt_type) = payload.receipt_type {
        cmd = cmd.receipt_type(convert::receipt_type_to_engine(receipt_type));
    }
    if let Some(method) = payload.payment_method {
        cmd = cmd.payment_method(convert::method_to_engine(method));
    }

    let entry_id = state.engine.add_credit_entry(id, cmd).await?;
    Ok((
        StatusCode::CREATED,
        ok("credit entry added", Created { id: entry_id }),
    ))
}

pub async fn debit_entry(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DebitEntryNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::DebitEntryCmd::new(
        payload.name,
        payload.amount_minor,
        convert::category_to_engine(payload.category),
        user.username,
    );
    if let Some(description) = payload.description {
        cmd = cmd.description(description);
    }
    if let Some(mazdoor) = payload.mazdoor {
        cmd = cmd.mazdoor(mazdoor);
    }
    if let Some(supplier) = payload.supplier {
        cmd = cmd.supplier(supplier);
    }
    if let Some(method) = payload.payment_method {
        cmd = cmd.payment_method(convert::method_to_engine(method));
    }

    let entry_id = state.engine.add_debit_entry(id, cmd).await?;
    Ok((
        StatusCode::CREATED,
        ok("debit entry added", Created { id: entry_id }),
    ))
}
