//! Expense book endpoints. Creating an expense triggers the Direction A
//! reconciliation inside the engine.

use api_types::{
    ApiResponse, Pagination,
    expense::{ExpenseCreated, ExpenseListQuery, ExpenseListResponse, ExpenseNew, ExpenseView},
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{ServerError, convert, ok, server::ServerState, user};

fn view(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        category: convert::category_to_api(expense.category),
        description: expense.description,
        amount_minor: expense.amount_minor,
        date: expense.date.fixed_offset(),
        payment_method: convert::method_to_api(expense.payment_method),
        mazdoor: expense.mazdoor,
        supplier: expense.supplier,
        source: expense.source.as_str().to_string(),
    }
}

pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ApiResponse<ExpenseCreated>>), ServerError> {
    let mut cmd = engine::ExpenseCmd::new(
        convert::category_to_engine(payload.category),
        payload.amount_minor,
        payload.description,
        user.username,
    );
    if let Some(date) = payload.date {
        cmd = cmd.date(date.with_timezone(&Utc));
    }
    if let Some(method) = payload.payment_method {
        cmd = cmd.payment_method(convert::method_to_engine(method));
    }
    if let Some(id) = payload.mazdoor {
        cmd = cmd.mazdoor(id);
    }
    if let Some(id) = payload.supplier {
        cmd = cmd.supplier(id);
    }

    let sync = state.engine.create_expense(cmd).await?;
    Ok((
        StatusCode::CREATED,
        ok(
            "expense created",
            ExpenseCreated {
                id: sync.expense_id,
                payment_id: sync.payment_id,
                memo_id: sync.memo_id,
            },
        ),
    ))
}

pub async fn get(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ExpenseView>>, ServerError> {
    let expense = state.engine.expense(id).await?;
    Ok(ok("expense", view(expense)))
}

pub async fn list(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<ExpenseListQuery>,
) -> Result<Json<ApiResponse<ExpenseListResponse>>, ServerError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(50);
    let filter = engine::ExpenseListFilter {
        category: query.category.map(convert::category_to_engine),
        mazdoor: query.mazdoor,
        supplier: query.supplier,
        date_from: query.date_from.map(|dt| dt.with_timezone(&Utc)),
        date_to: query.date_to.map(|dt| dt.with_timezone(&Utc)),
        page,
        limit,
    };

    let (expenses, total, total_amount_minor) = state.engine.list_expenses(filter).await?;
    let items = expenses.into_iter().map(view).collect();
    Ok(ok(
        "expenses",
        ExpenseListResponse {
            items,
            pagination: Pagination::new(page, limit, total),
            total_amount_minor,
        },
    ))
}

pub async fn delete(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_expense(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
