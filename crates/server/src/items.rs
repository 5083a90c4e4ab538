//! Inventory item endpoints.

use api_types::{
    ApiResponse, Created,
    item::{ItemNew, ItemView},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, ok, server::ServerState, user};

fn view(item: engine::Item) -> ItemView {
    ItemView {
        id: item.id,
        name: item.name,
        code: item.code,
        unit: item.unit,
        item_type: item.item_type,
        current_stock: item.current_stock,
        reorder_level: item.reorder_level,
        purchase_rate_minor: item.purchase_rate_minor,
        selling_rate_minor: item.selling_rate_minor,
    }
}

pub async fn create(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ItemNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::ItemCmd::new(payload.name, payload.code, payload.unit);
    if let Some(item_type) = payload.item_type {
        cmd = cmd.item_type(item_type);
    }
    if let Some(opening_stock) = payload.opening_stock {
        cmd = cmd.opening_stock(opening_stock);
    }
    if let Some(reorder_level) = payload.reorder_level {
        cmd = cmd.reorder_level(reorder_level);
    }
    if let Some(rate) = payload.purchase_rate_minor {
        cmd = cmd.purchase_rate_minor(rate);
    }
    if let Some(rate) = payload.selling_rate_minor {
        cmd = cmd.selling_rate_minor(rate);
    }

    let id = state.engine.create_item(cmd).await?;
    Ok((StatusCode::CREATED, ok("item created", Created { id })))
}

pub async fn get(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ItemView>>, ServerError> {
    let item = state.engine.item(id).await?;
    Ok(ok("item", view(item)))
}

pub async fn list(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<ItemView>>>, ServerError> {
    let items = state.engine.list_items().await?;
    Ok(ok("items", items.into_iter().map(view).collect()))
}
