//! Customer, supplier and mazdoor endpoints. Customers and suppliers share
//! the same wire shape; mazdoors carry a daily wage instead of an address.

use api_types::{
    ApiResponse, Created,
    party::{MazdoorNew, MazdoorView, PartyNew, PartyView},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, ok, server::ServerState, user};

fn customer_view(customer: engine::Customer) -> PartyView {
    PartyView {
        id: customer.id,
        name: customer.name,
        phone: customer.phone,
        address: customer.address,
        opening_balance_minor: customer.opening_balance_minor,
        current_balance_minor: customer.current_balance_minor,
    }
}

fn supplier_view(supplier: engine::Supplier) -> PartyView {
    PartyView {
        id: supplier.id,
        name: supplier.name,
        phone: supplier.phone,
        address: supplier.address,
        opening_balance_minor: supplier.opening_balance_minor,
        current_balance_minor: supplier.current_balance_minor,
    }
}

fn mazdoor_view(mazdoor: engine::Mazdoor) -> MazdoorView {
    MazdoorView {
        id: mazdoor.id,
        name: mazdoor.name,
        phone: mazdoor.phone,
        daily_wage_minor: mazdoor.daily_wage_minor,
        current_balance_minor: mazdoor.current_balance_minor,
    }
}

pub async fn create_customer(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<PartyNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::CustomerCmd::new(payload.name);
    if let Some(phone) = payload.phone {
        cmd = cmd.phone(phone);
    }
    if let Some(address) = payload.address {
        cmd = cmd.address(address);
    }
    if let Some(opening) = payload.opening_balance_minor {
        cmd = cmd.opening_balance_minor(opening);
    }

    let id = state.engine.create_customer(cmd).await?;
    Ok((StatusCode::CREATED, ok("customer created", Created { id })))
}

pub async fn get_customer(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PartyView>>, ServerError> {
    let customer = state.engine.customer(id).await?;
    Ok(ok("customer", customer_view(customer)))
}

pub async fn list_customers(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<PartyView>>>, ServerError> {
    let customers = state.engine.list_customers().await?;
    Ok(ok(
        "customers",
        customers.into_iter().map(customer_view).collect(),
    ))
}

pub async fn create_supplier(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<PartyNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::SupplierCmd::new(payload.name);
    if let Some(phone) = payload.phone {
        cmd = cmd.phone(phone);
    }
    if let Some(address) = payload.address {
        cmd = cmd.address(address);
    }
    if let Some(opening) = payload.opening_balance_minor {
        cmd = cmd.opening_balance_minor(opening);
    }

    let id = state.engine.create_supplier(cmd).await?;
    Ok((StatusCode::CREATED, ok("supplier created", Created { id })))
}

pub async fn get_supplier(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PartyView>>, ServerError> {
    let supplier = state.engine.supplier(id).await?;
    Ok(ok("supplier", supplier_view(supplier)))
}

pub async fn list_suppliers(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<PartyView>>>, ServerError> {
    let suppliers = state.engine.list_suppliers().await?;
    Ok(ok(
        "suppliers",
        suppliers.into_iter().map(supplier_view).collect(),
    ))
}

pub async fn create_mazdoor(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<MazdoorNew>,
) -> Result<(StatusCode, Json<ApiResponse<Created>>), ServerError> {
    let mut cmd = engine::MazdoorCmd::new(payload.name);
    if let Some(phone) = payload.phone {
        cmd = cmd.phone(phone);
    }
    if let Some(wage) = payload.daily_wage_minor {
        cmd = cmd.daily_wage_minor(wage);
    }

    let id = state.engine.create_mazdoor(cmd).await?;
    Ok((StatusCode::CREATED, ok("mazdoor created", Created { id })))
}

pub async fn get_mazdoor(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MazdoorView>>, ServerError> {
    let mazdoor = state.engine.mazdoor(id).await?;
    Ok(ok("mazdoor", mazdoor_view(mazdoor)))
}

pub async fn list_mazdoors(
    Extension(_): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<MazdoorView>>>, ServerError> {
    let mazdoors = state.engine.list_mazdoors().await?;
    Ok(ok(
        "mazdoors",
        mazdoors.into_iter().map(mazdoor_view).collect(),
    ))
}
