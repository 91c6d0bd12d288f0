use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::info;

use common::types::MessageResponse;
use service::customer::{
    domain::{Customer, CustomerInput},
    validation,
};

use crate::errors::{CustomerApiError, JsonApiError, STORE_FAILURE};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/customers", tag = "customer",
    responses(
        (status = 200, description = "All customers ordered by id", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Customer>>, CustomerApiError> {
    let list = state.customers.list().await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/customer/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Customer>, CustomerApiError> {
    match state.customers.get(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(service::errors::ServiceError::not_found("customer").into()),
    }
}

#[utoipa::path(
    post, path = "/customer/add", tag = "customer",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Field violations or duplicate mobile/email")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<Customer>, CustomerApiError> {
    let Json(input) = body?;
    let valid = validation::validate(&input)?;
    let created = state.customers.create(valid).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/customer/update/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Field violations or duplicate mobile/email"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    body: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<Customer>, CustomerApiError> {
    let Json(input) = body?;
    let valid = validation::validate(&input)?;
    let updated = state.customers.update(id, valid).await?;
    Ok(Json(updated))
}

/// Update variant carrying the target `id` inside the body.
#[utoipa::path(
    put, path = "/customer/update", tag = "customer",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Missing id, field violations or duplicate mobile/email"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_by_body(
    State(state): State<ServerState>,
    body: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<Customer>, CustomerApiError> {
    let Json(input) = body?;
    let (id, valid) = match (validation::require_id(&input), validation::validate(&input)) {
        (Ok(id), Ok(valid)) => (id, valid),
        (Err(a), Err(b)) => return Err(a.merge(b).into()),
        (Err(e), _) | (_, Err(e)) => return Err(e.into()),
    };
    let updated = state.customers.update(id, valid).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/customer/delete/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "\"Data deleted.\" or \"Customer data not found.\"", body = crate::openapi::MessageDoc),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.customers.delete(id).await {
        Ok(outcome) => Ok(Json(MessageResponse::new(outcome.message()))),
        Err(e) => {
            tracing::error!(err = %e, id, "delete customer failed");
            Err(JsonApiError::new(axum::http::StatusCode::INTERNAL_SERVER_ERROR, "Delete Failed", Some(STORE_FAILURE.to_string())))
        }
    }
}
