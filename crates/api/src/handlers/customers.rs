//! Handlers for the customer endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use sakila_core::pagination::{PageRequest, CUSTOMER_PAGE_SIZE};
use sakila_db::models::customer::{CustomerPage, NewCustomer};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Query;
use crate::query::PageParams;
use crate::state::AppState;

pub const LIST_CUSTOMERS_ERROR: &str = "Unable to fetch customers";
pub const ADD_CUSTOMER_ERROR: &str = "Unable to add customer";
pub const ADD_CUSTOMER_OK: &str = "Customer added successfully";

/// Acknowledgement body for writes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /customers?page=1
///
/// An absent or empty `page` means the first page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<CustomerPage>> {
    let page = PageRequest::new(params.page, CUSTOMER_PAGE_SIZE);
    let customers = state
        .catalog
        .customer_page(page)
        .await
        .map_err(AppError::database(LIST_CUSTOMERS_ERROR))?;
    Ok(Json(customers))
}

/// POST /newcustomer
///
/// A body that does not deserialize (missing field, wrong type, wrong
/// content type) is a failed insert and answers 500 like any other.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCustomer>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(input) = payload.map_err(|rejection| AppError::InternalError {
        message: ADD_CUSTOMER_ERROR,
        detail: rejection.body_text(),
    })?;

    let customer_id = state
        .catalog
        .add_customer(&input)
        .await
        .map_err(AppError::database(ADD_CUSTOMER_ERROR))?;
    tracing::info!(customer_id, address_id = input.address_id, "Customer added");

    Ok(Json(MessageResponse {
        message: ADD_CUSTOMER_OK,
    }))
}
