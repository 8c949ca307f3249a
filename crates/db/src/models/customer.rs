//! Customer entity model and DTOs.

use sakila_core::types::{DbId, StoreId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `customer` row joined with its address, city and country.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerWithAddress {
    pub customer_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    pub email: Option<String>,
    pub address: String,
    pub district: String,
    pub city_id: DbId,
    pub postal_code: Option<String>,
    pub phone: String,
    pub country: String,
}

/// One page of customers plus the page count for the whole table.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPage {
    pub customers: Vec<CustomerWithAddress>,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// Body of `POST /newcustomer`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address_id: DbId,
    pub store_id: StoreId,
}
