//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the [`Catalog`](sakila_db::Catalog) in `AppState` and
//! map failures to [`AppError`](crate::error::AppError) with the endpoint's
//! fixed client message.

pub mod actors;
pub mod customers;
pub mod movies;
