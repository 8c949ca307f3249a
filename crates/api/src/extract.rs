//! Extractors whose rejections render as the `{"error": ...}` JSON shape.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// [`axum::extract::Path`] rejecting with [`AppError::BadRequest`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// [`axum::extract::Query`] rejecting with [`AppError::BadRequest`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
