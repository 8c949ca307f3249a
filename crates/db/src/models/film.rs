//! Film projections returned by the movie endpoints.

use rust_decimal::Decimal;
use sakila_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One entry of `GET /topmovies`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSummary {
    pub film_id: DbId,
    pub title: String,
}

/// A film with its cast and genres folded into comma-joined strings.
///
/// `actors` keeps duplicates; `genre` holds distinct category names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieDetails {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<u64>,
    pub length: Option<u16>,
    pub actors: Option<String>,
    pub genre: Option<String>,
}

/// A film ranked within one actor's filmography.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorMovie {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<u64>,
    pub length: Option<u16>,
    pub total_rental_score: Decimal,
}
