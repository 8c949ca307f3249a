//! Actor projections.

use rust_decimal::Decimal;
use sakila_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::film::ActorMovie;

/// One entry of `GET /topactors`: an actor and the summed rental rate of
/// every film they appear in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorRanking {
    pub actor_id: DbId,
    pub actor_name: String,
    pub total_rental_rate: Decimal,
}

/// Response body of `GET /moreactor/{actor_id}`. `actor_id` echoes the
/// requested id.
#[derive(Debug, Clone, Serialize)]
pub struct ActorDetails {
    pub actor_id: u64,
    pub top_movies: Vec<ActorMovie>,
}
