//! Handlers for the actor endpoints.

use axum::extract::State;
use axum::Json;
use sakila_core::types::DbId;
use sakila_db::models::actor::{ActorDetails, ActorRanking};

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::state::AppState;

// Same text as /topmovies.
pub const TOP_ACTORS_ERROR: &str = "Unable to fetch top movies";
pub const ACTOR_DETAILS_ERROR: &str = "Unable to fetch movie details";

/// GET /topactors
pub async fn top_actors(State(state): State<AppState>) -> AppResult<Json<Vec<ActorRanking>>> {
    let actors = state
        .catalog
        .top_actors()
        .await
        .map_err(AppError::database(TOP_ACTORS_ERROR))?;
    Ok(Json(actors))
}

/// GET /moreactor/{actor_id}
///
/// An actor with no films (or an unknown id) gets an empty `top_movies`
/// list rather than a 404.
pub async fn details(
    State(state): State<AppState>,
    Path(actor_id): Path<u64>,
) -> AppResult<Json<ActorDetails>> {
    let top_movies = match DbId::try_from(actor_id) {
        Ok(id) => state
            .catalog
            .actor_top_movies(id)
            .await
            .map_err(AppError::database(ACTOR_DETAILS_ERROR))?,
        // Wider than any actor_id column value.
        Err(_) => Vec::new(),
    };
    Ok(Json(ActorDetails {
        actor_id,
        top_movies,
    }))
}
