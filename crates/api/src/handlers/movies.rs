//! Handlers for the film endpoints.

use axum::extract::State;
use axum::Json;
use sakila_core::error::CoreError;
use sakila_core::types::DbId;
use sakila_db::models::film::{MovieDetails, MovieSummary};

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::state::AppState;

pub const TOP_MOVIES_ERROR: &str = "Unable to fetch top movies";
pub const MOVIE_DETAILS_ERROR: &str = "Unable to fetch movie details";

/// GET /topmovies
pub async fn top_movies(State(state): State<AppState>) -> AppResult<Json<Vec<MovieSummary>>> {
    let movies = state
        .catalog
        .top_movies()
        .await
        .map_err(AppError::database(TOP_MOVIES_ERROR))?;
    Ok(Json(movies))
}

/// GET /moreinfo/{movie_id}
///
/// Any non-negative id is accepted; one outside the `film_id` range is
/// simply not found.
pub async fn details(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> AppResult<Json<MovieDetails>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        })
    };

    let film_id = DbId::try_from(movie_id).map_err(|_| not_found())?;
    let movie = state
        .catalog
        .movie_details(film_id)
        .await
        .map_err(AppError::database(MOVIE_DETAILS_ERROR))?
        .ok_or_else(not_found)?;
    Ok(Json(movie))
}
