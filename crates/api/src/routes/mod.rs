pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the route tree. Everything lives at the root, unversioned.
///
/// ```text
/// /topmovies                 GET   five highest rental-rate films
/// /topactors                 GET   five actors by summed rental rate
/// /moreinfo/{movie_id}       GET   film with cast and genres
/// /moreactor/{actor_id}      GET   an actor's five best films
/// /customers?page=           GET   customers, ten per page
/// /newcustomer               POST  insert a customer
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/topmovies", get(handlers::movies::top_movies))
        .route("/topactors", get(handlers::actors::top_actors))
        .route("/moreinfo/{movie_id}", get(handlers::movies::details))
        .route("/moreactor/{actor_id}", get(handlers::actors::details))
        .route("/customers", get(handlers::customers::list))
        .route("/newcustomer", post(handlers::customers::create))
}
