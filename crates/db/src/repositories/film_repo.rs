//! Repository for the `film` table and its actor/category link tables.

use sakila_core::types::DbId;
use sqlx::MySqlConnection;

use crate::models::film::{ActorMovie, MovieDetails, MovieSummary};

/// Film columns shared by the detail and per-actor queries.
const FILM_COLUMNS: &str = "f.film_id, f.title, f.description, \
     CAST(f.release_year AS UNSIGNED) AS release_year, f.length";

/// Provides read queries over films.
pub struct FilmRepo;

impl FilmRepo {
    /// Films with the highest rental rate, best first.
    pub async fn top_by_rental_rate(
        conn: &mut MySqlConnection,
        limit: i64,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        sqlx::query_as::<_, MovieSummary>(
            "SELECT film_id, title FROM film ORDER BY rental_rate DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(conn)
        .await
    }

    /// One film with its cast (`"FIRST LAST"`, comma-joined) and distinct
    /// category names.
    ///
    /// Films lacking either an actor or a category produce no row, same as
    /// an unknown id. Returns `None` in both cases.
    pub async fn find_details(
        conn: &mut MySqlConnection,
        film_id: DbId,
    ) -> Result<Option<MovieDetails>, sqlx::Error> {
        let query = format!(
            "SELECT {FILM_COLUMNS}, \
                GROUP_CONCAT(CONCAT(a.first_name, ' ', a.last_name) SEPARATOR ', ') AS actors, \
                GROUP_CONCAT(DISTINCT c.name SEPARATOR ', ') AS genre \
             FROM film AS f \
             JOIN film_actor AS fa ON f.film_id = fa.film_id \
             JOIN actor AS a ON fa.actor_id = a.actor_id \
             JOIN film_category AS fc ON f.film_id = fc.film_id \
             JOIN category AS c ON fc.category_id = c.category_id \
             WHERE f.film_id = ? \
             GROUP BY f.film_id"
        );
        sqlx::query_as::<_, MovieDetails>(&query)
            .bind(film_id)
            .fetch_optional(conn)
            .await
    }

    /// An actor's films ranked by summed rental rate, best first.
    ///
    /// An actor without films (or an unknown actor id) yields an empty list.
    pub async fn top_for_actor(
        conn: &mut MySqlConnection,
        actor_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActorMovie>, sqlx::Error> {
        let query = format!(
            "SELECT {FILM_COLUMNS}, SUM(f.rental_rate) AS total_rental_score \
             FROM film AS f \
             JOIN film_actor AS fa ON f.film_id = fa.film_id \
             WHERE fa.actor_id = ? \
             GROUP BY f.film_id, f.title, f.description, f.release_year, f.length \
             ORDER BY total_rental_score DESC \
             LIMIT ?"
        );
        sqlx::query_as::<_, ActorMovie>(&query)
            .bind(actor_id)
            .bind(limit)
            .fetch_all(conn)
            .await
    }
}
