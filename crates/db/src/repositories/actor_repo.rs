//! Repository for the `actor` table.

use sqlx::MySqlConnection;

use crate::models::actor::ActorRanking;

/// Provides read queries over actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Actors ranked by the summed rental rate of their films, best first.
    pub async fn top_by_total_rental_rate(
        conn: &mut MySqlConnection,
        limit: i64,
    ) -> Result<Vec<ActorRanking>, sqlx::Error> {
        sqlx::query_as::<_, ActorRanking>(
            "SELECT a.actor_id, \
                CONCAT(a.first_name, ' ', a.last_name) AS actor_name, \
                SUM(f.rental_rate) AS total_rental_rate \
             FROM actor AS a \
             JOIN film_actor AS fa ON a.actor_id = fa.actor_id \
             JOIN film AS f ON fa.film_id = f.film_id \
             GROUP BY a.actor_id, actor_name \
             ORDER BY total_rental_rate DESC \
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(conn)
        .await
    }
}
