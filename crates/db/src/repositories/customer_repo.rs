//! Repository for the `customer` table.

use sqlx::MySqlConnection;

use crate::models::customer::{CustomerWithAddress, NewCustomer};

/// Provides listing and creation of customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Total number of customers.
    pub async fn count(conn: &mut MySqlConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customer")
            .fetch_one(conn)
            .await
    }

    /// One window of customers with their address, ordered by id.
    pub async fn list_page(
        conn: &mut MySqlConnection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CustomerWithAddress>, sqlx::Error> {
        sqlx::query_as::<_, CustomerWithAddress>(
            "SELECT c.customer_id, c.first_name, c.last_name, c.active, c.email, \
                a.address, a.district, a.city_id, a.postal_code, a.phone, \
                co.country \
             FROM customer AS c \
             JOIN address AS a ON c.address_id = a.address_id \
             JOIN city AS ci ON a.city_id = ci.city_id \
             JOIN country AS co ON ci.country_id = co.country_id \
             ORDER BY c.customer_id \
             LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
    }

    /// Insert an active customer stamped with the current time, returning
    /// the generated `customer_id`.
    ///
    /// `address_id` and `store_id` are not checked here; the schema's
    /// foreign keys reject unknown references.
    pub async fn create(
        conn: &mut MySqlConnection,
        input: &NewCustomer,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO customer \
                (store_id, first_name, last_name, address_id, active, create_date) \
             VALUES (?, ?, ?, ?, 1, NOW())",
        )
        .bind(input.store_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.address_id)
        .execute(conn)
        .await?;
        Ok(result.last_insert_id())
    }
}
