//! The data operations behind the HTTP surface.
//!
//! [`MySqlCatalog`] checks one connection out of the pool per operation and
//! runs that operation's statement(s) on it. The [`PoolConnection`] guard
//! hands the connection back when it drops, so it is released on every exit
//! path, including `?` early returns.
//!
//! [`PoolConnection`]: sqlx::pool::PoolConnection

use async_trait::async_trait;
use sakila_core::pagination::PageRequest;
use sakila_core::types::DbId;

use crate::models::actor::ActorRanking;
use crate::models::customer::{CustomerPage, NewCustomer};
use crate::models::film::{ActorMovie, MovieDetails, MovieSummary};
use crate::repositories::{ActorRepo, CustomerRepo, FilmRepo};
use crate::DbPool;

/// Row cap for the "top N" rankings.
pub const TOP_RESULTS: i64 = 5;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Confirm the backing store answers queries.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn top_movies(&self) -> Result<Vec<MovieSummary>, sqlx::Error>;

    async fn top_actors(&self) -> Result<Vec<ActorRanking>, sqlx::Error>;

    /// `None` when no film matches `film_id`.
    async fn movie_details(&self, film_id: DbId) -> Result<Option<MovieDetails>, sqlx::Error>;

    async fn actor_top_movies(&self, actor_id: DbId) -> Result<Vec<ActorMovie>, sqlx::Error>;

    async fn customer_page(&self, page: PageRequest) -> Result<CustomerPage, sqlx::Error>;

    /// Insert a customer and return its new id.
    async fn add_customer(&self, input: &NewCustomer) -> Result<u64, sqlx::Error>;
}

/// [`Catalog`] backed by a MySQL connection pool.
#[derive(Clone)]
pub struct MySqlCatalog {
    pool: DbPool,
}

impl MySqlCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for MySqlCatalog {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    async fn top_movies(&self) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        FilmRepo::top_by_rental_rate(&mut conn, TOP_RESULTS).await
    }

    async fn top_actors(&self) -> Result<Vec<ActorRanking>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        ActorRepo::top_by_total_rental_rate(&mut conn, TOP_RESULTS).await
    }

    async fn movie_details(&self, film_id: DbId) -> Result<Option<MovieDetails>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        FilmRepo::find_details(&mut conn, film_id).await
    }

    async fn actor_top_movies(&self, actor_id: DbId) -> Result<Vec<ActorMovie>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        FilmRepo::top_for_actor(&mut conn, actor_id, TOP_RESULTS).await
    }

    async fn customer_page(&self, page: PageRequest) -> Result<CustomerPage, sqlx::Error> {
        // Count and page select share one connection.
        let mut conn = self.pool.acquire().await?;
        let total = CustomerRepo::count(&mut conn).await?;
        let customers = CustomerRepo::list_page(&mut conn, page.limit(), page.offset()).await?;
        tracing::debug!(total, page = page.page(), rows = customers.len(), "Fetched customer page");

        Ok(CustomerPage {
            customers,
            total_pages: page.total_pages(total),
        })
    }

    async fn add_customer(&self, input: &NewCustomer) -> Result<u64, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        CustomerRepo::create(&mut conn, input).await
    }
}
