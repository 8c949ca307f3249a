#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sakila_api::config::ServerConfig;
use sakila_api::router::build_app_router;
use sakila_api::state::AppState;
use sakila_core::pagination::PageRequest;
use sakila_core::types::DbId;
use sakila_db::models::actor::ActorRanking;
use sakila_db::models::customer::{CustomerPage, CustomerWithAddress, NewCustomer};
use sakila_db::models::film::{ActorMovie, MovieDetails, MovieSummary};
use sakila_db::Catalog;
use tower::ServiceExt;

/// Address ids the fake accepts for new customers.
pub const KNOWN_ADDRESS_IDS: [DbId; 2] = [1, 2];

/// Number of customers the seeded fake starts with.
pub const SEEDED_CUSTOMERS: u16 = 23;

/// In-memory [`Catalog`] holding a small sakila-shaped dataset.
///
/// With `fail` set, every operation returns a pool timeout, standing in for
/// an unreachable database.
pub struct FakeCatalog {
    pub fail: bool,
    pub top_movies: Vec<MovieSummary>,
    pub top_actors: Vec<ActorRanking>,
    pub movies: HashMap<DbId, MovieDetails>,
    pub filmographies: HashMap<DbId, Vec<ActorMovie>>,
    pub customers: Mutex<Vec<CustomerWithAddress>>,
}

fn rate(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn summary(film_id: DbId, title: &str) -> MovieSummary {
    MovieSummary {
        film_id,
        title: title.to_string(),
    }
}

fn ranking(actor_id: DbId, actor_name: &str, cents: i64) -> ActorRanking {
    ActorRanking {
        actor_id,
        actor_name: actor_name.to_string(),
        total_rental_rate: rate(cents),
    }
}

fn actor_movie(film_id: DbId, title: &str, cents: i64) -> ActorMovie {
    ActorMovie {
        film_id,
        title: title.to_string(),
        description: Some(format!("A film called {title}")),
        release_year: Some(2006),
        length: Some(90),
        total_rental_score: rate(cents),
    }
}

fn customer(customer_id: DbId, address_id: DbId, first: &str, last: &str) -> CustomerWithAddress {
    let (address, district, city_id, postal_code, phone, country) = if address_id == 1 {
        ("47 MySakila Drive", "Alberta", 300, None, "14033335568", "Canada")
    } else {
        ("1121 Loja Avenue", "Nagasaki", 463, Some("17886"), "838635286649", "Japan")
    };
    CustomerWithAddress {
        customer_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        active: true,
        email: None,
        address: address.to_string(),
        district: district.to_string(),
        city_id,
        postal_code: postal_code.map(str::to_string),
        phone: phone.to_string(),
        country: country.to_string(),
    }
}

impl FakeCatalog {
    pub fn seeded() -> Self {
        let movies = HashMap::from([
            (
                1,
                MovieDetails {
                    film_id: 1,
                    title: "ACADEMY DINOSAUR".to_string(),
                    description: Some(
                        "A Epic Drama of a Feminist And a Mad Scientist".to_string(),
                    ),
                    release_year: Some(2006),
                    length: Some(86),
                    actors: Some("PENELOPE GUINESS, NICK WAHLBERG, ED CHASE".to_string()),
                    genre: Some("Action, Children".to_string()),
                },
            ),
            (
                2,
                MovieDetails {
                    film_id: 2,
                    title: "ACE GOLDFINGER".to_string(),
                    description: None,
                    release_year: None,
                    length: None,
                    actors: Some("PENELOPE GUINESS, JENNIFER DAVIS".to_string()),
                    genre: Some("Animation".to_string()),
                },
            ),
        ]);

        let filmographies = HashMap::from([(
            1,
            vec![
                actor_movie(2, "ACE GOLDFINGER", 499),
                actor_movie(7, "AIRPLANE SIERRA", 499),
                actor_movie(5, "AFRICAN EGG", 299),
                actor_movie(6, "AGENT TRUMAN", 299),
                actor_movie(1, "ACADEMY DINOSAUR", 99),
            ],
        )]);

        let customers = (1..=SEEDED_CUSTOMERS)
            .map(|id| customer(id, (id % 2) + 1, &format!("FIRST{id}"), &format!("LAST{id}")))
            .collect();

        Self {
            fail: false,
            top_movies: vec![
                summary(2, "ACE GOLDFINGER"),
                summary(7, "AIRPLANE SIERRA"),
                summary(3, "ADAPTATION HOLES"),
                summary(4, "AFFAIR PREJUDICE"),
                summary(5, "AFRICAN EGG"),
            ],
            top_actors: vec![
                ranking(1, "PENELOPE GUINESS", 1695),
                ranking(4, "JENNIFER DAVIS", 1297),
                ranking(2, "NICK WAHLBERG", 897),
                ranking(5, "JOHNNY LOLLOBRIGIDA", 598),
                ranking(6, "BETTE NICHOLSON", 299),
            ],
            movies,
            filmographies,
            customers: Mutex::new(customers),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::seeded()
        }
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.fail {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check()
    }

    async fn top_movies(&self) -> Result<Vec<MovieSummary>, sqlx::Error> {
        self.check()?;
        Ok(self.top_movies.clone())
    }

    async fn top_actors(&self) -> Result<Vec<ActorRanking>, sqlx::Error> {
        self.check()?;
        Ok(self.top_actors.clone())
    }

    async fn movie_details(&self, film_id: DbId) -> Result<Option<MovieDetails>, sqlx::Error> {
        self.check()?;
        Ok(self.movies.get(&film_id).cloned())
    }

    async fn actor_top_movies(&self, actor_id: DbId) -> Result<Vec<ActorMovie>, sqlx::Error> {
        self.check()?;
        Ok(self
            .filmographies
            .get(&actor_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn customer_page(&self, page: PageRequest) -> Result<CustomerPage, sqlx::Error> {
        self.check()?;
        let all = self.customers.lock().unwrap();
        let customers = all
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();
        Ok(CustomerPage {
            customers,
            total_pages: page.total_pages(all.len() as i64),
        })
    }

    async fn add_customer(&self, input: &NewCustomer) -> Result<u64, sqlx::Error> {
        self.check()?;
        if !KNOWN_ADDRESS_IDS.contains(&input.address_id) {
            return Err(sqlx::Error::Protocol(
                "Cannot add or update a child row: a foreign key constraint fails".into(),
            ));
        }
        let mut all = self.customers.lock().unwrap();
        let id = all.len() as DbId + 1;
        all.push(customer(
            id,
            input.address_id,
            &input.first_name,
            &input.last_name,
        ));
        Ok(u64::from(id))
    }
}

/// Configuration with every default applied (CORS `*`, 30 s timeout).
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).expect("default config")
}

/// Build the production router around the given catalog.
pub fn build_test_app(catalog: Arc<dyn Catalog>) -> Router {
    let state = AppState { catalog };
    build_app_router(state, &test_config())
}

pub fn seeded_app() -> Router {
    build_test_app(Arc::new(FakeCatalog::seeded()))
}

pub fn failing_app() -> Router {
    build_test_app(Arc::new(FakeCatalog::failing()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
