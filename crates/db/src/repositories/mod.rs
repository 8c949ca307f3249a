//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept a `&mut MySqlConnection` as the first argument, so the
//! caller decides which checked-out connection a statement runs on.

pub mod actor_repo;
pub mod customer_repo;
pub mod film_repo;

pub use actor_repo::ActorRepo;
pub use customer_repo::CustomerRepo;
pub use film_repo::FilmRepo;
