pub mod actor;
pub mod customer;
pub mod film;
