/// Sakila primary keys (`film_id`, `actor_id`, `customer_id`, `address_id`,
/// `city_id`) are `SMALLINT UNSIGNED`.
pub type DbId = u16;

/// `store_id` is `TINYINT UNSIGNED`.
pub type StoreId = u8;
