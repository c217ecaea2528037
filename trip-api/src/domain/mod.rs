pub mod dining;

pub use dining::{fetch_restaurants, DiningResponse};
