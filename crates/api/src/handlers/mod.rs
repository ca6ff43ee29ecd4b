pub mod health;
pub mod holidays;

pub use health::health_check;
pub use holidays::{list_holidays, search_holidays};
