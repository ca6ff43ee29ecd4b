pub mod error;
pub mod holidays;

pub use error::ErrorResponse;
pub use holidays::{ListParams, SearchParams};
