pub mod holidays;

pub use holidays::{ListHolidaysUseCase, SearchHolidaysUseCase};
