pub mod list_holidays;
pub mod search_holidays;

pub use list_holidays::ListHolidaysUseCase;
pub use search_holidays::SearchHolidaysUseCase;
