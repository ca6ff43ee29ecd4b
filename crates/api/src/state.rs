use holiday_relay_application::use_cases::{ListHolidaysUseCase, SearchHolidaysUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_holidays: Arc<ListHolidaysUseCase>,
    pub search_holidays: Arc<SearchHolidaysUseCase>,
}
