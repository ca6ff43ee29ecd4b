pub mod calendarific;

pub use calendarific::CalendarificClient;
