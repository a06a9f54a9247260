pub mod use_day;
pub mod use_summary;
