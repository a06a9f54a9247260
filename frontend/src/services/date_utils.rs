use chrono::{Datelike, NaiveDate, Weekday};

/// Current calendar day from the browser clock
pub fn current_date() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Format a date as YYYY-MM-DD for API query parameters
pub fn to_query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Weekday name for the day screen heading
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Short month/day form used in the day screen heading
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// Format a date for tooltips (e.g. "January 15, 2025")
pub fn format_date_for_display(date: NaiveDate) -> String {
    let month_name = match date.month() {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    };
    format!("{} {}, {}", month_name, date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_to_query_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        assert_eq!(to_query_date(date), "2023-01-08");
    }

    #[wasm_bindgen_test]
    fn test_weekday_name() {
        // 2023-01-08 was a Sunday
        let date = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        assert_eq!(weekday_name(date), "Sunday");
        assert_eq!(weekday_name(date.succ_opt().unwrap()), "Monday");
    }

    #[wasm_bindgen_test]
    fn test_format_month_day() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        assert_eq!(format_month_day(date), "01/08");
    }

    #[wasm_bindgen_test]
    fn test_format_date_for_display() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_date_for_display(date), "January 15, 2025");
    }

    #[wasm_bindgen_test]
    fn test_current_date_is_plausible() {
        let today = current_date();
        assert!(today.year() >= 2024);
    }
}
