use gloo::net::http::Request;
use shared::{DayResponse, SummaryDay};

/// API client for communicating with the habit server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Get the habits possible and completed on one calendar day
    pub async fn get_day(&self, date: &str) -> Result<DayResponse, String> {
        let url = format!("{}/day?date={}", self.base_url, date);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<DayResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse day data: {}", e)),
                    }
                } else {
                    Err(format!("Server error {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch day data: {}", e)),
        }
    }

    /// Get the year-to-date completion summary
    pub async fn get_summary(&self) -> Result<Vec<SummaryDay>, String> {
        let url = format!("{}/summary", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<SummaryDay>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse summary data: {}", e)),
                    }
                } else {
                    Err(format!("Server error {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch summary data: {}", e)),
        }
    }

    /// Toggle completion of one habit on the current day.
    ///
    /// The server acknowledges with a status only; no body is parsed.
    pub async fn toggle_habit(&self, habit_id: &str) -> Result<(), String> {
        let url = format!("{}/habits/{}/toggle", self.base_url, habit_id);

        match Request::patch(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
