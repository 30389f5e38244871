//! OpenMensa HTTP client.

use std::time::Instant;

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::Settings;
use crate::date::api_date;
use crate::error::{MensaError, Result};
use crate::models::{DayState, MealRecord};

pub struct MenuClient {
    client: Client,
    base_url: String,
    canteen_id: u32,
    icon_url: String,
}

impl MenuClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.api.timeout())
            .user_agent(settings.api.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
            canteen_id: settings.api.canteen_id,
            icon_url: settings.widget.icon_url.clone(),
        })
    }

    /// `{base}/canteens/{id}/days/{YYYY-M-D}`
    pub fn day_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/canteens/{}/days/{}",
            self.base_url,
            self.canteen_id,
            api_date(date)
        )
    }

    pub async fn fetch_day(&self, date: NaiveDate) -> Result<DayState> {
        let day: DayState = self.get_json(&self.day_url(date)).await?;
        info!(%date, upstream_date = ?day.date, closed = day.closed, "fetched day state");
        Ok(day)
    }

    pub async fn fetch_meals(&self, date: NaiveDate) -> Result<Vec<MealRecord>> {
        let url = format!("{}/meals", self.day_url(date));
        let meals: Vec<MealRecord> = self.get_json(&url).await?;
        info!(%date, count = meals.len(), "fetched meals");
        Ok(meals)
    }

    pub async fn fetch_icon(&self) -> Result<Vec<u8>> {
        let response = self.get(&self.icon_url).await?;
        let bytes = response.bytes().await?;
        debug!(url = %self.icon_url, size = bytes.len(), "fetched icon");
        Ok(bytes.to_vec())
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let started = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), elapsed_ms = started.elapsed().as_millis() as u64, "GET");

        if !status.is_success() {
            return Err(MensaError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    // Decoded from text so a bad payload is reported as Decode, not Http
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get(url).await?.text().await?;
        serde_json::from_str(&body).map_err(|source| MensaError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_settings(base: &str) -> Settings {
    use crate::config::{ApiConfig, WidgetConfig};

    Settings {
        api: ApiConfig {
            base_url: format!("{base}/api/v2/"),
            canteen_id: 1719,
            timeout_seconds: 5,
            user_agent: "mensa-widget-test".to_string(),
        },
        widget: WidgetConfig {
            icon_url: format!("{base}/favicon.ico"),
            menu_url: "https://www.sw-ka.de/".to_string(),
        },
    }
}
