use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::FoodStore;
use crate::config::ClientConfig;
use crate::error::{Result, TrackerError};
use crate::models::{FoodDraft, FoodId, FoodItem, MealPlan};

/// Client for the food and meal-plan REST store.
#[derive(Debug, Clone)]
pub struct FoodApiClient {
    http: Client,
    base_url: String,
}

impl FoodApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nutrition_tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_url.clone(), config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /food-items`
    pub async fn list_foods(&self) -> Result<Vec<FoodItem>> {
        debug!("GET /food-items");
        let response = self.http.get(self.url("/food-items")).send().await?;
        read_json(response).await
    }

    /// `GET /food-items/{id}`
    pub async fn get_food(&self, id: FoodId) -> Result<FoodItem> {
        debug!("GET /food-items/{}", id);
        let response = self
            .http
            .get(self.url(&format!("/food-items/{}", id)))
            .send()
            .await?;
        read_json(response).await
    }

    /// `POST /food-items`
    pub async fn create_food(&self, draft: &FoodDraft) -> Result<FoodItem> {
        debug!("POST /food-items name={}", draft.name);
        let response = self
            .http
            .post(self.url("/food-items"))
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    /// `PUT /food-items/{id}`, full-record replacement.
    pub async fn update_food(&self, id: FoodId, draft: &FoodDraft) -> Result<FoodItem> {
        debug!("PUT /food-items/{}", id);
        let response = self
            .http
            .put(self.url(&format!("/food-items/{}", id)))
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    /// `DELETE /food-items/{id}`
    pub async fn delete_food(&self, id: FoodId) -> Result<()> {
        debug!("DELETE /food-items/{}", id);
        let response = self
            .http
            .delete(self.url(&format!("/food-items/{}", id)))
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    /// `POST /meal-plans`
    pub async fn create_meal_plan(&self, plan: &MealPlan) -> Result<()> {
        debug!("POST /meal-plans name={} foods={}", plan.name, plan.foods.len());
        let response = self
            .http
            .post(self.url("/meal-plans"))
            .json(plan)
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }
}

impl FoodStore for FoodApiClient {
    async fn list_foods(&self) -> Result<Vec<FoodItem>> {
        FoodApiClient::list_foods(self).await
    }

    async fn create_meal_plan(&self, plan: &MealPlan) -> Result<()> {
        FoodApiClient::create_meal_plan(self, plan).await
    }
}

/// Pass a success response through, or turn the error body into [`TrackerError::Api`].
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(status.as_u16(), &body);
    warn!(status = status.as_u16(), "store rejected request: {}", message);

    Err(TrackerError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Human-readable message from an error body.
///
/// Uses the `detail` field when present (a string, or a list of validation
/// entries with `msg`), otherwise falls back to the status line.
pub fn error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());

    match detail {
        Some(Value::String(message)) if !message.is_empty() => message,
        Some(Value::Array(entries)) => {
            let messages: Vec<String> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                format!("HTTP {}", status)
            } else {
                messages.join("; ")
            }
        }
        _ => format!("HTTP {}", status),
    }
}
