use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Please enter a meal plan name")]
    MissingPlanName,
}

impl TrackerError {
    /// Text shown in a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Api { message, .. } => message.clone(),
            TrackerError::Transport(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the store answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::Api { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
