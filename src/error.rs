//! Error types for the NBA stats merge tool

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Malformed API response: {message}")]
    MalformedResponse { message: String },

    #[error("Invalid game id {game_id:?}: {reason}")]
    InvalidGameId { game_id: String, reason: String },

    #[error("Invalid date {input:?}, expected MM/DD/YYYY")]
    InvalidDate { input: String },

    #[error("Player {player_id} has no team on {date}")]
    MissingPlayerTeam { player_id: String, date: String },

    #[error("Column not found: {column}")]
    MissingColumn { column: String },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl StatsError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        StatsError::MalformedResponse {
            message: message.into(),
        }
    }
}
