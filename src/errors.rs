use thiserror::Error;

/// Error type for structurally invalid analytics requests.
///
/// Malformed numeric and date values never surface here: they degrade to
/// zero/sentinel values inside the numeric guards so a dashboard renders
/// zeros instead of crashing. Only a request whose shape makes the
/// computation meaningless is rejected.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Invalid input shape: {0}")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
