use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("The URL is malformed: {}", .0)]
    BadUrl(String),

    #[error("Server responded with {status_code}: {message}")]
    InternalServerError { status_code: u16, message: String },

    #[error("{message}")]
    Network { message: String },

    #[error("{}", .0)]
    Decode(#[from] serde_json::Error),
}

impl NetworkError {
    /// The text shown to a user when the caller logs the error and carries on.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::BadUrl(_) => "Please check your URL.".to_string(),
            NetworkError::InternalServerError {
                status_code,
                message,
            } => format!("Error; {} - {}", status_code, message),
            NetworkError::Network { message } => format!("Error: {}", message),
            NetworkError::Decode(_) => "Something went wrong...".to_string(),
        }
    }
}
