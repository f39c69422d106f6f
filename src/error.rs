use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("session expired or not authorised")]
    Unauthorized,

    #[error("request to {path} failed with status {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("could not build request: {0}")]
    Request(String),

    #[error("browser error: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server.".to_string(),
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Status { status, .. } if *status >= 500 => {
                "The server ran into a problem. Try again later.".to_string()
            }
            ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Status { status, .. } => format!("Request failed ({status})."),
            ApiError::Decode { .. } => "The server sent data we could not read.".to_string(),
            ApiError::Request(_) | ApiError::Browser(_) => "Something went wrong in the browser.".to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => ApiError::Network(js.to_string()),
            gloo_net::Error::SerdeError(e) => ApiError::Request(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("nothing to chart")]
    Empty,

    #[error("failed to draw chart: {0}")]
    Draw(String),
}
