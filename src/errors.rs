// errors.rs
use thiserror::Error;

/// Errors originating from the server logic (routing, missing resources,
/// malformed requests) or from startup configuration.
///
/// Form validation failures are not errors here: they are reported back to
/// the user as toasts by the handler that ran the validation.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for ServerError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ServerError::InternalError
    }
}
