use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("You are not signed in.")]
    MissingToken,
    #[error("Network error: {0}")]
    Network(String),
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Status { status: 401, .. })
    }
}

// Empty bodies fall back to the status code.
fn status_message(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        body.to_string()
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_shows_server_text() {
        let err = ApiError::Status {
            status: 422,
            body: "amount must be a number".to_string(),
        };
        assert_eq!(err.to_string(), "amount must be a number");
    }

    #[test]
    fn status_error_without_body_shows_code() {
        let err = ApiError::Status {
            status: 500,
            body: "  ".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ApiError::MissingToken.is_unauthorized());
        assert!(ApiError::Status {
            status: 401,
            body: String::new()
        }
        .is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
    }
}
