use thiserror::Error;

/// Errors surfaced by `CareerClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The server answered but refused the request.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Connect failure, dropped connection or timeout.
    #[error("server unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("unknown roadmap: {0}")]
    UnknownRoadmap(String),

    #[error("unknown step {step} in roadmap {roadmap}")]
    UnknownStep { roadmap: String, step: String },
}

impl ClientError {
    /// Text fit for showing to the person using the app.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { status: 401, .. } => {
                "Email or password is incorrect.".to_string()
            }
            ClientError::Rejected { status: 409, .. } => {
                "An account with this email already exists.".to_string()
            }
            ClientError::Rejected { status: 400, message } => {
                format!("Please check your input: {message}")
            }
            ClientError::Rejected { status: 404, .. } => "Nothing was found.".to_string(),
            ClientError::Rejected { .. } => {
                "The server could not complete the request. Please try again later.".to_string()
            }
            ClientError::Unavailable(_) => {
                "Cannot reach the server. Check your connection and try again.".to_string()
            }
            ClientError::InvalidResponse(_) => {
                "The server sent a response this app does not understand.".to_string()
            }
            ClientError::NotLoggedIn => "Please log in first.".to_string(),
            ClientError::UnknownRoadmap(id) => format!("There is no roadmap called {id}."),
            ClientError::UnknownStep { roadmap, step } => {
                format!("Roadmap {roadmap} has no step {step}.")
            }
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClientError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_read_differently_by_status() {
        let auth = ClientError::Rejected {
            status: 401,
            message: "invalid email or password".into(),
        };
        let conflict = ClientError::Rejected {
            status: 409,
            message: "taken".into(),
        };
        let invalid = ClientError::Rejected {
            status: 400,
            message: "email is invalid".into(),
        };
        assert_ne!(auth.user_message(), conflict.user_message());
        assert!(invalid.user_message().contains("email is invalid"));
    }

    #[test]
    fn local_errors_have_their_own_messages() {
        let messages = [
            ClientError::NotLoggedIn.user_message(),
            ClientError::UnknownRoadmap("x".into()).user_message(),
            ClientError::UnknownStep {
                roadmap: "x".into(),
                step: "y".into(),
            }
            .user_message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }
}
