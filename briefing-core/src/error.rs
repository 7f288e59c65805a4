use thiserror::Error;

/// Every failure a fetch can end in. All of them are fatal for the CLIs.
///
/// The `Display` text of each variant is the single line shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Invalid or contradictory flags, or an unusable exclusion file.
    #[error("{0}")]
    Configuration(String),

    /// The provider answered 401.
    #[error("Unauthorized. Invalid API key")]
    Authentication,

    /// The provider answered with a non-success status other than 401.
    #[error("{code} {reason}")]
    Transport { code: u16, reason: String },

    /// No HTTP status was received at all (DNS, refused connection, TLS...).
    #[error("Connection failed: {reason}")]
    Connection { reason: String },

    #[error("Error interpreting HTTP response as JSON")]
    Parse(#[source] serde_json::Error),

    /// The body was valid JSON but did not have the expected shape.
    #[error("Unexpected response from provider: {0}")]
    Extraction(String),
}

impl FetchError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn missing(field: &str) -> Self {
        Self::Extraction(format!("missing field `{field}`"))
    }

    /// True for both status-level and connection-level transport failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Connection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_is_code_and_reason() {
        let err = FetchError::Transport { code: 404, reason: "Not Found".into() };
        assert_eq!(err.to_string(), "404 Not Found");
        assert!(err.is_transport());
    }

    #[test]
    fn unauthorized_message_does_not_leak_key_name() {
        let msg = FetchError::Authentication.to_string();
        assert_eq!(msg, "Unauthorized. Invalid API key");
        assert!(!msg.contains("appid"));
    }

    #[test]
    fn missing_field_names_the_path() {
        let err = FetchError::missing("main.temp");
        assert!(err.to_string().contains("`main.temp`"));
        assert!(!err.is_transport());
    }
}
