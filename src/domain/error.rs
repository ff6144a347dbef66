//! Error types for DAO domain operations.
//!
//! This module defines the error type shared by the subgraph client and the
//! balance reconstruction logic.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for subgraph queries and balance reconstruction.
#[derive(Debug, Error)]
pub enum DaoError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The GraphQL endpoint answered with an `errors` array.
    #[error("GraphQL error: {message}")]
    GraphQl {
        /// Joined messages reported by the endpoint.
        message: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Entity not found in the subgraph.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "dao", "token").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Malformed reconstruction parameters or transfer records.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP client could not be constructed.
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl DaoError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new GraphQL error from the endpoint's messages.
    #[must_use]
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::GraphQl {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dao_error_display() {
        let parse_err = DaoError::parse("test error");
        assert_eq!(format!("{}", parse_err), "Parse error: test error");

        let not_found_err = DaoError::not_found("dao", "rungta");
        assert_eq!(format!("{}", not_found_err), "dao 'rungta' not found");

        let invalid_err = DaoError::invalid_input("decimals is missing");
        assert_eq!(
            format!("{}", invalid_err),
            "Invalid input: decimals is missing"
        );

        let gql_err = DaoError::graphql("indexing_error");
        assert_eq!(format!("{}", gql_err), "GraphQL error: indexing_error");
    }

    #[test]
    fn test_invalid_input_error_creation() {
        let err = DaoError::invalid_input("record 0x1 has no destination");
        match err {
            DaoError::InvalidInput(msg) => assert_eq!(msg, "record 0x1 has no destination"),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_into_report_keeps_message() {
        let report = DaoError::client_init("tls backend").into_report();
        assert_eq!(
            report.to_string(),
            "Client initialization failed: tls backend"
        );
    }
}
