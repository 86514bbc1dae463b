//! Error types for GraphQL operations.
//!
//! Errors raised inside resolvers become GraphQL execution errors carrying a
//! `code` extension. Errors raised before execution (bad requests) are turned
//! into HTTP responses by the handlers.

use std::fmt;

use async_graphql::ErrorExtensions;
use bistro_storage::{RestaurantId, StorageError};

/// Errors that can occur during GraphQL operations.
#[derive(Debug)]
pub enum GraphQLError {
    /// Schema build failed.
    SchemaBuildFailed(String),

    /// Invalid query or request parameters.
    InvalidQuery(String),

    /// An argument value is outside what the directory accepts.
    InvalidArgument(String),

    /// A mutation was sent with a method that only allows queries.
    MethodNotAllowed,

    /// Restaurant not found.
    NotFound {
        /// Restaurant id that was requested.
        id: RestaurantId,
    },

    /// Storage error.
    Storage(String),

    /// Internal server error.
    Internal(String),
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaBuildFailed(msg) => {
                write!(f, "Failed to build GraphQL schema: {msg}")
            }
            Self::InvalidQuery(msg) => {
                write!(f, "Invalid GraphQL query: {msg}")
            }
            Self::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {msg}")
            }
            Self::MethodNotAllowed => {
                write!(f, "Can only perform a mutation operation from a POST request")
            }
            Self::NotFound { .. } => {
                write!(f, "Restaurant doesn't exist")
            }
            Self::Storage(msg) => {
                write!(f, "Storage error: {msg}")
            }
            Self::Internal(msg) => {
                write!(f, "Internal error: {msg}")
            }
        }
    }
}

impl std::error::Error for GraphQLError {}

impl GraphQLError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::SchemaBuildFailed(_) => 500,
            Self::InvalidQuery(_) | Self::InvalidArgument(_) => 400,
            Self::MethodNotAllowed => 405,
            Self::NotFound { .. } => 404,
            Self::Storage(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaBuildFailed(_) => "SCHEMA_BUILD_FAILED",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for GraphQLError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code();
        let id = match self {
            Self::NotFound { id } => Some(*id),
            _ => None,
        };
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            if let Some(id) = id {
                e.set("id", id);
            }
        })
    }
}

impl From<StorageError> for GraphQLError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => Self::NotFound { id },
            StorageError::InvalidInput { message } => Self::InvalidArgument(message),
            other => Self::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = GraphQLError::NotFound { id: 12 };
        assert_eq!(err.to_string(), "Restaurant doesn't exist");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(GraphQLError::InvalidQuery("x".into()).status_code(), 400);
        assert_eq!(GraphQLError::InvalidArgument("x".into()).status_code(), 400);
        assert_eq!(GraphQLError::MethodNotAllowed.status_code(), 405);
        assert_eq!(GraphQLError::Storage("x".into()).status_code(), 500);
    }

    #[test]
    fn test_from_storage_error() {
        assert!(matches!(
            GraphQLError::from(StorageError::not_found(3)),
            GraphQLError::NotFound { id: 3 }
        ));
        assert!(matches!(
            GraphQLError::from(StorageError::invalid_input("dup")),
            GraphQLError::InvalidArgument(_)
        ));
        assert!(matches!(
            GraphQLError::from(StorageError::internal("boom")),
            GraphQLError::Storage(_)
        ));
    }

    #[test]
    fn test_extend_sets_code() {
        let err = GraphQLError::NotFound { id: 5 }.extend();
        assert_eq!(err.message, "Restaurant doesn't exist");
        let extensions = err.extensions.expect("extensions");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
    }
}
