//! GraphQL execution context.
//!
//! The context is constructed per request and handed to resolvers through
//! async-graphql's request data.
//!
//! # Example
//!
//! ```ignore
//! use bistro_graphql::GraphQLContextBuilder;
//!
//! let context = GraphQLContextBuilder::new()
//!     .with_storage(storage.clone())
//!     .with_request_id("req-123")
//!     .build()?;
//! ```

use bistro_storage::DynStorage;

/// GraphQL execution context.
///
/// Holds the directory storage handle and request metadata. Cloning is cheap;
/// the storage is shared behind an `Arc`.
#[derive(Clone)]
pub struct GraphQLContext {
    /// Restaurant directory storage.
    pub storage: DynStorage,

    /// Request ID for tracing and correlation.
    pub request_id: String,
}

impl GraphQLContext {
    /// Creates a new builder for GraphQLContext.
    #[must_use]
    pub fn builder() -> GraphQLContextBuilder {
        GraphQLContextBuilder::default()
    }
}

/// Builder for constructing GraphQLContext.
#[derive(Default)]
pub struct GraphQLContextBuilder {
    storage: Option<DynStorage>,
    request_id: Option<String>,
}

impl GraphQLContextBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage backend.
    #[must_use]
    pub fn with_storage(mut self, storage: DynStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Sets the request ID.
    #[must_use]
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Builds the GraphQLContext.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage is missing. A missing request id
    /// defaults to `"unknown"`.
    pub fn build(self) -> Result<GraphQLContext, ContextBuilderError> {
        let storage = self
            .storage
            .ok_or(ContextBuilderError::MissingField("storage"))?;

        Ok(GraphQLContext {
            storage,
            request_id: self.request_id.unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

/// Errors that can occur when building a GraphQLContext.
#[derive(Debug, thiserror::Error)]
pub enum ContextBuilderError {
    /// A required field was not provided.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
