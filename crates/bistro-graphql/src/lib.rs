//! # bistro-graphql
//!
//! GraphQL API layer for the Bistro restaurant directory.
//!
//! The schema is assembled at startup with async-graphql's dynamic schema API
//! and exposes:
//!
//! - `restaurant(id)` and `restaurants` queries
//! - `setRestaurant`, `deleteRestaurant` and `editRestaurant` mutations
//!
//! ## Endpoints
//!
//! - `POST /graphql` - GraphQL request as a JSON body
//! - `GET /graphql` - GraphQL query via URL params, or the GraphiQL explorer
//!   when no `query` param is given
//!
//! ## Configuration
//!
//! Add to `bistro.toml`:
//!
//! ```toml
//! [graphql]
//! path = "/graphql"
//! max_depth = 15
//! max_complexity = 500
//! introspection = true
//! graphiql = true
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`schema`] - Schema building and GraphQL object types
//! - [`context`] - GraphQL execution context
//! - [`handler`] - Axum HTTP handlers
//! - [`error`] - Error types for GraphQL operations

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod resolvers;
pub mod schema;

// Re-export main types
pub use config::GraphQLConfig;
pub use context::{GraphQLContext, GraphQLContextBuilder};
pub use error::GraphQLError;
pub use handler::{GraphQLState, graphql_handler, graphql_handler_get};
pub use schema::{DirectorySchemaBuilder, SchemaBuilderConfig};
