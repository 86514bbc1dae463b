//! Single restaurant read resolver.
//!
//! Implements `restaurant(id: Int!)`, which returns `null` for unknown ids.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use tracing::debug;

use super::{get_graphql_context, required_id, storage_error_to_graphql};

/// Resolver for single restaurant lookups.
pub struct ReadResolver;

impl ReadResolver {
    /// Creates the resolver function for `Query.restaurant`.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let id = required_id(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(id, request_id = %gql_ctx.request_id, "Resolving restaurant read");

                let found = gql_ctx
                    .storage
                    .read(id)
                    .await
                    .map_err(storage_error_to_graphql)?;

                if found.is_none() {
                    // Nullable field: absence is not an error
                    debug!(id, "Restaurant not found");
                }
                Ok(found.map(FieldValue::owned_any))
            })
        }
    }
}
