//! Resolver for `restaurants`.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use tracing::debug;

use super::{get_graphql_context, storage_error_to_graphql};

/// Resolver listing every restaurant in insertion order.
pub struct ListResolver;

impl ListResolver {
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let gql_ctx = get_graphql_context(&ctx)?;

                let restaurants = gql_ctx
                    .storage
                    .list()
                    .await
                    .map_err(storage_error_to_graphql)?;

                debug!(count = restaurants.len(), "Resolved restaurant list");
                Ok(Some(FieldValue::list(
                    restaurants.into_iter().map(FieldValue::owned_any),
                )))
            })
        }
    }
}
