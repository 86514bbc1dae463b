//! Delete mutation resolver.
//!
//! Handles `deleteRestaurant(id: Int!)`.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use tracing::debug;

use super::{get_graphql_context, required_id, storage_error_to_graphql};
use crate::schema::DeleteResponse;

/// Resolver for restaurant deletion.
///
/// ```graphql
/// mutation {
///   deleteRestaurant(id: 3) { ok }
/// }
/// ```
///
/// `ok` is `false` when no restaurant had the id; that is not an error.
pub struct DeleteResolver;

impl DeleteResolver {
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let id = required_id(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(id, "Processing deleteRestaurant mutation");

                let ok = gql_ctx
                    .storage
                    .delete(id)
                    .await
                    .map_err(storage_error_to_graphql)?;

                debug!(id, ok, "Restaurant delete finished");
                Ok(Some(FieldValue::owned_any(DeleteResponse { ok })))
            })
        }
    }
}
