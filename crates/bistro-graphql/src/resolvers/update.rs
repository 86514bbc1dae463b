//! Update mutation resolver.
//!
//! Handles `editRestaurant(id: Int!, name: String, description: String)`.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use bistro_storage::RestaurantPatch;
use tracing::{debug, trace};

use super::{get_graphql_context, optional_string, required_id, storage_error_to_graphql};

/// Resolver for partial restaurant edits.
///
/// ```graphql
/// mutation {
///   editRestaurant(id: 1, name: "Woods Hill") { name description }
/// }
/// ```
///
/// Omitted or `null` arguments leave the stored value unchanged. An unknown id
/// fails with "Restaurant doesn't exist".
pub struct UpdateResolver;

impl UpdateResolver {
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let id = required_id(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(id, "Processing editRestaurant mutation");

                let patch = RestaurantPatch {
                    name: optional_string(ctx.args.get("name"))?,
                    description: optional_string(ctx.args.get("description"))?,
                };

                trace!(id, patch = ?patch, "Updating restaurant via storage");

                let updated = gql_ctx
                    .storage
                    .update(id, patch)
                    .await
                    .map_err(storage_error_to_graphql)?;

                debug!(id, "Restaurant updated successfully");
                Ok(Some(FieldValue::owned_any(updated)))
            })
        }
    }
}
