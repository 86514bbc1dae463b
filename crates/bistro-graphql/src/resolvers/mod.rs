//! GraphQL resolvers for the restaurant directory.
//!
//! One resolver per root field:
//! - `read`: `restaurant(id)`
//! - `list`: `restaurants`
//! - `create`: `setRestaurant(input)`
//! - `delete`: `deleteRestaurant(id)`
//! - `update`: `editRestaurant(id, name, description)`

mod create;
mod delete;
mod list;
mod read;
mod update;

pub use create::CreateResolver;
pub use delete::DeleteResolver;
pub use list::ListResolver;
pub use read::ReadResolver;
pub use update::UpdateResolver;

use async_graphql::dynamic::{ResolverContext, ValueAccessor};
use async_graphql::{Error, ErrorExtensions};
use bistro_storage::{RestaurantId, StorageError};
use tracing::warn;

use crate::context::GraphQLContext;
use crate::error::GraphQLError;

/// Helper to extract GraphQL context from resolver context.
pub(crate) fn get_graphql_context<'a>(
    ctx: &'a ResolverContext<'_>,
) -> Result<&'a GraphQLContext, Error> {
    ctx.data::<GraphQLContext>()
        .map_err(|_| GraphQLError::Internal("GraphQL context not available".into()).extend())
}

/// Reads the required `id: Int!` argument.
pub(crate) fn required_id(ctx: &ResolverContext<'_>) -> Result<RestaurantId, Error> {
    let raw = ctx.args.try_get("id")?.i64()?;
    RestaurantId::try_from(raw).map_err(|_| {
        GraphQLError::InvalidArgument(format!("id {raw} is out of range")).extend()
    })
}

/// Reads an optional string; an explicit `null` counts as absent.
pub(crate) fn optional_string(value: Option<ValueAccessor<'_>>) -> Result<Option<String>, Error> {
    match value {
        Some(v) if !v.is_null() => Ok(Some(v.string()?.to_string())),
        _ => Ok(None),
    }
}

/// Logs a storage failure and converts it to a GraphQL error.
pub(crate) fn storage_error_to_graphql(error: StorageError) -> Error {
    warn!(error = %error, category = %error.category(), "Storage operation failed");
    GraphQLError::from(error).extend()
}
