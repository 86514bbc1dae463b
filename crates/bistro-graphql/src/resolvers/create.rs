//! Create mutation resolver.
//!
//! Handles `setRestaurant(input: RestaurantInput)`.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use async_graphql::Error;
use bistro_storage::NewRestaurant;
use tracing::{debug, trace};

use super::{get_graphql_context, optional_string, storage_error_to_graphql};

/// Resolver for restaurant creation.
///
/// Handles mutations like:
/// ```graphql
/// mutation {
///   setRestaurant(input: {name: "Test", description: "D"}) {
///     id
///     dishes { name }
///   }
/// }
/// ```
///
/// A missing `input`, or a missing or `null` field inside it, is stored as an
/// empty string, so `name` and `description` never read back as `null`.
pub struct CreateResolver;

impl CreateResolver {
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                debug!("Processing setRestaurant mutation");

                let gql_ctx = get_graphql_context(&ctx)?;
                let input = extract_new_restaurant(&ctx)?;

                trace!(name = %input.name, "Creating restaurant via storage");

                let created = gql_ctx
                    .storage
                    .create(input)
                    .await
                    .map_err(storage_error_to_graphql)?;

                debug!(id = created.id, "Restaurant created successfully");
                Ok(Some(FieldValue::owned_any(created)))
            })
        }
    }
}

/// Reads the optional `input` argument into a `NewRestaurant`.
fn extract_new_restaurant(ctx: &ResolverContext<'_>) -> Result<NewRestaurant, Error> {
    let Some(input) = ctx.args.get("input").filter(|v| !v.is_null()) else {
        return Ok(NewRestaurant::default());
    };
    let fields = input.object()?;

    Ok(NewRestaurant {
        name: optional_string(fields.get("name"))?.unwrap_or_default(),
        description: optional_string(fields.get("description"))?.unwrap_or_default(),
    })
}
