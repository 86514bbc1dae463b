//! Directory GraphQL schema builder.
//!
//! This module provides `DirectorySchemaBuilder`, which assembles the schema
//! with async-graphql's dynamic schema API:
//!
//! ```graphql
//! type Query {
//!   restaurant(id: Int!): Restaurant
//!   restaurants: [Restaurant]
//! }
//! type Mutation {
//!   setRestaurant(input: RestaurantInput): Restaurant
//!   deleteRestaurant(id: Int!): DeleteResponse
//!   editRestaurant(id: Int!, name: String, description: String): Restaurant
//! }
//! ```

use async_graphql::dynamic::{Field, InputValue, Object, Schema, TypeRef};
use tracing::debug;

use super::types::{
    DELETE_RESPONSE_TYPE, RESTAURANT_INPUT_TYPE, RESTAURANT_TYPE, delete_response_object,
    dish_object, restaurant_input, restaurant_object,
};
use crate::error::GraphQLError;
use crate::resolvers::{CreateResolver, DeleteResolver, ListResolver, ReadResolver, UpdateResolver};

/// Configuration for the schema builder.
#[derive(Debug, Clone)]
pub struct SchemaBuilderConfig {
    /// Maximum query depth allowed.
    pub max_depth: usize,

    /// Maximum query complexity allowed.
    pub max_complexity: usize,

    /// Whether to enable introspection queries.
    pub introspection_enabled: bool,
}

impl Default for SchemaBuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: 15,
            max_complexity: 500,
            introspection_enabled: true,
        }
    }
}

/// Builds the restaurant directory GraphQL schema.
///
/// # Example
///
/// ```ignore
/// let schema = DirectorySchemaBuilder::new(SchemaBuilderConfig::default()).build()?;
/// let response = schema.execute(request.data(context)).await;
/// ```
pub struct DirectorySchemaBuilder {
    config: SchemaBuilderConfig,
}

impl DirectorySchemaBuilder {
    /// Creates a new schema builder.
    #[must_use]
    pub fn new(config: SchemaBuilderConfig) -> Self {
        Self { config }
    }

    /// Builds the GraphQL schema.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::SchemaBuildFailed` if async-graphql rejects the
    /// type definitions.
    pub fn build(&self) -> Result<Schema, GraphQLError> {
        debug!("Starting GraphQL schema build");

        let mut schema_builder = Schema::build("Query", Some("Mutation"), None)
            .register(restaurant_object())
            .register(dish_object())
            .register(delete_response_object())
            .register(restaurant_input())
            .register(self.build_query_type())
            .register(self.build_mutation_type())
            .limit_depth(self.config.max_depth)
            .limit_complexity(self.config.max_complexity);

        if !self.config.introspection_enabled {
            schema_builder = schema_builder.disable_introspection();
        }

        let schema = schema_builder
            .finish()
            .map_err(|e| GraphQLError::SchemaBuildFailed(e.to_string()))?;

        debug!(
            max_depth = self.config.max_depth,
            max_complexity = self.config.max_complexity,
            introspection = self.config.introspection_enabled,
            "GraphQL schema build complete"
        );
        Ok(schema)
    }

    fn build_query_type(&self) -> Object {
        Object::new("Query")
            .field(
                Field::new(
                    "restaurant",
                    TypeRef::named(RESTAURANT_TYPE),
                    ReadResolver::resolve(),
                )
                .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::INT)))
                .description("Look up a restaurant by id; null when absent"),
            )
            .field(
                Field::new(
                    "restaurants",
                    TypeRef::named_list(RESTAURANT_TYPE),
                    ListResolver::resolve(),
                )
                .description("All restaurants in insertion order"),
            )
    }

    fn build_mutation_type(&self) -> Object {
        Object::new("Mutation")
            .field(
                Field::new(
                    "setRestaurant",
                    TypeRef::named(RESTAURANT_TYPE),
                    CreateResolver::resolve(),
                )
                .argument(InputValue::new(
                    "input",
                    TypeRef::named(RESTAURANT_INPUT_TYPE),
                ))
                .description("Add a restaurant with an empty menu"),
            )
            .field(
                Field::new(
                    "deleteRestaurant",
                    TypeRef::named(DELETE_RESPONSE_TYPE),
                    DeleteResolver::resolve(),
                )
                .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::INT))),
            )
            .field(
                Field::new(
                    "editRestaurant",
                    TypeRef::named(RESTAURANT_TYPE),
                    UpdateResolver::resolve(),
                )
                .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::INT)))
                .argument(InputValue::new("name", TypeRef::named(TypeRef::STRING)))
                .argument(InputValue::new(
                    "description",
                    TypeRef::named(TypeRef::STRING),
                ))
                .description("Change the supplied fields; errors if the id is absent"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builds() {
        let schema = DirectorySchemaBuilder::new(SchemaBuilderConfig::default()).build();
        assert!(schema.is_ok());
    }

    #[test]
    fn test_sdl_matches_directory_api() {
        let schema = DirectorySchemaBuilder::new(SchemaBuilderConfig::default())
            .build()
            .unwrap();
        let sdl = schema.sdl();

        assert!(sdl.contains("restaurant(id: Int!): Restaurant"));
        assert!(sdl.contains("restaurants: [Restaurant]"));
        assert!(sdl.contains("setRestaurant(input: RestaurantInput): Restaurant"));
        assert!(sdl.contains("deleteRestaurant(id: Int!): DeleteResponse"));
        assert!(sdl.contains(
            "editRestaurant(id: Int!, name: String, description: String): Restaurant"
        ));
        assert!(sdl.contains("ok: Boolean!"));
        assert!(sdl.contains("dishes: [Dish]"));
    }
}
