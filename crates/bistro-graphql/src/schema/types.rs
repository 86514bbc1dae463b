//! GraphQL object and input types of the directory schema.
//!
//! Resolvers hand records to these types as owned `FieldValue`s; each field
//! resolver downcasts its parent back to the Rust type.

use async_graphql::Value;
use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputObject, InputValue, Object, TypeRef,
};
use bistro_storage::{Dish, Restaurant};

pub const RESTAURANT_TYPE: &str = "Restaurant";
pub const DISH_TYPE: &str = "Dish";
pub const DELETE_RESPONSE_TYPE: &str = "DeleteResponse";
pub const RESTAURANT_INPUT_TYPE: &str = "RestaurantInput";

/// Result of `deleteRestaurant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResponse {
    /// Whether a record with the id existed before the call.
    pub ok: bool,
}

/// Builds a nullable scalar field that reads from a parent of type `T`.
fn parent_field<T: Send + Sync + 'static>(
    name: &str,
    type_ref: TypeRef,
    read: fn(&T) -> Value,
) -> Field {
    Field::new(name, type_ref, move |ctx| {
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<T>()?;
            Ok(Some(read(parent)))
        })
    })
}

/// `type Restaurant { id: Int, name: String, description: String, dishes: [Dish] }`
pub fn restaurant_object() -> Object {
    Object::new(RESTAURANT_TYPE)
        .description("A restaurant listed in the directory")
        .field(
            parent_field::<Restaurant>("id", TypeRef::named(TypeRef::INT), |r| {
                Value::Number(r.id.into())
            })
            .description("Directory-assigned identifier"),
        )
        .field(parent_field::<Restaurant>(
            "name",
            TypeRef::named(TypeRef::STRING),
            |r| Value::String(r.name.clone()),
        ))
        .field(parent_field::<Restaurant>(
            "description",
            TypeRef::named(TypeRef::STRING),
            |r| Value::String(r.description.clone()),
        ))
        .field(
            Field::new("dishes", TypeRef::named_list(DISH_TYPE), |ctx| {
                FieldFuture::new(async move {
                    let restaurant = ctx.parent_value.try_downcast_ref::<Restaurant>()?;
                    let dishes = restaurant.dishes.clone();
                    Ok(Some(FieldValue::list(
                        dishes.into_iter().map(FieldValue::owned_any),
                    )))
                })
            })
            .description("Menu in insertion order"),
        )
}

/// `type Dish { name: String, price: Int }`
pub fn dish_object() -> Object {
    Object::new(DISH_TYPE)
        .description("A dish on a restaurant's menu")
        .field(parent_field::<Dish>(
            "name",
            TypeRef::named(TypeRef::STRING),
            |d| Value::String(d.name.clone()),
        ))
        .field(parent_field::<Dish>(
            "price",
            TypeRef::named(TypeRef::INT),
            |d| Value::Number(d.price.into()),
        ))
}

/// `type DeleteResponse { ok: Boolean! }`
pub fn delete_response_object() -> Object {
    Object::new(DELETE_RESPONSE_TYPE).field(parent_field::<DeleteResponse>(
        "ok",
        TypeRef::named_nn(TypeRef::BOOLEAN),
        |r| Value::Boolean(r.ok),
    ))
}

/// `input RestaurantInput { name: String, description: String }`
pub fn restaurant_input() -> InputObject {
    InputObject::new(RESTAURANT_INPUT_TYPE)
        .description("Fields of a new restaurant")
        .field(InputValue::new("name", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new(
            "description",
            TypeRef::named(TypeRef::STRING),
        ))
}
