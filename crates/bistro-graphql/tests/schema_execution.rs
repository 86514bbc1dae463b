//! Integration tests for query and mutation execution.
//!
//! These tests run GraphQL documents against the real schema backed by the
//! seeded in-memory directory.

use std::sync::Arc;

use async_graphql::dynamic::Schema;
use async_graphql::{Request, Variables};
use bistro_db_memory::InMemoryStorage;
use bistro_graphql::{DirectorySchemaBuilder, GraphQLContextBuilder, SchemaBuilderConfig};
use bistro_storage::{DynStorage, RestaurantStorage};
use serde_json::{Value, json};

// =============================================================================
// Helpers
// =============================================================================

fn build_schema() -> Schema {
    DirectorySchemaBuilder::new(SchemaBuilderConfig::default())
        .build()
        .expect("schema builds")
}

fn seeded_storage() -> DynStorage {
    Arc::new(InMemoryStorage::seeded())
}

/// Executes `query` and returns the response serialized as JSON.
async fn execute(schema: &Schema, storage: &DynStorage, query: &str, variables: Value) -> Value {
    let context = GraphQLContextBuilder::new()
        .with_storage(storage.clone())
        .with_request_id("test")
        .build()
        .unwrap();

    let request = Request::new(query)
        .variables(Variables::from_json(variables))
        .data(context);
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

fn error_messages(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["message"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn restaurant_by_id_returns_record_with_dishes() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(
        &schema,
        &storage,
        "{ restaurant(id: 2) { id name description dishes { name price } } }",
        json!({}),
    )
    .await;

    assert!(error_messages(&response).is_empty(), "{response}");
    assert_eq!(
        response["data"]["restaurant"],
        json!({
            "id": 2,
            "name": "Fiorellas",
            "description": "Italian-American home cooked food with fresh pasta and sauces",
            "dishes": [
                {"name": "Flatbread", "price": 14},
                {"name": "Carbonara", "price": 18},
                {"name": "Spaghetti", "price": 19}
            ]
        })
    );
}

#[tokio::test]
async fn restaurant_by_unknown_id_is_null_without_error() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(&schema, &storage, "{ restaurant(id: 42) { id } }", json!({})).await;

    assert!(error_messages(&response).is_empty());
    assert_eq!(response["data"]["restaurant"], Value::Null);
}

#[tokio::test]
async fn restaurants_lists_seed_in_order() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(&schema, &storage, "{ restaurants { id name } }", json!({})).await;

    assert_eq!(
        response["data"]["restaurants"],
        json!([
            {"id": 1, "name": "WoodsHill"},
            {"id": 2, "name": "Fiorellas"},
            {"id": 3, "name": "Karma"}
        ])
    );
}

#[tokio::test]
async fn restaurant_id_argument_is_required() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(&schema, &storage, "{ restaurant { id } }", json!({})).await;

    assert!(!error_messages(&response).is_empty());
}

#[tokio::test]
async fn restaurant_id_outside_i32_range_is_rejected() {
    let schema = build_schema();
    let storage = seeded_storage();

    let literal = execute(
        &schema,
        &storage,
        "{ restaurant(id: 3000000000) { id } }",
        json!({}),
    )
    .await;
    let variable = execute(
        &schema,
        &storage,
        "query($id: Int!) { restaurant(id: $id) { id } }",
        json!({"id": 3_000_000_000_i64}),
    )
    .await;

    for response in [literal, variable] {
        assert_eq!(
            error_messages(&response),
            vec!["Invalid argument: id 3000000000 is out of range"]
        );
        assert_eq!(response["errors"][0]["extensions"]["code"], "INVALID_ARGUMENT");
        // A failing root field nulls the whole `data` object.
        assert_eq!(response["data"], Value::Null);
    }
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn set_restaurant_appends_with_empty_menu() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(
        &schema,
        &storage,
        r#"mutation { setRestaurant(input: {name: "Test", description: "D"}) { id name description dishes { name } } }"#,
        json!({}),
    )
    .await;

    assert_eq!(
        response["data"]["setRestaurant"],
        json!({"id": 4, "name": "Test", "description": "D", "dishes": []})
    );
    assert_eq!(storage.count().await.unwrap(), 4);
}

#[tokio::test]
async fn set_restaurant_without_input_stores_empty_fields() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(
        &schema,
        &storage,
        "mutation { setRestaurant { id name description } }",
        json!({}),
    )
    .await;

    assert_eq!(
        response["data"]["setRestaurant"],
        json!({"id": 4, "name": "", "description": ""})
    );
}

#[tokio::test]
async fn delete_restaurant_twice_reports_true_then_false() {
    let schema = build_schema();
    let storage = seeded_storage();
    let query = "mutation($id: Int!) { deleteRestaurant(id: $id) { ok } }";

    let first = execute(&schema, &storage, query, json!({"id": 1})).await;
    assert_eq!(first["data"]["deleteRestaurant"], json!({"ok": true}));

    let second = execute(&schema, &storage, query, json!({"id": 1})).await;
    assert_eq!(second["data"]["deleteRestaurant"], json!({"ok": false}));
    assert!(error_messages(&second).is_empty());
}

#[tokio::test]
async fn edit_restaurant_changes_only_supplied_fields() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(
        &schema,
        &storage,
        r#"mutation { editRestaurant(id: 3, name: "Karma Bar") { id name description } }"#,
        json!({}),
    )
    .await;

    assert_eq!(
        response["data"]["editRestaurant"],
        json!({
            "id": 3,
            "name": "Karma Bar",
            "description": "Malaysian-Chinese-Japanese fusion, with great bar and bartenders"
        })
    );
}

#[tokio::test]
async fn edit_restaurant_treats_null_as_absent() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(
        &schema,
        &storage,
        "mutation($name: String) { editRestaurant(id: 1, name: $name, description: \"Updated\") { name description } }",
        json!({"name": null}),
    )
    .await;

    assert_eq!(
        response["data"]["editRestaurant"],
        json!({"name": "WoodsHill", "description": "Updated"})
    );
}

#[tokio::test]
async fn edit_unknown_restaurant_fails_with_not_found() {
    let schema = build_schema();
    let storage = seeded_storage();

    let response = execute(
        &schema,
        &storage,
        r#"mutation { editRestaurant(id: 99, name: "Ghost") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(error_messages(&response), vec!["Restaurant doesn't exist"]);
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(response["errors"][0]["path"], json!(["editRestaurant"]));
    assert_eq!(response["data"]["editRestaurant"], Value::Null);
}

#[tokio::test]
async fn create_edit_delete_scenario() {
    let schema = build_schema();
    let storage = seeded_storage();
    let previous_count = storage.count().await.unwrap() as i64;

    let created = execute(
        &schema,
        &storage,
        r#"mutation { setRestaurant(input: {name: "Test", description: "D"}) { id dishes { name } } }"#,
        json!({}),
    )
    .await;
    let id = created["data"]["setRestaurant"]["id"].as_i64().unwrap();
    assert_eq!(id, previous_count + 1);
    assert_eq!(created["data"]["setRestaurant"]["dishes"], json!([]));

    let edited = execute(
        &schema,
        &storage,
        "mutation($id: Int!) { editRestaurant(id: $id, name: \"Test2\") { name description } }",
        json!({"id": id}),
    )
    .await;
    assert_eq!(
        edited["data"]["editRestaurant"],
        json!({"name": "Test2", "description": "D"})
    );

    let deleted = execute(
        &schema,
        &storage,
        "mutation($id: Int!) { deleteRestaurant(id: $id) { ok } }",
        json!({"id": id}),
    )
    .await;
    assert_eq!(deleted["data"]["deleteRestaurant"], json!({"ok": true}));

    let lookup = execute(
        &schema,
        &storage,
        "query($id: Int!) { restaurant(id: $id) { id } }",
        json!({"id": id}),
    )
    .await;
    assert_eq!(lookup["data"]["restaurant"], Value::Null);
}

#[tokio::test]
async fn introspection_can_be_disabled() {
    let schema = DirectorySchemaBuilder::new(SchemaBuilderConfig {
        introspection_enabled: false,
        ..Default::default()
    })
    .build()
    .unwrap();
    let storage = seeded_storage();

    let response = execute(&schema, &storage, "{ __schema { queryType { name } } }", json!({})).await;
    assert!(!error_messages(&response).is_empty());
}

#[tokio::test]
async fn depth_limit_is_enforced() {
    let schema = DirectorySchemaBuilder::new(SchemaBuilderConfig {
        max_depth: 1,
        ..Default::default()
    })
    .build()
    .unwrap();
    let storage = seeded_storage();

    let response = execute(&schema, &storage, "{ restaurants { dishes { name } } }", json!({})).await;
    assert!(!error_messages(&response).is_empty());
}
