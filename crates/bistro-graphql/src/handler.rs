//! Axum HTTP handlers for the GraphQL endpoint.
//!
//! - `POST {path}` - GraphQL request as a JSON body
//! - `GET {path}` - GraphQL query via URL params; without a `query` param the
//!   GraphiQL explorer is returned when enabled
//!
//! Execution errors are reported inside a 200 response, as GraphQL over HTTP
//! expects. Only requests that cannot be executed at all get a 4xx status.

use std::sync::Arc;

use async_graphql::dynamic::Schema;
use async_graphql::http::GraphiQLSource;
use async_graphql::parser::types::{DocumentOperations, OperationType};
use async_graphql::{Request, Response, ServerError, Variables};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use bistro_storage::DynStorage;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GraphQLConfig;
use crate::context::{GraphQLContext, GraphQLContextBuilder};
use crate::error::GraphQLError;

/// State shared across GraphQL handlers.
#[derive(Clone)]
pub struct GraphQLState {
    /// The directory schema, built once at startup.
    pub schema: Arc<Schema>,

    /// Storage handed to every request's context.
    pub storage: DynStorage,

    /// Endpoint settings (path, GraphiQL switch).
    pub config: Arc<GraphQLConfig>,
}

impl GraphQLState {
    pub fn new(schema: Schema, storage: DynStorage, config: GraphQLConfig) -> Self {
        Self {
            schema: Arc::new(schema),
            storage,
            config: Arc::new(config),
        }
    }
}

/// GraphQL request body.
#[derive(Debug, Deserialize)]
pub struct GraphQLRequest {
    /// The GraphQL query string.
    pub query: String,

    /// Optional operation name for multi-operation documents.
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,

    /// Optional variables for the query.
    pub variables: Option<serde_json::Value>,
}

/// Query parameters for GET requests.
#[derive(Debug, Deserialize)]
pub struct GraphQLQueryParams {
    /// The GraphQL query string.
    pub query: Option<String>,

    /// Optional operation name.
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,

    /// Optional variables (JSON string).
    pub variables: Option<String>,
}

/// GraphQL response body.
#[derive(Debug, Serialize)]
pub struct GraphQLResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ServerError>,
}

impl From<Response> for GraphQLResponse {
    fn from(resp: Response) -> Self {
        let data_json = serde_json::to_value(&resp.data).unwrap_or(serde_json::Value::Null);
        let data = if data_json.is_null() {
            None
        } else {
            Some(data_json)
        };

        Self {
            data,
            errors: resp.errors,
        }
    }
}

/// Handles POST requests to the GraphQL endpoint.
pub async fn graphql_handler(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    Json(request): Json<GraphQLRequest>,
) -> impl IntoResponse {
    debug!("Processing GraphQL request");
    execute_graphql(state, headers, request).await
}

/// Handles GET requests to the GraphQL endpoint.
///
/// Mutations are rejected with 405: GET must not change the directory.
pub async fn graphql_handler_get(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    Query(params): Query<GraphQLQueryParams>,
) -> impl IntoResponse {
    let has_query = params.query.as_deref().is_some_and(|q| !q.trim().is_empty());
    if !has_query {
        if state.config.graphiql {
            return graphiql(&state.config.path).into_response();
        }
        return error_response(GraphQLError::InvalidQuery(
            "missing 'query' parameter".into(),
        ))
        .into_response();
    }

    let request = match params_to_request(params) {
        Ok(req) => req,
        Err(e) => {
            return error_response(GraphQLError::InvalidQuery(e.to_string())).into_response();
        }
    };

    if is_mutation(&request.query, request.operation_name.as_deref()) {
        warn!("Rejected mutation sent via GET");
        return error_response(GraphQLError::MethodNotAllowed).into_response();
    }

    debug!("Processing GraphQL GET request");
    execute_graphql(state, headers, request)
        .await
        .into_response()
}

/// Renders the GraphiQL explorer pointed at `endpoint`.
pub fn graphiql(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}

/// Executes a GraphQL request against the directory schema.
async fn execute_graphql(
    state: GraphQLState,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> axum::response::Response {
    // Extract request ID from headers (set by middleware)
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let context = match build_context(&state, request_id) {
        Ok(ctx) => ctx,
        Err(e) => {
            return error_response(GraphQLError::Internal(e.to_string())).into_response();
        }
    };

    let mut gql_request = Request::new(&request.query);

    if let Some(op_name) = request.operation_name {
        gql_request = gql_request.operation_name(op_name);
    }

    if let Some(vars) = request.variables {
        gql_request = gql_request.variables(Variables::from_json(vars));
    }

    gql_request = gql_request.data(context);

    debug!(query = %request.query, "Executing GraphQL query");
    let response = state.schema.execute(gql_request).await;
    if response.is_err() {
        debug!(errors = response.errors.len(), "GraphQL execution returned errors");
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(GraphQLResponse::from(response)),
    )
        .into_response()
}

fn build_context(
    state: &GraphQLState,
    request_id: String,
) -> Result<GraphQLContext, crate::context::ContextBuilderError> {
    GraphQLContextBuilder::new()
        .with_storage(state.storage.clone())
        .with_request_id(request_id)
        .build()
}

/// Converts GET query params to a GraphQL request.
fn params_to_request(params: GraphQLQueryParams) -> Result<GraphQLRequest, serde_json::Error> {
    let variables = if let Some(vars_str) = params.variables {
        Some(serde_json::from_str(&vars_str)?)
    } else {
        None
    };

    Ok(GraphQLRequest {
        query: params.query.unwrap_or_default(),
        operation_name: params.operation_name,
        variables,
    })
}

/// Returns `true` if the operation that would run is a mutation.
///
/// Unparseable documents and ambiguous multi-operation documents return
/// `false`; execution reports those errors itself.
fn is_mutation(query: &str, operation_name: Option<&str>) -> bool {
    let Ok(document) = async_graphql::parser::parse_query(query) else {
        return false;
    };
    match &document.operations {
        DocumentOperations::Single(op) => op.node.ty == OperationType::Mutation,
        DocumentOperations::Multiple(ops) => operation_name
            .and_then(|name| ops.get(name))
            .is_some_and(|op| op.node.ty == OperationType::Mutation),
    }
}

/// Returns an error response shaped like a GraphQL response.
fn error_response(error: GraphQLError) -> impl IntoResponse {
    let status = match error.status_code() {
        400 => StatusCode::BAD_REQUEST,
        404 => StatusCode::NOT_FOUND,
        405 => StatusCode::METHOD_NOT_ALLOWED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = serde_json::json!({
        "errors": [{
            "message": error.to_string(),
            "extensions": {
                "code": error.error_code()
            }
        }]
    });

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
}
