//! Listing routes
//!
//! GET /get-all-items/{date}?token=&department=
//! GET /get-items-like?pseudo_name=&department=

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::handlers::{parse_date, query_error, HandlerError};
use crate::models::product::{AllItemsQuery, ItemsLikeQuery, ProductLookupResponse};
use crate::services::product_query;
use crate::AppState;

/// Every product listed on `date`, keyed by name.
///
/// Requires one of the configured API tokens. A wrong or missing token is
/// answered in the body with 200 OK and no query is run.
pub async fn get_all_items(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(query): Query<AllItemsQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let authorized = query
        .token
        .as_deref()
        .is_some_and(|token| state.tokens.contains(token));
    if !authorized {
        tracing::warn!("Rejected get-all-items request with missing or unknown token");
        return Ok(Json(ProductLookupResponse::token_rejected()));
    }

    let date = parse_date(&date)?;
    let (select, key) = product_query::all_on(date, query.department.as_deref());
    let response = product_query::fetch_grouped(state.db.as_ref(), select, key)
        .await
        .map_err(query_error)?;

    Ok(Json(response))
}

/// Fuzzy name search over all dates, at most 20 rows
pub async fn get_items_like(
    State(state): State<AppState>,
    Query(query): Query<ItemsLikeQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let (select, key) =
        product_query::name_like(&query.pseudo_name, query.department.as_deref());
    let response = product_query::fetch_grouped(state.db.as_ref(), select, key)
        .await
        .map_err(query_error)?;

    Ok(Json(response))
}
