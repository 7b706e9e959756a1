//! Lookups by exact product name
//!
//! GET /get-item-by-name/{date}?name=
//! GET /get-item-by-name-between/{date_start}/{date_end}?name=
//! GET /get-item-by-name/compare/{date_start}/{date_end}?name=

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::handlers::{parse_date, query_error, HandlerError};
use crate::models::product::{NameQuery, ProductLookupResponse};
use crate::services::product_query::{self, DateFilter, ProductIdent};
use crate::AppState;

async fn run(
    state: &AppState,
    name: &str,
    dates: DateFilter,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let (select, key) = product_query::lookup(ProductIdent::Name(name), dates);
    let response = product_query::fetch_grouped(state.db.as_ref(), select, key)
        .await
        .map_err(query_error)?;

    Ok(Json(response))
}

/// Product with the given name on one day, keyed by name
pub async fn get_item_by_name(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(query): Query<NameQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let date = parse_date(&date)?;
    run(&state, &query.name, DateFilter::On(date)).await
}

/// Product for each day in the inclusive range, keyed by date
pub async fn get_item_by_name_between(
    State(state): State<AppState>,
    Path((date_start, date_end)): Path<(String, String)>,
    Query(query): Query<NameQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let dates = DateFilter::Between(parse_date(&date_start)?, parse_date(&date_end)?);
    run(&state, &query.name, dates).await
}

/// Product on exactly two days, keyed by date. Fewer than two entries
/// means the product was not listed on one of the days.
pub async fn get_item_by_name_compare(
    State(state): State<AppState>,
    Path((date_start, date_end)): Path<(String, String)>,
    Query(query): Query<NameQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let dates = DateFilter::Compare(parse_date(&date_start)?, parse_date(&date_end)?);
    run(&state, &query.name, dates).await
}
