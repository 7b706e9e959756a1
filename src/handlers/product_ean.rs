//! Lookups by EAN code
//!
//! GET /get-item-by-ean/{date}?ean=
//! GET /get-item-by-ean-between/{date_start}/{date_end}?ean=
//! GET /get-item-by-ean/compare/{date_start}/{date_end}?ean=

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::handlers::{parse_date, query_error, HandlerError};
use crate::models::product::{EanQuery, ProductLookupResponse};
use crate::services::product_query::{self, DateFilter, ProductIdent};
use crate::AppState;

async fn run(
    state: &AppState,
    ean: &str,
    dates: DateFilter,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let (select, key) = product_query::lookup(ProductIdent::Ean(ean), dates);
    let response = product_query::fetch_grouped(state.db.as_ref(), select, key)
        .await
        .map_err(query_error)?;

    Ok(Json(response))
}

/// Product with the given EAN on one day, keyed by EAN
pub async fn get_item_by_ean(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(query): Query<EanQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let date = parse_date(&date)?;
    run(&state, &query.ean, DateFilter::On(date)).await
}

/// Product for each day in the inclusive range, keyed by date
pub async fn get_item_by_ean_between(
    State(state): State<AppState>,
    Path((date_start, date_end)): Path<(String, String)>,
    Query(query): Query<EanQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let dates = DateFilter::Between(parse_date(&date_start)?, parse_date(&date_end)?);
    run(&state, &query.ean, dates).await
}

/// Product on exactly two days, keyed by date. Fewer than two entries
/// means the product was not listed on one of the days.
pub async fn get_item_by_ean_compare(
    State(state): State<AppState>,
    Path((date_start, date_end)): Path<(String, String)>,
    Query(query): Query<EanQuery>,
) -> Result<Json<ProductLookupResponse>, HandlerError> {
    let dates = DateFilter::Compare(parse_date(&date_start)?, parse_date(&date_end)?);
    run(&state, &query.ean, dates).await
}
