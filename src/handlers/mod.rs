use axum::{http::StatusCode, Json};
use chrono::NaiveDate;

use crate::models::error::ErrorResponse;
use crate::services::product_query::QueryError;

pub mod about;
pub mod product_ean;
pub mod product_listing;
pub mod product_name;

pub(crate) type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Parse a `YYYY-MM-DD` path segment
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, HandlerError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid date '{}': expected YYYY-MM-DD", value),
            }),
        )
    })
}

pub(crate) fn query_error(e: QueryError) -> HandlerError {
    tracing::error!("Product query failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
