use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{about, product_ean, product_listing, product_name};
use crate::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/about", get(about::about))
        .route("/get-item-by-ean/{date}", get(product_ean::get_item_by_ean))
        .route(
            "/get-item-by-ean-between/{date_start}/{date_end}",
            get(product_ean::get_item_by_ean_between),
        )
        .route(
            "/get-item-by-ean/compare/{date_start}/{date_end}",
            get(product_ean::get_item_by_ean_compare),
        )
        .route("/get-item-by-name/{date}", get(product_name::get_item_by_name))
        .route(
            "/get-item-by-name-between/{date_start}/{date_end}",
            get(product_name::get_item_by_name_between),
        )
        .route(
            "/get-item-by-name/compare/{date_start}/{date_end}",
            get(product_name::get_item_by_name_compare),
        )
        .route("/get-all-items/{date}", get(product_listing::get_all_items))
        .route("/get-items-like", get(product_listing::get_items_like))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
