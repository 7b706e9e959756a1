#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use produkty_api::{entities::product, routes, services::access_token::TokenSet, AppState};
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Transaction};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const VALID_TOKEN: &str = "test-token";

/// Mock database answering each query with the next batch of rows
pub fn mock_db(batches: Vec<Vec<product::Model>>) -> Arc<DatabaseConnection> {
    let mut db = MockDatabase::new(DatabaseBackend::Postgres);
    for rows in batches {
        db = db.append_query_results([rows]);
    }
    Arc::new(db.into_connection())
}

/// Router over `db`. The connection is shared, so the caller's handle can
/// read the transaction log afterwards.
pub fn build_test_router(db: &Arc<DatabaseConnection>) -> Router {
    routes::app(AppState {
        db: Arc::clone(db),
        tokens: Arc::new(TokenSet::new([VALID_TOKEN])),
    })
}

/// Statements the mock has seen so far; drains the log
pub fn transaction_log(db: &DatabaseConnection) -> Vec<Transaction> {
    // Drain through a second handle onto the same mock; the mocker mutex
    // itself is crate-private in sea-orm.
    match db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(Arc::clone(conn)).into_transaction_log()
        }
        _ => panic!("Not mock connection"),
    }
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

pub fn observation(date: &str, name: &str, price: &str, ean: &str) -> product::Model {
    product::Model {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        product_name: name.to_string(),
        price_per_pack: Some(price.parse::<Decimal>().unwrap()),
        price_per_unit: None,
        unit_of_measure: Some("ks".to_string()),
        discount_verbose: None,
        discount_percentage: None,
        old_price: None,
        department_l1: Some("mliecne-vyrobky-a-vajcia".to_string()),
        department_l2: Some("mlieko".to_string()),
        department_l3: None,
        plu: Some("1001".to_string()),
        category: None,
        ean: ean.to_string(),
    }
}
