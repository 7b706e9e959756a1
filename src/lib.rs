// src/lib.rs

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use services::access_token::TokenSet;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool; each query borrows a connection for its duration
    pub db: Arc<DatabaseConnection>,
    pub tokens: Arc<TokenSet>,
}

pub mod entities {
    pub mod prelude;
    pub mod product;
}

pub mod services {
    pub mod access_token;
    pub mod product_query;
    pub mod reshape;
}

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
