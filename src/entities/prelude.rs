//! `SeaORM` Entity prelude

pub use super::product::Entity as Product;
