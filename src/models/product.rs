//! Product lookup request/response models

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One reshaped row: column name -> cell, serialized in column order
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    fields: Vec<(&'static str, Value)>,
}

impl ProductRecord {
    pub(crate) fn new(fields: Vec<(&'static str, Value)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ProductRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Reshaped rows keyed by the grouping value, ordered by key
pub type GroupedProducts = BTreeMap<String, ProductRecord>;

/// Body returned by every product route. Always served with 200 OK.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum ProductLookupResponse {
    Found(GroupedProducts),
    NotFound(NotFoundResponse),
    TokenRejected(TokenRejectedResponse),
}

impl ProductLookupResponse {
    pub fn not_found() -> Self {
        ProductLookupResponse::NotFound(NotFoundResponse {
            product: "Not found".to_string(),
        })
    }

    pub fn token_rejected() -> Self {
        ProductLookupResponse::TokenRejected(TokenRejectedResponse {
            msg: "Zlý token.".to_string(),
        })
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NotFoundResponse {
    #[serde(rename = "Product")]
    pub product: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TokenRejectedResponse {
    pub msg: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EanQuery {
    pub ean: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// Query parameters for GET /get-all-items/{date}
#[derive(Debug, Clone, Deserialize)]
pub struct AllItemsQuery {
    pub token: Option<String>,
    pub department: Option<String>,
}

/// Query parameters for GET /get-items-like
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsLikeQuery {
    pub pseudo_name: String,
    pub department: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_sentinel_shape() {
        let body = serde_json::to_value(ProductLookupResponse::not_found()).unwrap();
        assert_eq!(body, serde_json::json!({"Product": "Not found"}));
    }

    #[test]
    fn test_token_rejected_shape() {
        let body = serde_json::to_value(ProductLookupResponse::token_rejected()).unwrap();
        assert_eq!(body, serde_json::json!({"msg": "Zlý token."}));
    }

    #[test]
    fn test_record_keeps_column_order() {
        let record = ProductRecord::new(vec![
            ("date", Value::String("2024-01-01".to_string())),
            ("product_name", Value::String("Chlieb".to_string())),
            ("ean", Value::String("42".to_string())),
        ]);

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"date":"2024-01-01","product_name":"Chlieb","ean":"42"}"#
        );
        assert_eq!(record.get("ean"), Some(&Value::String("42".to_string())));
        assert_eq!(record.get("plu"), None);
    }
}
