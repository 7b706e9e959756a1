//! `SeaORM` Entity for the product price observations table
//!
//! One row per product per date. The table is filled by an external
//! ingestion job; this service only reads it.

use rust_decimal::prelude::ToPrimitive;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    // Declared for SeaORM only, the table itself has no key constraint
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: Date,
    pub product_name: String,
    #[sea_orm(column_type = "Decimal(None)", nullable)]
    pub price_per_pack: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(None)", nullable)]
    pub price_per_unit: Option<Decimal>,
    pub unit_of_measure: Option<String>,
    pub discount_verbose: Option<String>,
    #[sea_orm(column_type = "Decimal(None)", nullable)]
    pub discount_percentage: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(None)", nullable)]
    pub old_price: Option<Decimal>,
    pub department_l1: Option<String>,
    pub department_l2: Option<String>,
    pub department_l3: Option<String>,
    pub plu: Option<String>,
    pub category: Option<String>,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ean: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Row cells in table column order, as JSON values.
    ///
    /// Dates are rendered as `YYYY-MM-DD`, decimals as JSON numbers and
    /// NULL columns as `null`.
    pub fn cells(&self) -> Vec<Value> {
        vec![
            Value::String(self.date.format("%Y-%m-%d").to_string()),
            Value::String(self.product_name.clone()),
            decimal_cell(self.price_per_pack),
            decimal_cell(self.price_per_unit),
            text_cell(&self.unit_of_measure),
            text_cell(&self.discount_verbose),
            decimal_cell(self.discount_percentage),
            decimal_cell(self.old_price),
            text_cell(&self.department_l1),
            text_cell(&self.department_l2),
            text_cell(&self.department_l3),
            text_cell(&self.plu),
            text_cell(&self.category),
            Value::String(self.ean.clone()),
        ]
    }
}

fn decimal_cell(value: Option<Decimal>) -> Value {
    value
        .and_then(|d| d.to_f64())
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn text_cell(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}
