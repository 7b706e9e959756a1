//! Product query construction and execution
//!
//! Every user-supplied value is bound as a statement parameter.

use chrono::NaiveDate;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use thiserror::Error;

use crate::entities::{prelude::*, product};
use crate::models::product::ProductLookupResponse;
use crate::services::reshape::{reshape, GroupingKey, ReshapeError};

/// Row cap for the fuzzy name search
pub const LIKE_SEARCH_LIMIT: u64 = 20;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("Reshape error: {0}")]
    Reshape(#[from] ReshapeError),
}

/// Which dates a lookup covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Exactly one day
    On(NaiveDate),
    /// Inclusive range
    Between(NaiveDate, NaiveDate),
    /// Exactly these two days, nothing in between
    Compare(NaiveDate, NaiveDate),
}

impl DateFilter {
    fn condition(&self) -> Condition {
        match *self {
            DateFilter::On(date) => Condition::all().add(product::Column::Date.eq(date)),
            DateFilter::Between(start, end) => {
                Condition::all().add(product::Column::Date.between(start, end))
            }
            DateFilter::Compare(first, second) => Condition::any()
                .add(product::Column::Date.eq(first))
                .add(product::Column::Date.eq(second)),
        }
    }

    /// Single-day lookups are keyed by the product, multi-day ones by date
    fn grouping(&self, product_key: GroupingKey) -> GroupingKey {
        match self {
            DateFilter::On(_) => product_key,
            DateFilter::Between(..) | DateFilter::Compare(..) => GroupingKey::Date,
        }
    }
}

/// Exact product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductIdent<'a> {
    Ean(&'a str),
    Name(&'a str),
}

impl ProductIdent<'_> {
    fn condition(&self) -> Condition {
        match *self {
            ProductIdent::Ean(ean) => Condition::all().add(product::Column::Ean.eq(ean)),
            ProductIdent::Name(name) => {
                Condition::all().add(product::Column::ProductName.eq(name))
            }
        }
    }

    fn grouping(&self) -> GroupingKey {
        match self {
            ProductIdent::Ean(_) => GroupingKey::Ean,
            ProductIdent::Name(_) => GroupingKey::ProductName,
        }
    }
}

/// Fixed row order so that "last row wins" is deterministic
fn ordered(select: Select<Product>) -> Select<Product> {
    select
        .order_by_asc(product::Column::Date)
        .order_by_asc(product::Column::ProductName)
        .order_by_asc(product::Column::Ean)
}

fn with_department(select: Select<Product>, department: Option<&str>) -> Select<Product> {
    match department {
        Some(department) => select.filter(product::Column::DepartmentL1.eq(department)),
        None => select,
    }
}

/// Lookup of one product by EAN or exact name over the given dates
pub fn lookup(ident: ProductIdent<'_>, dates: DateFilter) -> (Select<Product>, GroupingKey) {
    let select = Product::find()
        .filter(dates.condition())
        .filter(ident.condition());

    (ordered(select), dates.grouping(ident.grouping()))
}

/// Every product observed on `date`, optionally within one department
pub fn all_on(date: NaiveDate, department: Option<&str>) -> (Select<Product>, GroupingKey) {
    let select = with_department(
        Product::find().filter(DateFilter::On(date).condition()),
        department,
    );

    (ordered(select), GroupingKey::ProductName)
}

/// Case-insensitive contains-match on product name, capped at
/// [`LIKE_SEARCH_LIMIT`] rows.
///
/// Newest observations go first so the cap keeps the most recent rows.
/// Within that window the oldest row of a name comes last and wins.
pub fn name_like(fragment: &str, department: Option<&str>) -> (Select<Product>, GroupingKey) {
    let pattern = format!("%{}%", escape_like(fragment));
    let select = with_department(
        Product::find().filter(
            Expr::col((product::Entity, product::Column::ProductName)).ilike(pattern),
        ),
        department,
    );

    let select = select
        .order_by_desc(product::Column::Date)
        .order_by_asc(product::Column::ProductName)
        .order_by_asc(product::Column::Ean)
        .limit(LIKE_SEARCH_LIMIT);

    (select, GroupingKey::ProductName)
}

/// Escape LIKE wildcards so the fragment matches literally.
/// Backslash is the default escape character in PostgreSQL.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Run one product query and reshape its rows.
///
/// Zero rows yield the "Not found" sentinel rather than an empty mapping.
pub async fn fetch_grouped<C>(
    db: &C,
    select: Select<Product>,
    key: GroupingKey,
) -> Result<ProductLookupResponse, QueryError>
where
    C: ConnectionTrait,
{
    let rows = select.all(db).await?;

    tracing::debug!("Product query returned {} rows (keyed by {})", rows.len(), key.as_str());

    if rows.is_empty() {
        return Ok(ProductLookupResponse::not_found());
    }

    let grouped = reshape(rows.iter().map(product::Model::cells), key)?;

    Ok(ProductLookupResponse::Found(grouped))
}
