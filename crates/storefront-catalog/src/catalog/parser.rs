//! Tabular export parsing.
//!
//! Input is comma-delimited text whose first row names the columns. Parsing
//! is strict: a missing header, a missing `article_id` column, repeated
//! column names, rows with the wrong number of cells and rows without an id
//! are all rejected with the offending line number.

use std::collections::{BTreeMap, HashSet};

use csv::{ReaderBuilder, StringRecord};

use crate::catalog::record::{
    ProductRecord, RawPrice, ARTICLE_ID, COLOUR_GROUP_NAME, DETAIL_DESC, INDEX_GROUP_NAME,
    PRICE, PRODUCT_GROUP_NAME, PROD_NAME,
};
use crate::error::CatalogError;
use crate::ids::ArticleId;

/// Parse an export held in a string. Row order is preserved.
pub fn parse(text: &str) -> Result<Vec<ProductRecord>, CatalogError> {
    parse_bytes(text.as_bytes())
}

/// Parse an export straight from fetched bytes.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<ProductRecord>, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader.headers().map_err(from_csv)?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(from_csv)?;
        records.push(columns.build(&row)?);
    }
    Ok(records)
}

/// Positions of the known columns within the header.
struct Columns {
    names: Vec<String>,
    article_id: usize,
    product_name: Option<usize>,
    category: Option<usize>,
    product_type: Option<usize>,
    description: Option<usize>,
    colour: Option<usize>,
    price: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(CatalogError::malformed(1, "missing header row"));
        }

        let names: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(CatalogError::malformed(
                    1,
                    format!("duplicate column '{}'", name),
                ));
            }
        }

        let position = |column: &str| names.iter().position(|n| n == column);
        let article_id = position(ARTICLE_ID).ok_or_else(|| {
            CatalogError::malformed(1, format!("missing required column '{}'", ARTICLE_ID))
        })?;

        Ok(Self {
            article_id,
            product_name: position(PROD_NAME),
            category: position(INDEX_GROUP_NAME),
            product_type: position(PRODUCT_GROUP_NAME),
            description: position(DETAIL_DESC),
            colour: position(COLOUR_GROUP_NAME),
            price: position(PRICE),
            names,
        })
    }

    fn is_known(&self, idx: usize) -> bool {
        idx == self.article_id
            || [
                self.product_name,
                self.category,
                self.product_type,
                self.description,
                self.colour,
                self.price,
            ]
            .contains(&Some(idx))
    }

    fn build(&self, row: &StringRecord) -> Result<ProductRecord, CatalogError> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let article_id = row.get(self.article_id).unwrap_or("").trim();
        if article_id.is_empty() {
            return Err(CatalogError::malformed(line, "empty article_id"));
        }

        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        };

        let extra: BTreeMap<String, String> = self
            .names
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.is_known(*idx))
            .map(|(idx, name)| (name.clone(), row.get(idx).unwrap_or_default().to_string()))
            .collect();

        Ok(ProductRecord {
            article_id: ArticleId::new(article_id),
            product_name: cell(self.product_name),
            category: cell(self.category),
            product_type: cell(self.product_type),
            description: cell(self.description),
            colour: cell(self.colour),
            price: self
                .price
                .and_then(|i| row.get(i))
                .map(RawPrice::parse)
                .unwrap_or(RawPrice::Missing),
            extra,
        })
    }
}

fn from_csv(err: csv::Error) -> CatalogError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => CatalogError::malformed(
            line,
            format!("expected {} fields, found {}", expected_len, len),
        ),
        csv::ErrorKind::Utf8 { .. } => CatalogError::malformed(line, "invalid UTF-8"),
        _ => CatalogError::malformed(line, err.to_string()),
    }
}
