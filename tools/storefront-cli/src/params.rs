//! Storefront page parameters from URL query strings.
//!
//! Accepts the same query strings the web pages use, e.g.
//! `cat=Menswear` for the explore grid or `article_ids=1,2` for checkout.

use storefront_catalog::search::CategoryFilter;
use storefront_catalog::ArticleId;

/// Parameters recognised by the storefront pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorefrontParams {
    /// Selected category (`cat`).
    pub cat: Option<String>,
    /// Selected ids (`article_ids`), comma separated.
    pub article_ids: Vec<ArticleId>,
    /// Grid page (`page`), 1-indexed.
    pub page: Option<usize>,
}

impl StorefrontParams {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Unknown keys are ignored. Repeated `article_ids` keys accumulate.
    pub fn from_query_string(qs: &str) -> Self {
        let mut params = StorefrontParams::default();

        for pair in qs.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = urlencoding_decode(value);

            match key {
                "cat" => params.cat = Some(decoded),
                "article_ids" => params.article_ids.extend(ArticleId::parse_list(&decoded)),
                "page" => params.page = decoded.parse().ok(),
                _ => {}
            }
        }

        params
    }

    /// Category filter for `cat`; missing or empty means all categories.
    pub fn category(&self) -> CategoryFilter {
        match self.cat.as_deref() {
            Some(cat) if !cat.trim().is_empty() => CategoryFilter::parse(cat),
            _ => CategoryFilter::All,
        }
    }
}

/// Percent-decode a query value. `+` is a space; bad escapes are dropped.
fn urlencoding_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = s.get(i + 1..i + 3).unwrap_or("");
                if let Ok(byte) = u8::from_str_radix(hex, 16) {
                    out.push(byte);
                }
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
