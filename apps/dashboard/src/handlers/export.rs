//! CSV export of the current filtered view.
//!
//! Takes the same query parameters as `GET /api/products`, so the
//! "Download CSV" button simply repeats the table's query string.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
};
use tracing::debug;

use crate::error::DashboardError;
use crate::handlers::products::ListQuery;
use crate::AppState;
use stockroom_core::{Product, ProductFilter};

const CSV_HEADER: &str = "id,name,category,quantity,unit_price,supplier";

/// `GET /api/export.csv`
pub async fn csv(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(HeaderMap, String), DashboardError> {
    let filter = ProductFilter::from(query);
    debug!(?filter, "export csv");

    let products = state.db.products().list(&filter).await?;
    let body = render_csv(&products);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"stockroom_filtered.csv\""),
    );

    Ok((headers, body))
}

/// Renders the product rows as CSV.
fn render_csv(products: &[Product]) -> String {
    let mut out = String::with_capacity(64 * (products.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for product in products {
        out.push_str(&product.id.to_string());
        out.push(',');
        out.push_str(&escape_field(&product.name));
        out.push(',');
        out.push_str(&escape_field(&product.category));
        out.push(',');
        out.push_str(&product.quantity.to_string());
        out.push(',');
        out.push_str(&format_price(product.unit_price));
        out.push(',');
        out.push_str(&escape_field(product.supplier.as_deref().unwrap_or("")));
        out.push('\n');
    }

    out
}

/// Quotes a field when it contains a delimiter, quote or line break;
/// embedded quotes are doubled (RFC 4180).
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Prices are exported with two decimal places, as displayed.
fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, supplier: Option<&str>) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            category: "Food".to_string(),
            quantity: 4,
            unit_price: 2.5,
            supplier: supplier.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("Rice"), "Rice");
        assert_eq!(escape_field("Rice, parboiled"), "\"Rice, parboiled\"");
        assert_eq!(escape_field("5\" nails"), "\"5\"\" nails\"");
    }

    #[test]
    fn test_render_csv_shape() {
        let rows = [
            product("Rice", Some("Acme")),
            product("Beans, black", None),
        ];
        let csv = render_csv(&rows);
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "1,Rice,Food,4,2.50,Acme");
        assert_eq!(lines[2], "1,\"Beans, black\",Food,4,2.50,");
    }
}
