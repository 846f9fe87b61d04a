//! Cart Models

use serde::{Deserialize, Serialize};

/// One line of a cart: a product and how many of it the shopper wants.
///
/// The serialized form matches the stored record shape,
/// `{"productId": "...", "qty": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Opaque product identifier, unique within a cart.
    #[serde(rename = "productId")]
    pub product_id: String,

    /// Count of this product in the cart, always at least 1 once stored.
    pub qty: u32,
}

impl CartLine {
    #[must_use]
    pub fn new(product_id: impl Into<String>, qty: u32) -> Self {
        Self {
            product_id: product_id.into(),
            qty,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn serializes_with_camel_case_product_id() -> TestResult {
        let line = CartLine::new("sku-1", 3);

        assert_eq!(
            serde_json::to_value(&line)?,
            json!({"productId": "sku-1", "qty": 3})
        );

        Ok(())
    }

    #[test]
    fn deserializes_stored_record_shape() -> TestResult {
        let lines: Vec<CartLine> =
            serde_json::from_str(r#"[{"productId":"sku-1","qty":2},{"productId":"sku-2","qty":1}]"#)?;

        assert_eq!(
            lines,
            vec![CartLine::new("sku-1", 2), CartLine::new("sku-2", 1)]
        );

        Ok(())
    }
}
