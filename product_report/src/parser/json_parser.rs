use super::{InputFormat, ProductParser};
use crate::domain::Product;
use anyhow::{Context, Result};

/// JSON形式のパーサー
///
/// ファイル全体が `[{"product": .., "price": .., "rating": ..}, ...]` の配列で
/// ある必要がある。一部でもデコードに失敗した場合はファイル全体がエラーになる。
#[derive(Debug, Clone, Default)]
pub struct JsonProductParser;

impl JsonProductParser {
    pub fn new() -> Self {
        Self
    }
}

impl ProductParser for JsonProductParser {
    fn format(&self) -> InputFormat {
        InputFormat::Json
    }

    fn parse(&self, data: &[u8]) -> Result<Vec<Product>> {
        // トップレベルの null は空配列として扱う
        let products: Option<Vec<Product>> =
            serde_json::from_slice(data).context("JSON配列のデコードに失敗しました")?;
        Ok(products.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<Product>> {
        JsonProductParser::new().parse(input.as_bytes())
    }

    #[test]
    fn test_array_maps_fields_by_name() {
        let products = parse(
            r#"[{"product":"A","price":5,"rating":9},{"product":"B","price":50,"rating":1}]"#,
        )
        .unwrap();

        assert_eq!(
            products,
            vec![Product::new("A", 5, 9), Product::new("B", 50, 1)]
        );
    }

    #[test]
    fn test_field_order_and_unknown_fields() {
        let products = parse(
            r#"[{"rating":4,"sku":"X-1","price":12,"product":"Lamp"}]"#,
        )
        .unwrap();

        assert_eq!(products, vec![Product::new("Lamp", 12, 4)]);
    }

    #[test]
    fn test_mixed_case_keys() {
        let products = parse(r#"[{"Product":"A","Price":5,"Rating":9}]"#).unwrap();

        assert_eq!(products, vec![Product::new("A", 5, 9)]);
    }

    #[test]
    fn test_empty_array_and_null() {
        assert!(parse("[]").unwrap().is_empty());
        assert!(parse("null").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_documents_fail_entirely() {
        assert!(parse("").is_err());
        assert!(parse(r#"{"product":"A","price":5,"rating":9}"#).is_err());
        assert!(parse(r#"[{"product":"A","price":5,"rating":9},"#).is_err());
        assert!(parse(r#"[{"product":"A","price":"5","rating":9}]"#).is_err());
        assert!(parse(r#"[{"product":"A","price":5.5,"rating":9}]"#).is_err());
    }

    #[test]
    fn test_error_message_has_context() {
        let error = parse("not json").unwrap_err();

        assert!(error.to_string().contains("JSON配列のデコードに失敗しました"));
    }
}
