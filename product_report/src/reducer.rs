// 商品コレクションの集計（最大値の選択）
//
// 入力を並べ替えずに1回の走査で最大値を求める。同値の場合は先に現れた
// レコードを返す（降順の安定ソート後の先頭と同じ結果）。

use crate::domain::{Product, ProductError, ProductResult};

/// 集計対象のフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankField {
    Price,
    Rating,
}

impl RankField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rating => "rating",
        }
    }

    fn value(&self, product: &Product) -> i64 {
        match self {
            Self::Price => product.price,
            Self::Rating => product.rating,
        }
    }
}

/// 指定フィールドが最大のレコードを返す
///
/// 空のコレクションは前提条件違反として `EmptyCollection` を返す。
pub fn max_by_field(products: &[Product], field: RankField) -> ProductResult<&Product> {
    let (first, rest) = products
        .split_first()
        .ok_or_else(|| ProductError::empty_collection(field.as_str()))?;

    Ok(rest.iter().fold(first, |best, candidate| {
        if field.value(candidate) > field.value(best) {
            candidate
        } else {
            best
        }
    }))
}

/// 最も高価な商品
pub fn max_by_price(products: &[Product]) -> ProductResult<&Product> {
    max_by_field(products, RankField::Price)
}

/// 最も評価の高い商品
pub fn max_by_rating(products: &[Product]) -> ProductResult<&Product> {
    max_by_field(products, RankField::Rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("Widget", 10, 3),
            Product::new("Gadget", 25, 5),
            Product::new("Gizmo", 25, 1),
        ]
    }

    #[test]
    fn test_max_by_price_tie_goes_to_first() {
        let products = sample();
        assert_eq!(max_by_price(&products).unwrap().name, "Gadget");
    }

    #[test]
    fn test_max_by_rating() {
        let products = sample();
        assert_eq!(max_by_rating(&products).unwrap().name, "Gadget");
    }

    #[test]
    fn test_result_dominates_every_record() {
        let products = vec![
            Product::new("a", 3, 70),
            Product::new("b", -1, 2),
            Product::new("c", 99, 70),
            Product::new("d", 42, 71),
            Product::new("e", 99, -5),
        ];

        let priciest = max_by_price(&products).unwrap();
        assert!(products.iter().all(|p| priciest.price >= p.price));
        assert_eq!(priciest.name, "c");

        let best_rated = max_by_rating(&products).unwrap();
        assert!(products.iter().all(|p| best_rated.rating >= p.rating));
        assert_eq!(best_rated.name, "d");
    }

    #[test]
    fn test_all_equal_returns_first() {
        let products = vec![
            Product::new("first", 1, 1),
            Product::new("second", 1, 1),
            Product::new("third", 1, 1),
        ];

        assert_eq!(max_by_price(&products).unwrap().name, "first");
        assert_eq!(max_by_rating(&products).unwrap().name, "first");
    }

    #[test]
    fn test_single_record() {
        let products = vec![Product::new("only", -3, -7)];

        assert_eq!(max_by_price(&products).unwrap(), &products[0]);
        assert_eq!(max_by_rating(&products).unwrap(), &products[0]);
    }

    #[test]
    fn test_empty_collection_is_precondition_violation() {
        let error = max_by_price(&[]).unwrap_err();
        assert!(matches!(error, ProductError::EmptyCollection { field: "price" }));
        assert!(error.is_precondition_violation());

        let error = max_by_rating(&[]).unwrap_err();
        assert!(matches!(error, ProductError::EmptyCollection { field: "rating" }));
    }

    #[test]
    fn test_input_is_not_reordered() {
        let products = sample();
        let before = products.clone();

        max_by_price(&products).unwrap();
        max_by_rating(&products).unwrap();

        assert_eq!(products, before);
    }
}
