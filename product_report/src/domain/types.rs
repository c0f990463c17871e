// 商品レコードと集計結果のデータ型定義

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 商品レコード
///
/// JSON入力では `product` キーが名前に対応する。
/// キーは大文字小文字を区別せずに照合し、欠けているフィールドや `null` の値は
/// ゼロ値のままにする。同じキーが複数回現れた場合は後の値が優先される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    #[serde(rename = "product")]
    pub name: String,
    pub price: i64,
    pub rating: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: i64, rating: i64) -> Self {
        Self {
            name: name.into(),
            price,
            rating,
        }
    }
}

/// JSONオブジェクトのキーに対応するフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductField {
    Name,
    Price,
    Rating,
}

impl ProductField {
    fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("product") {
            Some(Self::Name)
        } else if key.eq_ignore_ascii_case("price") {
            Some(Self::Price)
        } else if key.eq_ignore_ascii_case("rating") {
            Some(Self::Rating)
        } else {
            None
        }
    }
}

struct ProductVisitor;

impl<'de> Visitor<'de> for ProductVisitor {
    type Value = Product;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a product object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Product, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut product = Product::default();

        while let Some(key) = map.next_key::<String>()? {
            match ProductField::from_key(&key) {
                Some(ProductField::Name) => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        product.name = name;
                    }
                }
                Some(ProductField::Price) => {
                    if let Some(price) = map.next_value::<Option<i64>>()? {
                        product.price = price;
                    }
                }
                Some(ProductField::Rating) => {
                    if let Some(rating) = map.next_value::<Option<i64>>()? {
                        product.rating = rating;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(product)
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ProductVisitor)
    }
}

/// 集計結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductReport {
    /// 最も高価な商品
    pub most_expensive: Product,
    /// 最も評価の高い商品
    pub highest_rated: Product,
    /// 集計対象の商品数
    pub total_products: usize,
}
