use serde::{Deserialize, Serialize};

use super::Category;

/// A product offered by a UMKM vendor, as supplied by the catalog.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub umkm_name: String,
    pub umkm_id: u64,
    pub umkm_category: String,
    pub umkm_rating: f64,
}

impl Product {
    pub fn category(&self) -> Category {
        Category::parse(&self.umkm_category)
    }

    /// The supplied image, if any. An empty string counts as missing.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }

    /// Identity of a product within a listing. A vendor sells many products,
    /// so the vendor id alone is not enough.
    pub fn key(&self) -> String {
        format!("{}:{}", self.umkm_id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "name": "Kopi Susu",
            "price": 15000,
            "umkmName": "Warung Bu Sri",
            "umkmId": 7,
            "umkmCategory": "Kuliner",
            "umkmRating": 4.8
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Kopi Susu");
        assert_eq!(product.price, 15000.0);
        assert_eq!(product.image, None);
        assert_eq!(product.umkm_name, "Warung Bu Sri");
        assert_eq!(product.umkm_id, 7);
        assert_eq!(product.category(), Category::Kuliner);
        assert_eq!(product.umkm_rating, 4.8);
    }

    #[test]
    fn test_null_image_is_missing() {
        let json = r#"{"name":"Tas","price":1,"image":null,"umkmName":"A","umkmId":1,"umkmCategory":"Fashion","umkmRating":5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url(), None);
    }

    #[test]
    fn test_empty_image_is_missing() {
        let mut product: Product = serde_json::from_str(
            r#"{"name":"Tas","price":1,"image":"","umkmName":"A","umkmId":1,"umkmCategory":"Fashion","umkmRating":5}"#,
        )
        .unwrap();
        assert_eq!(product.image_url(), None);

        product.image = Some("https://cdn.example.com/tas.jpg".to_string());
        assert_eq!(product.image_url(), Some("https://cdn.example.com/tas.jpg"));
    }

    #[test]
    fn test_key_separates_products_of_one_vendor() {
        let json = r#"[
            {"name":"Kopi Susu","price":15000,"umkmName":"Kedai","umkmId":3,"umkmCategory":"Kuliner","umkmRating":4.8},
            {"name":"Teh Tarik","price":12000,"umkmName":"Kedai","umkmId":3,"umkmCategory":"Kuliner","umkmRating":4.8}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products[0].key(), "3:Kopi Susu");
        assert_ne!(products[0].key(), products[1].key());
    }
}
