use std::fs;
use std::path::Path;

use super::{CatalogError, Product};

pub struct Catalog;

impl Catalog {
    /// Read a JSON array of products from disk.
    pub fn load_from(path: &Path) -> Result<Vec<Product>, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Products shown when no catalog file is configured or it fails to load.
    pub fn sample() -> Vec<Product> {
        vec![
            product("Kopi Susu Gula Aren", 15000.0, None, "Kedai Kopi Nusantara", 1, "Kuliner", 4.8),
            product("Keripik Singkong Balado", 12500.0, None, "Dapur Bu Sri", 2, "Kuliner", 4.6),
            product(
                "Kemeja Batik Tulis",
                275000.0,
                Some("https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf"),
                "Batik Lestari",
                3,
                "Fashion",
                4.9,
            ),
            product("Tas Anyaman Pandan", 85000.0, None, "Anyam Kreasi", 4, "Kerajinan", 4.7),
            product("Jamu Kunyit Asam", 10000.0, None, "Jamu Mbok Darmi", 5, "Kesehatan", 4.5),
            product("Paket Sembako Hemat", 149000.0, None, "Toko Berkah Jaya", 6, "Retail", 4.3),
            product("Gantungan Kunci Kayu", 7500.0, None, "Kriya Muda", 7, "Souvenir", 4.0),
        ]
    }
}

fn product(
    name: &str,
    price: f64,
    image: Option<&str>,
    umkm_name: &str,
    umkm_id: u64,
    umkm_category: &str,
    umkm_rating: f64,
) -> Product {
    Product {
        name: name.to_string(),
        price,
        image: image.map(str::to_string),
        umkm_name: umkm_name.to_string(),
        umkm_id,
        umkm_category: umkm_category.to_string(),
        umkm_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Category;

    #[test]
    fn test_load_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"name": "Kopi Susu", "price": 15000, "umkmName": "Kedai", "umkmId": 1, "umkmCategory": "Kuliner", "umkmRating": 4.8},
                {"name": "Sarung", "price": 99000, "image": "/img/sarung.jpg", "umkmName": "Tenun", "umkmId": 2, "umkmCategory": "Fashion", "umkmRating": 5}
            ]"#,
        )
        .unwrap();

        let products = Catalog::load_from(&path).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].image, None);
        assert_eq!(products[1].image_url(), Some("/img/sarung.jpg"));
        assert_eq!(products[1].umkm_rating, 5.0);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_from(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"[{"name": "Kopi"}]"#).unwrap();

        let err = Catalog::load_from(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("catalog.json"));
    }

    #[test]
    fn test_sample_covers_every_category() {
        let products = Catalog::sample();
        let categories: Vec<Category> = products.iter().map(Product::category).collect();
        for expected in [
            Category::Kuliner,
            Category::Fashion,
            Category::Retail,
            Category::Kesehatan,
            Category::Kerajinan,
            Category::Other,
        ] {
            assert!(categories.contains(&expected), "{expected:?} missing from sample");
        }
        assert!(products.iter().all(|p| p.price >= 0.0));
    }
}
