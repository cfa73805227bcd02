use dioxus::prelude::*;
use tracing::{debug, error, info, warn, Level};

mod components;
mod utils;

use components::{Header, ProductGrid};
use utils::{Catalog, Product, Settings, Theme};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    dioxus::launch(App);
}

/// Load the configured catalog, falling back to the built-in sample.
async fn load_catalog(settings: Settings) -> Vec<Product> {
    let Some(path) = settings.catalog_path else {
        return Catalog::sample();
    };

    let shown = path.display().to_string();
    match tokio::task::spawn_blocking(move || Catalog::load_from(&path)).await {
        Ok(Ok(products)) => {
            info!(count = products.len(), path = %shown, "loaded catalog");
            products
        }
        Ok(Err(e)) => {
            error!("{}; using sample catalog", e);
            Catalog::sample()
        }
        Err(e) => {
            error!("catalog load task failed: {}; using sample catalog", e);
            Catalog::sample()
        }
    }
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let mut app_settings = use_signal(|| {
        Settings::load().unwrap_or_else(|e| {
            warn!("Failed to load settings: {}", e);
            Settings::default()
        })
    });

    let mut theme = use_signal(|| app_settings.read().theme);

    let catalog = use_resource(move || {
        let settings = app_settings.peek().clone();
        load_catalog(settings)
    });

    // Handler for toggling dark/light mode
    let toggle_mode = move |_| {
        let new_theme: Theme = theme.read().toggled();
        theme.set(new_theme);

        let mut settings = app_settings.write();
        settings.theme = new_theme;
        if let Err(e) = settings.save() {
            warn!("Failed to save theme: {}", e);
        }
    };

    let on_buy = move |product: Product| {
        debug!(product = %product.name, umkm_id = product.umkm_id, "buy clicked");
    };

    let on_detail = move |product: Product| {
        debug!(product = %product.name, umkm_id = product.umkm_id, "detail clicked");
    };

    let products = catalog.read().clone();
    let product_count = products.as_ref().map(Vec::len).unwrap_or(0);
    let root_class = theme.read().root_class();

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div {
            class: "{root_class}",

            div {
                class: "font-inter antialiased min-h-screen bg-neutral-50 dark:bg-neutral-950 text-neutral-900 dark:text-neutral-100",

                Header {
                    theme,
                    product_count,
                    on_toggle_mode: toggle_mode,
                }

                main {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                    match products {
                        Some(products) => rsx! {
                            ProductGrid {
                                products,
                                on_buy,
                                on_detail,
                            }
                        },
                        None => rsx! {
                            div {
                                class: "flex items-center justify-center py-24 text-neutral-400",
                                "Memuat produk..."
                            }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_load_catalog_from_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"name":"Sambal Roa","price":45000,"umkmName":"Dapur Manado","umkmId":9,"umkmCategory":"Kuliner","umkmRating":4.9}]"#,
        )
        .unwrap();

        let settings = Settings {
            catalog_path: Some(path),
            ..Settings::default()
        };
        let products = load_catalog(settings).await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Sambal Roa");
    }

    #[tokio::test]
    async fn test_load_catalog_falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            catalog_path: Some(dir.path().join("missing.json")),
            ..Settings::default()
        };
        assert_eq!(load_catalog(settings).await, Catalog::sample());
        assert_eq!(load_catalog(Settings::default()).await, Catalog::sample());
    }
}
