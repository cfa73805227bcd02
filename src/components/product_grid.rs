use crate::components::ProductCard;
use crate::utils::Product;
use dioxus::prelude::*;

#[component]
pub fn ProductGrid(
    products: Vec<Product>,
    #[props(into)] on_buy: Option<EventHandler<Product>>,
    #[props(into)] on_detail: Option<EventHandler<Product>>,
) -> Element {
    if products.is_empty() {
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center py-24 text-neutral-500 dark:text-neutral-400",
                span { class: "text-4xl mb-2", "📦" }
                p { class: "text-sm", "Belum ada produk." }
            }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",

            for (index, product) in products.into_iter().enumerate() {
                ProductCard {
                    key: "{product.key()}#{index}",
                    product,
                    on_buy: move |product: Product| {
                        if let Some(handler) = on_buy {
                            handler.call(product);
                        }
                    },
                    on_detail: move |product: Product| {
                        if let Some(handler) = on_detail {
                            handler.call(product);
                        }
                    },
                }
            }
        }
    }
}
