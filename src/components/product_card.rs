use crate::components::icons::{HeartIcon, MapPinIcon, ShoppingCartIcon, StarIcon};
use crate::utils::{format_rating, format_rupiah, CardState, Product};
use dioxus::prelude::*;

/// A single storefront card.
///
/// `on_buy` and `on_detail` are optional; without them the buttons are inert.
#[component]
pub fn ProductCard(
    product: Product,
    #[props(into)] on_buy: Option<EventHandler<Product>>,
    #[props(into)] on_detail: Option<EventHandler<Product>>,
) -> Element {
    let mut state = use_signal(|| CardState::new(&product));

    let category = product.category();
    let price = format_rupiah(product.price);
    let rating = format_rating(product.umkm_rating);

    let card = state.read().clone();
    let heart_class = if card.liked() {
        "h-5 w-5 transition-colors duration-200 text-red-500 fill-current"
    } else {
        "h-5 w-5 transition-colors duration-200 text-neutral-600 dark:text-neutral-400"
    };

    let buy_product = product.clone();
    let detail_product = product.clone();

    rsx! {
        div {
            class: "group relative transition-transform duration-300 hover:-translate-y-2 hover:scale-[1.02] active:scale-[0.98]",

            // Glow
            div {
                class: "absolute -inset-0.5 bg-linear-to-r from-blue-500 via-purple-500 to-pink-500 rounded-2xl opacity-0 group-hover:opacity-20 transition-opacity duration-500 blur"
            }

            div {
                class: "relative bg-white/80 dark:bg-neutral-900/80 backdrop-blur-xl rounded-2xl shadow-xl border border-white/20 dark:border-neutral-700/50 overflow-hidden transition-all duration-500 group-hover:shadow-2xl",

                // Image area
                div {
                    class: "relative aspect-square overflow-hidden bg-linear-to-br from-neutral-100 to-neutral-200 dark:from-neutral-800 dark:to-neutral-900",

                    CardImage { state, alt: product.name.clone() }

                    div {
                        class: "absolute inset-0 bg-linear-to-t from-black/20 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"
                    }

                    // Like
                    button {
                        r#type: "button",
                        title: if card.liked() { "Batal suka" } else { "Suka" },
                        onclick: move |_| state.write().toggle_like(),
                        class: "absolute top-3 right-3 p-2 rounded-full bg-white/90 dark:bg-neutral-800/90 backdrop-blur-sm shadow-lg opacity-0 group-hover:opacity-100 hover:scale-110 active:scale-90 transition-all duration-300",
                        HeartIcon { class: heart_class.to_string() }
                    }

                    // Category badge
                    div {
                        class: "absolute top-3 left-3",
                        div {
                            class: "px-3 py-1.5 rounded-full bg-linear-to-r {category.gradient()} text-white text-xs font-bold shadow-lg backdrop-blur-sm flex items-center gap-1",
                            span { "{category.icon()}" }
                            span { "{product.umkm_category}" }
                        }
                    }

                    // Rating badge
                    div {
                        class: "absolute bottom-3 right-3 flex items-center gap-1 px-2 py-1 bg-white/90 dark:bg-neutral-800/90 backdrop-blur-sm rounded-full shadow-lg",
                        StarIcon { class: "h-4 w-4 text-yellow-400 fill-current" }
                        span {
                            class: "text-sm font-bold text-neutral-700 dark:text-neutral-300",
                            "{rating}"
                        }
                    }
                }

                div {
                    class: "p-6",

                    h3 {
                        class: "font-bold text-xl text-neutral-900 dark:text-neutral-100 mb-3 line-clamp-2 group-hover:text-blue-600 dark:group-hover:text-blue-400 transition-colors duration-200",
                        "{product.name}"
                    }

                    div {
                        class: "mb-4",
                        p {
                            class: "text-2xl font-bold bg-linear-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent",
                            "{price}"
                        }
                    }

                    // Vendor
                    div {
                        class: "border-t border-neutral-200 dark:border-neutral-700 pt-4 mb-4",
                        div {
                            class: "flex items-center gap-2 mb-2",
                            MapPinIcon { class: "h-4 w-4 text-neutral-400" }
                            span {
                                class: "text-sm font-medium text-neutral-600 dark:text-neutral-400",
                                "{product.umkm_name}"
                            }
                        }
                    }

                    div {
                        class: "flex gap-2",

                        button {
                            r#type: "button",
                            onclick: move |_| {
                                if let Some(handler) = on_buy {
                                    handler.call(buy_product.clone());
                                }
                            },
                            class: "flex-1 px-4 py-3 bg-linear-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white font-bold rounded-xl hover:scale-105 active:scale-95 transition-all duration-200 flex items-center justify-center gap-2 shadow-lg hover:shadow-xl",
                            ShoppingCartIcon { class: "h-4 w-4" }
                            span { "Beli" }
                        }

                        button {
                            r#type: "button",
                            onclick: move |_| {
                                if let Some(handler) = on_detail {
                                    handler.call(detail_product.clone());
                                }
                            },
                            class: "px-4 py-3 bg-white/60 dark:bg-neutral-800/60 hover:bg-white dark:hover:bg-neutral-700 text-neutral-700 dark:text-neutral-300 font-medium rounded-xl hover:scale-105 active:scale-95 transition-all duration-200 border border-neutral-200 dark:border-neutral-600 backdrop-blur-sm",
                            "Detail"
                        }
                    }
                }

                // Shine
                div {
                    class: "absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none",
                    div {
                        class: "absolute inset-0 bg-linear-to-r from-transparent via-white/10 to-transparent -skew-x-12 -translate-x-full group-hover:translate-x-full transition-transform duration-1000"
                    }
                }
            }
        }
    }
}

/// Product image with the loading shimmer. A load error swaps in the
/// category placeholder.
#[component]
fn CardImage(state: Signal<CardState>, alt: String) -> Element {
    let card = state.read().clone();
    let image_src = card.image_src().to_string();
    let image_class = if card.image_loaded() {
        "opacity-100 scale-100"
    } else {
        "opacity-0 scale-110"
    };

    rsx! {
        img {
            src: "{image_src}",
            alt: "{alt}",
            class: "w-full h-full object-cover transition-all duration-500 group-hover:scale-110 {image_class}",
            onload: move |_| state.write().mark_loaded(),
            onerror: move |_| state.write().mark_failed(),
        }

        if card.show_shimmer() {
            div {
                class: "absolute inset-0 bg-linear-to-r from-transparent via-white/20 to-transparent animate-pulse",
                div { class: "w-full h-full bg-neutral-200 dark:bg-neutral-700 animate-pulse" }
            }
        }
    }
}
