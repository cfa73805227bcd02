use crate::utils::Theme;
use dioxus::prelude::*;

#[component]
pub fn Header(theme: Signal<Theme>, product_count: usize, on_toggle_mode: EventHandler<()>) -> Element {
    let theme_val = *theme.read();
    let is_dark = theme_val.is_dark();

    rsx! {
        header {
            class: "sticky top-0 z-30 backdrop-blur-md bg-white/80 dark:bg-neutral-900/80 border-b border-neutral-200 dark:border-neutral-800",

            div {
                class: "px-4 sm:px-6 lg:px-8",

                div {
                    class: "flex items-center justify-between h-16",

                    // Left side - Title
                    div {
                        class: "flex items-baseline gap-3",
                        span {
                            class: "text-xl font-bold text-neutral-900 dark:text-neutral-100",
                            "Pasar UMKM"
                        }
                        span {
                            class: "text-sm text-neutral-500 dark:text-neutral-400",
                            "{product_count} produk"
                        }
                    }

                    // Dark/Light mode toggle
                    button {
                        r#type: "button",
                        onclick: move |_| on_toggle_mode.call(()),
                        class: "px-3 py-1.5 rounded-lg bg-neutral-100 dark:bg-neutral-800 text-neutral-700 dark:text-neutral-200 text-sm font-medium hover:bg-neutral-200 dark:hover:bg-neutral-700 transition-colors flex items-center gap-2",
                        title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                        span { if is_dark { "☀️" } else { "🌙" } }
                        "{theme_val.toggled().name()}"
                    }
                }
            }
        }
    }
}
