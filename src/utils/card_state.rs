use super::Product;

/// Transient view state of a single product card.
///
/// `liked` and `image_loaded` are independent. A load error swaps the image
/// source for the category placeholder and counts as loaded, so the shimmer
/// never sticks around.
#[derive(Clone, PartialEq, Debug)]
pub struct CardState {
    liked: bool,
    image_loaded: bool,
    image_src: String,
    placeholder: &'static str,
}

impl CardState {
    pub fn new(product: &Product) -> Self {
        let placeholder = product.category().placeholder_image();
        let image_src = product.image_url().unwrap_or(placeholder).to_string();

        Self {
            liked: false,
            image_loaded: false,
            image_src,
            placeholder,
        }
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    pub fn show_shimmer(&self) -> bool {
        !self.image_loaded
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn mark_loaded(&mut self) {
        self.image_loaded = true;
    }

    /// Fall back to the category placeholder. No retry.
    pub fn mark_failed(&mut self) {
        if self.image_src != self.placeholder {
            self.image_src = self.placeholder.to_string();
        }
        self.image_loaded = true;
    }
}
