mod card_state;
mod catalog;
mod category;
mod error;
mod formatting;
mod settings;
mod theme;
mod types;

pub use card_state::CardState;
pub use catalog::Catalog;
pub use category::Category;
pub use error::{CatalogError, SettingsError};
pub use formatting::{format_rating, format_rupiah};
pub use settings::Settings;
pub use theme::Theme;
pub use types::Product;
