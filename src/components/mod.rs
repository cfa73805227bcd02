mod header;
mod icons;
mod product_card;
mod product_grid;

pub use header::Header;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
