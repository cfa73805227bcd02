/// Vendor sector of a product. Drives the badge gradient, the badge icon and
/// the placeholder image. Anything unrecognised lands in `Other`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Category {
    Kuliner,
    Fashion,
    Retail,
    Kesehatan,
    Kerajinan,
    Other,
}

impl Category {
    /// Exact, case-sensitive match on the category key.
    pub fn parse(key: &str) -> Category {
        match key {
            "Kuliner" => Category::Kuliner,
            "Fashion" => Category::Fashion,
            "Retail" => Category::Retail,
            "Kesehatan" => Category::Kesehatan,
            "Kerajinan" => Category::Kerajinan,
            _ => Category::Other,
        }
    }

    pub fn placeholder_image(&self) -> &'static str {
        match self {
            Category::Kuliner | Category::Kesehatan => "/assets/actor.png",
            Category::Fashion | Category::Kerajinan => "/assets/tailor.png",
            Category::Retail | Category::Other => "/assets/movie-director.png",
        }
    }

    /// Tailwind gradient stops for the category badge.
    pub fn gradient(&self) -> &'static str {
        match self {
            Category::Kuliner => "from-orange-400 to-red-500",
            Category::Fashion => "from-pink-400 to-purple-500",
            Category::Retail => "from-blue-400 to-indigo-500",
            Category::Kesehatan => "from-green-400 to-teal-500",
            Category::Kerajinan => "from-yellow-400 to-orange-500",
            Category::Other => "from-gray-400 to-gray-500",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Kuliner => "🍽️",
            Category::Fashion => "👕",
            Category::Retail => "🏪",
            Category::Kesehatan => "💊",
            Category::Kerajinan => "🎨",
            Category::Other => "📦",
        }
    }
}
