//! Frontend Models
//!
//! Data structures matching the remote menu API.

use serde::{Deserialize, Serialize};

/// Menu category, one board per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Espresso,
    Frappuccino,
    Blended,
    Teavana,
    Desert,
}

impl Category {
    /// All categories, in navigation order
    pub const ALL: [Category; 5] = [
        Category::Espresso,
        Category::Frappuccino,
        Category::Blended,
        Category::Teavana,
        Category::Desert,
    ];

    /// Key used in API paths and `data-category-name` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Espresso => "espresso",
            Category::Frappuccino => "frappuccino",
            Category::Blended => "blended",
            Category::Teavana => "teavana",
            Category::Desert => "desert",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "frappuccino" => Category::Frappuccino,
            "blended" => Category::Blended,
            "teavana" => Category::Teavana,
            "desert" => Category::Desert,
            _ => Category::Espresso,
        }
    }

    /// Label shown on the navigation button and in the board title
    pub fn label(&self) -> &'static str {
        match self {
            Category::Espresso => "☕ 에스프레소",
            Category::Frappuccino => "🥤 프라푸치노",
            Category::Blended => "🍹 블렌디드",
            Category::Teavana => "🫖 티바나",
            Category::Desert => "🍰 디저트",
        }
    }
}

/// Menu item data structure (matches the API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    #[serde(rename = "isSoldOut")]
    pub is_sold_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_navigation_order() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            keys,
            ["espresso", "frappuccino", "blended", "teavana", "desert"]
        );
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), category);
        }
        assert_eq!(Category::from_str("unknown"), Category::Espresso);
    }

    #[test]
    fn test_initial_category_is_first() {
        assert_eq!(Category::default(), Category::ALL[0]);
    }

    #[test]
    fn test_menu_item_wire_format() {
        let items: Vec<MenuItem> =
            serde_json::from_str(r#"[{"id":1,"name":"Latte","isSoldOut":false}]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Latte");
        assert!(!items[0].is_sold_out);
    }
}
