//! Closed tag sets for the showcase
//!
//! Categories, labels and screens are enums rather than free-form strings, so
//! an unknown category is a parse error at the boundary instead of a silent
//! empty result set deep in a filter.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Product catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductCategory {
    Clothing,
    Shoes,
    Accessories,
    Bags,
}

impl ProductCategory {
    /// Tab caption
    pub fn title(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Shoes => "Shoes",
            Self::Accessories => "Accessories",
            Self::Bags => "Bags",
        }
    }
}

/// Descriptive product flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductLabel {
    Popular,
    Sale,
    New,
}

impl ProductLabel {
    /// Badge caption
    pub fn title(&self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Sale => "Sale",
            Self::New => "New",
        }
    }
}

/// Restaurant menu section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MenuCategory {
    Appetizers,
    Mains,
    Desserts,
    Drinks,
}

impl MenuCategory {
    /// Tab caption
    pub fn title(&self) -> &'static str {
        match self {
            Self::Appetizers => "Appetizers",
            Self::Mains => "Mains",
            Self::Desserts => "Desserts",
            Self::Drinks => "Drinks",
        }
    }
}

/// Dietary or popularity tag on a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DietaryTag {
    Popular,
    Vegetarian,
    Vegan,
    Spicy,
    GlutenFree,
}

impl DietaryTag {
    /// Badge caption
    pub fn title(&self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Spicy => "Spicy",
            Self::GlutenFree => "Gluten-free",
        }
    }
}

/// Topic a new account can follow, picked on the last signup step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Interest {
    Design,
    Development,
    Marketing,
    Photography,
    Music,
    Travel,
}

impl Interest {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Marketing => "Marketing",
            Self::Photography => "Photography",
            Self::Music => "Music",
            Self::Travel => "Travel",
        }
    }
}

/// Top-level screens of the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Screen {
    #[default]
    Landing,
    Signup,
    Email,
    Menu,
    Shop,
}

impl Screen {
    /// The demo screens linked from the landing page, in display order
    pub const DEMOS: [Screen; 4] = [Screen::Signup, Screen::Email, Screen::Menu, Screen::Shop];

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "UX Pattern Showcase",
            Self::Signup => "Multi-step Signup",
            Self::Email => "Marketing Email",
            Self::Menu => "Restaurant Menu",
            Self::Shop => "Shop Listing",
        }
    }

    /// One-line pitch shown on the landing page
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Landing => "Pick a pattern to explore",
            Self::Signup => "Wizard with per-step validation and a progress bar",
            Self::Email => "Newsletter layout with a hero carousel",
            Self::Menu => "Category tabs and dietary filters",
            Self::Shop => "Faceted product filtering with a price range",
        }
    }
}

/// How strictly the signup account step checks the email field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmailValidation {
    /// Any value containing `@`
    #[default]
    Lax,
    /// One `@`, non-empty local part, dotted domain, no whitespace
    Strict,
}

/// Width the email layout is previewed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PreviewMode {
    #[default]
    Desktop,
    Mobile,
}

impl PreviewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Desktop => Self::Mobile,
            Self::Mobile => Self::Desktop,
        }
    }

    /// Column width of the rendered email body
    pub fn body_width(self) -> u16 {
        match self {
            Self::Desktop => 72,
            Self::Mobile => 38,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            ProductCategory::from_str("clothing").unwrap(),
            ProductCategory::Clothing
        );
        assert_eq!(MenuCategory::from_str("mains").unwrap(), MenuCategory::Mains);
        assert!(ProductCategory::from_str("furniture").is_err());
    }

    #[test]
    fn test_dietary_tag_kebab_case() {
        assert_eq!(DietaryTag::GlutenFree.to_string(), "gluten-free");
        assert_eq!(
            DietaryTag::from_str("gluten-free").unwrap(),
            DietaryTag::GlutenFree
        );
    }

    #[test]
    fn test_demo_screens_exclude_landing() {
        assert!(!Screen::DEMOS.contains(&Screen::Landing));
        assert_eq!(Screen::iter().count(), Screen::DEMOS.len() + 1);
    }

    #[test]
    fn test_preview_mode_toggle() {
        assert_eq!(PreviewMode::Desktop.toggled(), PreviewMode::Mobile);
        assert_eq!(PreviewMode::Mobile.toggled().toggled(), PreviewMode::Mobile);
        assert!(PreviewMode::Mobile.body_width() < PreviewMode::Desktop.body_width());
    }

    #[test]
    fn test_serde_matches_strum() {
        let json = serde_json::to_string(&DietaryTag::GlutenFree).unwrap();
        assert_eq!(json, "\"gluten-free\"");
        let parsed: Screen = serde_json::from_str("\"shop\"").unwrap();
        assert_eq!(parsed, Screen::Shop);
        assert_eq!(Screen::Shop.to_string(), "shop");
    }

    #[test]
    fn test_all_enums_have_default() {
        assert_eq!(Screen::default(), Screen::Landing);
        assert_eq!(EmailValidation::default(), EmailValidation::Lax);
        assert_eq!(PreviewMode::default(), PreviewMode::Desktop);
    }
}
