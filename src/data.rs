//! Compiled-in sample content for the demo screens.
//!
//! Nothing here is loaded at runtime. Catalog builders still return `Result`
//! because [`Catalog::new`] validates ids and discounts.

use crate::catalog::{Catalog, MenuItem, Price, Product, Slide};
use crate::error::Result;
use crate::types::{DietaryTag, MenuCategory, ProductCategory, ProductLabel};

/// The six-product listing shown on the shop screen.
pub fn sample_products() -> Result<Catalog<Product>> {
    use ProductCategory::*;
    use ProductLabel::*;

    Catalog::new(vec![
        Product::new(1, "Classic Linen Shirt", Clothing, Price::from_dollars(49))
            .with_labels([Popular]),
        Product::new(2, "Waxed Field Jacket", Clothing, Price::from_dollars(189))
            .with_labels([New]),
        Product::new(3, "Leather Chelsea Boots", Shoes, Price::from_dollars(129))
            .with_labels([Sale])
            .with_original_price(Price::from_dollars(179)),
        Product::new(4, "Canvas Low-Top Sneakers", Shoes, Price::from_dollars(65))
            .with_labels([Popular]),
        Product::new(5, "Woven Leather Belt", Accessories, Price::from_dollars(29))
            .with_labels([Sale, Popular])
            .with_original_price(Price::from_dollars(45)),
        Product::new(6, "Weekender Duffel", Bags, Price::from_dollars(220)).with_labels([New]),
    ])
}

/// The restaurant menu.
pub fn sample_menu() -> Result<Catalog<MenuItem>> {
    use DietaryTag::*;
    use MenuCategory::*;

    Catalog::new(vec![
        MenuItem::new(
            1,
            "Charred Padron Peppers",
            "Sea salt, lemon, smoked aioli",
            Appetizers,
            Price::from_cents(850),
        )
        .with_labels([Vegetarian, GlutenFree, Popular]),
        MenuItem::new(
            2,
            "Chili Garlic Prawns",
            "Sizzled in olive oil with Calabrian chili",
            Appetizers,
            Price::from_cents(1200),
        )
        .with_labels([Spicy, GlutenFree]),
        MenuItem::new(
            3,
            "Burrata & Heirloom Tomato",
            "Basil oil, grilled sourdough",
            Appetizers,
            Price::from_cents(1400),
        )
        .with_labels([Vegetarian]),
        MenuItem::new(
            4,
            "Wood-fired Margherita",
            "San Marzano tomato, fior di latte, basil",
            Mains,
            Price::from_cents(1600),
        )
        .with_labels([Vegetarian, Popular]),
        MenuItem::new(
            5,
            "Dan Dan Noodles",
            "Sichuan pepper, minced pork, chili oil",
            Mains,
            Price::from_cents(1750),
        )
        .with_labels([Spicy, Popular]),
        MenuItem::new(
            6,
            "Roasted Cauliflower Steak",
            "Tahini, pomegranate, herb salad",
            Mains,
            Price::from_cents(1800),
        )
        .with_labels([Vegan, GlutenFree]),
        MenuItem::new(
            7,
            "Grilled Ribeye",
            "Chimichurri, hand-cut fries",
            Mains,
            Price::from_cents(3400),
        )
        .with_labels([GlutenFree]),
        MenuItem::new(
            8,
            "Dark Chocolate Torte",
            "Flourless, sea salt, crème fraîche",
            Desserts,
            Price::from_cents(950),
        )
        .with_labels([Vegetarian, GlutenFree, Popular]),
        MenuItem::new(
            9,
            "Coconut Panna Cotta",
            "Passion fruit, toasted coconut",
            Desserts,
            Price::from_cents(900),
        )
        .with_labels([Vegan]),
        MenuItem::new(
            10,
            "Spicy Mango Margarita",
            "Tequila, mango, jalapeño, lime",
            Drinks,
            Price::from_cents(1300),
        )
        .with_labels([Spicy]),
        MenuItem::new(
            11,
            "House Lemonade",
            "Fresh lemons, mint, sparkling water",
            Drinks,
            Price::from_cents(500),
        )
        .with_labels([Vegan, Popular]),
    ])
}

/// Promo banners rotating above the shop listing
pub const SHOP_PROMOS: &[Slide] = &[
    Slide {
        title: "Autumn Layers",
        body: "New outerwear just landed. Free shipping over $100.",
    },
    Slide {
        title: "Mid-season Sale",
        body: "Up to 35% off selected shoes and accessories.",
    },
    Slide {
        title: "Travel Light",
        body: "Bags built for weekends away.",
    },
];

/// Chef's specials carousel on the menu screen
pub const MENU_SPECIALS: &[Slide] = &[
    Slide {
        title: "Tuesday: Pasta Night",
        body: "Any pasta with a glass of house red for $22.",
    },
    Slide {
        title: "Seasonal: Wild Mushroom Risotto",
        body: "Foraged mushrooms, aged parmesan, truffle oil.",
    },
    Slide {
        title: "Weekend Brunch",
        body: "Bottomless coffee and the chef's shakshuka, 10am to 2pm.",
    },
];

/// Static copy of the marketing email
#[derive(Debug, Clone, Copy)]
pub struct EmailContent {
    pub sender: &'static str,
    pub subject: &'static str,
    pub preheader: &'static str,
    pub greeting: &'static str,
    pub hero: &'static [Slide],
    pub features: &'static [Slide],
    pub call_to_action: &'static str,
    pub footer: &'static str,
}

pub const NEWSLETTER: EmailContent = EmailContent {
    sender: "Northwind Studio <hello@northwind.example>",
    subject: "Your October picks are here",
    preheader: "Three new collections, one exclusive code inside.",
    greeting: "Hi there,",
    hero: &[
        Slide {
            title: "The Autumn Edit",
            body: "Warm textures and muted tones, curated for cooler days.",
        },
        Slide {
            title: "Members Save 20%",
            body: "Use code OCTOBER20 at checkout through the end of the month.",
        },
        Slide {
            title: "Meet the Makers",
            body: "A visit to the small workshop behind our leather goods.",
        },
    ],
    features: &[
        Slide {
            title: "Free returns",
            body: "30 days, no questions asked.",
        },
        Slide {
            title: "Carbon-neutral shipping",
            body: "Every order, every destination.",
        },
        Slide {
            title: "Repair program",
            body: "We fix what we make, for life.",
        },
    ],
    call_to_action: "Shop the collection",
    footer: "You are receiving this because you subscribed at northwind.example. Unsubscribe anytime.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Faceted;

    #[test]
    fn test_sample_catalogs_are_valid() {
        assert_eq!(sample_products().unwrap().len(), 6);
        assert!(sample_menu().unwrap().len() > 6);
    }

    #[test]
    fn test_every_menu_category_is_stocked() {
        let menu = sample_menu().unwrap();
        assert_eq!(menu.category_counts().len(), 4);
    }

    #[test]
    fn test_sale_items_carry_discounts() {
        let products = sample_products().unwrap();
        for product in products.items() {
            if product.labels().contains(&ProductLabel::Sale) {
                assert!(product.discount_percent().is_some(), "{}", product.name);
            }
        }
    }

    #[test]
    fn test_carousels_have_slides() {
        assert!(!SHOP_PROMOS.is_empty());
        assert!(!MENU_SPECIALS.is_empty());
        assert!(!NEWSLETTER.hero.is_empty());
    }
}
