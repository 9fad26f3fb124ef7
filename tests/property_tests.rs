//! Property-Based Tests for the showcase core
//!
//! Uses proptest for invariants over arbitrary catalogs and filter states.
//!
//! These tests verify:
//! - The default filter is the identity, order preserved
//! - Label filtering is exactly the ANY-match subset of the catalog
//! - Toggling a label twice is a round-trip
//! - Carousel advance is cyclic with period N, and jumps never clamp
//! - Step cursor and wizard advance never overshoot or skip validation
//! - Enum string round-trips

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::collections::BTreeSet;

use uxshowcase::catalog::{Catalog, Price, Product};
use uxshowcase::cursor::{Carousel, StepCursor};
use uxshowcase::filter::{CategoryFilter, FilterState, PriceRange, apply};
use uxshowcase::types::{DietaryTag, ProductCategory, ProductLabel, Screen};
use uxshowcase::wizard::{SignupStep, SignupWizard, ValidationRules};

type ProductFilter = FilterState<ProductCategory, ProductLabel>;

// =============================================================================
// Strategies
// =============================================================================

fn category_strategy() -> impl Strategy<Value = ProductCategory> {
    prop_oneof![
        Just(ProductCategory::Clothing),
        Just(ProductCategory::Shoes),
        Just(ProductCategory::Accessories),
        Just(ProductCategory::Bags),
    ]
}

fn label_strategy() -> impl Strategy<Value = ProductLabel> {
    prop_oneof![
        Just(ProductLabel::Popular),
        Just(ProductLabel::Sale),
        Just(ProductLabel::New),
    ]
}

fn dietary_tag_strategy() -> impl Strategy<Value = DietaryTag> {
    prop_oneof![
        Just(DietaryTag::Popular),
        Just(DietaryTag::Vegetarian),
        Just(DietaryTag::Vegan),
        Just(DietaryTag::Spicy),
        Just(DietaryTag::GlutenFree),
    ]
}

/// Catalogs of up to 24 products with sequential ids
fn catalog_strategy() -> impl Strategy<Value = Catalog<Product>> {
    vec(
        (category_strategy(), btree_set(label_strategy(), 0..=3), 0u32..100_000),
        0..24,
    )
    .prop_map(|rows| {
        let products = rows
            .into_iter()
            .enumerate()
            .map(|(index, (category, labels, cents))| {
                Product::new(index as u32 + 1, format!("Item {}", index + 1), category, Price::from_cents(cents))
                    .with_labels(labels)
            })
            .collect();
        Catalog::new(products).expect("sequential ids are unique")
    })
}

fn filter_strategy() -> impl Strategy<Value = ProductFilter> {
    (
        prop::option::of(category_strategy()),
        btree_set(label_strategy(), 0..=3),
        prop::option::of((0u32..100_000, 0u32..100_000)),
    )
        .prop_map(|(category, labels, bounds)| {
            let mut filter = ProductFilter::default();
            if let Some(category) = category {
                filter.select_category(CategoryFilter::Only(category));
            }
            for label in labels {
                filter.toggle_label(label);
            }
            if let Some((a, b)) = bounds {
                let range = PriceRange::new(Price::from_cents(a.min(b)), Price::from_cents(a.max(b)))
                    .expect("ordered bounds");
                filter.set_price_range(Some(range));
            }
            filter
        })
}

fn ids(items: &[&Product]) -> Vec<u32> {
    items.iter().map(|p| p.id).collect()
}

// =============================================================================
// Filter Evaluator Properties
// =============================================================================

proptest! {
    /// Category All and no labels returns the whole catalog in order
    #[test]
    fn default_filter_is_identity(catalog in catalog_strategy()) {
        let visible = catalog.filter(&ProductFilter::default());
        let expected: Vec<u32> = catalog.items().iter().map(|p| p.id).collect();
        prop_assert_eq!(ids(&visible), expected);
    }

    /// Label filtering returns exactly the items sharing a selected label
    #[test]
    fn labels_select_exact_any_match_subset(
        catalog in catalog_strategy(),
        selected in btree_set(label_strategy(), 1..=3),
    ) {
        let mut filter = ProductFilter::default();
        for label in &selected {
            filter.toggle_label(*label);
        }
        let visible = catalog.filter(&filter);

        for product in &visible {
            prop_assert!(!product.labels.is_disjoint(&selected));
        }
        let expected: Vec<u32> = catalog
            .items()
            .iter()
            .filter(|p| !p.labels.is_disjoint(&selected))
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(ids(&visible), expected);
    }

    /// Results are an order-preserving subsequence of the catalog
    #[test]
    fn result_is_stable_subsequence(catalog in catalog_strategy(), filter in filter_strategy()) {
        let visible = apply(catalog.items(), &filter);
        let mut positions = visible
            .iter()
            .map(|p| catalog.items().iter().position(|q| q.id == p.id));
        let mut last = None;
        for position in &mut positions {
            prop_assert!(position.is_some());
            prop_assert!(position > last);
            last = position;
        }
        for product in &visible {
            prop_assert!(filter.matches(*product));
        }
    }

    /// Toggling a label on then off restores both state and result
    #[test]
    fn toggle_round_trip(
        catalog in catalog_strategy(),
        filter in filter_strategy(),
        label in label_strategy(),
    ) {
        let before = catalog.filter(&filter).iter().map(|p| p.id).collect::<Vec<_>>();
        let mut toggled = filter.clone();
        toggled.toggle_label(label);
        toggled.toggle_label(label);
        prop_assert_eq!(&toggled, &filter);
        prop_assert_eq!(ids(&catalog.filter(&toggled)), before);
    }

    /// Every visible item is inside an active price range
    #[test]
    fn price_range_is_inclusive(catalog in catalog_strategy(), filter in filter_strategy()) {
        if let Some(range) = filter.price_range() {
            for product in catalog.filter(&filter) {
                prop_assert!(range.min() <= product.price && product.price <= range.max());
            }
        }
    }
}

// =============================================================================
// Cursor Properties
// =============================================================================

proptest! {
    /// N advances return a carousel to where it started
    #[test]
    fn carousel_advance_is_cyclic(len in 1usize..50, start in 0usize..50) {
        let mut carousel = Carousel::new(len).unwrap();
        carousel.jump_to(start % len).unwrap();
        let origin = carousel.position();
        for _ in 0..len {
            carousel.advance();
        }
        prop_assert_eq!(carousel.position(), origin);
    }

    /// Retreat undoes advance
    #[test]
    fn carousel_retreat_inverts_advance(len in 1usize..50, start in 0usize..50) {
        let mut carousel = Carousel::new(len).unwrap();
        carousel.jump_to(start % len).unwrap();
        let origin = carousel.position();
        carousel.advance();
        carousel.retreat();
        prop_assert_eq!(carousel.position(), origin);
    }

    /// Out-of-range jumps fail and leave the position alone
    #[test]
    fn carousel_jump_rejects_out_of_range(len in 1usize..20, extra in 0usize..20) {
        let mut carousel = Carousel::new(len).unwrap();
        carousel.advance();
        let origin = carousel.position();
        prop_assert!(carousel.jump_to(len + extra).is_err());
        prop_assert_eq!(carousel.position(), origin);
    }

    /// Step cursor stays within [1, N] under any sequence of moves
    #[test]
    fn step_cursor_stays_clamped(steps in 1usize..10, moves in vec(any::<bool>(), 0..40)) {
        let mut cursor = StepCursor::new(steps).unwrap();
        for forward in moves {
            let before = cursor.position();
            let moved = if forward { cursor.advance() } else { cursor.retreat() };
            prop_assert_eq!(moved, cursor.position() != before);
            prop_assert!((1..=steps).contains(&cursor.position()));
        }
    }
}

// =============================================================================
// Wizard Properties
// =============================================================================

proptest! {
    /// Advance never leaves a failing step, and never moves past the end
    #[test]
    fn wizard_advance_respects_validation(
        name in "[ a-z]{0,6}",
        email in "[a-z@.]{0,10}",
        password in "[a-z0-9]{0,9}",
        pick_interest in any::<bool>(),
    ) {
        let mut wizard = SignupWizard::new(ValidationRules::default());
        {
            let form = wizard.form_mut();
            form.name = name;
            form.email = email;
            form.password = password;
            if pick_interest {
                form.toggle_interest(uxshowcase::types::Interest::Music);
            }
        }

        for _ in 0..SignupStep::TOTAL_STEPS + 1 {
            let before = wizard.step();
            let passes = wizard.check().is_passed();
            let moved = wizard.advance();
            if !passes || before == SignupStep::Complete {
                prop_assert!(!moved);
                prop_assert_eq!(wizard.step(), before);
            } else {
                prop_assert!(moved);
                prop_assert_eq!(wizard.step().position(), before.position() + 1);
            }
        }
    }
}

// =============================================================================
// Enum Round-Trip Tests
// =============================================================================

proptest! {
    /// DietaryTag: to_string → parse round-trip is identity
    #[test]
    fn dietary_tag_roundtrip(tag in dietary_tag_strategy()) {
        let s = tag.to_string();
        let parsed: DietaryTag = s.parse().expect("Should parse");
        prop_assert_eq!(tag, parsed);
    }

    /// ProductCategory: Display output is non-empty lowercase
    #[test]
    fn category_display_is_lowercase(category in category_strategy()) {
        let s = category.to_string();
        prop_assert!(!s.is_empty());
        prop_assert_eq!(s.clone(), s.to_lowercase());
    }
}

#[test]
fn screen_names_parse() {
    use strum::IntoEnumIterator;
    let names: BTreeSet<String> = Screen::iter().map(|s| s.to_string()).collect();
    assert_eq!(names.len(), 5);
    for name in names {
        assert!(name.parse::<Screen>().is_ok());
    }
}
