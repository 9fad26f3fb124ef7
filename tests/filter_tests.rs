//! Tests for the faceted filter evaluator over the sample catalogs
//!
//! These tests verify:
//! - Category, label and price facets combine with AND
//! - Labels use ANY-match
//! - Results keep catalog order
//! - Empty results are a valid outcome

use uxshowcase::catalog::{Catalog, Faceted, Price, Product};
use uxshowcase::data::{sample_menu, sample_products};
use uxshowcase::filter::{CategoryFilter, FilterState, PriceRange, apply};
use uxshowcase::types::{DietaryTag, MenuCategory, ProductCategory, ProductLabel};

type ProductFilter = FilterState<ProductCategory, ProductLabel>;

fn ids<T: Faceted>(items: &[&T]) -> Vec<u32> {
    items.iter().map(|item| item.id()).collect()
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_clothing_within_budget_returns_both_clothing_items_in_order() {
    let catalog = sample_products().unwrap();
    assert_eq!(catalog.len(), 6);

    let mut filter = ProductFilter::with_price_range(
        PriceRange::new(Price::ZERO, Price::from_dollars(500)).unwrap(),
    );
    filter.select_category(CategoryFilter::Only(ProductCategory::Clothing));

    let visible = catalog.filter(&filter);
    assert_eq!(ids(&visible), vec![1, 2]);
    assert!(visible.iter().all(|p| p.category == ProductCategory::Clothing));
}

#[test]
fn test_sale_label_with_all_categories_returns_sale_items() {
    let catalog = sample_products().unwrap();
    let mut filter = ProductFilter::default();
    filter.toggle_label(ProductLabel::Sale);

    let visible = catalog.filter(&filter);
    assert_eq!(ids(&visible), vec![3, 5]);
    assert!(visible.iter().all(|p| p.labels.contains(&ProductLabel::Sale)));
}

// =============================================================================
// Facet Semantics
// =============================================================================

#[test]
fn test_default_filter_returns_full_catalog() {
    let catalog = sample_products().unwrap();
    let visible = catalog.filter(&ProductFilter::default());
    assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_labels_are_any_match_not_all_match() {
    let catalog = sample_products().unwrap();
    let mut filter = ProductFilter::default();
    filter.toggle_label(ProductLabel::Sale);
    filter.toggle_label(ProductLabel::New);

    // Sale items (3, 5) plus new items (2, 6), in catalog order
    assert_eq!(ids(&catalog.filter(&filter)), vec![2, 3, 5, 6]);
}

#[test]
fn test_price_bounds_are_inclusive() {
    let catalog = sample_products().unwrap();
    let filter = ProductFilter::with_price_range(
        PriceRange::new(Price::from_dollars(49), Price::from_dollars(65)).unwrap(),
    );
    assert_eq!(ids(&catalog.filter(&filter)), vec![1, 4]);
}

#[test]
fn test_facets_combine_with_and() {
    let catalog = sample_products().unwrap();
    let mut filter = ProductFilter::with_price_range(
        PriceRange::new(Price::ZERO, Price::from_dollars(100)).unwrap(),
    );
    filter.select_category(CategoryFilter::Only(ProductCategory::Shoes));
    filter.toggle_label(ProductLabel::Popular);

    // Boots are on sale and over budget; only the sneakers pass all three
    assert_eq!(ids(&catalog.filter(&filter)), vec![4]);
}

#[test]
fn test_category_without_matches_is_empty_not_error() {
    let catalog = sample_products().unwrap();
    let mut filter = ProductFilter::default();
    filter.select_category(CategoryFilter::Only(ProductCategory::Bags));
    filter.toggle_label(ProductLabel::Sale);
    assert!(catalog.filter(&filter).is_empty());
}

#[test]
fn test_empty_catalog_filters_to_empty() {
    let catalog: Catalog<Product> = Catalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(apply(catalog.items(), &ProductFilter::default()).is_empty());
}

#[test]
fn test_toggling_twice_restores_result() {
    let catalog = sample_products().unwrap();
    let mut filter = ProductFilter::default();
    let before = ids(&catalog.filter(&filter));
    filter.toggle_label(ProductLabel::New);
    filter.toggle_label(ProductLabel::New);
    assert!(filter.labels().is_empty());
    assert_eq!(ids(&catalog.filter(&filter)), before);
}

#[test]
fn test_inverted_range_is_rejected() {
    assert!(PriceRange::new(Price::from_dollars(10), Price::from_dollars(5)).is_err());
    assert!(PriceRange::new(Price::from_dollars(5), Price::from_dollars(5)).is_ok());
}

// =============================================================================
// Menu Catalog
// =============================================================================

#[test]
fn test_menu_has_no_price_facet_by_default() {
    let menu = sample_menu().unwrap();
    let filter: FilterState<MenuCategory, DietaryTag> = FilterState::default();
    assert!(filter.price_range().is_none());
    assert_eq!(menu.filter(&filter).len(), menu.len());
}

#[test]
fn test_menu_gluten_free_desserts() {
    let menu = sample_menu().unwrap();
    let mut filter: FilterState<MenuCategory, DietaryTag> = FilterState::default();
    filter.select_category(CategoryFilter::Only(MenuCategory::Desserts));
    filter.toggle_label(DietaryTag::GlutenFree);
    for item in menu.filter(&filter) {
        assert_eq!(item.category, MenuCategory::Desserts);
        assert!(item.labels.contains(&DietaryTag::GlutenFree));
    }
}

#[test]
fn test_category_counts_cover_catalog() {
    let catalog = sample_products().unwrap();
    let counts = catalog.category_counts();
    assert_eq!(counts.values().sum::<usize>(), catalog.len());
    assert_eq!(counts.get(&ProductCategory::Clothing), Some(&2));
}
