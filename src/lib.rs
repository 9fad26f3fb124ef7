//! UX Pattern Showcase Library
//!
//! Faceted catalog filtering, carousel and wizard cursors, and the signup
//! step validator, plus the terminal screens built on them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod cursor;
pub mod data;
pub mod error;
pub mod filter;
pub mod logging;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, AppState, Transition};
pub use catalog::{Catalog, Faceted, MenuItem, Price, Product, Slide};
pub use config::ShowcaseConfig;
pub use cursor::{Carousel, StepCursor};
pub use error::{Result, ShowcaseError};
pub use filter::{CategoryFilter, FilterState, PriceRange, apply};
pub use types::{
    DietaryTag, EmailValidation, Interest, MenuCategory, PreviewMode, ProductCategory,
    ProductLabel, Screen,
};
pub use wizard::{Hint, SignupForm, SignupStep, SignupWizard, StepCheck, ValidationRules};
