//! Command-line interface definitions and headless query helpers.

use clap::{Args, Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::catalog::{MenuItem, Price, Product};
use crate::error::Result;
use crate::filter::{CategoryFilter, PriceRange};
use crate::types::{DietaryTag, MenuCategory, ProductCategory, ProductLabel, Screen};
use crate::views::menu::MenuFilter;
use crate::views::shop::ProductFilter;

/// UX pattern showcase in the terminal
#[derive(Parser)]
#[command(name = "uxshowcase")]
#[command(about = "Signup wizard, marketing email, restaurant menu and shop listing demos")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive showcase
    Run {
        /// Screen to open first (overrides the configuration)
        #[arg(short, long)]
        screen: Option<Screen>,
    },
    /// Filter the product catalog and print the result
    Products(ProductQuery),
    /// Filter the restaurant menu and print the result
    Menu(MenuQuery),
    /// Validate a configuration file
    ValidateConfig {
        /// Path to configuration file to validate
        path: PathBuf,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProductQuery {
    /// Only this category (clothing, shoes, accessories, bags)
    #[arg(short, long)]
    pub category: Option<ProductCategory>,

    /// Keep products carrying any of these labels (popular, sale, new)
    #[arg(short, long = "label")]
    pub labels: Vec<ProductLabel>,

    /// Lowest price in whole dollars
    #[arg(long)]
    pub min_price: Option<u32>,

    /// Highest price in whole dollars
    #[arg(long)]
    pub max_price: Option<u32>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ProductQuery {
    /// Filter state equivalent to these arguments.
    ///
    /// The price facet is active only when a bound is given; a missing max
    /// means no upper bound.
    pub fn to_filter(&self) -> Result<ProductFilter> {
        let mut filter = ProductFilter::default();
        if let Some(category) = self.category {
            filter.select_category(CategoryFilter::Only(category));
        }
        for label in &self.labels {
            if !filter.is_label_selected(*label) {
                filter.toggle_label(*label);
            }
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            let min = Price::from_dollars(self.min_price.unwrap_or(0));
            let max = self
                .max_price
                .map_or(Price::from_cents(u32::MAX), Price::from_dollars);
            filter.set_price_range(Some(PriceRange::new(min, max)?));
        }
        Ok(filter)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct MenuQuery {
    /// Only this section (appetizers, mains, desserts, drinks)
    #[arg(short, long)]
    pub category: Option<MenuCategory>,

    /// Keep dishes carrying any of these tags (popular, vegetarian, vegan, spicy, gluten-free)
    #[arg(short, long = "tag")]
    pub tags: Vec<DietaryTag>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl MenuQuery {
    pub fn to_filter(&self) -> MenuFilter {
        let mut filter = MenuFilter::default();
        if let Some(category) = self.category {
            filter.select_category(CategoryFilter::Only(category));
        }
        for tag in &self.tags {
            if !filter.is_label_selected(*tag) {
                filter.toggle_label(*tag);
            }
        }
        filter
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Whether this invocation draws the interactive showcase
    pub fn launches_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run { .. }))
    }
}

fn label_list<L: std::fmt::Display>(labels: impl IntoIterator<Item = L>) -> String {
    labels
        .into_iter()
        .map(|label| label.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Plain-text table of products, one per line, with a count footer
pub fn product_table(products: &[&Product]) -> String {
    let mut out = String::new();
    for product in products {
        let was = product
            .original_price
            .map(|original| format!(" (was {})", original))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3}  {:<26} {:<12} {:>9}{}  {}",
            product.id,
            product.name,
            product.category.to_string(),
            product.price.to_string(),
            was,
            label_list(&product.labels)
        );
    }
    let _ = writeln!(out, "{} product(s)", products.len());
    out
}

/// Plain-text table of menu items, one per line, with a count footer
pub fn menu_table(items: &[&MenuItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{:>3}  {:<30} {:<11} {:>8}  {}",
            item.id,
            item.name,
            item.category.to_string(),
            item.price.to_string(),
            label_list(&item.labels)
        );
    }
    let _ = writeln!(out, "{} item(s)", items.len());
    out
}
