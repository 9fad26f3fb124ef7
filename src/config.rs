//! Configuration file handling for the showcase.
//!
//! Settings are a small JSON document. Every field has a default, so an empty
//! object `{}` is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::Price;
use crate::error::ShowcaseError;
use crate::types::{EmailValidation, Screen};
use crate::wizard::ValidationRules;

/// Showcase configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Screen opened at startup
    pub start_screen: Screen,
    /// Email rule on the signup account step
    pub email_validation: EmailValidation,
    /// Minimum password length in characters
    pub min_password_length: usize,
    /// Shop price slider step, in whole dollars
    pub price_step: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            start_screen: Screen::Landing,
            email_validation: EmailValidation::Lax,
            min_password_length: 6,
            price_step: 50,
        }
    }
}

impl ShowcaseConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&path, content + "\n")
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.min_password_length == 0 {
            return Err(ShowcaseError::config("min_password_length must be at least 1"));
        }
        if self.min_password_length > 128 {
            return Err(ShowcaseError::config("min_password_length must be at most 128"));
        }
        if self.price_step == 0 {
            return Err(ShowcaseError::config("price_step must be at least 1"));
        }
        Ok(())
    }

    /// Wizard validation rules derived from this configuration
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            email: self.email_validation,
            min_password_length: self.min_password_length,
        }
    }

    /// Price slider step as a [`Price`]
    pub fn price_step(&self) -> Price {
        Price::from_dollars(self.price_step)
    }
}
