use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::MaterialSpec;
use crate::util::assets;

pub const DEFAULT_TAX_RATE_PERCENT: f64 = 5.0;

/// The crafting recipe the calculator is set up for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name_jp: String,
    pub name_en: String,
    pub materials: Vec<MaterialSpec>,
    #[serde(default)]
    pub default_sell_price: String,
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: f64,
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE_PERCENT
}

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("embedded recipe file is missing")]
    Missing,
    #[error("failed to decode recipe: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid recipe: {0}")]
    Invalid(String),
}

impl Recipe {
    /// Loads the embedded `recipe.json`.
    pub fn load() -> Result<Self, RecipeError> {
        let data = assets::recipe_json().ok_or(RecipeError::Missing)?;
        Self::from_json(&data)
    }

    /// Loads the embedded recipe, falling back to the built-in one.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(recipe) => {
                tracing::info!(
                    recipe = %recipe.name_en,
                    materials = recipe.materials.len(),
                    tax_rate = recipe.tax_rate_percent,
                    "loaded recipe"
                );
                recipe
            }
            Err(err) => {
                tracing::warn!("{err}; using built-in recipe");
                Self::default()
            }
        }
    }

    pub fn from_json(data: &[u8]) -> Result<Self, RecipeError> {
        let recipe: Recipe = serde_json::from_slice(data)?;
        recipe.validate()?;
        Ok(recipe)
    }

    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.materials.is_empty() {
            return Err(RecipeError::Invalid("no materials listed".to_string()));
        }
        if !self.tax_rate_percent.is_finite() || !(0.0..=100.0).contains(&self.tax_rate_percent)
        {
            return Err(RecipeError::Invalid(format!(
                "tax rate {} is outside 0-100",
                self.tax_rate_percent
            )));
        }
        for material in &self.materials {
            if material.key.trim().is_empty() || material.name_en.trim().is_empty() {
                return Err(RecipeError::Invalid(
                    "material key and English name are required".to_string(),
                ));
            }
            if material.max_owned == 0 {
                return Err(RecipeError::Invalid(format!(
                    "{} has a zero owned limit",
                    material.key
                )));
            }
        }
        Ok(())
    }

    pub fn material(&self, idx: usize) -> Option<&MaterialSpec> {
        self.materials.get(idx)
    }

    /// Label used next to the tax figure, e.g. `Revenue × 5%`.
    pub fn tax_label(&self) -> String {
        format!("Revenue × {}%", self.tax_rate_percent)
    }
}

impl Default for Recipe {
    fn default() -> Self {
        let material =
            |key: &str, name_jp: &str, name_en: &str, amount: u64, price: &str, owned: &str| {
                MaterialSpec {
                    key: key.to_string(),
                    name_jp: name_jp.to_string(),
                    name_en: name_en.to_string(),
                    required: amount,
                    max_owned: amount,
                    default_price: price.to_string(),
                    default_owned: owned.to_string(),
                }
            };

        Self {
            name_jp: "C/ロイスハルフィニリア".to_string(),
            name_en: "Lois Halphiniria".to_string(),
            materials: vec![
                material("lux", "C/ルクスハルフィニリア", "Lux Halphiniria", 10, "6,000", ""),
                material("marcis", "C/マシスハルフィニリア", "Marcis Halphiniria", 10, "800,000", ""),
                material("base", "C/ベイスデーター", "Base Data", 50, "28,000", "50"),
            ],
            default_sell_price: "12,000,000".to_string(),
            tax_rate_percent: DEFAULT_TAX_RATE_PERCENT,
        }
    }
}
