use serde::{Deserialize, Serialize};

use super::{
    counter::OwnedCounter,
    entities::MaterialInput,
    numeric::{format_for_editing, format_money, parse_amount},
    recipe::Recipe,
};

/// Everything the user has typed, one entry per recipe material.
///
/// Fields hold display text exactly as it appears in the inputs. All figures
/// are derived from this record by [`super::evaluation::evaluate_form`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub materials: Vec<MaterialInput>,
    #[serde(default)]
    pub sell_price: String,
}

impl FormState {
    /// Fresh form seeded with the recipe's owned amounts and market prices.
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            materials: recipe
                .materials
                .iter()
                .map(|material| MaterialInput {
                    owned: format_for_editing(&material.default_owned),
                    price: material.default_price.clone(),
                })
                .collect(),
            sell_price: recipe.default_sell_price.clone(),
        }
    }

    pub fn material(&self, idx: usize) -> Option<&MaterialInput> {
        self.materials.get(idx)
    }

    /// Rows outside the form are ignored rather than created.
    fn material_mut(&mut self, idx: usize) -> Option<&mut MaterialInput> {
        self.materials.get_mut(idx)
    }

    /// Stores a price typed into a material row, re-grouped for display.
    pub fn set_price(&mut self, idx: usize, raw: &str) {
        if let Some(input) = self.material_mut(idx) {
            input.price = format_for_editing(raw);
        }
    }

    pub fn set_sell_price(&mut self, raw: &str) {
        self.sell_price = format_for_editing(raw);
    }

    /// `>` / `<` buttons. The owned value stays within the material's limit.
    pub fn step_owned(&mut self, recipe: &Recipe, idx: usize, delta: i64) {
        let Some(max) = recipe.material(idx).map(|m| m.max_owned) else {
            return;
        };
        if let Some(input) = self.material_mut(idx) {
            let mut counter = OwnedCounter::from_text(&input.owned, max);
            counter.step(delta);
            input.owned = counter.to_text();
        }
    }

    /// Marks every material as fully owned.
    pub fn fill_owned(&mut self, recipe: &Recipe) {
        for (idx, material) in recipe.materials.iter().enumerate() {
            if let Some(input) = self.material_mut(idx) {
                input.owned = OwnedCounter::new(material.required, material.max_owned).to_text();
            }
        }
    }

    pub fn clear_owned(&mut self, recipe: &Recipe) {
        for idx in 0..recipe.materials.len() {
            if let Some(input) = self.material_mut(idx) {
                input.owned = "0".to_string();
            }
        }
    }

    /// Adds `delta` to one material's price, never going below zero.
    pub fn nudge_price(&mut self, idx: usize, delta: i64) {
        if let Some(input) = self.material_mut(idx) {
            let current = parse_amount(&input.price);
            let next = if delta < 0 {
                current.saturating_sub(delta.unsigned_abs())
            } else {
                current.saturating_add(delta.unsigned_abs())
            };
            input.price = format_money(Some(next as f64));
        }
    }

    /// Clears every price field including the sell price.
    pub fn reset_prices(&mut self) {
        for input in &mut self.materials {
            input.price.clear();
        }
        self.sell_price.clear();
    }
}
