use serde::{Deserialize, Serialize};

/// One ingredient of the recipe with its fixed requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub key: String,
    pub name_jp: String,
    pub name_en: String,
    pub required: u64,
    /// Upper bound for the owned counter.
    pub max_owned: u64,
    #[serde(default)]
    pub default_price: String,
    /// Owned amount the form starts with.
    #[serde(default)]
    pub default_owned: String,
}

/// Raw text the user has entered for one material row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialInput {
    #[serde(default)]
    pub owned: String,
    #[serde(default)]
    pub price: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResult {
    pub shortage: u64,
    pub line_cost: u64,
}

/// Whole-form totals. Money is signed because gross profit and net income
/// go negative when the materials cost more than the item sells for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_expenses: i64,
    pub total_revenue: i64,
    pub gross_profit: i64,
    pub tax: i64,
    pub net_income: i64,
    pub net_income_percent: f64,
}

impl FinancialSummary {
    /// Percent value safe to render.
    pub fn display_percent(&self) -> f64 {
        if self.net_income_percent.is_finite() {
            self.net_income_percent
        } else {
            0.0
        }
    }

    pub fn is_loss(&self) -> bool {
        self.net_income < 0
    }
}

pub(crate) fn to_money(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
