//! Calculator domain: text normalization, per-material and whole-form math.

pub mod app_state;
pub mod counter;
pub mod entities;
pub mod evaluation;
pub mod numeric;
pub mod recipe;
pub mod report;

#[allow(unused_imports)]
pub use app_state::FormState;
#[allow(unused_imports)]
pub use counter::OwnedCounter;
#[allow(unused_imports)]
pub use entities::{FinancialSummary, LineResult, MaterialInput, MaterialSpec};
#[allow(unused_imports)]
pub use evaluation::{
    compute_line, compute_summary, evaluate_form, shortage_notice, Evaluation, MaterialLine,
};
#[allow(unused_imports)]
pub use numeric::{format_for_editing, format_grouped, format_money, format_percent, parse_amount};
#[allow(unused_imports)]
pub use recipe::{Recipe, RecipeError};
#[allow(unused_imports)]
pub use report::{CalculationReport, LineReport, SummaryDisplay};
