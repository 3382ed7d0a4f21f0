use serde::{Deserialize, Serialize};

use super::{
    entities::to_money,
    evaluation::{shortage_notice, Evaluation},
    numeric::{format_grouped, format_percent},
};

/// Display-ready snapshot of an [`Evaluation`].
///
/// The UI renders straight from this; it also serializes cleanly for callers
/// that want the numbers without the desktop shell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub lines: Vec<LineReport>,
    pub total_expenses: i64,
    pub total_revenue: i64,
    pub gross_profit: i64,
    pub tax: i64,
    pub net_income: i64,
    pub net_income_percent: f64,
    pub tax_rate_percent: f64,
    pub is_loss: bool,
    pub display: SummaryDisplay,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineReport {
    pub key: String,
    pub name_jp: String,
    pub name_en: String,
    pub required: u64,
    pub max_owned: u64,
    pub owned: u64,
    pub shortage: u64,
    pub line_cost: u64,
    pub line_cost_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDisplay {
    pub total_expenses: String,
    pub total_revenue: String,
    pub gross_profit: String,
    pub tax: String,
    pub net_income: String,
    pub net_income_percent: String,
}

impl From<&Evaluation> for CalculationReport {
    fn from(evaluation: &Evaluation) -> Self {
        let summary = &evaluation.summary;
        let percent = summary.display_percent();

        let lines = evaluation
            .lines
            .iter()
            .map(|line| LineReport {
                key: line.material.key.clone(),
                name_jp: line.material.name_jp.clone(),
                name_en: line.material.name_en.clone(),
                required: line.material.required,
                max_owned: line.material.max_owned,
                owned: line.owned,
                shortage: line.result.shortage,
                line_cost: line.result.line_cost,
                line_cost_display: format_grouped(to_money(line.result.line_cost)),
                notice: shortage_notice(line.result.shortage),
            })
            .collect();

        CalculationReport {
            lines,
            total_expenses: summary.total_expenses,
            total_revenue: summary.total_revenue,
            gross_profit: summary.gross_profit,
            tax: summary.tax,
            net_income: summary.net_income,
            net_income_percent: percent,
            tax_rate_percent: evaluation.tax_rate_percent,
            is_loss: summary.is_loss(),
            display: SummaryDisplay {
                total_expenses: format_grouped(summary.total_expenses),
                total_revenue: format_grouped(summary.total_revenue),
                gross_profit: format_grouped(summary.gross_profit),
                tax: format_grouped(summary.tax),
                net_income: format_grouped(summary.net_income),
                net_income_percent: format_percent(percent),
            },
        }
    }
}
