use super::{
    app_state::FormState,
    entities::{to_money, FinancialSummary, LineResult, MaterialSpec},
    numeric::parse_amount,
    recipe::Recipe,
};

/// Shortage and cost for a single material row.
pub fn compute_line(required: u64, owned_raw: &str, price_raw: &str) -> LineResult {
    let owned = parse_amount(owned_raw);
    let price = parse_amount(price_raw);
    let shortage = required.saturating_sub(owned);

    LineResult {
        shortage,
        line_cost: price.saturating_mul(shortage),
    }
}

/// Totals for the whole form. `tax_rate_percent` is a percentage, e.g. `5.0`.
pub fn compute_summary(
    line_costs: &[u64],
    sell_price_raw: &str,
    tax_rate_percent: f64,
) -> FinancialSummary {
    let total_expenses = to_money(
        line_costs
            .iter()
            .fold(0_u64, |acc, cost| acc.saturating_add(*cost)),
    );
    let total_revenue = to_money(parse_amount(sell_price_raw));
    let gross_profit = total_revenue.saturating_sub(total_expenses);
    let tax = compute_tax(total_revenue, tax_rate_percent);
    let net_income = gross_profit.saturating_sub(tax);

    let net_income_percent = if total_revenue == 0 {
        0.0
    } else {
        (net_income as f64 / total_revenue as f64) * 100.0
    };

    FinancialSummary {
        total_expenses,
        total_revenue,
        gross_profit,
        tax,
        net_income,
        net_income_percent: if net_income_percent.is_finite() {
            net_income_percent
        } else {
            0.0
        },
    }
}

fn compute_tax(total_revenue: i64, tax_rate_percent: f64) -> i64 {
    if !tax_rate_percent.is_finite() {
        return 0;
    }
    let tax = ((total_revenue as f64 * tax_rate_percent) / 100.0).floor();
    // `as` saturates, NaN becomes 0.
    (tax as i64).max(0)
}

/// Warning shown under a row that still needs materials.
pub fn shortage_notice(shortage: u64) -> Option<String> {
    (shortage > 0).then(|| format!("ยังขาดอีก {shortage} ชิ้น"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialLine {
    pub material: MaterialSpec,
    pub owned: u64,
    pub result: LineResult,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub lines: Vec<MaterialLine>,
    pub summary: FinancialSummary,
    pub tax_rate_percent: f64,
}

/// Runs every derived computation for the current form contents.
pub fn evaluate_form(state: &FormState, recipe: &Recipe) -> Evaluation {
    let lines: Vec<MaterialLine> = recipe
        .materials
        .iter()
        .enumerate()
        .map(|(idx, material)| {
            let input = state.material(idx);
            let owned_raw = input.map(|i| i.owned.as_str()).unwrap_or_default();
            let price_raw = input.map(|i| i.price.as_str()).unwrap_or_default();
            MaterialLine {
                material: material.clone(),
                owned: parse_amount(owned_raw),
                result: compute_line(material.required, owned_raw, price_raw),
            }
        })
        .collect();

    let costs: Vec<u64> = lines.iter().map(|line| line.result.line_cost).collect();
    let summary = compute_summary(&costs, &state.sell_price, recipe.tax_rate_percent);

    Evaluation {
        lines,
        summary,
        tax_rate_percent: recipe.tax_rate_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_cost_uses_remaining_quantity() {
        let line = compute_line(10, "5", "6000");
        assert_eq!(line.shortage, 5);
        assert_eq!(line.line_cost, 30_000);
    }

    #[test]
    fn fully_owned_material_costs_nothing() {
        let line = compute_line(10, "10", "6000");
        assert_eq!(line, LineResult { shortage: 0, line_cost: 0 });

        let over = compute_line(10, "25", "6,000");
        assert_eq!(over.shortage, 0);
        assert_eq!(over.line_cost, 0);
    }

    #[test]
    fn empty_fields_are_zero() {
        let line = compute_line(50, "", "");
        assert_eq!(line.shortage, 50);
        assert_eq!(line.line_cost, 0);
    }

    #[test]
    fn summary_matches_reference_math() {
        let summary = compute_summary(&[3_000_000], "12,000,000", 5.0);
        assert_eq!(summary.gross_profit, 9_000_000);
        assert_eq!(summary.tax, 600_000);
        assert_eq!(summary.net_income, 8_400_000);
        assert!((summary.net_income_percent - 70.0).abs() < 1e-9);
    }

    #[test]
    fn default_recipe_end_to_end() {
        let lines = [
            compute_line(10, "0", "6,000").line_cost,
            compute_line(10, "0", "800,000").line_cost,
            compute_line(50, "50", "28,000").line_cost,
        ];
        let summary = compute_summary(&lines, "12,000,000", 5.0);

        assert_eq!(summary.total_expenses, 8_060_000);
        assert_eq!(summary.total_revenue, 12_000_000);
        assert_eq!(summary.gross_profit, 3_940_000);
        assert_eq!(summary.tax, 600_000);
        assert_eq!(summary.net_income, 3_340_000);
        assert!((summary.net_income_percent - 27.833_333).abs() < 1e-4);
    }

    #[test]
    fn zero_revenue_gives_zero_percent() {
        let summary = compute_summary(&[1_000], "", 5.0);
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.tax, 0);
        assert_eq!(summary.gross_profit, -1_000);
        assert_eq!(summary.net_income, -1_000);
        assert_eq!(summary.net_income_percent, 0.0);
    }

    #[test]
    fn gross_profit_is_not_floored() {
        let summary = compute_summary(&[10_000_000], "1,000,000", 5.0);
        assert_eq!(summary.gross_profit, -9_000_000);
        assert_eq!(summary.tax, 50_000);
        assert_eq!(summary.net_income, -9_050_000);
        assert!(summary.is_loss());
    }

    #[test]
    fn tax_floors_and_honours_rate() {
        assert_eq!(compute_summary(&[], "199", 5.0).tax, 9);
        assert_eq!(compute_summary(&[], "1,000", 12.5).tax, 125);
        assert_eq!(compute_summary(&[], "1,000", 0.0).tax, 0);
        assert_eq!(compute_summary(&[], "1,000", -5.0).tax, 0);
        assert_eq!(compute_summary(&[], "1,000", f64::NAN).tax, 0);
    }

    #[test]
    fn sell_price_does_not_touch_expenses() {
        let costs = [60_000, 8_000_000];
        let a = compute_summary(&costs, "12,000,000", 5.0);
        let b = compute_summary(&costs, "1", 5.0);
        assert_eq!(a.total_expenses, b.total_expenses);
    }

    #[test]
    fn costs_do_not_touch_revenue() {
        let a = compute_summary(&[compute_line(10, "0", "6,000").line_cost], "500", 5.0);
        let b = compute_summary(&[compute_line(10, "3", "9,999").line_cost], "500", 5.0);
        assert_eq!(a.total_revenue, b.total_revenue);
        assert_eq!(a.tax, b.tax);
    }

    #[test]
    fn shortage_notice_only_when_short() {
        assert_eq!(shortage_notice(0), None);
        assert_eq!(shortage_notice(3).as_deref(), Some("ยังขาดอีก 3 ชิ้น"));
    }

    #[test]
    fn evaluate_form_uses_recipe_defaults() {
        let recipe = Recipe::default();
        let state = FormState::new(&recipe);

        let evaluation = evaluate_form(&state, &recipe);
        assert_eq!(evaluation.lines.len(), 3);
        assert_eq!(evaluation.lines[0].result.line_cost, 60_000);
        assert_eq!(evaluation.lines[1].result.line_cost, 8_000_000);
        assert_eq!(evaluation.lines[2].result.shortage, 0);
        assert_eq!(evaluation.summary.net_income, 3_340_000);
        assert_eq!(evaluation.tax_rate_percent, 5.0);
    }

    #[test]
    fn evaluate_form_tolerates_missing_rows() {
        let recipe = Recipe::default();
        let state = FormState::default();
        let evaluation = evaluate_form(&state, &recipe);
        assert_eq!(evaluation.summary.total_expenses, 0);
        assert_eq!(evaluation.lines[2].result.shortage, 50);
    }
}
