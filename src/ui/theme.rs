//! Class helpers so figures are coloured the same way everywhere.

/// How a money figure should read at a glance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Cost,
    Gain,
    Loss,
    Neutral,
}

impl Tone {
    /// Profit-like figures: negative reads as a loss.
    pub fn for_profit(value: i64) -> Self {
        if value < 0 {
            Tone::Loss
        } else {
            Tone::Gain
        }
    }
}

pub fn highlight(tone: Tone) -> &'static str {
    match tone {
        Tone::Cost => "hl-cost",
        Tone::Gain => "hl-gain",
        Tone::Loss => "hl-loss",
        Tone::Neutral => "",
    }
}

pub fn kpi_value(tone: Tone) -> &'static str {
    match tone {
        Tone::Loss => "kpi-value loss",
        _ => "kpi-value",
    }
}

pub fn step_button(increment: bool) -> &'static str {
    if increment {
        "btn btn-inc"
    } else {
        "btn btn-dec"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_profit_is_a_loss() {
        assert_eq!(Tone::for_profit(-1), Tone::Loss);
        assert_eq!(Tone::for_profit(0), Tone::Gain);
        assert_eq!(kpi_value(Tone::for_profit(-5)), "kpi-value loss");
        assert_eq!(highlight(Tone::Cost), "hl-cost");
    }
}
