use super::numeric::{format_for_editing, parse_amount};

/// Owned-amount counter driven by the `<` / `>` buttons of a material row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnedCounter {
    value: u64,
    max: u64,
}

impl OwnedCounter {
    /// Starting values above `max` are pulled back into range.
    pub fn new(value: u64, max: u64) -> Self {
        Self {
            value: value.min(max),
            max,
        }
    }

    pub fn from_text(raw: &str, max: u64) -> Self {
        Self::new(parse_amount(raw), max)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1).min(self.max);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Moves by `delta`, clamped to `[0, max]`.
    pub fn step(&mut self, delta: i64) {
        // Never more than `max` single steps are needed to hit either bound.
        for _ in 0..delta.unsigned_abs().min(self.max) {
            if delta < 0 {
                self.decrement();
            } else {
                self.increment();
            }
        }
    }

    pub fn to_text(&self) -> String {
        format_for_editing(&self.value().to_string())
    }
}
