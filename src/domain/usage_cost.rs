#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageCost {
    pub tokens: u64,
    pub dollars: f64,
}

impl UsageCost {
    pub const ZERO: Self = Self {
        tokens: 0,
        dollars: 0.0,
    };

    pub fn new(tokens: u64, dollars: f64) -> Self {
        Self { tokens, dollars }
    }
}
