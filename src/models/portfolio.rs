/// Outcome of a total-balance computation
///
/// The total is a best-effort partial sum: tokens whose price lookup or
/// conversion failed contribute nothing and are listed in
/// `skipped_tokens` instead.
#[derive(Debug, Clone, Default)]
pub struct BalanceBreakdown {
    /// Sum of the fiat values of all successfully priced holdings
    pub total: f64,
    /// Addresses of tokens dropped from the sum
    pub skipped_tokens: Vec<String>,
}

impl BalanceBreakdown {
    /// Whether every holding contributed to the total
    pub fn is_complete(&self) -> bool {
        self.skipped_tokens.is_empty()
    }
}
