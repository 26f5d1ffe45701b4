/// Owned by the finance and negotiation side of the game. The season engine
/// reads these values but never validates or changes them.
#[derive(Debug, Clone, Default)]
pub struct ClubFinances {
    pub balance: i64,
    pub wage_budget: i64,
    pub transfer_budget: i64,
}

impl ClubFinances {
    pub fn new(balance: i64, wage_budget: i64, transfer_budget: i64) -> Self {
        ClubFinances {
            balance,
            wage_budget,
            transfer_budget,
        }
    }
}
