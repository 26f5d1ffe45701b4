use serde::Deserialize;

const STATIC_CLUBS_JSON: &str = include_str!("../data/clubs.json");

#[derive(Deserialize)]
pub struct ClubEntity {
    pub id: u32,
    pub name: String,
    pub league_id: u32,
    pub rating: u8,
    pub formation: String,
    pub academy_level: u8,
    pub finance: ClubFinanceEntity,
}

#[derive(Deserialize)]
pub struct ClubFinanceEntity {
    pub balance: i64,
    pub wage_budget: i64,
    pub transfer_budget: i64,
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> Result<Vec<ClubEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_CLUBS_JSON)
    }
}
