use serde::Deserialize;

const STATIC_LEAGUES_JSON: &str = include_str!("../data/leagues.json");

#[derive(Deserialize)]
pub struct LeagueEntity {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub country: String,
    pub tier: u8,
    pub max_rating: u8,
    pub has_national_cup: bool,
    pub promotion_slots: u8,
    pub relegation_slots: u8,
}

pub struct LeagueLoader;

impl LeagueLoader {
    pub fn load() -> Result<Vec<LeagueEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_LEAGUES_JSON)
    }
}
