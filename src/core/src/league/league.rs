#[derive(Debug, Clone)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub country: String,
    pub tier: u8,

    /// Ceiling for club ratings in this division.
    pub max_rating: u8,

    pub has_national_cup: bool,

    pub promotion_slots: u8,
    pub relegation_slots: u8,
}

impl League {
    pub fn new(id: u32, name: String, slug: String, country: String, tier: u8) -> Self {
        League {
            id,
            name,
            slug,
            country,
            tier,
            max_rating: 100,
            has_national_cup: false,
            promotion_slots: 0,
            relegation_slots: 0,
        }
    }

    pub fn with_max_rating(mut self, max_rating: u8) -> Self {
        self.max_rating = max_rating;
        self
    }

    pub fn with_national_cup(mut self, has_national_cup: bool) -> Self {
        self.has_national_cup = has_national_cup;
        self
    }

    pub fn with_movement(mut self, promotion_slots: u8, relegation_slots: u8) -> Self {
        self.promotion_slots = promotion_slots;
        self.relegation_slots = relegation_slots;
        self
    }
}

#[derive(Debug, Default)]
pub struct LeagueCollection {
    pub leagues: Vec<League>,
}

impl LeagueCollection {
    pub fn new(leagues: Vec<League>) -> Self {
        LeagueCollection { leagues }
    }

    pub fn get(&self, id: u32) -> Option<&League> {
        self.leagues.iter().find(|league| league.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &League> {
        self.leagues.iter()
    }

    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}
