use crate::club::academy::ClubAcademy;
use crate::club::ClubFinances;

pub const DEFAULT_CLUB_RATING: u8 = 50;
pub const DEFAULT_FORMATION: &str = "4-4-2";

#[derive(Debug, Clone)]
pub struct Club {
    pub id: u32,
    pub name: String,
    pub league_id: u32,

    /// Overall strength, 1-100.
    pub rating: u8,

    pub formation: String,

    pub finance: ClubFinances,

    pub academy: ClubAcademy,
}

impl Club {
    pub fn new(
        id: u32,
        name: String,
        league_id: u32,
        rating: u8,
        formation: String,
        finance: ClubFinances,
        academy: ClubAcademy,
    ) -> Self {
        Club {
            id,
            name,
            league_id,
            rating: rating.clamp(1, 100),
            formation,
            finance,
            academy,
        }
    }
}
