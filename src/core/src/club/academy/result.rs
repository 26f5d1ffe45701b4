use crate::Player;

pub struct ProduceYouthPlayersResult {
    pub club_id: u32,
    pub players: Vec<Player>,
}

impl ProduceYouthPlayersResult {
    pub fn new(club_id: u32, players: Vec<Player>) -> Self {
        ProduceYouthPlayersResult { club_id, players }
    }

    pub fn empty(club_id: u32) -> Self {
        ProduceYouthPlayersResult::new(club_id, Vec::new())
    }
}
