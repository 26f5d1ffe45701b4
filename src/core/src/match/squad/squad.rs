use crate::club::{Player, PlayerPositionType};

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,
    pub overall: u8,
}

impl MatchPlayer {
    pub fn from_player(player: &Player, position: PlayerPositionType) -> Self {
        MatchPlayer {
            id: player.id,
            name: player.display_name(),
            position,
            overall: player.skills.overall,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    pub fn is_attacking(&self) -> bool {
        self.position.is_attacking()
    }
}

#[derive(Debug, Clone)]
pub struct MatchSquad {
    pub club_id: u32,
    pub club_name: String,
    pub rating: u8,
    pub main_squad: Vec<MatchPlayer>,
    pub substitutes: Vec<MatchPlayer>,
}

impl MatchSquad {
    pub fn empty(club_id: u32, club_name: &str, rating: u8) -> Self {
        MatchSquad {
            club_id,
            club_name: club_name.to_string(),
            rating,
            main_squad: Vec::new(),
            substitutes: Vec::new(),
        }
    }

    pub fn player_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.main_squad.iter().map(|p| p.id)
    }
}
