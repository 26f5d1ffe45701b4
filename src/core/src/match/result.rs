use crate::r#match::{Match, MatchEvent, MatchSide, MatchSquad};
use crate::simulator::SimulatorData;
use log::debug;
use std::collections::HashMap;

const MORALE_WIN_CHANGE: i16 = 5;
const MORALE_LOSS_CHANGE: i16 = -5;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MatchPlayerStatistics {
    pub goals: u8,
    pub assists: u8,
    pub yellow_cards: u8,
    pub red_cards: u8,
}

/// Whether a league result is folded into the table as soon as it is
/// written, or left for the caller to fold in a batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StandingsUpdate {
    Immediate,
    Deferred,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub match_id: u32,

    pub home_score: u8,
    pub away_score: u8,
    pub home_possession: u8,
    pub away_possession: u8,
    pub home_shots: u8,
    pub away_shots: u8,
    pub home_shots_on_target: u8,
    pub away_shots_on_target: u8,

    pub events: Vec<MatchEvent>,
    pub player_ratings: HashMap<u32, f32>,
    pub player_statistics: HashMap<u32, MatchPlayerStatistics>,

    /// Starting elevens
    pub home_players: Vec<u32>,
    pub away_players: Vec<u32>,
}

impl MatchResult {
    pub fn new(match_id: u32, home: &MatchSquad, away: &MatchSquad) -> Self {
        MatchResult {
            match_id,
            home_score: 0,
            away_score: 0,
            home_possession: 50,
            away_possession: 50,
            home_shots: 0,
            away_shots: 0,
            home_shots_on_target: 0,
            away_shots_on_target: 0,
            events: Vec::new(),
            player_ratings: HashMap::new(),
            player_statistics: HashMap::new(),
            home_players: home.player_ids().collect(),
            away_players: away.player_ids().collect(),
        }
    }

    /// Fills an unplayed fixture. A fixture that already has a result is
    /// left untouched and `false` is returned.
    pub fn write_to(&self, fixture: &mut Match) -> bool {
        if fixture.is_played {
            debug!("match {} already played, result ignored", fixture.id);
            return false;
        }

        fixture.home_score = self.home_score;
        fixture.away_score = self.away_score;
        fixture.home_possession = self.home_possession;
        fixture.away_possession = self.away_possession;
        fixture.home_shots = self.home_shots;
        fixture.away_shots = self.away_shots;
        fixture.home_shots_on_target = self.home_shots_on_target;
        fixture.away_shots_on_target = self.away_shots_on_target;
        fixture.events = self.events.clone();
        fixture.player_ratings = self.player_ratings.clone();
        fixture.is_played = true;

        true
    }

    /// Writes the result into the context: fixture, player counters, morale
    /// and, unless deferred, the league table. Returns `false` when the
    /// fixture is unknown or was already played.
    pub fn process(self, data: &mut SimulatorData, standings: StandingsUpdate) -> bool {
        let Some(fixture) = data.fixture_mut(self.match_id) else {
            debug!("match {} not found, result ignored", self.match_id);
            return false;
        };

        if !self.write_to(fixture) {
            return false;
        }

        debug!("⚽ {}: {}", fixture.match_type, fixture);

        let winner = fixture.winner();

        for (side, player_ids) in [
            (MatchSide::Home, &self.home_players),
            (MatchSide::Away, &self.away_players),
        ] {
            let morale_change = match winner {
                Some(winner) if winner == side => MORALE_WIN_CHANGE,
                Some(_) => MORALE_LOSS_CHANGE,
                None => 0,
            };

            for player_id in player_ids {
                if let Some(player) = data.player_mut(*player_id) {
                    player.statistics.played += 1;
                    player.change_morale(morale_change);
                }
            }
        }

        for (player_id, statistics) in &self.player_statistics {
            if let Some(player) = data.player_mut(*player_id) {
                player.statistics.goals += statistics.goals as u16;
                player.statistics.assists += statistics.assists as u16;
                player.discipline.yellow_cards += statistics.yellow_cards as u16;
                player.discipline.red_cards += statistics.red_cards as u16;
            }
        }

        if standings == StandingsUpdate::Immediate {
            data.record_standings(self.match_id);
        }

        true
    }
}
