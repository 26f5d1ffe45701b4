use crate::club::{Club, DEFAULT_CLUB_RATING, Player};
use crate::league::{LeagueCollection, StandingsTracker};
use crate::r#match::{Match, MatchSquad, SquadSelector};
use crate::shared::{IdSequence, PeopleNameGeneratorData};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Everything the simulation owns. Cross references are ids resolved
/// through the lookups below.
#[derive(Debug)]
pub struct SimulatorData {
    pub date: NaiveDate,
    pub managed_club_id: Option<u32>,

    pub leagues: LeagueCollection,
    pub clubs: Vec<Club>,
    pub players: Vec<Player>,
    pub fixtures: Vec<Match>,
    pub standings: StandingsTracker,

    pub people_names: PeopleNameGeneratorData,
    pub player_ids: IdSequence,
    pub match_ids: IdSequence,

    club_index: HashMap<u32, usize>,
    player_index: HashMap<u32, usize>,
    fixture_index: HashMap<u32, usize>,
}

impl SimulatorData {
    pub fn new(
        date: NaiveDate,
        leagues: LeagueCollection,
        clubs: Vec<Club>,
        players: Vec<Player>,
        people_names: PeopleNameGeneratorData,
    ) -> Self {
        let player_ids = IdSequence::after(players.iter().map(|p| p.id));

        let mut data = SimulatorData {
            date,
            managed_club_id: None,
            leagues,
            clubs,
            players,
            fixtures: Vec::new(),
            standings: StandingsTracker::new(),
            people_names,
            player_ids,
            match_ids: IdSequence::default(),
            club_index: HashMap::new(),
            player_index: HashMap::new(),
            fixture_index: HashMap::new(),
        };

        data.club_index = Self::index(data.clubs.iter().map(|c| c.id));
        data.player_index = Self::index(data.players.iter().map(|p| p.id));

        data
    }

    fn index<I: Iterator<Item = u32>>(ids: I) -> HashMap<u32, usize> {
        ids.enumerate().map(|(idx, id)| (id, idx)).collect()
    }

    pub fn club(&self, id: u32) -> Option<&Club> {
        self.club_index.get(&id).map(|&idx| &self.clubs[idx])
    }

    pub fn club_rating(&self, id: u32) -> u8 {
        self.club(id).map(|c| c.rating).unwrap_or(DEFAULT_CLUB_RATING)
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.player_index.get(&id).map(|&idx| &self.players[idx])
    }

    pub fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.player_index.get(&id).map(|&idx| &mut self.players[idx])
    }

    pub fn club_players(&self, club_id: u32) -> Vec<&Player> {
        self.players.iter().filter(|p| p.plays_for(club_id)).collect()
    }

    pub fn free_agents(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_free_agent())
    }

    pub fn add_players(&mut self, players: Vec<Player>) {
        for player in players {
            self.player_index.insert(player.id, self.players.len());
            self.players.push(player);
        }
    }

    pub fn set_fixtures(&mut self, fixtures: Vec<Match>) {
        self.fixture_index = Self::index(fixtures.iter().map(|m| m.id));
        self.fixtures = fixtures;
    }

    pub fn fixture(&self, id: u32) -> Option<&Match> {
        self.fixture_index.get(&id).map(|&idx| &self.fixtures[idx])
    }

    pub fn fixture_mut(&mut self, id: u32) -> Option<&mut Match> {
        self.fixture_index.get(&id).map(|&idx| &mut self.fixtures[idx])
    }

    /// Folds a played league fixture into its table.
    pub fn record_standings(&mut self, match_id: u32) -> bool {
        match self.fixture_index.get(&match_id) {
            Some(&idx) => self.standings.record(&self.fixtures[idx]),
            None => false,
        }
    }

    /// Matchday squad for a club. Unknown clubs field nobody at the
    /// default rating.
    pub fn squad(&self, club_id: u32, club_name: &str) -> MatchSquad {
        match self.club(club_id) {
            Some(club) => SquadSelector::select(club, &self.club_players(club_id)),
            None => MatchSquad::empty(club_id, club_name, DEFAULT_CLUB_RATING),
        }
    }

    pub fn managed_club(&self) -> Option<&Club> {
        self.managed_club_id.and_then(|id| self.club(id))
    }

    pub fn is_managed(&self, fixture: &Match) -> bool {
        self.managed_club_id
            .is_some_and(|club_id| fixture.involves(club_id))
    }
}
