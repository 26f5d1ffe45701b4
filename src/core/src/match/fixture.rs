use crate::r#match::{MatchEvent, MatchSide};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MatchType {
    Friendly,
    League,
    NationalCup,
    Continental,
}

impl Display for MatchType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            MatchType::Friendly => write!(f, "Friendly"),
            MatchType::League => write!(f, "League"),
            MatchType::NationalCup => write!(f, "National Cup"),
            MatchType::Continental => write!(f, "Continental"),
        }
    }
}

/// A scheduled fixture. Created empty by the scheduler and filled in once,
/// in place, when the match is resolved.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub id: u32,
    pub home_club_id: u32,
    pub away_club_id: u32,
    pub home_club_name: String,
    pub away_club_name: String,
    pub match_type: MatchType,
    pub date: NaiveDate,
    pub league_id: Option<u32>,
    pub matchday: Option<u8>,

    pub home_score: u8,
    pub away_score: u8,
    pub is_played: bool,
    pub events: Vec<MatchEvent>,
    pub home_possession: u8,
    pub away_possession: u8,
    pub home_shots: u8,
    pub away_shots: u8,
    pub home_shots_on_target: u8,
    pub away_shots_on_target: u8,
    pub player_ratings: HashMap<u32, f32>,
}

impl Match {
    pub fn new(
        id: u32,
        home_club: (u32, &str),
        away_club: (u32, &str),
        match_type: MatchType,
        date: NaiveDate,
    ) -> Self {
        Match {
            id,
            home_club_id: home_club.0,
            away_club_id: away_club.0,
            home_club_name: home_club.1.to_string(),
            away_club_name: away_club.1.to_string(),
            match_type,
            date,
            league_id: None,
            matchday: None,
            home_score: 0,
            away_score: 0,
            is_played: false,
            events: Vec::new(),
            home_possession: 0,
            away_possession: 0,
            home_shots: 0,
            away_shots: 0,
            home_shots_on_target: 0,
            away_shots_on_target: 0,
            player_ratings: HashMap::new(),
        }
    }

    pub fn with_league(mut self, league_id: u32, matchday: u8) -> Self {
        self.league_id = Some(league_id);
        self.matchday = Some(matchday);
        self
    }

    pub fn is_league(&self) -> bool {
        self.match_type == MatchType::League && self.league_id.is_some()
    }

    pub fn involves(&self, club_id: u32) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }

    pub fn side_of(&self, club_id: u32) -> Option<MatchSide> {
        if self.home_club_id == club_id {
            Some(MatchSide::Home)
        } else if self.away_club_id == club_id {
            Some(MatchSide::Away)
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<MatchSide> {
        if !self.is_played || self.home_score == self.away_score {
            return None;
        }

        if self.home_score > self.away_score {
            Some(MatchSide::Home)
        } else {
            Some(MatchSide::Away)
        }
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_played {
            write!(
                f,
                "{} {} - {} {}",
                self.home_club_name, self.home_score, self.away_score, self.away_club_name
            )
        } else {
            write!(f, "{} vs {}", self.home_club_name, self.away_club_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_is_unplayed() {
        let m = test_match();

        assert!(!m.is_played);
        assert!(m.events.is_empty());
        assert!(m.player_ratings.is_empty());
        assert_eq!(m.winner(), None);
        assert_eq!(m.to_string(), "Alpha vs Beta");
    }

    #[test]
    fn sides_and_winner() {
        let mut m = test_match();

        assert_eq!(m.side_of(1), Some(MatchSide::Home));
        assert_eq!(m.side_of(2), Some(MatchSide::Away));
        assert_eq!(m.side_of(3), None);

        m.is_played = true;
        m.away_score = 2;

        assert_eq!(m.winner(), Some(MatchSide::Away));
        assert_eq!(m.to_string(), "Alpha 0 - 2 Beta");
    }

    #[test]
    fn league_attribution() {
        let m = test_match();
        assert!(!m.is_league());

        let m = Match::new(2, (1, "Alpha"), (2, "Beta"), MatchType::League, m.date).with_league(4, 1);
        assert!(m.is_league());
        assert_eq!(m.matchday, Some(1));
    }

    fn test_match() -> Match {
        Match::new(
            1,
            (1, "Alpha"),
            (2, "Beta"),
            MatchType::Friendly,
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
        )
    }
}
