use crate::r#match::Match;
use crate::Club;
use itertools::Itertools;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One club's accumulated record in a league. Points and goal difference are
/// always derived from the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueTableRow {
    pub club_id: u32,
    pub club_name: String,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u16,
    pub goals_against: u16,
}

impl LeagueTableRow {
    pub fn new(club_id: u32, club_name: String) -> Self {
        LeagueTableRow {
            club_id,
            club_name,
            ..Default::default()
        }
    }

    pub fn points(&self) -> u16 {
        3 * self.won as u16 + self.drawn as u16
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;

        match scored.cmp(&conceded) {
            Ordering::Greater => self.won += 1,
            Ordering::Equal => self.drawn += 1,
            Ordering::Less => self.lost += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeagueTable {
    pub league_id: u32,
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn new(league_id: u32, clubs: &[&Club]) -> Self {
        LeagueTable {
            league_id,
            rows: clubs
                .iter()
                .map(|club| LeagueTableRow::new(club.id, club.name.clone()))
                .collect(),
        }
    }

    pub fn row(&self, club_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|row| row.club_id == club_id)
    }

    /// Fold one finished match in. Clubs missing from the table are skipped.
    pub fn update(&mut self, home_club_id: u32, away_club_id: u32, home_score: u8, away_score: u8) {
        if let Some(home) = self.rows.iter_mut().find(|row| row.club_id == home_club_id) {
            home.record(home_score, away_score);
        }

        if let Some(away) = self.rows.iter_mut().find(|row| row.club_id == away_club_id) {
            away.record(away_score, home_score);
        }
    }

    /// Rows in display order: points, goal difference, goals scored.
    pub fn sorted_rows(&self) -> Vec<&LeagueTableRow> {
        self.rows
            .iter()
            .sorted_by(|a, b| {
                b.points()
                    .cmp(&a.points())
                    .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
                    .then_with(|| b.goals_for.cmp(&a.goals_for))
            })
            .collect()
    }

    pub fn position(&self, club_id: u32) -> Option<usize> {
        self.sorted_rows()
            .iter()
            .position(|row| row.club_id == club_id)
            .map(|index| index + 1)
    }
}

/// Owns one table per league, keyed by league id.
#[derive(Debug, Default)]
pub struct StandingsTracker {
    tables: HashMap<u32, LeagueTable>,
}

impl StandingsTracker {
    pub fn new() -> Self {
        StandingsTracker::default()
    }

    /// Fresh tables for every league, one row per member club.
    pub fn init(&mut self, league_ids: &[u32], clubs: &[Club]) {
        self.tables = league_ids
            .iter()
            .map(|&league_id| {
                let members: Vec<&Club> = clubs.iter().filter(|c| c.league_id == league_id).collect();
                (league_id, LeagueTable::new(league_id, &members))
            })
            .collect();
    }

    /// Friendlies, cup ties and unplayed matches are ignored.
    pub fn record(&mut self, m: &Match) -> bool {
        if !m.is_played || !m.is_league() {
            return false;
        }

        let Some(table) = m.league_id.and_then(|id| self.tables.get_mut(&id)) else {
            return false;
        };

        table.update(m.home_club_id, m.away_club_id, m.home_score, m.away_score);

        debug!("table {}: {}", table.league_id, m);

        true
    }

    pub fn record_all<'m, I: IntoIterator<Item = &'m Match>>(&mut self, matches: I) -> usize {
        matches.into_iter().filter(|m| self.record(m)).count()
    }

    pub fn table(&self, league_id: u32) -> Option<&LeagueTable> {
        self.tables.get(&league_id)
    }

    pub fn standings(&self, league_id: u32) -> Vec<&LeagueTableRow> {
        self.table(league_id)
            .map(|table| table.sorted_rows())
            .unwrap_or_default()
    }

    pub fn tables(&self) -> impl Iterator<Item = &LeagueTable> {
        self.tables.values()
    }
}
