use crate::club::{PlayerGenerator, PlayerPositionType};
use crate::league::{FixtureScheduler, LeagueTableRow, ScheduleContext, ScheduleReport};
use crate::r#match::Match;
use crate::simulator::{ClockState, DayResult, MatchdayResolver, SeasonClock, SimulationSettings, SimulatorData};
use crate::utils::Logging;
use chrono::NaiveDate;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

const FREE_AGENT_POSITIONS: [PlayerPositionType; 4] = [
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::MidfielderCenter,
    PlayerPositionType::Striker,
];

/// Driver facade over a single simulation context.
pub struct FootballSimulator {
    data: SimulatorData,
    settings: SimulationSettings,
    clock: SeasonClock,
    rng: StdRng,
    schedule_report: Option<ScheduleReport>,
}

impl FootballSimulator {
    pub fn new(data: SimulatorData, settings: SimulationSettings, seed: u64) -> Self {
        FootballSimulator {
            data,
            settings,
            clock: SeasonClock::new(),
            rng: StdRng::seed_from_u64(seed),
            schedule_report: None,
        }
    }

    /// Schedules the season around `club_id`, resets the tables and seeds the
    /// free-agent pool. Unknown clubs start nothing.
    pub fn start_new_game(&mut self, club_id: u32) -> Option<&ScheduleReport> {
        let Some(club) = self.data.club(club_id) else {
            warn!("club {} not found, game not started", club_id);
            return None;
        };

        info!("⚽ new game: managing {}", club.name);

        self.data.managed_club_id = Some(club_id);

        let scheduler = FixtureScheduler::new(self.settings.schedule.clone());

        let schedule = Logging::estimate_result(
            || {
                let ctx = ScheduleContext {
                    leagues: &self.data.leagues.leagues,
                    clubs: &self.data.clubs,
                    managed_club_id: club_id,
                    today: self.data.date,
                };

                scheduler.generate(&ctx, &mut self.data.match_ids, &mut self.rng)
            },
            "season scheduled",
        );

        self.data.set_fixtures(schedule.fixtures);

        let league_ids: Vec<u32> = self.data.leagues.iter().map(|l| l.id).collect();
        self.data.standings.init(&league_ids, &self.data.clubs);

        self.seed_free_agents();

        self.clock = SeasonClock::new();
        self.schedule_report = Some(schedule.report);

        self.schedule_report.as_ref()
    }

    fn seed_free_agents(&mut self) {
        let generator = PlayerGenerator::with_people_names(&self.data.people_names);

        let free_agents: Vec<_> = (0..self.settings.free_agents_count)
            .map(|idx| {
                generator.generate(
                    &mut self.rng,
                    self.data.player_ids.next_id(),
                    self.data.date,
                    FREE_AGENT_POSITIONS[idx % FREE_AGENT_POSITIONS.len()],
                    self.settings.free_agents_level,
                    self.settings.free_agents_min_age,
                    self.settings.free_agents_max_age,
                    None,
                )
            })
            .collect();

        info!("👤 free agents available: {}", free_agents.len());

        self.data.add_players(free_agents);
    }

    /// Resolves the managed fixture blocking today and every other open
    /// fixture on the same date. The date does not move. Any other fixture
    /// resolves nothing.
    pub fn play_match(&mut self, match_id: u32) -> Option<Vec<u32>> {
        if self.clock_state() != (ClockState::Blocked { match_id }) {
            return None;
        }

        let date = self.data.fixture(match_id)?.date;

        let match_ids: Vec<u32> = std::iter::once(match_id)
            .chain(
                self.data
                    .fixtures
                    .iter()
                    .filter(|m| m.date == date && !m.is_played && m.id != match_id)
                    .map(|m| m.id),
            )
            .collect();

        Some(MatchdayResolver::resolve(&mut self.data, &match_ids, &mut self.rng))
    }

    pub fn advance_day(&mut self) -> DayResult {
        self.clock.advance(&mut self.data, &self.settings, &mut self.rng)
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock.state(&self.data)
    }

    pub fn can_advance(&self) -> bool {
        self.clock_state() == ClockState::Free
    }

    pub fn is_season_complete(&self) -> bool {
        !self.data.fixtures.is_empty() && self.data.fixtures.iter().all(|m| m.is_played)
    }

    fn managed_fixtures(&self) -> impl Iterator<Item = &Match> {
        self.data
            .fixtures
            .iter()
            .filter(|m| self.data.is_managed(m))
    }

    pub fn next_match(&self) -> Option<&Match> {
        self.managed_fixtures().find(|m| !m.is_played)
    }

    pub fn upcoming_fixtures(&self, limit: usize) -> Vec<&Match> {
        self.managed_fixtures()
            .filter(|m| !m.is_played)
            .take(limit)
            .collect()
    }

    /// Most recent first.
    pub fn recent_results(&self, limit: usize) -> Vec<&Match> {
        let mut played: Vec<&Match> = self.managed_fixtures().filter(|m| m.is_played).collect();

        played.reverse();
        played.truncate(limit);

        played
    }

    pub fn current_league_standings(&self) -> Vec<&LeagueTableRow> {
        self.data
            .managed_club()
            .map(|club| self.data.standings.standings(club.league_id))
            .unwrap_or_default()
    }

    pub fn date(&self) -> NaiveDate {
        self.data.date
    }

    pub fn days_elapsed(&self) -> u32 {
        self.clock.days_elapsed()
    }

    pub fn data(&self) -> &SimulatorData {
        &self.data
    }

    pub fn schedule_report(&self) -> Option<&ScheduleReport> {
        self.schedule_report.as_ref()
    }
}
