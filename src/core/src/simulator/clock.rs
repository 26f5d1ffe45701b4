use crate::simulator::{
    DayReport, DayResult, InjuryProcessor, MatchdayResolver, SimulationSettings, SimulatorData,
    TrainingProcessor, YouthIntakeProcessor,
};
use crate::utils::DateUtils;
use log::debug;
use rand::RngExt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClockState {
    Free,
    Blocked { match_id: u32 },
}

/// Moves "today" forward one day at a time and decides what gets
/// simulated on the way.
#[derive(Debug, Default)]
pub struct SeasonClock {
    days_elapsed: u32,
}

impl SeasonClock {
    pub fn new() -> Self {
        SeasonClock::default()
    }

    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    pub fn state(&self, data: &SimulatorData) -> ClockState {
        data.managed_club_id
            .and_then(|club_id| {
                data.fixtures
                    .iter()
                    .find(|m| !m.is_played && m.date == data.date && m.involves(club_id))
            })
            .map(|m| ClockState::Blocked { match_id: m.id })
            .unwrap_or(ClockState::Free)
    }

    pub fn advance<R: RngExt + ?Sized>(
        &mut self,
        data: &mut SimulatorData,
        settings: &SimulationSettings,
        rng: &mut R,
    ) -> DayResult {
        if let ClockState::Blocked { match_id } = self.state(data) {
            debug!("clock blocked by match {}", match_id);
            return DayResult::Blocked { match_id };
        }

        data.date = DateUtils::add_days(data.date, 1);

        // Catch-up sweep: everything open up to today except the managed club's
        let due: Vec<u32> = data
            .fixtures
            .iter()
            .filter(|m| !m.is_played && m.date <= data.date && !data.is_managed(m))
            .map(|m| m.id)
            .collect();

        self.days_elapsed += 1;

        let mut report = DayReport::new(data.date, self.days_elapsed);

        report.resolved = MatchdayResolver::resolve(data, &due, rng);

        if Self::is_due(self.days_elapsed, settings.injury_cadence_days) {
            report.injuries = Some(InjuryProcessor::process(
                data,
                settings.weekly_injury_chance,
                rng,
            ));
        }

        if Self::is_due(self.days_elapsed, settings.training_cadence_days) {
            report.training = Some(TrainingProcessor::process(data, rng));
        }

        if Self::is_due(self.days_elapsed, settings.youth_intake_cadence_days) {
            report.youth_intake = Some(YouthIntakeProcessor::process(data, rng));
        }

        debug!(
            "day {} ({}): {} matches resolved",
            report.day,
            report.date,
            report.resolved.len()
        );

        DayResult::Advanced(report)
    }

    fn is_due(day: u32, cadence: u32) -> bool {
        cadence > 0 && day % cadence == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Club, ClubAcademy, ClubFinances};
    use crate::league::LeagueCollection;
    use crate::r#match::{Match, MatchType};
    use crate::shared::PeopleNameGeneratorData;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn processors_fire_by_day_count() {
        let mut data = data();
        let settings = SimulationSettings::default();
        let mut clock = SeasonClock::new();
        let mut rng = StdRng::seed_from_u64(1);

        let (mut injuries, mut training, mut youth) = (0, 0, 0);

        for _ in 0..168 {
            let DayResult::Advanced(report) = clock.advance(&mut data, &settings, &mut rng) else {
                panic!("clock without a managed club never blocks");
            };

            injuries += report.injuries.is_some() as u32;
            training += report.training.is_some() as u32;
            youth += report.youth_intake.is_some() as u32;
        }

        assert_eq!(clock.days_elapsed(), 168);
        assert_eq!((injuries, training, youth), (24, 6, 2));
    }

    #[test]
    fn blocked_on_managed_fixture_day() {
        let mut data = data();
        let today = data.date;

        data.managed_club_id = Some(1);
        data.set_fixtures(vec![
            fixture(1, 1, 2, today),
            fixture(2, 3, 4, today),
        ]);

        let settings = SimulationSettings::default();
        let mut clock = SeasonClock::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(clock.state(&data), ClockState::Blocked { match_id: 1 });

        for _ in 0..3 {
            assert_eq!(
                clock.advance(&mut data, &settings, &mut rng),
                DayResult::Blocked { match_id: 1 }
            );
        }

        assert_eq!(data.date, today);
        assert_eq!(clock.days_elapsed(), 0);
        assert!(!data.fixture(2).unwrap().is_played);
    }

    #[test]
    fn sweep_resolves_everything_but_managed() {
        let mut data = data();
        let today = data.date;
        let tomorrow = DateUtils::add_days(today, 1);

        data.managed_club_id = Some(1);
        data.set_fixtures(vec![
            fixture(1, 3, 4, today),
            fixture(2, 2, 3, tomorrow),
            fixture(3, 1, 4, tomorrow),
            fixture(4, 2, 4, DateUtils::add_days(today, 2)),
        ]);

        let settings = SimulationSettings::default();
        let mut clock = SeasonClock::new();
        let mut rng = StdRng::seed_from_u64(1);

        let DayResult::Advanced(report) = clock.advance(&mut data, &settings, &mut rng) else {
            panic!("nothing blocks today");
        };

        assert_eq!(report.date, tomorrow);
        assert_eq!(report.resolved, vec![1, 2]);
        assert!(!data.fixture(3).unwrap().is_played);
        assert!(!data.fixture(4).unwrap().is_played);

        assert_eq!(clock.state(&data), ClockState::Blocked { match_id: 3 });
    }

    #[test]
    fn league_results_reach_the_table() {
        let mut data = data();
        let today = data.date;

        data.standings.init(&[1], &data.clubs);
        data.set_fixtures(vec![
            league_fixture(1, 1, 2, DateUtils::add_days(today, 1)),
            league_fixture(2, 3, 4, DateUtils::add_days(today, 1)),
        ]);

        let settings = SimulationSettings::default();
        let mut clock = SeasonClock::new();
        let mut rng = StdRng::seed_from_u64(1);

        clock.advance(&mut data, &settings, &mut rng);

        let rows = data.standings.standings(1);

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.played == 1));
    }

    fn data() -> SimulatorData {
        let clubs = (1..=4)
            .map(|id| {
                Club::new(
                    id,
                    format!("Club {}", id),
                    1,
                    50,
                    "4-4-2".to_string(),
                    ClubFinances::new(0, 0, 0),
                    ClubAcademy::new(1),
                )
            })
            .collect();

        SimulatorData::new(
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            LeagueCollection::default(),
            clubs,
            Vec::new(),
            PeopleNameGeneratorData::default(),
        )
    }

    fn fixture(id: u32, home: u32, away: u32, date: NaiveDate) -> Match {
        Match::new(
            id,
            (home, &format!("Club {}", home)),
            (away, &format!("Club {}", away)),
            MatchType::Friendly,
            date,
        )
    }

    fn league_fixture(id: u32, home: u32, away: u32, date: NaiveDate) -> Match {
        let mut m = fixture(id, home, away, date).with_league(1, 1);
        m.match_type = MatchType::League;
        m
    }
}
