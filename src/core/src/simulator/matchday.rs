use crate::r#match::{MatchEngine, StandingsUpdate};
use crate::simulator::SimulatorData;
use rand::RngExt;

pub struct MatchdayResolver;

impl MatchdayResolver {
    /// Plays every listed fixture that is still open, then folds the league
    /// results into the tables in one batch. Returns the ids resolved.
    pub fn resolve<R: RngExt + ?Sized>(
        data: &mut SimulatorData,
        match_ids: &[u32],
        rng: &mut R,
    ) -> Vec<u32> {
        let mut resolved = Vec::with_capacity(match_ids.len());

        for &match_id in match_ids {
            let Some(fixture) = data.fixture(match_id) else {
                continue;
            };

            if fixture.is_played {
                continue;
            }

            let home = data.squad(fixture.home_club_id, &fixture.home_club_name);
            let away = data.squad(fixture.away_club_id, &fixture.away_club_name);

            let result = MatchEngine::play(match_id, &home, &away, rng);

            if result.process(data, StandingsUpdate::Deferred) {
                resolved.push(match_id);
            }
        }

        for &match_id in &resolved {
            data.record_standings(match_id);
        }

        resolved
    }
}
