use crate::club::Club;
use crate::r#match::{Match, MatchType};
use crate::shared::IdSequence;
use crate::utils::DateUtils;
use chrono::NaiveDate;
use rand::RngExt;
use rand::seq::SliceRandom;

pub struct FriendlyScheduler;

impl FriendlyScheduler {
    /// Friendlies against distinct random opponents, the first one
    /// `interval_days` after `from`.
    pub fn generate<R: RngExt + ?Sized>(
        managed_club: &Club,
        clubs: &[Club],
        from: NaiveDate,
        count: usize,
        interval_days: i64,
        ids: &mut IdSequence,
        rng: &mut R,
    ) -> Vec<Match> {
        let mut opponents: Vec<&Club> = clubs.iter().filter(|c| c.id != managed_club.id).collect();
        opponents.shuffle(rng);

        opponents
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(idx, opponent)| {
                let date = DateUtils::add_days(from, interval_days * (idx as i64 + 1));

                let managed = (managed_club.id, managed_club.name.as_str());
                let other = (opponent.id, opponent.name.as_str());

                let (home, away) = if rng.random_bool(0.5) {
                    (managed, other)
                } else {
                    (other, managed)
                };

                Match::new(ids.next_id(), home, away, MatchType::Friendly, date)
            })
            .collect()
    }
}
