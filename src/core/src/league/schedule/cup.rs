use crate::league::League;
use log::warn;
use rand::RngExt;
use rand::seq::SliceRandom;

/// One knockout round drawn from a single league.
#[derive(Debug, Clone, PartialEq)]
pub struct CupDraw {
    pub league_id: u32,
    pub ties: Vec<(u32, u32)>,

    /// Club that lost its slot to the managed club, if any.
    pub dropped_club_id: Option<u32>,
}

impl CupDraw {
    pub fn draw<R: RngExt + ?Sized>(
        league: &League,
        club_ids: &[u32],
        managed_club_id: u32,
        size: usize,
        rng: &mut R,
    ) -> Option<CupDraw> {
        if !league.has_national_cup {
            return None;
        }

        let mut drawn = club_ids.to_vec();
        drawn.shuffle(rng);

        let mut count = size.min(drawn.len());
        count -= count % 2;

        if count < 2 {
            return None;
        }

        drawn.truncate(count);

        let mut dropped_club_id = None;

        if club_ids.contains(&managed_club_id) && !drawn.contains(&managed_club_id) {
            if let Some(last) = drawn.last_mut() {
                warn!(
                    "cup draw: club {} replaced by managed club {} in {}",
                    last, managed_club_id, league.name
                );

                dropped_club_id = Some(*last);
                *last = managed_club_id;
            }
        }

        let ties = drawn
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();

        Some(CupDraw {
            league_id: league.id,
            ties,
            dropped_club_id,
        })
    }

    pub fn clubs(&self) -> impl Iterator<Item = u32> + '_ {
        self.ties.iter().flat_map(|&(home, away)| [home, away])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_sixteen_distinct_clubs_in_eight_ties() {
        let clubs: Vec<u32> = (1..=20).collect();
        let mut rng = StdRng::seed_from_u64(3);

        let draw = CupDraw::draw(&cup_league(), &clubs, 1, 16, &mut rng).unwrap();

        assert_eq!(draw.ties.len(), 8);

        let mut drawn: Vec<u32> = draw.clubs().collect();
        drawn.sort();
        drawn.dedup();

        assert_eq!(drawn.len(), 16);
        assert!(draw.clubs().any(|id| id == 1));
    }

    #[test]
    fn forced_inclusion_reports_dropped_club() {
        let clubs: Vec<u32> = (1..=20).collect();

        // Replay the draw shuffle and manage a club that falls outside the sixteen
        let seed = 7;
        let mut shuffled = clubs.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        let managed = shuffled[19];

        let mut rng = StdRng::seed_from_u64(seed);
        let draw = CupDraw::draw(&cup_league(), &clubs, managed, 16, &mut rng).unwrap();

        let dropped = draw.dropped_club_id.expect("a club must be dropped");

        assert_ne!(dropped, managed);
        assert!(draw.clubs().any(|id| id == managed));
        assert!(!draw.clubs().any(|id| id == dropped));
        assert_eq!(draw.ties[7].1, managed);
    }

    #[test]
    fn no_drop_when_managed_club_is_drawn() {
        let clubs: Vec<u32> = (1..=16).collect();
        let mut rng = StdRng::seed_from_u64(9);

        let draw = CupDraw::draw(&cup_league(), &clubs, 5, 16, &mut rng).unwrap();

        assert_eq!(draw.dropped_club_id, None);
    }

    #[test]
    fn small_league_draws_even_count() {
        let clubs: Vec<u32> = (1..=7).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let draw = CupDraw::draw(&cup_league(), &clubs, 1, 16, &mut rng).unwrap();

        assert_eq!(draw.ties.len(), 3);
        assert!(draw.clubs().any(|id| id == 1));
    }

    #[test]
    fn league_without_cup_draws_nothing() {
        let league = League::new(1, "L".to_string(), "l".to_string(), "C".to_string(), 1);
        let clubs: Vec<u32> = (1..=20).collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(CupDraw::draw(&league, &clubs, 1, 16, &mut rng).is_none());
    }

    fn cup_league() -> League {
        League::new(1, "Premier".to_string(), "premier".to_string(), "England".to_string(), 1)
            .with_national_cup(true)
    }
}
