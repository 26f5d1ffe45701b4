use rand::RngExt;
use rand::seq::SliceRandom;

pub type Pairing = (u32, u32);

#[derive(Debug, Clone, Default)]
pub struct RoundRobinSchedule {
    /// Full season: the first half followed by the mirrored second half.
    pub rounds: Vec<Vec<Pairing>>,
    pub dropped_byes: usize,
}

impl RoundRobinSchedule {
    pub fn matches_count(&self) -> usize {
        self.rounds.iter().map(|round| round.len()).sum()
    }
}

pub struct RoundRobin;

impl RoundRobin {
    /// Double round robin using the circle method. Returns `None` for fewer
    /// than two clubs.
    pub fn generate<R: RngExt + ?Sized>(club_ids: &[u32], rng: &mut R) -> Option<RoundRobinSchedule> {
        if club_ids.len() < 2 {
            return None;
        }

        let mut slots: Vec<Option<u32>> = club_ids.iter().copied().map(Some).collect();
        slots.shuffle(rng);

        // Bye slot for odd team counts
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let slots_count = slots.len();
        let mut dropped_byes = 0;
        let mut first_half = Vec::with_capacity(slots_count - 1);

        for round_index in 0..slots_count - 1 {
            let mut round = Vec::with_capacity(slots_count / 2);

            // Fixed slot alternates venue so it does not stay at home all half
            let (fixed_home, fixed_away) = if round_index % 2 == 0 {
                (slots[0], slots[slots_count - 1])
            } else {
                (slots[slots_count - 1], slots[0])
            };

            Self::push_pairing(&mut round, fixed_home, fixed_away, &mut dropped_byes);

            for i in 1..slots_count / 2 {
                Self::push_pairing(&mut round, slots[i], slots[slots_count - 1 - i], &mut dropped_byes);
            }

            first_half.push(round);

            slots[1..].rotate_right(1);
        }

        let second_half: Vec<Vec<Pairing>> = first_half
            .iter()
            .map(|round| round.iter().map(|&(home, away)| (away, home)).collect())
            .collect();

        let mut rounds = first_half;
        rounds.extend(second_half);

        Some(RoundRobinSchedule {
            rounds,
            dropped_byes: dropped_byes * 2,
        })
    }

    fn push_pairing(round: &mut Vec<Pairing>, home: Option<u32>, away: Option<u32>, dropped_byes: &mut usize) {
        match (home, away) {
            (Some(home), Some(away)) => round.push((home, away)),
            _ => *dropped_byes += 1,
        }
    }
}
