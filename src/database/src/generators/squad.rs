use chrono::NaiveDate;
use rand::RngExt;
use season_core::shared::IdSequence;
use season_core::{Player, PlayerGenerator, PlayerPositionType};

const SENIOR_MIN_AGE: i32 = 18;
const SENIOR_MAX_AGE: i32 = 34;

/// Positions of a generated first-team squad.
const SQUAD_LAYOUT: [(PlayerPositionType, usize); 10] = [
    (PlayerPositionType::Goalkeeper, 3),
    (PlayerPositionType::DefenderLeft, 2),
    (PlayerPositionType::DefenderCenter, 4),
    (PlayerPositionType::DefenderRight, 2),
    (PlayerPositionType::DefensiveMidfielder, 2),
    (PlayerPositionType::MidfielderCenter, 3),
    (PlayerPositionType::AttackingMidfielder, 1),
    (PlayerPositionType::WingerLeft, 2),
    (PlayerPositionType::WingerRight, 2),
    (PlayerPositionType::Striker, 3),
];

pub struct SquadGenerator<'g> {
    player_generator: &'g PlayerGenerator<'g>,
}

impl<'g> SquadGenerator<'g> {
    pub fn new(player_generator: &'g PlayerGenerator<'g>) -> Self {
        SquadGenerator { player_generator }
    }

    pub fn squad_size() -> usize {
        SQUAD_LAYOUT.iter().map(|(_, count)| count).sum()
    }

    /// A full squad whose ability is centred on the club rating.
    pub fn generate<R: RngExt + ?Sized>(
        &self,
        club_id: u32,
        club_rating: u8,
        now: NaiveDate,
        ids: &mut IdSequence,
        rng: &mut R,
    ) -> Vec<Player> {
        let mut players = Vec::with_capacity(Self::squad_size());

        for &(position, count) in &SQUAD_LAYOUT {
            for _ in 0..count {
                players.push(self.player_generator.generate(
                    rng,
                    ids.next_id(),
                    now,
                    position,
                    club_rating,
                    SENIOR_MIN_AGE,
                    SENIOR_MAX_AGE,
                    Some(club_id),
                ));
            }
        }

        players
    }
}
