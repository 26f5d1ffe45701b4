use crate::club::{Club, DEFAULT_FORMATION, Player, PlayerPositionType};
use crate::r#match::{MatchPlayer, MatchSquad};
use log::{debug, warn};

const DEFAULT_SQUAD_SIZE: usize = 11;
const DEFAULT_BENCH_SIZE: usize = 7;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Formation {
    pub defenders: u8,
    pub midfielders: u8,
    pub forwards: u8,
}

impl Default for Formation {
    fn default() -> Self {
        Formation {
            defenders: 4,
            midfielders: 4,
            forwards: 2,
        }
    }
}

impl Formation {
    /// Accepts "4-4-2", "4-2-3-1" and the like: first line defenders,
    /// last line forwards, everything in between midfield. Outfield lines
    /// must add up to ten.
    pub fn parse(formation: &str) -> Option<Formation> {
        let lines: Vec<u8> = formation
            .split('-')
            .map(|line| line.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;

        if lines.len() < 3 || lines.iter().map(|&l| l as u32).sum::<u32>() != 10 {
            return None;
        }

        let defenders = lines[0];
        let forwards = lines[lines.len() - 1];
        let midfielders = lines[1..lines.len() - 1].iter().sum();

        Some(Formation {
            defenders,
            midfielders,
            forwards,
        })
    }

    pub fn parse_or_default(formation: &str) -> Formation {
        Self::parse(formation).unwrap_or_else(|| {
            warn!("unknown formation '{}', using {}", formation, DEFAULT_FORMATION);
            Formation::default()
        })
    }

    /// Goalkeeper first, then defence to attack.
    pub fn positions(&self) -> Vec<PlayerPositionType> {
        let mut positions = Vec::with_capacity(DEFAULT_SQUAD_SIZE);

        positions.push(PlayerPositionType::Goalkeeper);

        if self.defenders >= 3 {
            positions.push(PlayerPositionType::DefenderLeft);
            positions.extend((0..self.defenders - 2).map(|_| PlayerPositionType::DefenderCenter));
            positions.push(PlayerPositionType::DefenderRight);
        } else {
            positions.extend((0..self.defenders).map(|_| PlayerPositionType::DefenderCenter));
        }

        match self.midfielders {
            0 => {}
            1 => positions.push(PlayerPositionType::DefensiveMidfielder),
            2 | 3 => {
                positions.push(PlayerPositionType::DefensiveMidfielder);
                positions.extend((1..self.midfielders).map(|_| PlayerPositionType::MidfielderCenter));
            }
            m => {
                positions.push(PlayerPositionType::WingerLeft);
                positions.extend((0..m - 2).map(|_| PlayerPositionType::MidfielderCenter));
                positions.push(PlayerPositionType::WingerRight);
            }
        }

        positions.extend((0..self.forwards).map(|_| PlayerPositionType::Striker));

        positions
    }
}

pub struct SquadSelector;

impl SquadSelector {
    pub fn select(club: &Club, players: &[&Player]) -> MatchSquad {
        let mut squad = MatchSquad::empty(club.id, &club.name, club.rating);

        let mut available: Vec<&Player> = players
            .iter()
            .copied()
            .filter(|p| p.is_available() && p.plays_for(club.id))
            .collect();

        // Best first, ties by id for determinism
        available.sort_by(|a, b| {
            b.skills
                .overall
                .cmp(&a.skills.overall)
                .then_with(|| a.id.cmp(&b.id))
        });

        if available.len() < DEFAULT_SQUAD_SIZE {
            warn!(
                "{}: only {} players available for selection",
                club.name,
                available.len()
            );
        }

        let formation = Formation::parse_or_default(&club.formation);

        let mut used: Vec<u32> = Vec::with_capacity(DEFAULT_SQUAD_SIZE + DEFAULT_BENCH_SIZE);
        let mut unfilled = Vec::new();

        for required in formation.positions() {
            match Self::best_for(required, &available, &used) {
                Some(player) => {
                    used.push(player.id);
                    squad.main_squad.push(MatchPlayer::from_player(player, required));
                }
                None => unfilled.push(required),
            }
        }

        // Out of position cover for whatever the formation could not fill
        for required in unfilled {
            if let Some(player) = available.iter().find(|p| !used.contains(&p.id)) {
                used.push(player.id);
                squad.main_squad.push(MatchPlayer::from_player(player, required));
            }
        }

        squad.substitutes = available
            .iter()
            .filter(|p| !used.contains(&p.id))
            .take(DEFAULT_BENCH_SIZE)
            .map(|p| MatchPlayer::from_player(p, p.position))
            .collect();

        debug!(
            "👤 {} squad selected: {} starting, {} on the bench",
            club.name,
            squad.main_squad.len(),
            squad.substitutes.len()
        );

        squad
    }

    /// Natural position first, then the compatible ones in table order.
    /// `available` is sorted best first.
    fn best_for<'p>(
        required: PlayerPositionType,
        available: &[&'p Player],
        used: &[u32],
    ) -> Option<&'p Player> {
        required.compatible_positions().iter().find_map(|&position| {
            available
                .iter()
                .find(|p| p.position == position && !used.contains(&p.id))
                .copied()
        })
    }
}
