use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    DefenderLeft,
    DefenderCenter,
    DefenderRight,
    DefensiveMidfielder,
    MidfielderCenter,
    AttackingMidfielder,
    WingerLeft,
    WingerRight,
    Striker,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 10] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::DefenderLeft,
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderRight,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::MidfielderCenter,
        PlayerPositionType::AttackingMidfielder,
        PlayerPositionType::WingerLeft,
        PlayerPositionType::WingerRight,
        PlayerPositionType::Striker,
    ];

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::DefenderLeft
            | PlayerPositionType::DefenderCenter
            | PlayerPositionType::DefenderRight => PlayerFieldPositionGroup::Defender,
            PlayerPositionType::DefensiveMidfielder
            | PlayerPositionType::MidfielderCenter
            | PlayerPositionType::AttackingMidfielder => PlayerFieldPositionGroup::Midfielder,
            PlayerPositionType::WingerLeft
            | PlayerPositionType::WingerRight
            | PlayerPositionType::Striker => PlayerFieldPositionGroup::Forward,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPositionType::Goalkeeper
    }

    /// Forwards and midfielders, the preferred goal scorers.
    pub fn is_attacking(&self) -> bool {
        matches!(
            self.position_group(),
            PlayerFieldPositionGroup::Forward | PlayerFieldPositionGroup::Midfielder
        )
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::DefenderLeft => "LB",
            PlayerPositionType::DefenderCenter => "CB",
            PlayerPositionType::DefenderRight => "RB",
            PlayerPositionType::DefensiveMidfielder => "DM",
            PlayerPositionType::MidfielderCenter => "CM",
            PlayerPositionType::AttackingMidfielder => "AM",
            PlayerPositionType::WingerLeft => "LW",
            PlayerPositionType::WingerRight => "RW",
            PlayerPositionType::Striker => "ST",
        }
    }

    /// Positions that can cover this one, the position itself first.
    pub fn compatible_positions(&self) -> &'static [PlayerPositionType] {
        POSITION_COMPATIBILITY
            .iter()
            .find(|(position, _)| position == self)
            .map(|(_, compatible)| *compatible)
            .unwrap_or(&[])
    }

    pub fn can_cover(&self, required: PlayerPositionType) -> bool {
        required.compatible_positions().contains(self)
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

/// Required position -> positions acceptable in that slot.
pub static POSITION_COMPATIBILITY: [(PlayerPositionType, &[PlayerPositionType]); 10] = [
    (PlayerPositionType::Goalkeeper, &[PlayerPositionType::Goalkeeper]),
    (
        PlayerPositionType::DefenderLeft,
        &[
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::WingerLeft,
        ],
    ),
    (
        PlayerPositionType::DefenderCenter,
        &[
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
        ],
    ),
    (
        PlayerPositionType::DefenderRight,
        &[
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::WingerRight,
        ],
    ),
    (
        PlayerPositionType::DefensiveMidfielder,
        &[
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::DefenderCenter,
        ],
    ),
    (
        PlayerPositionType::MidfielderCenter,
        &[
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::AttackingMidfielder,
        ],
    ),
    (
        PlayerPositionType::AttackingMidfielder,
        &[
            PlayerPositionType::AttackingMidfielder,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::Striker,
        ],
    ),
    (
        PlayerPositionType::WingerLeft,
        &[
            PlayerPositionType::WingerLeft,
            PlayerPositionType::WingerRight,
            PlayerPositionType::AttackingMidfielder,
        ],
    ),
    (
        PlayerPositionType::WingerRight,
        &[
            PlayerPositionType::WingerRight,
            PlayerPositionType::WingerLeft,
            PlayerPositionType::AttackingMidfielder,
        ],
    ),
    (
        PlayerPositionType::Striker,
        &[
            PlayerPositionType::Striker,
            PlayerPositionType::AttackingMidfielder,
            PlayerPositionType::WingerLeft,
            PlayerPositionType::WingerRight,
        ],
    ),
];
