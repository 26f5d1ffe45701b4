use crate::club::player::builder::PlayerBuilder;
use crate::club::player::{
    PlayerDiscipline, PlayerInjury, PlayerPositionType, PlayerSkills, PlayerStatistics,
};
use crate::shared::FullName;
use crate::utils::DateUtils;
use chrono::NaiveDate;
use std::fmt::{Display, Formatter, Result};

pub const MORALE_MAX_VALUE: u8 = 100;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub birth_date: NaiveDate,
    pub position: PlayerPositionType,
    pub skills: PlayerSkills,
    pub potential_peak: u8,

    /// `None` for free agents.
    pub club_id: Option<u32>,

    // finance / negotiation owned
    pub wage: u32,
    pub contract_years: u8,

    pub morale: u8,
    pub injury: PlayerInjury,
    pub discipline: PlayerDiscipline,
    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn age(&self, now: NaiveDate) -> u8 {
        DateUtils::age(self.birth_date, now)
    }

    pub fn is_free_agent(&self) -> bool {
        self.club_id.is_none()
    }

    pub fn is_available(&self) -> bool {
        !self.injury.is_injured
    }

    pub fn plays_for(&self, club_id: u32) -> bool {
        self.club_id == Some(club_id)
    }

    pub fn display_name(&self) -> String {
        self.full_name.display_name()
    }

    pub fn change_morale(&mut self, delta: i16) {
        self.morale = (self.morale as i16 + delta).clamp(0, MORALE_MAX_VALUE as i16) as u8;
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.full_name, self.position, self.skills.overall)
    }
}
