use crate::club::player::{
    PlayerDiscipline, PlayerInjury, PlayerPositionType, PlayerSkills, PlayerStatistics,
};
use crate::shared::FullName;
use crate::Player;
use chrono::NaiveDate;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    birth_date: Option<NaiveDate>,
    position: Option<PlayerPositionType>,
    skills: Option<PlayerSkills>,
    potential_peak: Option<u8>,
    club_id: Option<Option<u32>>,
    wage: Option<u32>,
    contract_years: Option<u8>,
    morale: Option<u8>,
    injury: Option<PlayerInjury>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn potential_peak(mut self, potential_peak: u8) -> Self {
        self.potential_peak = Some(potential_peak);
        self
    }

    pub fn club_id(mut self, club_id: Option<u32>) -> Self {
        self.club_id = Some(club_id);
        self
    }

    pub fn wage(mut self, wage: u32) -> Self {
        self.wage = Some(wage);
        self
    }

    pub fn contract_years(mut self, contract_years: u8) -> Self {
        self.contract_years = Some(contract_years);
        self
    }

    pub fn morale(mut self, morale: u8) -> Self {
        self.morale = Some(morale);
        self
    }

    pub fn injury(mut self, injury: PlayerInjury) -> Self {
        self.injury = Some(injury);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let skills = self.skills.ok_or("skills is required")?;

        Ok(Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            birth_date: self.birth_date.ok_or("birth_date is required")?,
            position: self.position.ok_or("position is required")?,
            potential_peak: self.potential_peak.unwrap_or(skills.overall).max(skills.overall),
            skills,
            club_id: self.club_id.unwrap_or(None),
            wage: self.wage.unwrap_or(0),
            contract_years: self.contract_years.unwrap_or(0),
            morale: self.morale.unwrap_or(50),
            injury: self.injury.unwrap_or_default(),
            discipline: PlayerDiscipline::default(),
            statistics: PlayerStatistics::default(),
        })
    }
}
