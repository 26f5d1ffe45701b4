use crate::club::player::PlayerFieldPositionGroup;

pub const SKILL_MIN_VALUE: u8 = 1;
pub const SKILL_MAX_VALUE: u8 = 99;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayerSkills {
    pub overall: u8,
    pub offensive: u8,
    pub defensive: u8,
    pub physical: u8,
}

impl Default for PlayerSkills {
    fn default() -> Self {
        PlayerSkills::new(50, 50, 50, 50)
    }
}

impl PlayerSkills {
    pub fn new(overall: u8, offensive: u8, defensive: u8, physical: u8) -> Self {
        PlayerSkills {
            overall: Self::bound(overall as i16),
            offensive: Self::bound(offensive as i16),
            defensive: Self::bound(defensive as i16),
            physical: Self::bound(physical as i16),
        }
    }

    /// Derive the offensive/defensive split from overall for a position group.
    pub fn for_group(overall: u8, physical: u8, group: PlayerFieldPositionGroup) -> Self {
        let overall = overall as i16;

        let (offensive, defensive) = match group {
            PlayerFieldPositionGroup::Goalkeeper => (overall - 30, overall + 5),
            PlayerFieldPositionGroup::Defender => (overall - 15, overall + 5),
            PlayerFieldPositionGroup::Midfielder => (overall, overall - 5),
            PlayerFieldPositionGroup::Forward => (overall + 5, overall - 25),
        };

        PlayerSkills {
            overall: Self::bound(overall),
            offensive: Self::bound(offensive),
            defensive: Self::bound(defensive),
            physical: Self::bound(physical as i16),
        }
    }

    /// Shift overall and keep the secondary skills moving with it.
    pub fn apply_change(&mut self, delta: i16) {
        self.overall = Self::bound(self.overall as i16 + delta);
        self.offensive = Self::bound(self.offensive as i16 + delta);
        self.defensive = Self::bound(self.defensive as i16 + delta);
    }

    fn bound(value: i16) -> u8 {
        value.clamp(SKILL_MIN_VALUE as i16, SKILL_MAX_VALUE as i16) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_is_more_offensive_than_defensive() {
        let skills = PlayerSkills::for_group(70, 60, PlayerFieldPositionGroup::Forward);

        assert_eq!(skills.overall, 70);
        assert!(skills.offensive > skills.defensive);
    }

    #[test]
    fn skills_are_bounded() {
        let mut skills = PlayerSkills::for_group(98, 99, PlayerFieldPositionGroup::Forward);
        skills.apply_change(10);

        assert_eq!(skills.overall, SKILL_MAX_VALUE);
        assert_eq!(skills.offensive, SKILL_MAX_VALUE);

        skills.apply_change(-200);

        assert_eq!(skills.overall, SKILL_MIN_VALUE);
        assert_eq!(skills.defensive, SKILL_MIN_VALUE);
    }
}
