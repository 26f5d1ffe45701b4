use rand::RngExt;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjurySeverity {
    Minor,
    Moderate,
    Severe,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryType {
    // Minor (1 week)
    Bruise,
    Cramp,
    DeadLeg,
    // Moderate (2-6 weeks)
    HamstringStrain,
    CalfStrain,
    AnkleSprain,
    GroinStrain,
    // Severe (8-20 weeks)
    TornMeniscus,
    StressFracture,
    MCLSprain,
    // Critical (26-40 weeks)
    ACLTear,
    BrokenLeg,
    AchillesRupture,
}

impl InjuryType {
    /// Returns (min_weeks, max_weeks) out for this injury type
    pub fn duration_range(&self) -> (u8, u8) {
        match self {
            InjuryType::Bruise => (1, 1),
            InjuryType::Cramp => (1, 1),
            InjuryType::DeadLeg => (1, 2),
            InjuryType::HamstringStrain => (2, 5),
            InjuryType::CalfStrain => (2, 4),
            InjuryType::AnkleSprain => (2, 6),
            InjuryType::GroinStrain => (2, 5),
            InjuryType::TornMeniscus => (8, 17),
            InjuryType::StressFracture => (8, 20),
            InjuryType::MCLSprain => (8, 17),
            InjuryType::ACLTear => (26, 40),
            InjuryType::BrokenLeg => (26, 36),
            InjuryType::AchillesRupture => (26, 40),
        }
    }

    pub fn severity(&self) -> InjurySeverity {
        match self {
            InjuryType::Bruise | InjuryType::Cramp | InjuryType::DeadLeg => InjurySeverity::Minor,

            InjuryType::HamstringStrain
            | InjuryType::CalfStrain
            | InjuryType::AnkleSprain
            | InjuryType::GroinStrain => InjurySeverity::Moderate,

            InjuryType::TornMeniscus | InjuryType::StressFracture | InjuryType::MCLSprain => {
                InjurySeverity::Severe
            }

            InjuryType::ACLTear | InjuryType::BrokenLeg | InjuryType::AchillesRupture => {
                InjurySeverity::Critical
            }
        }
    }

    pub fn random_duration<R: RngExt + ?Sized>(&self, rng: &mut R) -> u8 {
        let (min, max) = self.duration_range();
        rng.random_range(min..=max)
    }

    /// Pick a random injury picked up between matches, weighted toward minor knocks.
    /// Older players skew toward the more severe end.
    pub fn random_injury<R: RngExt + ?Sized>(rng: &mut R, age: u8) -> InjuryType {
        let severity_modifier = (age as f32 - 28.0).max(0.0) * 0.01;
        let roll = rng.random::<f32>() + severity_modifier;

        if roll < 0.55 {
            match rng.random_range(0..3) {
                0 => InjuryType::Bruise,
                1 => InjuryType::Cramp,
                _ => InjuryType::DeadLeg,
            }
        } else if roll < 0.90 {
            match rng.random_range(0..4) {
                0 => InjuryType::HamstringStrain,
                1 => InjuryType::CalfStrain,
                2 => InjuryType::AnkleSprain,
                _ => InjuryType::GroinStrain,
            }
        } else if roll < 0.98 {
            match rng.random_range(0..3) {
                0 => InjuryType::TornMeniscus,
                1 => InjuryType::StressFracture,
                _ => InjuryType::MCLSprain,
            }
        } else {
            match rng.random_range(0..3) {
                0 => InjuryType::ACLTear,
                1 => InjuryType::BrokenLeg,
                _ => InjuryType::AchillesRupture,
            }
        }
    }
}

impl Display for InjuryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InjuryType::Bruise => write!(f, "Bruise"),
            InjuryType::Cramp => write!(f, "Cramp"),
            InjuryType::DeadLeg => write!(f, "Dead Leg"),
            InjuryType::HamstringStrain => write!(f, "Hamstring Strain"),
            InjuryType::CalfStrain => write!(f, "Calf Strain"),
            InjuryType::AnkleSprain => write!(f, "Ankle Sprain"),
            InjuryType::GroinStrain => write!(f, "Groin Strain"),
            InjuryType::TornMeniscus => write!(f, "Torn Meniscus"),
            InjuryType::StressFracture => write!(f, "Stress Fracture"),
            InjuryType::MCLSprain => write!(f, "MCL Sprain"),
            InjuryType::ACLTear => write!(f, "ACL Tear"),
            InjuryType::BrokenLeg => write!(f, "Broken Leg"),
            InjuryType::AchillesRupture => write!(f, "Achilles Rupture"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInjury {
    pub is_injured: bool,
    pub weeks_left: u8,
    pub injury_type: Option<InjuryType>,
}

impl PlayerInjury {
    pub fn set(&mut self, injury_type: InjuryType, weeks: u8) {
        self.is_injured = true;
        self.weeks_left = weeks.max(1);
        self.injury_type = Some(injury_type);
    }

    /// Count one week of recovery. Returns true when the player is fit again.
    pub fn recover_week(&mut self) -> bool {
        if !self.is_injured {
            return false;
        }

        self.weeks_left = self.weeks_left.saturating_sub(1);

        if self.weeks_left == 0 {
            self.is_injured = false;
            self.injury_type = None;
            return true;
        }

        false
    }
}
