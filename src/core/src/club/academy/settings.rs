use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct AcademySettings {
    pub youth_age_range: RangeInclusive<i32>,
    pub max_squad_size: usize,
}

impl Default for AcademySettings {
    fn default() -> Self {
        AcademySettings {
            youth_age_range: 16..=17,
            max_squad_size: 40,
        }
    }
}
