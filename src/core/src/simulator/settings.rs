use crate::league::ScheduleSettings;

#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub schedule: ScheduleSettings,

    // Processor cadences, counted in simulated days
    pub injury_cadence_days: u32,
    pub training_cadence_days: u32,
    pub youth_intake_cadence_days: u32,

    pub weekly_injury_chance: f64,

    pub free_agents_count: usize,
    pub free_agents_level: u8,
    pub free_agents_min_age: i32,
    pub free_agents_max_age: i32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            schedule: ScheduleSettings::default(),
            injury_cadence_days: 7,
            training_cadence_days: 28,
            youth_intake_cadence_days: 84,
            weekly_injury_chance: 0.01,
            free_agents_count: 40,
            free_agents_level: 45,
            free_agents_min_age: 19,
            free_agents_max_age: 33,
        }
    }
}
