use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct ScheduleSettings {
    /// First matchday lands this many months after the game starts.
    pub season_start_offset_months: u32,

    pub matchday_gap_days: RangeInclusive<i64>,

    /// The cup round is played after this matchday (1-based).
    pub cup_after_matchday: usize,
    pub cup_days_after_matchday: i64,
    pub cup_days_before_next_matchday: i64,
    pub cup_size: usize,

    pub friendlies_count: usize,
    pub friendly_interval_days: i64,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        ScheduleSettings {
            season_start_offset_months: 1,
            matchday_gap_days: 4..=5,
            cup_after_matchday: 5,
            cup_days_after_matchday: 3,
            cup_days_before_next_matchday: 4,
            cup_size: 16,
            friendlies_count: 3,
            friendly_interval_days: 7,
        }
    }
}
