use crate::simulator::{InjuryProcessingResult, TrainingResult, YouthIntakeResult};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum DayResult {
    /// The managed club plays today; nothing moved.
    Blocked { match_id: u32 },
    Advanced(DayReport),
}

impl DayResult {
    pub fn is_blocked(&self) -> bool {
        matches!(self, DayResult::Blocked { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub day: u32,
    pub resolved: Vec<u32>,
    pub injuries: Option<InjuryProcessingResult>,
    pub training: Option<TrainingResult>,
    pub youth_intake: Option<YouthIntakeResult>,
}

impl DayReport {
    pub fn new(date: NaiveDate, day: u32) -> Self {
        DayReport {
            date,
            day,
            resolved: Vec::new(),
            injuries: None,
            training: None,
            youth_intake: None,
        }
    }
}
